// Service module exports

pub mod calendar;
pub mod clock;
pub mod config;
