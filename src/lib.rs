// Booking Calendar Library
// Calendar view windows, range validation and time-slot options

pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use error::CalendarError;
