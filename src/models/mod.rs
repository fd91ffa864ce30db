// Module exports for models

pub mod business_hours;
pub mod settings;
pub mod time_slot;
pub mod view;
pub mod window;
