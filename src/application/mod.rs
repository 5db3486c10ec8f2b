pub mod app_error;
pub mod ports;
pub mod token;
