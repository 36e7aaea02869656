pub mod format;
pub mod secrets;
