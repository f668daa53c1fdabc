pub mod appointment;
pub mod home;
pub mod not_found;
