pub mod home;
pub mod notes;
pub mod settings;
