pub mod admin;
pub mod layout;
pub mod map;
pub mod reports;
