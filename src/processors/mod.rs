pub mod prizes;
pub mod registration;
pub mod registry;
