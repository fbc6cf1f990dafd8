pub mod catalog;
pub mod details;
