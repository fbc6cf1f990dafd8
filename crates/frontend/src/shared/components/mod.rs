pub mod search_input;
pub mod ui;

pub use search_input::SearchInput;
