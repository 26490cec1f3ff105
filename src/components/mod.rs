pub mod tag_input;
pub mod ui;

pub use tag_input::TagInput;
