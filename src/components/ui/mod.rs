pub mod alert;
pub mod button;
pub mod field;
pub mod spinner;
pub mod suggestion;

// Re-export component symbols so callers can `use crate::components::ui::Button` etc.
pub use alert::*;
pub use button::*;
pub use field::*;
pub use spinner::*;
pub use suggestion::*;
