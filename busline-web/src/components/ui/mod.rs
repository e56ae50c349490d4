//! Small shared building blocks for the pages and wizard steps.

pub mod button;
pub mod error_panel;
pub mod input;
pub mod select;
pub mod spinner;
pub mod step_dots;

pub use button::{Button, ButtonVariant};
pub use error_panel::ErrorPanel;
pub use input::TextInput;
pub use select::{Select, SelectOption};
pub use spinner::Spinner;
pub use step_dots::StepDots;
