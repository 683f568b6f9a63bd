//! Reusable view components.

pub mod file_input;
pub mod log_view;

pub use file_input::FileInput;
