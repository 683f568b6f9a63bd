//! File selection handlers.

use std::path::PathBuf;

use iced::Task;

use psa_core::models::default_output_path;

use crate::app::{App, Message};

impl App {
    /// Open the native file dialog for the input PDF.
    pub fn browse_input(&self) -> Task<Message> {
        Task::perform(
            async {
                rfd::AsyncFileDialog::new()
                    .set_title("Select PDF File")
                    .add_filter("PDF files", &["pdf"])
                    .pick_file()
                    .await
                    .map(|f| f.path().to_path_buf())
            },
            Message::InputSelected,
        )
    }

    /// Handle the closed file dialog. Cancelling is a no-op; a selection
    /// sets the input path and derives a fresh output path next to it.
    pub fn handle_input_selected(&mut self, path: Option<PathBuf>) -> Task<Message> {
        let Some(path) = path else {
            return Task::none();
        };

        let path_str = path.to_string_lossy().to_string();
        self.output_path = default_output_path(&path_str);
        self.input_path = path_str;
        Task::none()
    }
}
