//! Main application state and update/view entry points.
//!
//! A single `App` struct owns every control value; all user actions arrive
//! as `Message` variants through `update`, and background work reports back
//! the same way. Widgets never mutate state directly, and worker tasks only
//! reach the UI thread through messages.

use std::path::PathBuf;

use chrono::Local;
use iced::widget::{button, column, operation, pick_list, row, scrollable, text, Id};
use iced::{Alignment, Element, Length, Task, Theme};

use psa_core::config::Settings;
use psa_core::models::{PageSizeChoice, ScaleJob};
use psa_core::provision::ProvisionOutcome;
use psa_core::scale::{ScaleError, ScaleOutcome};

use crate::components::{log_view, FileInput};

/// All possible messages the application can receive.
#[derive(Debug, Clone)]
pub enum Message {
    /// "Select" clicked next to the input field.
    BrowseInput,
    /// File dialog closed; `None` means it was cancelled.
    InputSelected(Option<PathBuf>),
    /// Output path edited by the user.
    OutputPathChanged(String),
    /// Dropdown selection changed.
    PageSizeSelected(PageSizeChoice),
    /// Custom size text edited.
    CustomSizeChanged(String),
    /// "Run" clicked.
    Run,
    /// Provisioning finished on the worker task.
    ToolProvisioned(Result<ProvisionOutcome, String>),
    /// cpdf finished on the worker task.
    RunFinished(Result<ScaleOutcome, ScaleError>),
}

/// Main application state.
pub struct App {
    pub settings: Settings,

    // Form state
    pub input_path: String,
    pub output_path: String,
    pub page_size: PageSizeChoice,
    pub custom_size: String,

    // Run state. Runs are serialized: the Run button stays disabled while a
    // run is in flight, and the validated job is parked here between the
    // provisioning and execution stages.
    pub is_running: bool,
    pub pending_job: Option<ScaleJob>,

    // Status log
    pub log_lines: Vec<String>,
    pub log_scroll_id: Id,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        let page_size = settings.scale.default_page_size;

        Self {
            settings,
            input_path: String::new(),
            output_path: String::new(),
            page_size,
            custom_size: String::new(),
            is_running: false,
            pending_job: None,
            log_lines: Vec::new(),
            log_scroll_id: Id::new("status_log"),
        }
    }

    pub fn title(&self) -> String {
        String::from("PDF Size Adjuster")
    }

    pub fn theme(&self) -> Theme {
        Theme::Light
    }

    /// Append a timestamped line to the status log and keep the panel
    /// scrolled to the latest entry.
    pub fn append_log(&mut self, message: &str) -> Task<Message> {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        self.log_lines.push(format!("[{timestamp}] {message}"));

        operation::snap_to(
            self.log_scroll_id.clone(),
            scrollable::RelativeOffset::END,
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::BrowseInput => self.browse_input(),
            Message::InputSelected(path) => self.handle_input_selected(path),
            Message::OutputPathChanged(path) => {
                self.output_path = path;
                Task::none()
            }
            Message::PageSizeSelected(choice) => {
                self.page_size = choice;
                Task::none()
            }
            Message::CustomSizeChanged(value) => {
                self.custom_size = value;
                Task::none()
            }
            Message::Run => self.handle_run(),
            Message::ToolProvisioned(result) => self.handle_tool_provisioned(result),
            Message::RunFinished(result) => self.handle_run_finished(result),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let input_row = FileInput::new("Input File:", &self.input_path)
            .placeholder("No file selected")
            .browse("Select", Message::BrowseInput)
            .view();

        let output_row = FileInput::new("Output File:", &self.output_path)
            .on_change(Message::OutputPathChanged)
            .view();

        let size_row = row![
            text("Page Size:").width(Length::Fixed(110.0)),
            pick_list(
                PageSizeChoice::ALL,
                Some(self.page_size),
                Message::PageSizeSelected,
            )
            .width(Length::Fill),
        ]
        .spacing(8)
        .align_y(Alignment::Center);

        let mut form = column![input_row, output_row, size_row].spacing(10);

        // The custom size entry only exists while the free-text escape is
        // selected; the run button and log move up with it otherwise.
        if self.page_size.needs_custom_entry() {
            let custom_row = FileInput::new("Custom Size:", &self.custom_size)
                .placeholder("297mm 210mm")
                .on_change(Message::CustomSizeChanged)
                .view();
            form = form.push(custom_row);
        }

        let run_button = button(text("Run").width(Length::Fill).center())
            .width(Length::Fill)
            .on_press_maybe((!self.is_running).then_some(Message::Run));

        let log_panel = log_view::view(&self.log_lines, self.log_scroll_id.clone());

        column![form, run_button, log_panel]
            .spacing(10)
            .padding(12)
            .into()
    }
}
