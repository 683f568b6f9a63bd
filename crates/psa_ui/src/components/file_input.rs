//! File input widget
//!
//! A labelled path row: text input plus an optional browse button. Without
//! an `on_change` handler the input renders read-only, which is how the
//! input file field stays dialog-only.

use iced::widget::{button, row, text, text_input};
use iced::{Alignment, Element, Length};

/// Width of the label column, shared by every form row.
const LABEL_WIDTH: f32 = 110.0;

/// File input component
pub struct FileInput<'a, M> {
    label: &'a str,
    value: &'a str,
    placeholder: &'a str,
    on_change: Option<Box<dyn Fn(String) -> M + 'a>>,
    browse: Option<(&'a str, M)>,
}

impl<'a, M: Clone + 'a> FileInput<'a, M> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            placeholder: "",
            on_change: None,
            browse: None,
        }
    }

    /// Placeholder shown while the value is empty.
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Make the input editable.
    pub fn on_change(mut self, on_change: impl Fn(String) -> M + 'a) -> Self {
        self.on_change = Some(Box::new(on_change));
        self
    }

    /// Add a browse button after the input.
    pub fn browse(mut self, label: &'a str, on_press: M) -> Self {
        self.browse = Some((label, on_press));
        self
    }

    pub fn view(self) -> Element<'a, M> {
        let mut input = text_input(self.placeholder, self.value).width(Length::Fill);
        if let Some(on_change) = self.on_change {
            input = input.on_input(move |value| (on_change)(value));
        }

        let mut content = row![
            text(self.label).width(Length::Fixed(LABEL_WIDTH)),
            input,
        ]
        .spacing(8)
        .align_y(Alignment::Center);

        if let Some((label, on_press)) = self.browse {
            content = content.push(button(text(label)).on_press(on_press));
        }

        content.into()
    }
}
