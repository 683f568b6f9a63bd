//! Log viewer widget
//!
//! A scrollable, read-only text area for the status log. Appends snap the
//! view to the bottom via `scrollable::snap_to` against the shared id.

use iced::widget::{column, container, scrollable, text, Id};
use iced::{Element, Length};

/// Render the status log lines inside an identified scrollable.
pub fn view<'a, M: 'a>(lines: &'a [String], id: Id) -> Element<'a, M> {
    let log_column = column(
        lines
            .iter()
            .map(|line| text(line.as_str()).size(13).into()),
    )
    .spacing(2);

    container(
        scrollable(log_column)
            .id(id)
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(8)
    .into()
}
