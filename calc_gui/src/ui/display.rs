//! Display Panel (Top)
//!
//! Shows the expression trace in small grey text and the formatted current
//! value underneath, right-aligned like a hardware calculator.

use iced::alignment::Horizontal;
use iced::widget::{column, container, text};
use iced::{Element, Length, Padding};

use calc_core::DisplayFrame;

use crate::Message;

const ERROR_COLOR: [f32; 3] = [0.8, 0.2, 0.2];
const EXPRESSION_COLOR: [f32; 3] = [0.5, 0.5, 0.5];

/// Render the expression trace and primary display
pub fn view_display(frame: &DisplayFrame) -> Element<'_, Message> {
    let expression = text(&frame.expression).size(14).color(EXPRESSION_COLOR);

    let value = text(&frame.display).size(40);
    let value = if frame.is_error { value.color(ERROR_COLOR) } else { value };

    let content = column![expression, value]
        .spacing(4)
        .width(Length::Fill)
        .align_x(Horizontal::Right);

    container(content)
        .width(Length::Fill)
        .padding(Padding::from([12, 16]))
        .style(container::bordered_box)
        .into()
}
