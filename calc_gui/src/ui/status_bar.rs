//! Status Bar (Bottom)
//!
//! Displays:
//! - Current engine phase
//! - Where the engine config was loaded from

use iced::widget::{row, text, Space};
use iced::{Element, Length, Padding};

use calc_core::Phase;

use crate::Message;

/// Render the status bar
pub fn view_status_bar<'a>(phase: Phase, config_source: &'a str) -> Element<'a, Message> {
    let phase_label = match phase {
        Phase::Entering => "Entering",
        Phase::OperatorPending => "Operator pending",
        Phase::Result => "Result",
        Phase::Error => "Error",
    };

    row![
        text(phase_label).size(10),
        Space::new().width(Length::Fill),
        text(config_source).size(10).color([0.5, 0.5, 0.5]),
    ]
    .padding(Padding::from([4, 0]))
    .into()
}
