//! Keypad (Center)
//!
//! One button per `KeypadButton`; wide buttons take a larger fill portion so
//! every row lines up on the four-column grid.

use iced::widget::{button, text, Column, Row};
use iced::{Element, Length};

use calc_core::keymap::{Keypad, KeypadButton};
use calc_core::Input;

use crate::Message;

/// Render the full keypad grid
pub fn view_keypad(keypad: &Keypad) -> Element<'_, Message> {
    let rows = keypad.rows().iter().map(|row| {
        let buttons = row.iter().map(view_button);
        Row::with_children(buttons)
            .spacing(6)
            .height(Length::Fill)
            .into()
    });

    Column::with_children(rows)
        .spacing(6)
        .height(Length::Fill)
        .into()
}

fn view_button(key: &KeypadButton) -> Element<'_, Message> {
    let style = match key.input {
        Input::Equals => button::primary,
        Input::Clear => button::danger,
        _ if key.is_operator() => button::success,
        _ => button::secondary,
    };

    button(text(&key.label).size(20).width(Length::Fill).center())
        .on_press(Message::ButtonPressed(key.input))
        .width(Length::FillPortion(key.span))
        .height(Length::Fill)
        .style(style)
        .into()
}
