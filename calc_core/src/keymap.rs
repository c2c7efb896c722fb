//! # Key and Button Mapping
//!
//! Keyboard keys are identified by their browser `KeyboardEvent.key` names
//! (`"7"`, `"+"`, `"Enter"`, `"Backspace"`, ...). Front ends translate
//! their native key events into these names and hand them to
//! [`input_for_key`].
//!
//! [`Keypad`] describes the on-screen button grid shared by the GUI and TUI.

use crate::engine::{Digit, Input};
use crate::state::Operation;

/// Map a key name to an engine input.
///
/// # Example
///
/// ```rust
/// use calc_core::engine::Input;
/// use calc_core::keymap::input_for_key;
/// use calc_core::state::Operation;
///
/// assert_eq!(input_for_key("*"), Some(Input::Operator(Operation::Multiply)));
/// assert_eq!(input_for_key(","), Some(Input::Decimal));
/// assert_eq!(input_for_key("Tab"), None);
/// ```
pub fn input_for_key(key: &str) -> Option<Input> {
    let input = match key {
        "." | "," => Input::Decimal,
        "+" => Input::Operator(Operation::Add),
        "-" => Input::Operator(Operation::Subtract),
        "*" => Input::Operator(Operation::Multiply),
        "/" => Input::Operator(Operation::Divide),
        "%" => Input::Percent,
        "Enter" | "=" => Input::Equals,
        "Backspace" => Input::Delete,
        "Escape" | "c" | "C" => Input::Clear,
        _ => {
            let mut chars = key.chars();
            let c = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            return Digit::try_from(c).ok().map(Input::Digit);
        }
    };
    Some(input)
}

/// Keys whose default browser action (find, quick search, form submit)
/// must be suppressed when the calculator consumes them.
pub fn prevents_default(key: &str) -> bool {
    matches!(key, "/" | "*" | "-" | "+" | "=" | "Enter")
}

/// One button of the keypad.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    pub label: String,
    pub input: Input,
    /// Number of grid columns the button covers
    pub span: u16,
}

impl KeypadButton {
    fn new(input: Input) -> Self {
        KeypadButton {
            label: input.label(),
            input,
            span: 1,
        }
    }

    fn wide(input: Input) -> Self {
        KeypadButton {
            span: 2,
            ..KeypadButton::new(input)
        }
    }

    pub fn is_operator(&self) -> bool {
        matches!(self.input, Input::Operator(_) | Input::Equals)
    }
}

/// Standard four-column calculator keypad.
///
/// ```text
/// C  ⌫  %  ÷
/// 7  8  9  ×
/// 4  5  6  −
/// 1  2  3  +
/// 0     .  =
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keypad {
    rows: Vec<Vec<KeypadButton>>,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    pub const COLUMNS: u16 = 4;

    pub fn new() -> Self {
        let d = |n: u8| Input::Digit(Digit::new(n).unwrap_or(Digit::ZERO));
        let op = Input::Operator;

        let rows = vec![
            vec![
                KeypadButton::new(Input::Clear),
                KeypadButton::new(Input::Delete),
                KeypadButton::new(Input::Percent),
                KeypadButton::new(op(Operation::Divide)),
            ],
            vec![
                KeypadButton::new(d(7)),
                KeypadButton::new(d(8)),
                KeypadButton::new(d(9)),
                KeypadButton::new(op(Operation::Multiply)),
            ],
            vec![
                KeypadButton::new(d(4)),
                KeypadButton::new(d(5)),
                KeypadButton::new(d(6)),
                KeypadButton::new(op(Operation::Subtract)),
            ],
            vec![
                KeypadButton::new(d(1)),
                KeypadButton::new(d(2)),
                KeypadButton::new(d(3)),
                KeypadButton::new(op(Operation::Add)),
            ],
            vec![
                KeypadButton::wide(d(0)),
                KeypadButton::new(Input::Decimal),
                KeypadButton::new(Input::Equals),
            ],
        ];

        Keypad { rows }
    }

    pub fn rows(&self) -> &[Vec<KeypadButton>] {
        &self.rows
    }

    pub fn find(&self, input: Input) -> Option<&KeypadButton> {
        self.rows.iter().flatten().find(|b| b.input == input)
    }
}
