//! Input events consumed by the engine.
//!
//! A closed enum: every event kind is matched exhaustively by
//! [`transitions::apply`](super::transitions::apply).

use serde::{Deserialize, Serialize};

use crate::errors::CalcError;
use crate::state::Operation;

/// A single decimal digit, 0 through 9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    pub const ZERO: Digit = Digit(0);

    /// `None` for values above 9
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Digit(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }

    /// All digits in ascending order
    pub fn all() -> impl Iterator<Item = Digit> {
        (0..=9).map(Digit)
    }
}

impl TryFrom<u8> for Digit {
    type Error = CalcError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Digit::new(value).ok_or_else(|| CalcError::invalid_input("digit", value.to_string(), "must be 0-9"))
    }
}

impl TryFrom<char> for Digit {
    type Error = CalcError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        c.to_digit(10)
            .map(|d| Digit(d as u8))
            .ok_or_else(|| CalcError::invalid_input("digit", c.to_string(), "must be 0-9"))
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

/// Discrete events the engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum Input {
    Digit(Digit),
    Decimal,
    Operator(Operation),
    Equals,
    Percent,
    Delete,
    Clear,
}

impl Input {
    /// Button caption for this input
    pub fn label(&self) -> String {
        match self {
            Input::Digit(d) => d.as_char().to_string(),
            Input::Decimal => ".".to_string(),
            Input::Operator(op) => op.symbol().to_string(),
            Input::Equals => "=".to_string(),
            Input::Percent => "%".to_string(),
            Input::Delete => "⌫".to_string(),
            Input::Clear => "C".to_string(),
        }
    }
}

impl From<Digit> for Input {
    fn from(digit: Digit) -> Self {
        Input::Digit(digit)
    }
}

impl From<Operation> for Input {
    fn from(op: Operation) -> Self {
        Input::Operator(op)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_bounds() {
        assert_eq!(Digit::new(9).map(Digit::value), Some(9));
        assert!(Digit::new(10).is_none());
        assert!(Digit::try_from(12u8).is_err());
    }

    #[test]
    fn test_digit_from_char() {
        for (i, c) in ('0'..='9').enumerate() {
            let digit = Digit::try_from(c).unwrap();
            assert_eq!(digit.value() as usize, i);
            assert_eq!(digit.as_char(), c);
        }
        assert_eq!(Digit::try_from('x').unwrap_err().error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_all_digits() {
        let chars: String = Digit::all().map(Digit::as_char).collect();
        assert_eq!(chars, "0123456789");
    }

    #[test]
    fn test_labels() {
        assert_eq!(Input::from(Digit::ZERO).label(), "0");
        assert_eq!(Input::from(Operation::Subtract).label(), "−");
        assert_eq!(Input::Percent.label(), "%");
        assert_eq!(Input::Clear.label(), "C");
    }

    #[test]
    fn test_input_serialization() {
        let input = Input::Digit(Digit::new(7).unwrap());
        let json = serde_json::to_string(&input).unwrap();
        assert_eq!(json, r#"{"kind":"Digit","value":7}"#);

        let roundtrip: Input = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, input);

        assert!(serde_json::from_str::<Input>(r#"{"kind":"Digit","value":11}"#).is_err());
        assert_eq!(
            serde_json::to_string(&Input::Equals).unwrap(),
            r#"{"kind":"Equals"}"#
        );
    }
}
