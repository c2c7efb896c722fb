//! # Engine State
//!
//! `EngineState` is the single value the calculator threads through its
//! transition functions. It is plain data: cloning it, comparing it and
//! serializing it to JSON are all cheap and side-effect free.
//!
//! ## Structure
//!
//! ```text
//! EngineState
//! ├── current_value: "0" | entry digits | result text | "Error"
//! ├── previous_value: left operand text ("" when nothing is pending)
//! ├── operation: Option<Operation>
//! ├── expression: display-only trace ("12 +", "12 + 3 =")
//! ├── should_reset_display: next digit replaces instead of appends
//! ├── is_error
//! ├── last_result / previous_exact: full-precision shadows of result text
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::format::parse_number;

/// Entry text shown while the engine is in the error state
pub const ERROR_TEXT: &str = "Error";

/// Binary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// Symbol used in the expression trace and on the keypad
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "−",
            Operation::Multiply => "×",
            Operation::Divide => "÷",
        }
    }

    /// Apply the operator to two operands.
    ///
    /// # Returns
    ///
    /// * `Err(CalcError::DivideByZero)` - division with a zero right-hand side
    /// * `Err(CalcError::InvalidResult)` - the result is infinite or NaN
    ///
    /// # Example
    ///
    /// ```rust
    /// use calc_core::state::Operation;
    /// use calc_core::CalcError;
    ///
    /// assert_eq!(Operation::Multiply.apply(10.0, 2.0), Ok(20.0));
    /// assert_eq!(Operation::Divide.apply(5.0, 0.0), Err(CalcError::DivideByZero));
    /// assert_eq!(Operation::Multiply.apply(1e200, 1e200), Err(CalcError::InvalidResult));
    /// ```
    pub fn apply(self, lhs: f64, rhs: f64) -> CalcResult<f64> {
        let result = match self {
            Operation::Add => lhs + rhs,
            Operation::Subtract => lhs - rhs,
            Operation::Multiply => lhs * rhs,
            Operation::Divide => {
                if rhs == 0.0 {
                    return Err(CalcError::DivideByZero);
                }
                lhs / rhs
            }
        };

        if !result.is_finite() {
            return Err(CalcError::InvalidResult);
        }
        Ok(result)
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Coarse view of where the state machine is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Digits are being typed into the current operand
    Entering,
    /// An operator was just chosen; the next digit starts the right operand
    OperatorPending,
    /// A result (or percent transform) is showing
    Result,
    /// The last calculation failed
    Error,
}

/// Complete calculator state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineState {
    /// Entry or result text; never empty
    pub current_value: String,

    /// Left operand captured when the operator was chosen
    pub previous_value: String,

    /// Pending operator, if any
    pub operation: Option<Operation>,

    /// Human-readable trace; has no effect on computation
    pub expression: String,

    /// The next digit or decimal replaces the entry instead of appending
    pub should_reset_display: bool,

    /// Set by a failed calculation
    pub is_error: bool,

    /// Full-precision value behind `current_value` while it is untouched result text
    #[serde(default)]
    pub last_result: Option<f64>,

    /// Full-precision value behind `previous_value`, captured with it
    #[serde(default)]
    pub previous_exact: Option<f64>,
}

impl Default for EngineState {
    fn default() -> Self {
        EngineState {
            current_value: "0".to_string(),
            previous_value: String::new(),
            operation: None,
            expression: String::new(),
            should_reset_display: false,
            is_error: false,
            last_result: None,
            previous_exact: None,
        }
    }
}

impl EngineState {
    /// Construction defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Where the state machine currently is
    pub fn phase(&self) -> Phase {
        if self.is_error {
            Phase::Error
        } else if !self.should_reset_display {
            Phase::Entering
        } else if self.operation.is_some() {
            Phase::OperatorPending
        } else {
            Phase::Result
        }
    }

    /// The current operand, preferring the full-precision result value.
    pub fn current_operand(&self) -> Option<f64> {
        self.last_result.or_else(|| parse_number(&self.current_value))
    }

    /// The captured left operand, preferring the full-precision value.
    pub fn previous_operand(&self) -> Option<f64> {
        self.previous_exact.or_else(|| parse_number(&self.previous_value))
    }

    /// Check the structural invariants.
    ///
    /// - `current_value` is never empty and parses as a number unless in error
    /// - a pending operation always has a captured left operand
    /// - at most one decimal point in `current_value`
    /// - the error state carries no pending operation
    pub fn is_consistent(&self) -> bool {
        if self.current_value.is_empty() {
            return false;
        }
        if self.current_value.matches('.').count() > 1 {
            return false;
        }
        if self.is_error {
            return self.current_value == ERROR_TEXT
                && self.operation.is_none()
                && self.previous_value.is_empty();
        }
        if parse_number(&self.current_value).is_none() {
            return false;
        }
        self.operation.is_none() || !self.previous_value.is_empty()
    }
}
