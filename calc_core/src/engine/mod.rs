//! # Calculator Engine
//!
//! The engine follows the pattern:
//!
//! - [`Input`] - closed set of events (digit, decimal, operator, ...)
//! - [`transitions`] - pure `(config, state, input) -> state` functions
//! - [`CalculatorEngine`] - owns the state and pushes a [`DisplayFrame`] to
//!   a [`DisplaySink`] after every handled event
//!
//! ## Example
//!
//! ```rust
//! use calc_core::engine::{CalculatorEngine, DisplayFrame, Input};
//! use calc_core::state::Operation;
//!
//! let mut engine = CalculatorEngine::new(Vec::<DisplayFrame>::new());
//! for key in ["7", "+", "3", "*", "2", "Enter"] {
//!     engine.handle_key(key);
//! }
//! engine.handle(Input::Operator(Operation::Add));
//!
//! assert_eq!(engine.state().previous_value, "20");
//! assert_eq!(engine.sink().last().unwrap().expression, "20 +");
//! ```

pub mod input;
pub mod transitions;

use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::format::format_display;
use crate::keymap;
use crate::state::EngineState;

pub use input::{Digit, Input};

/// What a display surface shows after an event.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DisplayFrame {
    /// Formatted `current_value` for the primary display
    pub display: String,
    /// Expression trace
    pub expression: String,
    /// Whether the error styling applies
    pub is_error: bool,
}

impl DisplayFrame {
    pub fn from_state(config: &EngineConfig, state: &EngineState) -> Self {
        DisplayFrame {
            display: format_display(config, &state.current_value),
            expression: state.expression.clone(),
            is_error: state.is_error,
        }
    }
}

/// Output surface notified after every handled event.
pub trait DisplaySink {
    fn render(&mut self, frame: &DisplayFrame);
}

/// Records every frame; handy for tests and batch runs.
impl DisplaySink for Vec<DisplayFrame> {
    fn render(&mut self, frame: &DisplayFrame) {
        self.push(frame.clone());
    }
}

/// Stateful wrapper around the pure transitions.
#[derive(Debug)]
pub struct CalculatorEngine<S: DisplaySink> {
    config: EngineConfig,
    state: EngineState,
    sink: S,
}

impl<S: DisplaySink> CalculatorEngine<S> {
    /// Engine with default limits. The sink receives the initial frame immediately.
    pub fn new(sink: S) -> Self {
        Self::with_config(EngineConfig::default(), sink)
    }

    pub fn with_config(config: EngineConfig, sink: S) -> Self {
        let mut engine = CalculatorEngine {
            config,
            state: EngineState::default(),
            sink,
        };
        engine.notify();
        engine
    }

    /// Apply one input and notify the sink.
    pub fn handle(&mut self, input: Input) -> &EngineState {
        self.state = transitions::apply(&self.config, &self.state, input);
        tracing::debug!(
            ?input,
            phase = ?self.state.phase(),
            value = %self.state.current_value,
            "input handled"
        );
        self.notify();
        &self.state
    }

    /// Map a keyboard key name through the keymap and apply it.
    ///
    /// Returns `false` (and leaves the display alone) for unmapped keys.
    pub fn handle_key(&mut self, key: &str) -> bool {
        match keymap::input_for_key(key) {
            Some(input) => {
                self.handle(input);
                true
            }
            None => {
                tracing::trace!(key, "ignored unmapped key");
                false
            }
        }
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    /// The frame the sink last received
    pub fn frame(&self) -> DisplayFrame {
        DisplayFrame::from_state(&self.config, &self.state)
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    fn notify(&mut self) {
        let frame = self.frame();
        self.sink.render(&frame);
    }
}
