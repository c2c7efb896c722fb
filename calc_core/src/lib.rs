//! # calc_core - Calculator Engine
//!
//! `calc_core` is the computational heart of Tally: a four-function
//! calculator modelled as an explicit state machine. Front ends (the iced
//! GUI, the terminal UI) feed it discrete inputs and render the frame it
//! produces; the engine itself never touches a screen.
//!
//! ## Design Philosophy
//!
//! - **Pure transitions**: `(config, state, input) -> state`, testable without a UI
//! - **Closed inputs**: a single [`Input`] enum matched exhaustively
//! - **JSON-First**: state, inputs and errors implement Serialize/Deserialize
//! - **Recoverable errors**: arithmetic failures become a display state, never a panic
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::engine::transitions::apply;
//! use calc_core::{EngineConfig, EngineState, Input};
//!
//! let config = EngineConfig::default();
//! let state = ["5", "0", "%"]
//!     .iter()
//!     .filter_map(|key| calc_core::keymap::input_for_key(key))
//!     .fold(EngineState::default(), |state, input: Input| apply(&config, &state, input));
//!
//! assert_eq!(state.current_value, "0.5");
//! ```
//!
//! ## Modules
//!
//! - [`engine`] - Inputs, pure transitions, and the display-notifying engine
//! - [`state`] - Engine state, operators, phases
//! - [`format`] - Result text and display formatting
//! - [`keymap`] - Keyboard names and the keypad layout
//! - [`config`] - Tunable limits, JSON config files
//! - [`errors`] - Structured error types
//! - [`telemetry`] - Optional tracing subscriber setup

pub mod config;
pub mod engine;
pub mod errors;
pub mod format;
pub mod keymap;
pub mod state;
pub mod telemetry;

// Re-export commonly used types at crate root for convenience
pub use config::{load_config, save_config, EngineConfig};
pub use engine::{CalculatorEngine, Digit, DisplayFrame, DisplaySink, Input};
pub use errors::{CalcError, CalcResult};
pub use state::{EngineState, Operation, Phase};
