//! Non-interactive key runner.

use serde::Serialize;

use calc_core::{CalculatorEngine, DisplayFrame, EngineConfig, EngineState};

/// Final result of a batch run
#[derive(Debug, Serialize)]
pub struct BatchOutput {
    /// What the display shows after the last key
    pub frame: DisplayFrame,
    /// Full engine state after the last key
    pub state: EngineState,
    /// Characters that had no key mapping
    pub skipped: Vec<char>,
}

/// Feed every character of `keys` to a fresh engine.
pub fn run_keys(config: EngineConfig, keys: &str) -> BatchOutput {
    let mut engine = CalculatorEngine::with_config(config, Vec::<DisplayFrame>::new());
    let mut skipped = Vec::new();

    for c in keys.chars().filter(|c| !c.is_whitespace()) {
        if !engine.handle_key(&c.to_string()) {
            tracing::warn!(key = %c, "skipping unmapped key");
            skipped.push(c);
        }
    }

    tracing::debug!(frames = engine.sink().len(), "batch finished");

    BatchOutput {
        frame: engine.frame(),
        state: engine.state().clone(),
        skipped,
    }
}
