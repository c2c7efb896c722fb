//! Interactive terminal UI
//!
//! - `app` - event loop and crossterm key translation
//! - `ui` - Ratatui rendering of display, keypad and help line

mod app;
mod ui;

pub use app::run;
