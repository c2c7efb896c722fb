//! UI module for the Tally GUI
//!
//! # Panel Structure
//! - `display` - Expression trace above the primary display
//! - `keypad` - Button grid built from `calc_core::keymap::Keypad`
//! - `status_bar` - Engine phase and config source

pub mod display;
pub mod keypad;
pub mod status_bar;
