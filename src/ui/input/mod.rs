//! Input handling subsystem for UI interactions.
//!
//! This module contains all input handling logic:
//! - Sheet input handling (pointer press/move/release translated to controller events)

pub mod sheet_input_handler;
