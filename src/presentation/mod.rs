//! Presentation layer for visual styling.
//!
//! Maps controller state (scrim opacity, gesture activity) to theme colours.
//! Kept separate from the controller so the library stays toolkit-agnostic.

pub mod color_mapping;
