//! State management modules for the corner sheet demo.
//!
//! This module contains state-only logic (no UI concerns):
//! - Interaction state (frame-to-frame pointer tracking)
//! - Theme state (theme manager, current theme)
//!
//! Sheet geometry and gesture state live in the library's `PanelController`.

mod interaction;
mod theme_state;

pub use interaction::InteractionState;
pub use theme_state::ThemeState;
