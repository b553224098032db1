//! Pointer tracking between frames.
//!
//! egui reports pointer state per frame; the sheet controller wants discrete
//! notifications. This state remembers enough of the previous frame to turn
//! one into the other.

use egui::Pos2;

/// Frame-to-frame pointer state.
#[derive(Debug, Clone, Default)]
pub struct InteractionState {
    /// Pointer position seen last frame
    last_position: Option<Pos2>,
}

impl InteractionState {
    /// Creates a new interaction state with no pointer history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgets all pointer history.
    pub fn reset(&mut self) {
        self.last_position = None;
    }

    /// Records the pointer position; returns true if it moved since last frame.
    pub fn track_position(&mut self, pos: Pos2) -> bool {
        let moved = self.last_position != Some(pos);
        self.last_position = Some(pos);
        moved
    }

    pub fn last_position(&self) -> Option<Pos2> {
        self.last_position
    }
}
