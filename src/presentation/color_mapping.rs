//! Colour mapping for the corner sheet layer.
//!
//! This module provides functions for:
//! - Turning the scrim state into a translucent fill
//! - Highlighting the handle and grab zone while hovered or in use

use corner_sheet::{adjust_brightness, with_opacity, ScrimState, ThemeColors};
use egui::Color32;

/// Opacity of the grab zone highlight while hovered.
const GRAB_HOVER_OPACITY: f32 = 0.25;
/// Opacity of the grab zone highlight during a resize.
const GRAB_ACTIVE_OPACITY: f32 = 0.5;

/// Returns the scrim fill for the current scrim state.
pub fn scrim_fill(colors: &ThemeColors, scrim: ScrimState) -> Color32 {
    with_opacity(colors.scrim, scrim.opacity)
}

/// Returns the drag handle colour, brightened on hover and more so while dragging.
pub fn handle_color(colors: &ThemeColors, dragging: bool, hovered: bool) -> Color32 {
    match (dragging, hovered) {
        (true, _) => adjust_brightness(colors.handle, 1.5),
        (false, true) => adjust_brightness(colors.handle, 1.25),
        (false, false) => colors.handle,
    }
}

/// Returns the grab zone highlight colour.
pub fn grab_zone_color(colors: &ThemeColors, active: bool) -> Color32 {
    let opacity = if active { GRAB_ACTIVE_OPACITY } else { GRAB_HOVER_OPACITY };
    with_opacity(colors.grab_zone, opacity)
}
