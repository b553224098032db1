//! Sheet geometry primitives.
//!
//! This module provides the value types the controller mutates:
//! - `Viewport` (page dimensions sampled at construction)
//! - `SizeBounds` (min/max sheet size derived from the viewport)
//! - `PanelGeometry` (current size and placement)
//!
//! Everything here is plain data with saturating arithmetic; nothing panics
//! on degenerate input.

use serde::{Deserialize, Serialize};

/// Page dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Creates a viewport, coercing negative or non-finite dimensions to zero.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: non_negative(width),
            height: non_negative(height),
        }
    }
}

/// Minimum and maximum sheet dimensions for one viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeBounds {
    pub min_width: f32,
    pub min_height: f32,
    pub max_width: f32,
    pub max_height: f32,
}

impl SizeBounds {
    /// Derives bounds from fixed minimums and viewport-relative maximums.
    ///
    /// # Arguments
    /// * `viewport` - Page dimensions
    /// * `min_width` / `min_height` - Absolute minimum size in pixels
    /// * `max_width_ratio` / `max_height_ratio` - Fraction of the viewport used as maximum
    pub fn from_viewport(
        viewport: Viewport,
        min_width: f32,
        min_height: f32,
        max_width_ratio: f32,
        max_height_ratio: f32,
    ) -> Self {
        Self {
            min_width: non_negative(min_width),
            min_height: non_negative(min_height),
            max_width: non_negative(viewport.width * max_width_ratio),
            max_height: non_negative(viewport.height * max_height_ratio),
        }
    }

    /// Returns true if either axis has no usable range (`max <= min`).
    ///
    /// Opacity ratios on such an axis collapse to zero.
    pub fn is_degenerate(&self) -> bool {
        self.max_width <= self.min_width || self.max_height <= self.min_height
    }
}

/// Where the sheet is currently placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Edge {
    /// Floating sheet anchored to the bottom-right corner.
    #[default]
    FloatingCorner,
    /// Full-width bottom sheet anchored to the left edge.
    SnappedLeft,
}

/// Current sheet size and placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelGeometry {
    pub width: f32,
    pub height: f32,
    pub edge: Edge,
}

impl PanelGeometry {
    /// The resting geometry: minimum size, floating in the corner.
    pub fn initial(bounds: &SizeBounds) -> Self {
        Self {
            width: bounds.min_width,
            height: bounds.min_height,
            edge: Edge::FloatingCorner,
        }
    }

    /// Returns true if the sheet is in its bottom-sheet presentation.
    pub fn is_snapped(&self) -> bool {
        self.edge == Edge::SnappedLeft
    }
}

/// Upper limit applied to sheet size while a gesture is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizeBound {
    /// Clamp to the full viewport; the snap threshold is reachable.
    #[default]
    Viewport,
    /// Clamp to `SizeBounds::max_width` / `max_height`.
    SizeBounds,
}

impl ResizeBound {
    /// Returns the (width, height) ceiling for gesture-driven resizes.
    pub fn upper_limits(self, bounds: &SizeBounds, viewport: Viewport) -> (f32, f32) {
        match self {
            ResizeBound::Viewport => (viewport.width, viewport.height),
            ResizeBound::SizeBounds => (bounds.max_width, bounds.max_height),
        }
    }
}

/// Clamps `value` into `[min, max]`, letting `min` win when the range is inverted.
///
/// Unlike `f32::clamp` this never panics, and a NaN `value` saturates to `max`
/// before the lower bound is applied.
pub fn clamp_dimension(value: f32, min: f32, max: f32) -> f32 {
    value.min(max).max(min)
}

fn non_negative(value: f32) -> f32 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}
