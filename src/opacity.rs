//! Scrim opacity model.
//!
//! The scrim communicates how much of the page the sheet occupies. Opacity is
//! a pure function of the sheet size and the size bounds; two formulas are
//! supported and selected through `OpacityModel`.

use crate::geometry::SizeBounds;
use serde::{Deserialize, Serialize};

/// Upper end of the scrim opacity range for every model.
pub const MAX_SCRIM_OPACITY: f32 = 0.8;

/// Resting opacity of the averaged model, so the scrim never fully disappears.
pub const AVERAGED_FLOOR_OPACITY: f32 = 0.01;

/// Formula used to derive scrim opacity from sheet size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpacityModel {
    /// `max(widthRatio, heightRatio) * 0.8`, result in `[0, 0.8]`.
    MaxRatio,
    /// Each ratio capped at 1 then averaged, mapped to `[0.01, 0.8]`.
    #[default]
    AveragedClamped,
}

impl OpacityModel {
    /// All models, in display order.
    pub const ALL: [OpacityModel; 2] = [OpacityModel::AveragedClamped, OpacityModel::MaxRatio];

    /// Short human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            OpacityModel::MaxRatio => "Max ratio",
            OpacityModel::AveragedClamped => "Averaged (clamped)",
        }
    }
}

/// Presentation state of the scrim.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrimState {
    /// Opacity in `[0, 0.8]`.
    pub opacity: f32,
    /// Whether the scrim swallows pointer input aimed at the page beneath it.
    pub intercepts_pointer: bool,
}

impl ScrimState {
    /// Returns a copy with opacity rounded to two decimal places.
    pub fn quantized(self) -> Self {
        Self {
            opacity: (self.opacity * 100.0).round() / 100.0,
            ..self
        }
    }
}

/// Position of `value` within `[min, max]` as a fraction.
///
/// Returns 0 when the range is empty or inverted, so callers never see NaN or
/// infinity. The result is not capped at 1.
pub fn span_ratio(value: f32, min: f32, max: f32) -> f32 {
    let span = max - min;
    if !(span > 0.0) || !value.is_finite() {
        return 0.0;
    }
    (value - min) / span
}

/// Computes the scrim state for a sheet of the given size.
///
/// # Arguments
/// * `model` - Which opacity formula to apply
/// * `width` / `height` - Current sheet size in pixels
/// * `bounds` - Size bounds the ratios are measured against
pub fn scrim_state(model: OpacityModel, width: f32, height: f32, bounds: &SizeBounds) -> ScrimState {
    let width_ratio = span_ratio(width, bounds.min_width, bounds.max_width);
    let height_ratio = span_ratio(height, bounds.min_height, bounds.max_height);

    match model {
        OpacityModel::MaxRatio => {
            let opacity = (width_ratio.max(height_ratio) * MAX_SCRIM_OPACITY).clamp(0.0, MAX_SCRIM_OPACITY);
            ScrimState {
                opacity,
                intercepts_pointer: opacity > 0.0,
            }
        }
        OpacityModel::AveragedClamped => {
            let ratio = ((width_ratio.min(1.0) + height_ratio.min(1.0)) / 2.0).clamp(0.0, 1.0);
            let opacity = AVERAGED_FLOOR_OPACITY + ratio * (MAX_SCRIM_OPACITY - AVERAGED_FLOOR_OPACITY);
            ScrimState {
                opacity,
                intercepts_pointer: ratio > 0.0,
            }
        }
    }
}

/// Convenience wrapper returning only the opacity.
pub fn opacity(model: OpacityModel, width: f32, height: f32, bounds: &SizeBounds) -> f32 {
    scrim_state(model, width, height, bounds).opacity
}
