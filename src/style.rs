//! Presentation styles pushed to a `SheetSurface`.
//!
//! `SheetStyle` is the controller's view of the sheet's positioning
//! properties. Hosts either read the fields directly (the egui demo) or render
//! them as CSS declarations (a DOM host).

use crate::geometry::{Edge, PanelGeometry};
use crate::opacity::ScrimState;

/// A CSS-like length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    Px(f32),
    Percent(f32),
}

impl Length {
    /// Resolves the length against a containing dimension.
    pub fn resolve(self, container: f32) -> f32 {
        match self {
            Length::Px(px) => px,
            Length::Percent(pct) => container * pct / 100.0,
        }
    }

    fn to_css(self) -> String {
        match self {
            Length::Px(px) => format!("{}px", px),
            Length::Percent(pct) => format!("{}%", pct),
        }
    }
}

/// Which horizontal edge the sheet is pinned to. The bottom edge is always pinned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAnchor {
    /// `right: 0; left: auto`
    Right,
    /// `left: 0; right: auto`
    Left,
}

/// Positioning properties of the sheet element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetStyle {
    pub width: Length,
    pub height: f32,
    pub anchor: HorizontalAnchor,
}

impl SheetStyle {
    /// Derives the style for a geometry.
    ///
    /// A floating sheet keeps its pixel width in the bottom-right corner; a
    /// snapped sheet spans the full width from the left edge.
    pub fn from_geometry(geometry: &PanelGeometry) -> Self {
        match geometry.edge {
            Edge::FloatingCorner => Self {
                width: Length::Px(geometry.width),
                height: geometry.height,
                anchor: HorizontalAnchor::Right,
            },
            Edge::SnappedLeft => Self {
                width: Length::Percent(100.0),
                height: geometry.height,
                anchor: HorizontalAnchor::Left,
            },
        }
    }

    /// Returns the declarations a DOM host would assign to the sheet's style.
    pub fn css_declarations(&self) -> Vec<(&'static str, String)> {
        let (left, right) = match self.anchor {
            HorizontalAnchor::Right => ("auto", "0"),
            HorizontalAnchor::Left => ("0", "auto"),
        };
        vec![
            ("width", self.width.to_css()),
            ("height", format!("{}px", self.height)),
            ("left", left.to_string()),
            ("right", right.to_string()),
            ("top", "auto".to_string()),
            ("bottom", "0".to_string()),
        ]
    }

    /// Renders `css_declarations` as an inline style string.
    pub fn to_css(&self) -> String {
        self.css_declarations()
            .iter()
            .map(|(property, value)| format!("{}: {};", property, value))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Renders a scrim state as an inline style string.
pub fn scrim_css(scrim: &ScrimState) -> String {
    format!(
        "opacity: {:.2}; pointer-events: {};",
        scrim.opacity,
        if scrim.intercepts_pointer { "auto" } else { "none" }
    )
}
