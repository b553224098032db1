//! egui-backed sheet surface.
//!
//! Stores the latest properties pushed by the controller so the sheet layer
//! can lay out and paint them each frame.

use corner_sheet::{HorizontalAnchor, Length, ScrimState, SheetStyle, SheetSurface};
use egui::{Pos2, Rect};

/// `SheetSurface` implementation read by the egui renderer.
#[derive(Debug, Clone)]
pub struct EguiSurface {
    visible: bool,
    sheet: SheetStyle,
    scrim: ScrimState,
}

impl Default for EguiSurface {
    fn default() -> Self {
        Self {
            visible: false,
            sheet: SheetStyle {
                width: Length::Px(0.0),
                height: 0.0,
                anchor: HorizontalAnchor::Right,
            },
            scrim: ScrimState {
                opacity: 0.0,
                intercepts_pointer: false,
            },
        }
    }
}

impl SheetSurface for EguiSurface {
    fn set_container_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn apply_sheet_style(&mut self, style: &SheetStyle) {
        self.sheet = *style;
    }

    fn apply_scrim(&mut self, scrim: ScrimState) {
        self.scrim = scrim;
    }
}

impl EguiSurface {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn scrim(&self) -> ScrimState {
        self.scrim
    }

    /// Places the sheet inside the page rect: bottom-pinned, left- or right-anchored.
    pub fn sheet_rect(&self, page_rect: Rect) -> Rect {
        let width = self.sheet.width.resolve(page_rect.width());
        let height = self.sheet.height;
        let bottom = page_rect.bottom();

        let left = match self.sheet.anchor {
            HorizontalAnchor::Right => page_rect.right() - width,
            HorizontalAnchor::Left => page_rect.left(),
        };

        Rect::from_min_max(Pos2::new(left, bottom - height), Pos2::new(left + width, bottom))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Rect {
        Rect::from_min_size(Pos2::new(0.0, 40.0), egui::vec2(1000.0, 800.0))
    }

    #[test]
    fn test_floating_rect_in_bottom_right() {
        let mut surface = EguiSurface::default();
        surface.apply_sheet_style(&SheetStyle {
            width: Length::Px(300.0),
            height: 120.0,
            anchor: HorizontalAnchor::Right,
        });
        let rect = surface.sheet_rect(page());
        assert_eq!(rect.min, Pos2::new(700.0, 720.0));
        assert_eq!(rect.max, Pos2::new(1000.0, 840.0));
    }

    #[test]
    fn test_snapped_rect_spans_page() {
        let mut surface = EguiSurface::default();
        surface.apply_sheet_style(&SheetStyle {
            width: Length::Percent(100.0),
            height: 200.0,
            anchor: HorizontalAnchor::Left,
        });
        let rect = surface.sheet_rect(page());
        assert_eq!(rect.min, Pos2::new(0.0, 640.0));
        assert_eq!(rect.width(), 1000.0);
    }
}
