//! Corner sheet layer rendering
//!
//! Paints the scrim over the page and the sheet with its drag handle on a
//! foreground layer, and provides the hit testing used by the input handler.

use corner_sheet::{GestureState, PointerTarget, ThemeColors};
use egui::{Align2, FontId, Pos2, Rect, Stroke, StrokeKind, Vec2};
use crate::presentation::color_mapping;
use crate::ui::sheet_surface::EguiSurface;

/// Drag handle size in points.
const HANDLE_SIZE: Vec2 = Vec2::new(56.0, 14.0);
/// Distance from the sheet's top edge to the handle's top edge.
const HANDLE_TOP_OFFSET: f32 = 12.0;
const SHEET_CORNER_RADIUS: f32 = 8.0;

/// Screen-space rectangles of a visible sheet for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetLayout {
    pub page_rect: Rect,
    pub sheet_rect: Rect,
    pub handle_rect: Rect,
}

impl SheetLayout {
    /// Lays out the sheet, or returns None while the container is hidden.
    pub fn compute(page_rect: Rect, surface: &EguiSurface) -> Option<Self> {
        if !surface.is_visible() {
            return None;
        }

        let sheet_rect = surface.sheet_rect(page_rect);
        let handle_rect = Rect::from_min_size(
            Pos2::new(
                sheet_rect.center().x - HANDLE_SIZE.x / 2.0,
                sheet_rect.top() + HANDLE_TOP_OFFSET,
            ),
            HANDLE_SIZE,
        );

        Some(Self {
            page_rect,
            sheet_rect,
            handle_rect,
        })
    }

    /// Returns the element under `pos`, innermost first.
    pub fn hit_test(&self, pos: Pos2) -> PointerTarget {
        if self.handle_rect.contains(pos) {
            PointerTarget::DragHandle
        } else if self.sheet_rect.contains(pos) {
            PointerTarget::Sheet
        } else if self.page_rect.contains(pos) {
            PointerTarget::Scrim
        } else {
            PointerTarget::Outside
        }
    }

    /// Top-left corner of the element a target refers to.
    pub fn target_origin(&self, target: PointerTarget) -> Pos2 {
        match target {
            PointerTarget::DragHandle => self.handle_rect.min,
            PointerTarget::Sheet => self.sheet_rect.min,
            PointerTarget::Scrim | PointerTarget::Outside => self.page_rect.min,
        }
    }

    /// Returns true if `pos` is inside the sheet's top/left resize strip.
    pub fn in_grab_zone(&self, pos: Pos2, grab_px: f32) -> bool {
        if !self.sheet_rect.contains(pos) || self.handle_rect.contains(pos) {
            return false;
        }
        pos.x - self.sheet_rect.left() <= grab_px || pos.y - self.sheet_rect.top() <= grab_px
    }
}

/// Paints scrim, sheet, grab strips, and handle.
///
/// # Arguments
/// * `painter` - Foreground-layer painter covering the page
/// * `layout` - Sheet layout for this frame
/// * `surface` - Latest scrim/sheet properties
/// * `colors` - Current theme palette
/// * `gesture` - Current gesture state (for active highlights)
/// * `hover_pos` - Pointer position, if any
/// * `grab_px` - Width of the resize strip
pub fn paint_sheet_layer(
    painter: &egui::Painter,
    layout: &SheetLayout,
    surface: &EguiSurface,
    colors: &ThemeColors,
    gesture: GestureState,
    hover_pos: Option<Pos2>,
    grab_px: f32,
) {
    painter.rect_filled(layout.page_rect, 0.0, color_mapping::scrim_fill(colors, surface.scrim()));

    let sheet_rect = layout.sheet_rect;
    painter.rect_filled(sheet_rect, SHEET_CORNER_RADIUS, colors.sheet);
    painter.rect_stroke(
        sheet_rect,
        SHEET_CORNER_RADIUS,
        Stroke::new(1.0, colors.sheet_border),
        StrokeKind::Inside,
    );

    let grab_hovered = hover_pos.is_some_and(|pos| layout.in_grab_zone(pos, grab_px));
    let resizing = matches!(
        gesture,
        GestureState::Resizing | GestureState::ResizingBottomSheetHeight
    );
    if grab_hovered || resizing {
        let strip = color_mapping::grab_zone_color(colors, resizing);
        let top = Rect::from_min_max(sheet_rect.min, Pos2::new(sheet_rect.right(), sheet_rect.top() + grab_px));
        painter.rect_filled(top, 0.0, strip);
        if gesture != GestureState::ResizingBottomSheetHeight {
            let left = Rect::from_min_max(sheet_rect.min, Pos2::new(sheet_rect.left() + grab_px, sheet_rect.bottom()));
            painter.rect_filled(left, 0.0, strip);
        }
    }

    let handle_hovered = hover_pos.is_some_and(|pos| layout.handle_rect.contains(pos));
    let handle_color = color_mapping::handle_color(colors, gesture == GestureState::Dragging, handle_hovered);
    painter.rect_filled(layout.handle_rect.shrink2(Vec2::new(4.0, 4.0)), 3.0, handle_color);

    let caption_pos = Pos2::new(sheet_rect.left() + 2.0 * grab_px, layout.handle_rect.bottom() + 10.0);
    if caption_pos.y + 14.0 < sheet_rect.bottom() {
        painter.text(
            caption_pos,
            Align2::LEFT_TOP,
            format!("{:.0} x {:.0}", sheet_rect.width(), sheet_rect.height()),
            FontId::proportional(13.0),
            colors.text_dim,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use corner_sheet::{HorizontalAnchor, Length, SheetStyle, SheetSurface};

    fn layout() -> SheetLayout {
        let mut surface = EguiSurface::default();
        surface.set_container_visible(true);
        surface.apply_sheet_style(&SheetStyle {
            width: Length::Px(200.0),
            height: 100.0,
            anchor: HorizontalAnchor::Right,
        });
        let page = Rect::from_min_size(Pos2::ZERO, egui::vec2(1000.0, 800.0));
        SheetLayout::compute(page, &surface).unwrap()
    }

    #[test]
    fn test_hidden_surface_has_no_layout() {
        let page = Rect::from_min_size(Pos2::ZERO, egui::vec2(1000.0, 800.0));
        assert!(SheetLayout::compute(page, &EguiSurface::default()).is_none());
    }

    #[test]
    fn test_hit_test_prefers_handle() {
        let layout = layout();
        assert_eq!(layout.sheet_rect.min, Pos2::new(800.0, 700.0));
        assert_eq!(layout.hit_test(layout.handle_rect.center()), PointerTarget::DragHandle);
        assert_eq!(layout.hit_test(Pos2::new(805.0, 790.0)), PointerTarget::Sheet);
        assert_eq!(layout.hit_test(Pos2::new(100.0, 100.0)), PointerTarget::Scrim);
        assert_eq!(layout.hit_test(Pos2::new(-5.0, 100.0)), PointerTarget::Outside);
    }

    #[test]
    fn test_grab_zone() {
        let layout = layout();
        assert!(layout.in_grab_zone(Pos2::new(805.0, 790.0), 10.0));
        assert!(layout.in_grab_zone(Pos2::new(900.0, 704.0), 10.0));
        assert!(!layout.in_grab_zone(Pos2::new(900.0, 790.0), 10.0));
    }
}
