//! Pointer input translation for the corner sheet.
//!
//! egui exposes pointer state per frame; the controller expects discrete
//! down/move/up notifications carrying page coordinates, the target element,
//! and element-local offsets. This module bridges the two.

use corner_sheet::{PointerEvent, PointerTarget};
use egui::{Pos2, Rect};
use crate::state::InteractionState;
use crate::ui::sheet_layer::SheetLayout;

/// Raw primary-button pointer state sampled from one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub pos: Option<Pos2>,
    pub pressed: bool,
    pub released: bool,
    /// Pointer is over a popup or other floating layer drawn above the page
    pub over_overlay: bool,
}

impl PointerSample {
    /// Reads the primary pointer state from the egui context.
    pub fn from_context(ctx: &egui::Context) -> Self {
        let (pos, pressed, released) = ctx.input(|i| {
            (i.pointer.latest_pos(), i.pointer.primary_pressed(), i.pointer.primary_released())
        });
        // Panels live on the background layer; combo box popups and tooltips do not
        let over_overlay = pos
            .and_then(|pos| ctx.layer_id_at(pos))
            .is_some_and(|layer| layer.order != egui::Order::Background);

        Self {
            pos,
            pressed,
            released,
            over_overlay,
        }
    }
}

/// Converts one frame of pointer state into controller events.
///
/// Events are ordered move, down, up, matching the order a browser would
/// deliver them for the same frame. Presses on a popup belong to the popup
/// and produce no down event.
///
/// # Arguments
/// * `sample` - Pointer state for this frame
/// * `page_rect` - Screen rect of the page; client coordinates are relative to it
/// * `layout` - Current sheet layout, or None while hidden
/// * `interaction` - Frame-to-frame pointer tracking (mutable)
pub fn collect_pointer_events(
    sample: PointerSample,
    page_rect: Rect,
    layout: Option<&SheetLayout>,
    interaction: &mut InteractionState,
) -> Vec<PointerEvent> {
    let mut events = Vec::new();
    let to_client = |pos: Pos2| (pos.x - page_rect.left(), pos.y - page_rect.top());

    if let Some(pos) = sample.pos {
        if interaction.track_position(pos) {
            let (x, y) = to_client(pos);
            events.push(PointerEvent::moved(x, y));
        }
    }

    if sample.pressed && !sample.over_overlay {
        if let Some(pos) = sample.pos {
            let (target, origin) = match layout {
                Some(layout) => {
                    let target = layout.hit_test(pos);
                    (target, layout.target_origin(target))
                }
                None => (PointerTarget::Outside, page_rect.min),
            };
            events.push(PointerEvent::down(target, to_client(pos), (pos.x - origin.x, pos.y - origin.y)));
        }
    }

    if sample.released {
        let (x, y) = sample
            .pos
            .or(interaction.last_position())
            .map(to_client)
            .unwrap_or((0.0, 0.0));
        events.push(PointerEvent::up(x, y));
    }

    events
}
