//! Panel orchestration and layout management.
//!
//! Coordinates the header, status bar, page, and the foreground sheet layer.

use corner_sheet::{GestureState, PointerTarget};
use egui::{CursorIcon, Rect};
use crate::app::AppState;
use crate::ui::input::sheet_input_handler::{self, PointerSample};
use crate::ui::sheet_layer::{self, SheetLayout};
use crate::ui::{header, status_bar};

/// Result of panel interactions that need to be handled by the application.
pub enum PanelInteraction {
    OpenRequested,
    CloseRequested,
    ThemeSelected(String),
    OpacityModelSelected(corner_sheet::OpacityModel),
}

/// Output of one frame of panel rendering.
pub struct PanelFrame {
    /// Screen rect of the page the sheet lives in
    pub page_rect: Rect,
    pub interaction: Option<PanelInteraction>,
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders header, status bar, and page content.
    ///
    /// Called first in `eframe::App::update()`; the sheet layer is drawn on top
    /// afterwards by `render_sheet_layer`.
    pub fn render_all_panels(ctx: &egui::Context, state: &AppState) -> PanelFrame {
        let mut interaction: Option<PanelInteraction> = None;

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header_interaction) = header::render_header(ui, state) {
                interaction = Some(match header_interaction {
                    header::HeaderInteraction::OpenRequested => PanelInteraction::OpenRequested,
                    header::HeaderInteraction::CloseRequested => PanelInteraction::CloseRequested,
                    header::HeaderInteraction::ThemeSelected(name) => PanelInteraction::ThemeSelected(name),
                    header::HeaderInteraction::OpacityModelSelected(model) => {
                        PanelInteraction::OpacityModelSelected(model)
                    }
                });
            }
        });

        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state);
        });

        let colors = state.theme.colors();
        let page_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(16))
            .fill(colors.background);

        let page = egui::CentralPanel::default().frame(page_frame).show(ctx, |ui| {
            ui.heading("Page content");
            ui.separator();
            ui.label("Open the sheet from the header. Drag the handle or the sheet's top/left edge to resize it.");
            ui.label("Dragging it close to the left edge turns it into a bottom sheet; grab its left edge to bring it back.");
        });

        PanelFrame {
            page_rect: page.response.rect,
            interaction,
        }
    }

    /// Translates this frame's pointer input into controller events.
    pub fn collect_sheet_input(ctx: &egui::Context, state: &mut AppState, page_rect: Rect) -> Vec<corner_sheet::PointerEvent> {
        let layout = state
            .sheet
            .as_ref()
            .and_then(|sheet| SheetLayout::compute(page_rect, sheet.surface()));
        let sample = PointerSample::from_context(ctx);
        sheet_input_handler::collect_pointer_events(sample, page_rect, layout.as_ref(), &mut state.interaction)
    }

    /// Paints the scrim and sheet above the page and sets the cursor.
    pub fn render_sheet_layer(ctx: &egui::Context, state: &AppState, page_rect: Rect) {
        let Some(sheet) = state.sheet.as_ref() else {
            return;
        };
        let Some(layout) = SheetLayout::compute(page_rect, sheet.surface()) else {
            return;
        };

        let gesture = sheet.state();
        let grab_px = sheet.config().edge_grab_px;
        let hover_pos = state.interaction.last_position();

        let painter = ctx.layer_painter(egui::LayerId::new(
            egui::Order::Foreground,
            egui::Id::new("corner_sheet_layer"),
        ));
        sheet_layer::paint_sheet_layer(
            &painter,
            &layout,
            sheet.surface(),
            state.theme.colors(),
            gesture,
            hover_pos,
            grab_px,
        );

        if let Some(icon) = Self::cursor_for(&layout, gesture, hover_pos, grab_px, sheet.geometry().is_snapped()) {
            ctx.set_cursor_icon(icon);
        }
    }

    fn cursor_for(
        layout: &SheetLayout,
        gesture: GestureState,
        hover_pos: Option<egui::Pos2>,
        grab_px: f32,
        snapped: bool,
    ) -> Option<CursorIcon> {
        match gesture {
            GestureState::Dragging => return Some(CursorIcon::Grabbing),
            GestureState::Resizing => return Some(CursorIcon::ResizeNorthWest),
            GestureState::ResizingBottomSheetHeight => return Some(CursorIcon::ResizeVertical),
            GestureState::Idle => {}
        }

        let pos = hover_pos?;
        match layout.hit_test(pos) {
            PointerTarget::DragHandle => Some(CursorIcon::Grab),
            PointerTarget::Sheet if layout.in_grab_zone(pos, grab_px) => {
                let near_left = pos.x - layout.sheet_rect.left() <= grab_px;
                Some(match (snapped, near_left) {
                    (true, true) => CursorIcon::ResizeHorizontal,
                    (true, false) => CursorIcon::ResizeVertical,
                    (false, _) => CursorIcon::ResizeNorthWest,
                })
            }
            _ => None,
        }
    }
}
