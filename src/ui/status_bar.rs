//! Status bar UI rendering
//!
//! Shows the live sheet geometry, placement, scrim opacity, and gesture state.

use eframe::egui;
use egui::RichText;
use corner_sheet::Edge;
use crate::app::AppState;

/// Renders the status panel at the bottom of the window
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    ui.horizontal(|ui| {
        match state.sheet.as_ref() {
            Some(sheet) => {
                let geometry = sheet.geometry();
                let scrim = sheet.surface().scrim();
                let edge = match geometry.edge {
                    Edge::FloatingCorner => "Corner",
                    Edge::SnappedLeft => "Bottom sheet",
                };
                let visibility = if sheet.is_visible() { "Open" } else { "Closed" };

                ui.label(RichText::new(format!(
                    "{} | {} | {:.0} x {:.0} px | Scrim {:.2}{} | {}",
                    visibility,
                    edge,
                    geometry.width,
                    geometry.height,
                    scrim.opacity,
                    if scrim.intercepts_pointer { " (blocking)" } else { "" },
                    sheet.state().label(),
                )).strong());
            }
            None => {
                ui.label(RichText::new("Waiting for first layout").strong());
            }
        }

        if let Some(message) = &state.status_message {
            ui.label(RichText::new("|").strong());
            ui.label(RichText::new(message).strong().color(egui::Color32::YELLOW));
        }
    });
}
