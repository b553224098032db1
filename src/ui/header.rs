//! Header panel UI rendering
//!
//! Hosts the open/close trigger controls, the theme selector, and the opacity
//! model selector.

use eframe::egui;
use corner_sheet::OpacityModel;
use crate::app::AppState;

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User clicked "Open sheet"
    OpenRequested,
    /// User clicked "Close sheet"
    CloseRequested,
    /// User picked a theme
    ThemeSelected(String),
    /// User picked an opacity model
    OpacityModelSelected(OpacityModel),
}

/// Renders the application header
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
///
/// # Returns
/// * `Option<HeaderInteraction>` - User interaction result
pub fn render_header(ui: &mut egui::Ui, state: &AppState) -> Option<HeaderInteraction> {
    let mut interaction = None;
    let sheet_visible = state.sheet_visible();

    ui.horizontal(|ui| {
        if ui.add_enabled(!sheet_visible, egui::Button::new("Open sheet")).clicked() {
            interaction = Some(HeaderInteraction::OpenRequested);
        }
        if ui.add_enabled(sheet_visible, egui::Button::new("Close sheet")).clicked() {
            interaction = Some(HeaderInteraction::CloseRequested);
        }

        ui.separator();

        let mut model = state.config.opacity_model;
        egui::ComboBox::from_label("Scrim")
            .selected_text(model.label())
            .show_ui(ui, |ui| {
                for candidate in OpacityModel::ALL {
                    ui.selectable_value(&mut model, candidate, candidate.label());
                }
            });
        if model != state.config.opacity_model {
            interaction = Some(HeaderInteraction::OpacityModelSelected(model));
        }

        ui.separator();

        let current = state.theme.current_theme_name().to_string();
        let mut selected = current.clone();
        egui::ComboBox::from_label("Theme")
            .selected_text(selected.as_str())
            .show_ui(ui, |ui| {
                for name in state.theme.theme_manager().list_themes() {
                    ui.selectable_value(&mut selected, name.to_string(), name);
                }
            });
        if selected != current {
            interaction = Some(HeaderInteraction::ThemeSelected(selected));
        }
    });

    interaction
}
