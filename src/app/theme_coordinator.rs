//! Theme management and persistence coordination.
//!
//! Handles theme selection, application, and persistent storage across sessions.

use corner_sheet::theme::DEFAULT_THEME;
use crate::app::AppState;

const THEME_KEY: &str = "theme_preference";

/// Coordinates theme management and persistence.
pub struct ThemeCoordinator;

impl ThemeCoordinator {
    /// Loads the stored theme name, defaulting to the dark theme.
    pub fn load_theme_from_storage(storage: Option<&dyn eframe::Storage>) -> String {
        storage
            .and_then(|storage| storage.get_string(THEME_KEY))
            .unwrap_or_else(|| DEFAULT_THEME.to_string())
    }

    /// Saves the current theme name to persistent storage.
    pub fn save_theme_to_storage(storage: &mut dyn eframe::Storage, theme_name: &str) {
        storage.set_string(THEME_KEY, theme_name.to_string());
        storage.flush();
    }

    /// Switches the active theme, reporting unknown names in the status bar.
    pub fn select_theme(state: &mut AppState, theme_name: &str) {
        if state.theme.set_theme(theme_name) {
            log::debug!("Theme changed to {}", theme_name);
        } else {
            log::warn!("Unknown theme requested: {}", theme_name);
            state.status_message = Some(format!("Unknown theme '{}'", theme_name));
        }
    }

    /// Applies the current theme to the egui context.
    ///
    /// Called every frame to ensure theme is correctly applied.
    pub fn apply_current_theme(ctx: &egui::Context, state: &AppState) {
        let theme = state.theme.current_theme();
        let mut visuals = if theme.name == "Light" {
            egui::Visuals::light()
        } else {
            egui::Visuals::dark()
        };

        state.theme.theme_manager().apply_theme(theme, &mut visuals);
        ctx.set_visuals(visuals);
    }
}
