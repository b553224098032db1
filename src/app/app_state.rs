//! Centralized application state for the corner sheet demo.
//!
//! Composes the sheet controller with the focused UI state components.

use corner_sheet::{PanelController, SheetConfig};
use crate::state::{InteractionState, ThemeState};
use crate::ui::sheet_surface::EguiSurface;

/// Main application state.
pub struct AppState {
    /// Configuration used whenever the controller is (re)built
    pub config: SheetConfig,

    /// Sheet controller; built on the first frame once the page size is known
    pub sheet: Option<PanelController<EguiSurface>>,

    /// Frame-to-frame pointer tracking
    pub interaction: InteractionState,

    /// Theme and styling state
    pub theme: ThemeState,

    /// Message shown in the status bar (config problems and the like)
    pub status_message: Option<String>,
}

impl AppState {
    /// Creates application state from a loaded config and a stored theme name.
    pub fn new(config: SheetConfig, theme_name: String) -> Self {
        Self {
            config,
            sheet: None,
            interaction: InteractionState::new(),
            theme: ThemeState::with_theme(theme_name),
            status_message: None,
        }
    }

    /// Returns true if the sheet exists and is showing.
    pub fn sheet_visible(&self) -> bool {
        self.sheet.as_ref().is_some_and(|sheet| sheet.is_visible())
    }
}
