//! Corner Sheet demo application
//!
//! Hosts a `PanelController` inside an egui window:
//! - A page with a dimmed scrim whose opacity follows the sheet size
//! - A floating sheet in the bottom-right corner, resizable from its handle or top/left edge
//! - Snapping to a full-width bottom sheet near the left edge, and back

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state and coordinators (sheet lifecycle, theme, settings)
//! - `presentation/` - Colour mapping for scrim, sheet, and handle
//! - `ui/` - Panels, the sheet layer, the egui sheet surface, and input translation
//! - `state/` - Frame-to-frame interaction state and theme state
//!
//! Usage: `corner-sheet-gui [CONFIG.json]`

use eframe::egui;
use std::path::PathBuf;

mod app;
mod presentation;
mod ui;
mod state;

use app::{AppState, SheetCoordinator, ThemeCoordinator, SettingsCoordinator};
use ui::panel_manager::{PanelInteraction, PanelManager};

const OPACITY_MODEL_KEY: &str = "opacity_model";

/// Main application entry point that initializes logging and launches the demo window.
fn main() -> eframe::Result {
    env_logger::init();

    // Optional config file path as the only argument
    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_title("Corner Sheet"),
        ..Default::default()
    };

    eframe::run_native(
        "Corner Sheet",
        options,
        Box::new(move |cc| Ok(Box::new(CornerSheetApp::new(cc, config_path)))),
    )
}

/// The corner sheet demo application.
///
/// Delegates to coordinators:
/// - `SheetCoordinator` owns the controller lifecycle and routes triggers and pointer events
/// - `ThemeCoordinator` handles theme persistence and application
/// - `PanelManager` handles panel layout, the sheet layer, and input collection
struct CornerSheetApp {
    state: AppState,
}

impl CornerSheetApp {
    /// Creates the app from an optional config file and stored preferences.
    ///
    /// An explicitly passed config file decides the opacity model; otherwise
    /// the model last chosen in the UI is restored.
    fn new(cc: &eframe::CreationContext, config_path: Option<PathBuf>) -> Self {
        let theme_name = ThemeCoordinator::load_theme_from_storage(cc.storage);
        let (mut config, message) = SheetCoordinator::load_config(config_path.as_deref());

        if config_path.is_none() {
            config.opacity_model = SettingsCoordinator::load_setting_or(
                cc.storage,
                OPACITY_MODEL_KEY,
                config.opacity_model,
            );
        }

        let mut state = AppState::new(config, theme_name);
        state.status_message = message;
        Self { state }
    }

    fn handle_panel_interaction(&mut self, interaction: PanelInteraction) {
        match interaction {
            PanelInteraction::OpenRequested => SheetCoordinator::open_sheet(&mut self.state),
            PanelInteraction::CloseRequested => SheetCoordinator::close_sheet(&mut self.state),
            PanelInteraction::ThemeSelected(name) => ThemeCoordinator::select_theme(&mut self.state, &name),
            PanelInteraction::OpacityModelSelected(model) => {
                SheetCoordinator::set_opacity_model(&mut self.state, model)
            }
        }
    }
}

impl eframe::App for CornerSheetApp {
    /// Called when the app is being shut down - ensures preferences are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_theme_to_storage(storage, self.state.theme.current_theme_name());
        SettingsCoordinator::save_setting(storage, OPACITY_MODEL_KEY, &self.state.config.opacity_model);
    }

    /// Main update loop:
    /// 1. Apply theme
    /// 2. Render panels and find the page rect
    /// 3. (Re)build the controller for the page size
    /// 4. Feed pointer input to the controller
    /// 5. Paint the sheet layer on top
    /// 6. Handle header interactions
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        let panel_frame = PanelManager::render_all_panels(ctx, &self.state);
        let page_rect = panel_frame.page_rect;

        SheetCoordinator::sync_viewport(&mut self.state, page_rect.width(), page_rect.height());

        let events = PanelManager::collect_sheet_input(ctx, &mut self.state, page_rect);
        SheetCoordinator::dispatch_pointer_events(&mut self.state, &events);

        PanelManager::render_sheet_layer(ctx, &self.state, page_rect);

        if let Some(interaction) = panel_frame.interaction {
            self.handle_panel_interaction(interaction);
        }
    }
}
