//! Corner sheet coordination.
//!
//! Owns the controller lifecycle for the demo: config loading, building the
//! controller once the page size is known, rebuilding it when the window is
//! resized, and routing trigger buttons and pointer events to it.

use corner_sheet::{OpacityModel, PanelController, PointerEvent, SheetConfig, Viewport};
use crate::app::AppState;
use crate::ui::sheet_surface::EguiSurface;
use std::path::Path;

/// Page size changes smaller than this (in points) do not rebuild the controller.
const VIEWPORT_EPSILON: f32 = 0.5;

/// Coordinates the sheet controller and its triggers.
pub struct SheetCoordinator;

impl SheetCoordinator {
    /// Loads the sheet configuration.
    ///
    /// An explicit path wins; otherwise the per-user config file is used if it
    /// exists. Failures fall back to defaults and return a message for the
    /// status bar.
    pub fn load_config(explicit: Option<&Path>) -> (SheetConfig, Option<String>) {
        let default_path = SheetConfig::default_path();
        let path = match explicit {
            Some(path) => path,
            None => match default_path.as_deref() {
                Some(path) if path.exists() => path,
                _ => return (SheetConfig::default(), None),
            },
        };

        match SheetConfig::load(path) {
            Ok(config) => {
                log::info!("Loaded sheet config from {}", path.display());
                (config, None)
            }
            Err(e) => {
                log::warn!("{:#}; using defaults", e);
                (SheetConfig::default(), Some(format!("{:#}", e)))
            }
        }
    }

    /// Makes sure a controller exists for the current page size.
    ///
    /// The controller's bounds are fixed at construction, so a resized page
    /// tears down the old controller and binds a fresh one. A visible sheet is
    /// reopened at its resting size.
    pub fn sync_viewport(state: &mut AppState, width: f32, height: f32) {
        let viewport = Viewport::new(width, height);

        let was_visible = match state.sheet.as_mut() {
            Some(sheet) => {
                let current = sheet.viewport();
                if (current.width - viewport.width).abs() < VIEWPORT_EPSILON
                    && (current.height - viewport.height).abs() < VIEWPORT_EPSILON
                {
                    return;
                }
                log::debug!(
                    "Page resized from {}x{} to {}x{}; rebuilding sheet controller",
                    current.width, current.height, viewport.width, viewport.height
                );
                sheet.teardown();
                sheet.is_visible()
            }
            None => false,
        };

        let mut sheet = PanelController::new(EguiSurface::default(), viewport, state.config.clone());
        sheet.bind_events();
        if was_visible {
            sheet.open();
        }
        state.interaction.reset();
        state.sheet = Some(sheet);
    }

    pub fn open_sheet(state: &mut AppState) {
        if let Some(sheet) = state.sheet.as_mut() {
            sheet.open();
        }
    }

    pub fn close_sheet(state: &mut AppState) {
        if let Some(sheet) = state.sheet.as_mut() {
            sheet.close();
        }
    }

    /// Switches the opacity model for the live controller and future rebuilds.
    pub fn set_opacity_model(state: &mut AppState, model: OpacityModel) {
        state.config.opacity_model = model;
        if let Some(sheet) = state.sheet.as_mut() {
            sheet.set_opacity_model(model);
        }
    }

    /// Feeds pointer events to the controller in delivery order.
    ///
    /// Returns true if any event was consumed by a gesture.
    pub fn dispatch_pointer_events(state: &mut AppState, events: &[PointerEvent]) -> bool {
        let Some(sheet) = state.sheet.as_mut() else {
            return false;
        };
        events
            .iter()
            .fold(false, |consumed, event| sheet.handle_pointer(event) || consumed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use corner_sheet::{Edge, PointerTarget};
    use std::env;
    use std::fs;

    fn state() -> AppState {
        AppState::new(SheetConfig::default(), "Dark".to_string())
    }

    #[test]
    fn test_sync_builds_bound_controller_once() {
        let mut state = state();
        SheetCoordinator::sync_viewport(&mut state, 1000.0, 800.0);
        let sheet = state.sheet.as_ref().unwrap();
        assert!(sheet.is_bound());
        assert_eq!(sheet.bounds().max_width, 900.0);

        SheetCoordinator::open_sheet(&mut state);
        SheetCoordinator::sync_viewport(&mut state, 1000.2, 800.0);
        assert!(state.sheet_visible());
    }

    #[test]
    fn test_resize_rebuilds_and_reopens() {
        let mut state = state();
        SheetCoordinator::sync_viewport(&mut state, 1000.0, 800.0);
        SheetCoordinator::open_sheet(&mut state);

        let events = [
            PointerEvent::down(PointerTarget::DragHandle, (900.0, 710.0), (20.0, 6.0)),
            PointerEvent::moved(0.0, 710.0),
        ];
        assert!(SheetCoordinator::dispatch_pointer_events(&mut state, &events));
        assert_eq!(state.sheet.as_ref().unwrap().geometry().edge, Edge::SnappedLeft);

        SheetCoordinator::sync_viewport(&mut state, 1200.0, 900.0);
        let sheet = state.sheet.as_ref().unwrap();
        assert!(sheet.is_visible());
        assert_eq!(sheet.viewport().width, 1200.0);
        assert_eq!(sheet.geometry().edge, Edge::FloatingCorner);
        assert_eq!(sheet.geometry().width, 200.0);
    }

    #[test]
    fn test_opacity_model_survives_rebuild() {
        let mut state = state();
        SheetCoordinator::sync_viewport(&mut state, 1000.0, 800.0);
        SheetCoordinator::set_opacity_model(&mut state, OpacityModel::MaxRatio);
        SheetCoordinator::sync_viewport(&mut state, 800.0, 600.0);
        assert_eq!(state.sheet.as_ref().unwrap().config().opacity_model, OpacityModel::MaxRatio);
    }

    #[test]
    fn test_bad_config_file_falls_back_with_message() {
        let path = env::temp_dir().join("corner_sheet_bad_config.json");
        fs::write(&path, r#"{ "max_width_ratio": 7 }"#).unwrap();

        let (config, message) = SheetCoordinator::load_config(Some(&path));
        assert_eq!(config, SheetConfig::default());
        assert!(message.unwrap().contains("max_width_ratio"));

        fs::remove_file(&path).unwrap();
    }
}
