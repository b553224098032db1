//! Application-level modules for the corner sheet demo.
//!
//! This module contains the coordinators and centralized state management.

mod app_state;
mod sheet_coordinator;
mod theme_coordinator;
mod settings_coordinator;

pub use app_state::AppState;
pub use sheet_coordinator::SheetCoordinator;
pub use theme_coordinator::ThemeCoordinator;
pub use settings_coordinator::SettingsCoordinator;
