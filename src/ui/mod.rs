//! UI rendering subsystem
//!
//! This module contains all UI logic for the corner sheet demo:
//! - Header panel (open/close triggers, scrim model and theme selectors)
//! - Status bar (live geometry and gesture readout)
//! - Sheet surface (egui-backed `SheetSurface`)
//! - Sheet layer (scrim/sheet painting and hit testing)
//! - Panel manager (panel orchestration and layout)
//! - Input handling (pointer translation for the controller)

pub mod header;
pub mod status_bar;
pub mod sheet_surface;
pub mod sheet_layer;
pub mod panel_manager;
pub mod input;
