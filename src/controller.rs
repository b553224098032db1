//! Corner sheet gesture controller.
//!
//! `PanelController` owns the sheet geometry and the active pointer session,
//! turns pointer events into geometry changes, and pushes the resulting
//! styles to its `SheetSurface`.
//!
//! Lifecycle: `new` → `bind_events` → (`handle_pointer` | `open` | `close`)* → `teardown`.
//! Pointer events are ignored while unbound; `open`/`close` work at any time.

use crate::config::SheetConfig;
use crate::geometry::{clamp_dimension, Edge, PanelGeometry, SizeBounds, Viewport};
use crate::opacity::{scrim_state, OpacityModel, ScrimState};
use crate::pointer::{GestureMode, GestureState, PointerEvent, PointerKind, PointerSession, PointerTarget};
use crate::style::SheetStyle;
use crate::traits::SheetSurface;
use log::{debug, info, trace, warn};

/// Drag/resize state machine for one corner sheet.
pub struct PanelController<S: SheetSurface> {
    surface: S,
    config: SheetConfig,
    viewport: Viewport,
    bounds: SizeBounds,
    geometry: PanelGeometry,
    session: Option<PointerSession>,
    visible: bool,
    bound: bool,
}

impl<S: SheetSurface> PanelController<S> {
    /// Creates a hidden controller for a viewport.
    ///
    /// Size bounds are computed once here. The surface immediately receives
    /// the hidden container and the resting style.
    pub fn new(surface: S, viewport: Viewport, config: SheetConfig) -> Self {
        let bounds = config.bounds_for(viewport);
        if bounds.is_degenerate() {
            warn!(
                "Viewport {}x{} leaves no resize range (bounds {:?}); scrim ratios collapse to zero",
                viewport.width, viewport.height, bounds
            );
        }

        let mut controller = Self {
            surface,
            config,
            viewport,
            bounds,
            geometry: PanelGeometry::initial(&bounds),
            session: None,
            visible: false,
            bound: false,
        };
        controller.surface.set_container_visible(false);
        controller.apply_sheet_style();
        controller.update_scrim_opacity();
        controller
    }

    /// Starts accepting pointer events.
    pub fn bind_events(&mut self) {
        if !self.bound {
            debug!("Corner sheet listeners bound");
            self.bound = true;
        }
    }

    /// Stops accepting pointer events and drops any gesture in progress.
    pub fn teardown(&mut self) {
        if self.bound {
            debug!("Corner sheet listeners removed");
        }
        self.bound = false;
        self.session = None;
    }

    // ===== Queries =====

    pub fn geometry(&self) -> PanelGeometry {
        self.geometry
    }

    pub fn bounds(&self) -> SizeBounds {
        self.bounds
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn config(&self) -> &SheetConfig {
        &self.config
    }

    pub fn session(&self) -> Option<&PointerSession> {
        self.session.as_ref()
    }

    /// Returns the current state of the gesture state machine.
    pub fn state(&self) -> GestureState {
        self.session.map(|s| s.state()).unwrap_or_default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_bound(&self) -> bool {
        self.bound
    }

    /// Scrim state derived from the current geometry (unquantized).
    pub fn scrim(&self) -> ScrimState {
        scrim_state(self.config.opacity_model, self.geometry.width, self.geometry.height, &self.bounds)
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    // ===== External Triggers =====

    /// Shows the sheet at minimum size in the bottom-right corner.
    ///
    /// Does not touch the gesture state machine.
    pub fn open(&mut self) {
        info!("Opening corner sheet");
        self.geometry = PanelGeometry::initial(&self.bounds);
        self.apply_sheet_style();
        self.visible = true;
        self.surface.set_container_visible(true);
        self.update_scrim_opacity();
    }

    /// Hides the sheet and restores the resting size and corner placement.
    pub fn close(&mut self) {
        info!("Closing corner sheet");
        self.visible = false;
        self.surface.set_container_visible(false);
        self.reset_position();
        self.update_scrim_opacity();
    }

    /// Switches the opacity formula and refreshes the scrim.
    pub fn set_opacity_model(&mut self, model: OpacityModel) {
        if self.config.opacity_model != model {
            debug!("Opacity model changed to {:?}", model);
            self.config.opacity_model = model;
            self.update_scrim_opacity();
        }
    }

    // ===== Pointer Input =====

    /// Feeds one pointer notification into the state machine.
    ///
    /// Returns true if the event started, advanced, or ended a gesture.
    pub fn handle_pointer(&mut self, event: &PointerEvent) -> bool {
        if !self.bound {
            trace!("Ignoring {:?} while unbound", event.kind);
            return false;
        }
        if !event.is_finite() {
            warn!("Ignoring pointer event with non-finite coordinates: {:?}", event);
            return false;
        }

        match event.kind {
            PointerKind::Down => self.start_gesture(event),
            PointerKind::Move => self.drag(event),
            PointerKind::Up => self.stop_gesture(),
        }
    }

    fn start_gesture(&mut self, event: &PointerEvent) -> bool {
        if !self.visible || self.session.is_some() {
            return false;
        }

        match event.target {
            PointerTarget::DragHandle => {
                self.begin_session(GestureMode::Move, event);
                true
            }
            PointerTarget::Sheet => self.start_resizing(event),
            PointerTarget::Scrim | PointerTarget::Outside => false,
        }
    }

    fn start_resizing(&mut self, event: &PointerEvent) -> bool {
        let grab = self.config.edge_grab_px;
        let near_left = event.offset_x <= grab;
        let near_top = event.offset_y <= grab;
        if !(near_left || near_top) {
            return false;
        }

        self.begin_session(GestureMode::Resize, event);

        if self.geometry.is_snapped() {
            if near_left {
                self.transition_to_corner(event.client_x);
            } else if let Some(session) = self.session.as_mut() {
                session.mode = GestureMode::ResizeBottomSheetHeight;
            }
        }
        true
    }

    fn begin_session(&mut self, mode: GestureMode, event: &PointerEvent) {
        debug!(
            "Gesture {:?} started at ({}, {}) with size {}x{}",
            mode, event.client_x, event.client_y, self.geometry.width, self.geometry.height
        );
        self.session = Some(PointerSession::begin(mode, event, self.geometry.width, self.geometry.height));
    }

    fn drag(&mut self, event: &PointerEvent) -> bool {
        let Some(session) = self.session else {
            return false;
        };

        let (delta_x, delta_y) = session.deltas(event.client_x, event.client_y);
        let (upper_width, upper_height) = self.config.resize_bound.upper_limits(&self.bounds, self.viewport);
        let new_height = clamp_dimension(session.start_height + delta_y, self.bounds.min_height, upper_height);

        if session.mode == GestureMode::ResizeBottomSheetHeight {
            trace!("Bottom sheet height -> {}", new_height);
            self.geometry.height = new_height;
            self.apply_sheet_style();
            self.update_scrim_opacity();
            return true;
        }

        let new_width = clamp_dimension(session.start_width + delta_x, self.bounds.min_width, upper_width);
        let right_gap = (self.viewport.width - new_width).max(0.0);

        if right_gap <= self.config.snap_threshold_px && self.can_snap() {
            self.snap_to_left_edge();
        } else {
            if self.geometry.is_snapped() {
                debug!("Right gap {} exceeds snap threshold; floating in corner again", right_gap);
            }
            trace!("Corner sheet -> {}x{}", new_width, new_height);
            self.geometry = PanelGeometry {
                width: new_width,
                height: new_height,
                edge: Edge::FloatingCorner,
            };
            self.apply_sheet_style();
            self.update_scrim_opacity();
        }
        true
    }

    fn stop_gesture(&mut self) -> bool {
        match self.session.take() {
            Some(session) => {
                debug!(
                    "Gesture {:?} ended at {}x{} ({:?})",
                    session.mode, self.geometry.width, self.geometry.height, self.geometry.edge
                );
                true
            }
            None => false,
        }
    }

    // ===== Placement Transitions =====

    /// A full-width sheet must still satisfy the minimum width.
    fn can_snap(&self) -> bool {
        self.viewport.width >= self.bounds.min_width
    }

    /// Turns the sheet into a full-width bottom sheet, keeping its current height.
    ///
    /// On a viewport narrower than `min_width` the width stays at `min_width`.
    pub fn snap_to_left_edge(&mut self) {
        if !self.geometry.is_snapped() {
            debug!("Snapping to left edge as bottom sheet");
        }
        self.geometry.width = self.viewport.width.max(self.bounds.min_width);
        self.geometry.edge = Edge::SnappedLeft;
        self.apply_sheet_style();
        self.update_scrim_opacity();
    }

    /// Re-anchors a snapped sheet to the right edge, sized to end under the pointer.
    ///
    /// The new width is `viewport width - pointer_x`, saturated into
    /// `[min_width, viewport width]`; height is unchanged. An active session
    /// continues from the new width.
    pub fn transition_to_corner(&mut self, pointer_x: f32) {
        let width = clamp_dimension(self.viewport.width - pointer_x, self.bounds.min_width, self.viewport.width);
        debug!("Transitioning bottom sheet back to corner at width {}", width);

        self.geometry.width = width;
        self.geometry.edge = Edge::FloatingCorner;
        if let Some(session) = self.session.as_mut() {
            session.start_width = width;
        }
        self.apply_sheet_style();
        self.update_scrim_opacity();
    }

    fn reset_position(&mut self) {
        self.geometry = PanelGeometry::initial(&self.bounds);
        self.apply_sheet_style();
    }

    fn apply_sheet_style(&mut self) {
        let style = SheetStyle::from_geometry(&self.geometry);
        self.surface.apply_sheet_style(&style);
    }

    fn update_scrim_opacity(&mut self) {
        let scrim = self.scrim().quantized();
        self.surface.apply_scrim(scrim);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{HorizontalAnchor, Length};

    /// Surface that remembers the latest value of each property.
    #[derive(Default)]
    struct RecordingSurface {
        visible: Option<bool>,
        style: Option<SheetStyle>,
        scrim: Option<ScrimState>,
        style_updates: usize,
    }

    impl SheetSurface for RecordingSurface {
        fn set_container_visible(&mut self, visible: bool) {
            self.visible = Some(visible);
        }

        fn apply_sheet_style(&mut self, style: &SheetStyle) {
            self.style = Some(*style);
            self.style_updates += 1;
        }

        fn apply_scrim(&mut self, scrim: ScrimState) {
            self.scrim = Some(scrim);
        }
    }

    fn controller_with(config: SheetConfig) -> PanelController<RecordingSurface> {
        let mut controller = PanelController::new(RecordingSurface::default(), Viewport::new(1000.0, 800.0), config);
        controller.bind_events();
        controller.open();
        controller
    }

    fn controller() -> PanelController<RecordingSurface> {
        controller_with(SheetConfig::default())
    }

    /// Handle press at the sheet's top-centre for a 1000x800 viewport.
    fn press_handle(controller: &mut PanelController<RecordingSurface>, x: f32, y: f32) {
        assert!(controller.handle_pointer(&PointerEvent::down(PointerTarget::DragHandle, (x, y), (20.0, 6.0))));
    }

    #[test]
    fn test_new_controller_is_hidden_and_idle() {
        let controller = PanelController::new(RecordingSurface::default(), Viewport::new(1000.0, 800.0), SheetConfig::default());
        assert!(!controller.is_visible());
        assert!(!controller.is_bound());
        assert_eq!(controller.state(), GestureState::Idle);
        assert_eq!(controller.surface().visible, Some(false));
        assert_eq!(controller.geometry(), PanelGeometry { width: 200.0, height: 100.0, edge: Edge::FloatingCorner });
    }

    #[test]
    fn test_events_ignored_until_bound() {
        let mut controller = PanelController::new(RecordingSurface::default(), Viewport::new(1000.0, 800.0), SheetConfig::default());
        controller.open();
        let down = PointerEvent::down(PointerTarget::DragHandle, (900.0, 710.0), (20.0, 6.0));
        assert!(!controller.handle_pointer(&down));

        controller.bind_events();
        assert!(controller.handle_pointer(&down));
        assert_eq!(controller.state(), GestureState::Dragging);

        controller.teardown();
        assert_eq!(controller.state(), GestureState::Idle);
        assert!(!controller.handle_pointer(&PointerEvent::moved(500.0, 710.0)));
        assert_eq!(controller.geometry().width, 200.0);
    }

    #[test]
    fn test_handle_drag_grows_sheet() {
        let mut controller = controller();
        press_handle(&mut controller, 900.0, 710.0);
        assert!(controller.handle_pointer(&PointerEvent::moved(550.0, 610.0)));

        let geometry = controller.geometry();
        assert_eq!(geometry.width, 550.0);
        assert_eq!(geometry.height, 200.0);
        assert_eq!(geometry.edge, Edge::FloatingCorner);

        let style = controller.surface().style.unwrap();
        assert_eq!(style.width, Length::Px(550.0));
        assert_eq!(style.anchor, HorizontalAnchor::Right);
    }

    #[test]
    fn test_pointer_up_ends_gesture_anywhere() {
        let mut controller = controller();
        press_handle(&mut controller, 900.0, 710.0);
        assert!(controller.handle_pointer(&PointerEvent::up(5.0, 5.0)));
        assert_eq!(controller.state(), GestureState::Idle);

        // Motion after release changes nothing
        assert!(!controller.handle_pointer(&PointerEvent::moved(100.0, 100.0)));
        assert_eq!(controller.geometry().width, 200.0);
        // A second release is a no-op
        assert!(!controller.handle_pointer(&PointerEvent::up(5.0, 5.0)));
    }

    #[test]
    fn test_only_one_session_at_a_time() {
        let mut controller = controller();
        press_handle(&mut controller, 900.0, 710.0);
        let resize = PointerEvent::down(PointerTarget::Sheet, (801.0, 701.0), (1.0, 1.0));
        assert!(!controller.handle_pointer(&resize));
        assert_eq!(controller.session().unwrap().mode, GestureMode::Move);
    }

    #[test]
    fn test_sheet_press_outside_grab_zone_is_ignored() {
        let mut controller = controller();
        let press = PointerEvent::down(PointerTarget::Sheet, (900.0, 760.0), (100.0, 60.0));
        assert!(!controller.handle_pointer(&press));
        assert_eq!(controller.state(), GestureState::Idle);
    }

    #[test]
    fn test_scrim_and_outside_presses_are_ignored() {
        let mut controller = controller();
        assert!(!controller.handle_pointer(&PointerEvent::down(PointerTarget::Scrim, (10.0, 10.0), (0.0, 0.0))));
        assert!(!controller.handle_pointer(&PointerEvent::down(PointerTarget::Outside, (10.0, 10.0), (0.0, 0.0))));
        assert_eq!(controller.state(), GestureState::Idle);
    }

    #[test]
    fn test_hidden_sheet_ignores_presses() {
        let mut controller = controller();
        controller.close();
        assert!(!controller.handle_pointer(&PointerEvent::down(PointerTarget::DragHandle, (900.0, 710.0), (20.0, 6.0))));
    }

    #[test]
    fn test_corner_resize_from_top_edge() {
        let mut controller = controller();
        let press = PointerEvent::down(PointerTarget::Sheet, (900.0, 700.0), (100.0, 4.0));
        assert!(controller.handle_pointer(&press));
        assert_eq!(controller.state(), GestureState::Resizing);

        controller.handle_pointer(&PointerEvent::moved(900.0, 400.0));
        assert_eq!(controller.geometry().height, 400.0);
        assert_eq!(controller.geometry().width, 200.0);
    }

    #[test]
    fn test_snap_when_right_gap_within_threshold() {
        let mut controller = controller();
        press_handle(&mut controller, 900.0, 710.0);
        // start 200 + delta 792 = 992 -> gap 8
        controller.handle_pointer(&PointerEvent::moved(108.0, 710.0));

        let geometry = controller.geometry();
        assert_eq!(geometry.edge, Edge::SnappedLeft);
        assert_eq!(geometry.width, 1000.0);
        assert_eq!(geometry.height, 100.0);

        let style = controller.surface().style.unwrap();
        assert_eq!(style.width, Length::Percent(100.0));
        assert_eq!(style.anchor, HorizontalAnchor::Left);
    }

    #[test]
    fn test_snap_keeps_current_height() {
        let mut controller = controller();
        press_handle(&mut controller, 900.0, 710.0);
        controller.handle_pointer(&PointerEvent::moved(800.0, 510.0));
        assert_eq!(controller.geometry().height, 300.0);

        // Jump far left and further up in one move: the snap ignores the new height
        controller.handle_pointer(&PointerEvent::moved(-500.0, 300.0));
        assert_eq!(controller.geometry().edge, Edge::SnappedLeft);
        assert_eq!(controller.geometry().height, 300.0);
    }

    #[test]
    fn test_drag_back_out_of_snap_floats_again() {
        let mut controller = controller();
        press_handle(&mut controller, 900.0, 710.0);
        controller.handle_pointer(&PointerEvent::moved(0.0, 710.0));
        assert!(controller.geometry().is_snapped());

        controller.handle_pointer(&PointerEvent::moved(500.0, 710.0));
        let geometry = controller.geometry();
        assert_eq!(geometry.edge, Edge::FloatingCorner);
        assert_eq!(geometry.width, 600.0);
        assert_eq!(controller.surface().style.unwrap().anchor, HorizontalAnchor::Right);
    }

    #[test]
    fn test_bottom_sheet_height_resize() {
        let mut controller = controller();
        controller.snap_to_left_edge();

        let press = PointerEvent::down(PointerTarget::Sheet, (500.0, 700.0), (500.0, 3.0));
        assert!(controller.handle_pointer(&press));
        assert_eq!(controller.state(), GestureState::ResizingBottomSheetHeight);

        controller.handle_pointer(&PointerEvent::moved(100.0, 400.0));
        let geometry = controller.geometry();
        assert_eq!(geometry.height, 400.0);
        assert_eq!(geometry.width, 1000.0);
        assert_eq!(geometry.edge, Edge::SnappedLeft);

        // Height clamps to the viewport
        controller.handle_pointer(&PointerEvent::moved(100.0, -5000.0));
        assert_eq!(controller.geometry().height, 800.0);

        // Sub-mode is cleared on release
        controller.handle_pointer(&PointerEvent::up(100.0, 0.0));
        assert_eq!(controller.state(), GestureState::Idle);
        assert!(controller.session().is_none());
    }

    #[test]
    fn test_left_edge_press_on_bottom_sheet_returns_to_corner() {
        let mut controller = controller();
        controller.snap_to_left_edge();

        let press = PointerEvent::down(PointerTarget::Sheet, (5.0, 750.0), (5.0, 50.0));
        assert!(controller.handle_pointer(&press));
        assert_eq!(controller.state(), GestureState::Resizing);

        let geometry = controller.geometry();
        assert_eq!(geometry.edge, Edge::FloatingCorner);
        assert_eq!(geometry.width, 995.0);
        assert_eq!(geometry.height, 100.0);
        assert_eq!(controller.session().unwrap().start_width, 995.0);

        // Continuing the gesture to the right shrinks from the new width
        controller.handle_pointer(&PointerEvent::moved(305.0, 750.0));
        assert_eq!(controller.geometry().width, 695.0);
        assert_eq!(controller.geometry().edge, Edge::FloatingCorner);
    }

    #[test]
    fn test_size_bounds_resize_bound_never_snaps() {
        let config = SheetConfig {
            resize_bound: crate::geometry::ResizeBound::SizeBounds,
            ..SheetConfig::default()
        };
        let mut controller = controller_with(config);
        press_handle(&mut controller, 900.0, 710.0);
        controller.handle_pointer(&PointerEvent::moved(-3000.0, -3000.0));

        let geometry = controller.geometry();
        assert_eq!(geometry.width, 900.0);
        assert_eq!(geometry.height, 640.0);
        assert_eq!(geometry.edge, Edge::FloatingCorner);
    }

    #[test]
    fn test_bottom_sheet_height_clamps_to_max_height_with_size_bounds() {
        let config = SheetConfig {
            resize_bound: crate::geometry::ResizeBound::SizeBounds,
            max_width_ratio: 1.0,
            ..SheetConfig::default()
        };
        let mut controller = controller_with(config);
        press_handle(&mut controller, 900.0, 710.0);
        // max width equals the viewport, so the clamped drag lands on the snap
        controller.handle_pointer(&PointerEvent::moved(-3000.0, 710.0));
        controller.handle_pointer(&PointerEvent::up(-3000.0, 710.0));
        assert_eq!(controller.geometry().edge, Edge::SnappedLeft);

        let press = PointerEvent::down(PointerTarget::Sheet, (500.0, 700.0), (500.0, 3.0));
        assert!(controller.handle_pointer(&press));
        assert_eq!(controller.state(), GestureState::ResizingBottomSheetHeight);

        controller.handle_pointer(&PointerEvent::moved(500.0, -5000.0));
        let geometry = controller.geometry();
        assert_eq!(geometry.height, 640.0);
        assert_eq!(geometry.width, 1000.0);
        assert_eq!(geometry.edge, Edge::SnappedLeft);
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut controller = controller();
        press_handle(&mut controller, 900.0, 710.0);
        controller.handle_pointer(&PointerEvent::moved(0.0, 300.0));
        controller.handle_pointer(&PointerEvent::up(0.0, 300.0));

        controller.close();
        let once = (controller.geometry(), controller.is_visible(), controller.surface().style, controller.surface().scrim);
        controller.close();
        let twice = (controller.geometry(), controller.is_visible(), controller.surface().style, controller.surface().scrim);
        assert_eq!(once, twice);
        assert!(!controller.is_visible());
        assert_eq!(controller.surface().visible, Some(false));
        assert_eq!(controller.geometry(), PanelGeometry { width: 200.0, height: 100.0, edge: Edge::FloatingCorner });
    }

    #[test]
    fn test_open_resets_geometry_without_touching_gesture() {
        let mut controller = controller();
        press_handle(&mut controller, 900.0, 710.0);
        controller.handle_pointer(&PointerEvent::moved(0.0, 710.0));
        assert!(controller.geometry().is_snapped());

        controller.open();
        assert_eq!(controller.geometry(), PanelGeometry { width: 200.0, height: 100.0, edge: Edge::FloatingCorner });
        assert_eq!(controller.state(), GestureState::Dragging);
        assert_eq!(controller.surface().visible, Some(true));
    }

    #[test]
    fn test_scrim_is_quantized_on_surface() {
        let mut controller = controller();
        press_handle(&mut controller, 900.0, 710.0);
        // width 200 + 137 = 337 -> widthRatio 137/700, averaged
        controller.handle_pointer(&PointerEvent::moved(763.0, 710.0));
        let pushed = controller.surface().scrim.unwrap();
        let exact = controller.scrim();
        assert_eq!(pushed.opacity, (exact.opacity * 100.0).round() / 100.0);
        assert!(pushed.intercepts_pointer);
    }

    #[test]
    fn test_opacity_model_switch_refreshes_scrim() {
        let mut controller = controller();
        press_handle(&mut controller, 900.0, 710.0);
        controller.handle_pointer(&PointerEvent::moved(550.0, 710.0));

        controller.set_opacity_model(OpacityModel::MaxRatio);
        let scrim = controller.surface().scrim.unwrap();
        assert!((scrim.opacity - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_non_finite_events_are_ignored() {
        let mut controller = controller();
        press_handle(&mut controller, 900.0, 710.0);
        assert!(!controller.handle_pointer(&PointerEvent::moved(f32::NAN, 10.0)));
        assert_eq!(controller.geometry().width, 200.0);
    }

    #[test]
    fn test_degenerate_viewport_keeps_opacity_finite() {
        let mut controller = PanelController::new(RecordingSurface::default(), Viewport::new(120.0, 60.0), SheetConfig::default());
        controller.bind_events();
        controller.open();
        press_handle(&mut controller, 100.0, 50.0);
        controller.handle_pointer(&PointerEvent::moved(-400.0, -400.0));

        let scrim = controller.surface().scrim.unwrap();
        assert!(scrim.opacity.is_finite());
        assert!(scrim.opacity >= 0.0 && scrim.opacity <= 0.8);
    }

    #[test]
    fn test_narrow_viewport_keeps_min_width_without_snapping() {
        let mut controller = PanelController::new(RecordingSurface::default(), Viewport::new(150.0, 90.0), SheetConfig::default());
        controller.bind_events();
        controller.open();
        press_handle(&mut controller, 100.0, 50.0);

        controller.handle_pointer(&PointerEvent::moved(140.0, 50.0));
        let geometry = controller.geometry();
        assert_eq!(geometry.width, 200.0);
        assert_eq!(geometry.edge, Edge::FloatingCorner);

        controller.handle_pointer(&PointerEvent::moved(-400.0, 50.0));
        assert_eq!(controller.geometry().width, 200.0);
        assert_eq!(controller.geometry().edge, Edge::FloatingCorner);

        controller.snap_to_left_edge();
        assert_eq!(controller.geometry().width, 200.0);
        assert!(controller.geometry().is_snapped());
    }
}
