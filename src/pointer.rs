//! Pointer input model.
//!
//! Hosts translate their native mouse/pointer notifications into
//! `PointerEvent`s; the controller tracks one `PointerSession` per gesture.

/// Phase of a pointer notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Down,
    Move,
    Up,
}

/// Element the pointer event was delivered to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// The grab handle inside the sheet.
    DragHandle,
    /// The sheet body (anything inside the sheet except the handle).
    Sheet,
    /// The dimmed backdrop.
    Scrim,
    /// Anything else on the page.
    Outside,
}

/// A single pointer notification.
///
/// `client_*` are page coordinates; `offset_*` are relative to the target
/// element's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub client_x: f32,
    pub client_y: f32,
    pub target: PointerTarget,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl PointerEvent {
    /// A pointer press on `target` at the given client position and element-local offset.
    pub fn down(target: PointerTarget, client: (f32, f32), offset: (f32, f32)) -> Self {
        Self {
            kind: PointerKind::Down,
            client_x: client.0,
            client_y: client.1,
            target,
            offset_x: offset.0,
            offset_y: offset.1,
        }
    }

    /// A pointer motion to the given client position. Target is irrelevant for moves.
    pub fn moved(client_x: f32, client_y: f32) -> Self {
        Self {
            kind: PointerKind::Move,
            client_x,
            client_y,
            target: PointerTarget::Outside,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }

    /// A pointer release at the given client position.
    pub fn up(client_x: f32, client_y: f32) -> Self {
        Self {
            kind: PointerKind::Up,
            ..Self::moved(client_x, client_y)
        }
    }

    /// Returns true if every coordinate is a finite number.
    pub fn is_finite(&self) -> bool {
        self.client_x.is_finite()
            && self.client_y.is_finite()
            && self.offset_x.is_finite()
            && self.offset_y.is_finite()
    }
}

/// What an active gesture is doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureMode {
    /// Dragging via the handle.
    Move,
    /// Corner resize via the top/left grab zone.
    Resize,
    /// Height-only resize of the snapped bottom sheet.
    ResizeBottomSheetHeight,
}

/// Observable state of the gesture state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging,
    Resizing,
    ResizingBottomSheetHeight,
}

impl GestureState {
    pub fn label(self) -> &'static str {
        match self {
            GestureState::Idle => "Idle",
            GestureState::Dragging => "Dragging",
            GestureState::Resizing => "Resizing",
            GestureState::ResizingBottomSheetHeight => "Resizing bottom sheet",
        }
    }
}

/// Transient state captured when a gesture begins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSession {
    pub mode: GestureMode,
    /// Pointer position at gesture start.
    pub anchor_x: f32,
    pub anchor_y: f32,
    /// Sheet size at gesture start.
    pub start_width: f32,
    pub start_height: f32,
}

impl PointerSession {
    /// Starts a session anchored at the event's client position.
    pub fn begin(mode: GestureMode, event: &PointerEvent, width: f32, height: f32) -> Self {
        Self {
            mode,
            anchor_x: event.client_x,
            anchor_y: event.client_y,
            start_width: width,
            start_height: height,
        }
    }

    /// Pointer travel since the anchor, positive when moving left/up.
    pub fn deltas(&self, client_x: f32, client_y: f32) -> (f32, f32) {
        (self.anchor_x - client_x, self.anchor_y - client_y)
    }

    pub fn state(&self) -> GestureState {
        match self.mode {
            GestureMode::Move => GestureState::Dragging,
            GestureMode::Resize => GestureState::Resizing,
            GestureMode::ResizeBottomSheetHeight => GestureState::ResizingBottomSheetHeight,
        }
    }
}
