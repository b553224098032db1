//! Host-facing traits for the corner sheet.
//!
//! The controller never touches a rendering toolkit directly. Everything it
//! needs to show is pushed through `SheetSurface`, which a host implements
//! over its own element tree (DOM nodes, an egui layer, a test recorder).

use crate::opacity::ScrimState;
use crate::style::SheetStyle;

/// Presentation collaborator owned by a `PanelController`.
///
/// The surface stands in for the container element, its scrim child, and its
/// sheet child. Calls arrive in the order the controller mutates state; a
/// surface only has to remember the latest value of each property.
pub trait SheetSurface {
    /// Shows or hides the whole container (scrim and sheet).
    fn set_container_visible(&mut self, visible: bool);

    /// Applies new positioning properties to the sheet.
    fn apply_sheet_style(&mut self, style: &SheetStyle);

    /// Applies new opacity and input interception to the scrim.
    fn apply_scrim(&mut self, scrim: ScrimState);
}

impl<S: SheetSurface + ?Sized> SheetSurface for Box<S> {
    fn set_container_visible(&mut self, visible: bool) {
        (**self).set_container_visible(visible)
    }

    fn apply_sheet_style(&mut self, style: &SheetStyle) {
        (**self).apply_sheet_style(style)
    }

    fn apply_scrim(&mut self, scrim: ScrimState) {
        (**self).apply_scrim(scrim)
    }
}
