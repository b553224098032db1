pub mod traits;
pub mod geometry;
pub mod opacity;
pub mod style;
pub mod pointer;
pub mod controller;
pub mod config;
pub mod theme;

// Export the controller and its host contract
pub use controller::PanelController;
pub use traits::SheetSurface;

// Export geometry and input types
pub use geometry::{Viewport, SizeBounds, PanelGeometry, Edge, ResizeBound, clamp_dimension};
pub use pointer::{
    PointerEvent, PointerKind, PointerTarget,
    PointerSession, GestureMode, GestureState
};

// Export scrim model and styles
pub use opacity::{OpacityModel, ScrimState, scrim_state, opacity};
pub use style::{SheetStyle, Length, HorizontalAnchor, scrim_css};

// Export configuration
pub use config::SheetConfig;

// Export theme support
pub use theme::{Theme, ThemeColors, ThemeManager, hex_to_color32, adjust_brightness, with_opacity};
