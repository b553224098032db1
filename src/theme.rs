//! Theme support for the corner sheet.
//!
//! This module provides colour palettes for the page, the sheet, and the scrim,
//! with built-in themes (Light, Dark, Dracula, One Dark Pro) behind a small
//! theme manager.
//!
//! # Examples
//!
//! ```
//! use corner_sheet::theme::ThemeManager;
//!
//! let manager = ThemeManager::new();
//! let dracula = manager.get_theme("Dracula").unwrap();
//! println!("Dracula sheet: {:?}", dracula.colors.sheet);
//! ```

use egui::Color32;
use std::collections::HashMap;

/// Name of the theme used when a requested theme does not exist.
pub const DEFAULT_THEME: &str = "Dark";

/// Colour palette for one theme
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Page
    pub background: Color32,
    pub panel_background: Color32,
    pub text: Color32,
    pub text_dim: Color32,

    // Widgets
    pub selection: Color32,
    pub hover: Color32,
    pub accent: Color32,

    // Corner sheet
    /// Base colour of the scrim; alpha comes from the opacity model
    pub scrim: Color32,
    pub sheet: Color32,
    pub sheet_border: Color32,
    pub handle: Color32,
    /// Highlight for the resize grab zone while hovered or active
    pub grab_zone: Color32,
}

/// A theme definition with metadata and colour palette
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub description: String,
    pub colors: ThemeColors,
}

/// Lookup table of built-in themes
pub struct ThemeManager {
    themes: HashMap<String, Theme>,
    fallback: Theme,
}

impl ThemeManager {
    /// Creates a ThemeManager with all built-in themes
    pub fn new() -> Self {
        let mut themes = HashMap::new();

        for theme in [light_theme(), dark_theme(), dracula_theme(), one_dark_pro_theme()] {
            themes.insert(theme.name.clone(), theme);
        }

        Self {
            themes,
            fallback: dark_theme(),
        }
    }

    /// Retrieves a theme by name
    pub fn get_theme(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Retrieves a theme by name, falling back to the dark theme
    pub fn resolve(&self, name: &str) -> &Theme {
        self.themes.get(name).unwrap_or(&self.fallback)
    }

    /// Returns all theme names, sorted
    pub fn list_themes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// Applies a theme's colours to egui visuals
    pub fn apply_theme(&self, theme: &Theme, visuals: &mut egui::Visuals) {
        let colors = &theme.colors;

        visuals.panel_fill = colors.panel_background;
        visuals.extreme_bg_color = colors.background;
        visuals.faint_bg_color = colors.hover;
        visuals.override_text_color = Some(colors.text);

        visuals.selection.bg_fill = colors.selection;
        visuals.selection.stroke.color = colors.accent;

        visuals.widgets.noninteractive.bg_fill = colors.panel_background;
        visuals.widgets.inactive.bg_fill = colors.hover;
        visuals.widgets.hovered.bg_fill = colors.hover;
        visuals.widgets.active.bg_fill = colors.selection;
        visuals.hyperlink_color = colors.accent;
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

fn light_theme() -> Theme {
    Theme {
        name: "Light".to_string(),
        description: "Light page with a white sheet".to_string(),
        colors: ThemeColors {
            background: Color32::from_rgb(248, 248, 248),
            panel_background: Color32::from_rgb(236, 236, 236),
            text: Color32::from_rgb(0, 0, 0),
            text_dim: Color32::from_rgb(120, 120, 120),

            selection: Color32::from_rgb(180, 200, 255),
            hover: Color32::from_rgb(220, 220, 220),
            accent: Color32::from_rgb(40, 100, 200),

            scrim: Color32::from_rgb(0, 0, 0),
            sheet: Color32::from_rgb(255, 255, 255),
            sheet_border: Color32::from_rgb(160, 160, 160),
            handle: Color32::from_rgb(150, 150, 150),
            grab_zone: Color32::from_rgb(40, 100, 200),
        },
    }
}

fn dark_theme() -> Theme {
    Theme {
        name: "Dark".to_string(),
        description: "Dark page with a raised grey sheet".to_string(),
        colors: ThemeColors {
            background: Color32::from_rgb(27, 27, 27),
            panel_background: Color32::from_rgb(39, 39, 39),
            text: Color32::from_rgb(255, 255, 255),
            text_dim: Color32::from_rgb(160, 160, 160),

            selection: Color32::from_rgb(50, 80, 120),
            hover: Color32::from_rgb(70, 70, 70),
            accent: Color32::from_rgb(52, 152, 219),

            scrim: Color32::from_rgb(0, 0, 0),
            sheet: Color32::from_rgb(48, 48, 48),
            sheet_border: Color32::from_rgb(100, 100, 100),
            handle: Color32::from_rgb(140, 140, 140),
            grab_zone: Color32::from_rgb(52, 152, 219),
        },
    }
}

/// Official colors from: https://draculatheme.com/spec
fn dracula_theme() -> Theme {
    Theme {
        name: "Dracula".to_string(),
        description: "Official Dracula theme color palette".to_string(),
        colors: ThemeColors {
            background: hex_to_color32("#21222c"),
            panel_background: hex_to_color32("#282a36"),
            text: hex_to_color32("#f8f8f2"),
            text_dim: hex_to_color32("#6272a4"),

            selection: hex_to_color32("#44475a"),
            hover: hex_to_color32("#44475a"),
            accent: hex_to_color32("#bd93f9"),

            scrim: hex_to_color32("#191a21"),
            sheet: hex_to_color32("#282a36"),
            sheet_border: hex_to_color32("#6272a4"),
            handle: hex_to_color32("#6272a4"),
            grab_zone: hex_to_color32("#ff79c6"),
        },
    }
}

/// Official colors from: https://github.com/Binaryify/OneDark-Pro
fn one_dark_pro_theme() -> Theme {
    Theme {
        name: "One Dark Pro".to_string(),
        description: "VSCode One Dark Pro color palette".to_string(),
        colors: ThemeColors {
            background: hex_to_color32("#21252b"),
            panel_background: hex_to_color32("#282c34"),
            text: hex_to_color32("#abb2bf"),
            text_dim: hex_to_color32("#5c6370"),

            selection: hex_to_color32("#4b5263"),
            hover: hex_to_color32("#4b5263"),
            accent: hex_to_color32("#61afef"),

            scrim: hex_to_color32("#000000"),
            sheet: hex_to_color32("#282c34"),
            sheet_border: hex_to_color32("#5c6370"),
            handle: hex_to_color32("#5c6370"),
            grab_zone: hex_to_color32("#61afef"),
        },
    }
}

/// Converts a hex color string (like "#282a36") to Color32
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0)
    }
}

/// Adjusts the brightness of a color by a factor (1.0 = no change, >1.0 = brighter, <1.0 = darker)
pub fn adjust_brightness(color: Color32, factor: f32) -> Color32 {
    let r = (color.r() as f32 * factor).min(255.0) as u8;
    let g = (color.g() as f32 * factor).min(255.0) as u8;
    let b = (color.b() as f32 * factor).min(255.0) as u8;
    Color32::from_rgb(r, g, b)
}

/// Applies a `[0, 1]` opacity to an opaque colour
pub fn with_opacity(color: Color32, opacity: f32) -> Color32 {
    let alpha = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}
