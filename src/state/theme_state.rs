//! Theme and styling state management.
//!
//! This module encapsulates the theme manager and the currently selected theme.

use corner_sheet::{theme::DEFAULT_THEME, Theme, ThemeColors, ThemeManager};

/// State related to visual theme and styling.
pub struct ThemeState {
    /// Theme manager instance
    theme_manager: ThemeManager,
    /// Name of currently selected theme
    current_theme_name: String,
}

impl std::fmt::Debug for ThemeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeState")
            .field("current_theme_name", &self.current_theme_name)
            .finish_non_exhaustive()
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::with_theme(DEFAULT_THEME.to_string())
    }
}

impl ThemeState {
    /// Creates a theme state with a specific theme, falling back to the default for unknown names.
    pub fn with_theme(theme_name: String) -> Self {
        let theme_manager = ThemeManager::new();
        let current_theme_name = if theme_manager.get_theme(&theme_name).is_some() {
            theme_name
        } else {
            DEFAULT_THEME.to_string()
        };

        Self {
            theme_manager,
            current_theme_name,
        }
    }

    // ===== Theme Queries =====

    pub fn theme_manager(&self) -> &ThemeManager {
        &self.theme_manager
    }

    pub fn current_theme_name(&self) -> &str {
        &self.current_theme_name
    }

    pub fn current_theme(&self) -> &Theme {
        self.theme_manager.resolve(&self.current_theme_name)
    }

    pub fn colors(&self) -> &ThemeColors {
        &self.current_theme().colors
    }

    // ===== Theme Mutations =====

    /// Activates a theme by name. Unknown names are rejected and return false.
    pub fn set_theme(&mut self, theme_name: &str) -> bool {
        if self.theme_manager.get_theme(theme_name).is_none() {
            return false;
        }
        self.current_theme_name = theme_name.to_string();
        true
    }
}
