//! Light/dark theme toggle.
//!
//! The current theme is read from the root element's `dark` class at
//! startup. Switching toggles that class, persists the choice under the
//! configured storage key, and refreshes every `[data-theme-toggle]` button.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort. The [`Effect::Persist`] is ordered after the
//! class toggle and before the button refresh, and a failed write is only
//! logged, so the visual state always follows the click.

use crate::consts::{CLASS_DARK, CLASS_HIDDEN};
use crate::effect::{Effect, Target};

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Value written to the preference store.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Text announcing what a click will do.
    #[must_use]
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Activate dark mode",
            Self::Dark => "Activate light mode",
        }
    }
}

/// Which optional children a toggle button has.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThemeButtonParts {
    pub light_icon: bool,
    pub dark_icon: bool,
    pub label: bool,
}

#[derive(Debug, Clone)]
pub struct ThemeToggle {
    theme: Theme,
    buttons: Vec<ThemeButtonParts>,
    storage_key: String,
}

impl ThemeToggle {
    #[must_use]
    pub fn new(theme: Theme, buttons: Vec<ThemeButtonParts>, storage_key: impl Into<String>) -> Self {
        Self { theme, buttons, storage_key: storage_key.into() }
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flip the theme.
    pub fn toggle(&mut self) -> Vec<Effect> {
        self.set(self.theme.toggled())
    }

    /// Apply `theme`, persist it, and refresh the buttons.
    pub fn set(&mut self, theme: Theme) -> Vec<Effect> {
        self.theme = theme;
        let mut effects = vec![
            Effect::class(Target::Root, CLASS_DARK, theme.is_dark()),
            Effect::Persist { key: self.storage_key.clone(), value: theme.as_str().to_owned() },
        ];
        effects.extend(self.button_effects());
        effects
    }

    /// Bring every button in line with the current theme without persisting.
    #[must_use]
    pub fn button_effects(&self) -> Vec<Effect> {
        let dark = self.theme.is_dark();
        let mut effects = Vec::new();
        for (i, parts) in self.buttons.iter().enumerate() {
            effects.push(Effect::attr(Target::ThemeButton(i), "aria-pressed", if dark { "true" } else { "false" }));
            if parts.light_icon {
                effects.push(Effect::class(Target::ThemeLightIcon(i), CLASS_HIDDEN, dark));
            }
            if parts.dark_icon {
                effects.push(Effect::class(Target::ThemeDarkIcon(i), CLASS_HIDDEN, !dark));
            }
            if parts.label {
                effects.push(Effect::SetText { target: Target::ThemeLabel(i), text: self.theme.toggle_label().to_owned() });
            }
        }
        effects
    }
}
