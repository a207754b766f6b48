//! Mobile navigation menu.
//!
//! Open state is mirrored onto the trigger's `aria-expanded`/`aria-label`
//! and the open/close icons. Escape and clicks outside the menu close it.
//! When either the menu panel or its trigger is absent every operation is a
//! no-op.

use crate::consts::CLASS_HIDDEN;
use crate::effect::{Effect, Target};

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

/// Optional icons inside the trigger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuParts {
    pub open_icon: bool,
    pub close_icon: bool,
}

#[derive(Debug, Clone, Default)]
pub struct MobileMenu {
    /// `None` when the panel or trigger is missing from the page.
    parts: Option<MenuParts>,
    open: bool,
}

impl MobileMenu {
    #[must_use]
    pub fn new(parts: Option<MenuParts>) -> Self {
        Self { parts, open: false }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Force the menu into `open` and mirror the state.
    pub fn set_open(&mut self, open: bool) -> Vec<Effect> {
        let Some(parts) = self.parts else {
            return Vec::new();
        };
        self.open = open;

        let mut effects = vec![
            Effect::class(Target::MobileMenu, CLASS_HIDDEN, !open),
            Effect::attr(Target::MenuButton, "aria-expanded", if open { "true" } else { "false" }),
            Effect::attr(Target::MenuButton, "aria-label", if open { "Close menu" } else { "Open menu" }),
        ];
        if parts.open_icon {
            effects.push(Effect::class(Target::MenuOpenIcon, CLASS_HIDDEN, open));
        }
        if parts.close_icon {
            effects.push(Effect::class(Target::MenuCloseIcon, CLASS_HIDDEN, !open));
        }
        effects
    }

    /// Trigger clicked.
    pub fn toggle(&mut self) -> Vec<Effect> {
        self.set_open(!self.open)
    }

    /// Document-level key press; only `Escape` matters.
    pub fn on_key(&mut self, key: &str) -> Vec<Effect> {
        if key == "Escape" { self.set_open(false) } else { Vec::new() }
    }

    /// Document-level click. Closes an open menu when the click landed
    /// outside both the panel and the trigger.
    pub fn on_document_click(&mut self, inside_menu: bool, on_button: bool) -> Vec<Effect> {
        if self.parts.is_none() || !self.open || inside_menu || on_button {
            return Vec::new();
        }
        self.set_open(false)
    }
}
