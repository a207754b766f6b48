//! Navigation link highlighter.
//!
//! Pure projection from the current section id to the visual and ARIA state
//! of every `[data-nav-link]`. Calling it twice with the same id yields the
//! same states and the same effects.

use crate::consts::CLASS_ACTIVE_LINK;
use crate::effect::{Effect, Target};

#[cfg(test)]
#[path = "highlight_test.rs"]
mod highlight_test;

/// Resolved state of one link for a given section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkState {
    pub active: bool,
    /// Value of `aria-current`, absent when inactive.
    pub aria_current: Option<&'static str>,
}

/// The fixed set of navigation links, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavLinks {
    /// Raw `href` per link; `None` when the attribute is missing.
    hrefs: Vec<Option<String>>,
}

impl NavLinks {
    #[must_use]
    pub fn new(hrefs: Vec<Option<String>>) -> Self {
        Self { hrefs }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.hrefs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hrefs.is_empty()
    }

    /// Link states for `section_id`. A link is active only when its `href`
    /// is exactly `#` followed by the id.
    #[must_use]
    pub fn states(&self, section_id: &str) -> Vec<LinkState> {
        self.hrefs
            .iter()
            .map(|href| {
                let active = href
                    .as_deref()
                    .and_then(|h| h.strip_prefix('#'))
                    .is_some_and(|fragment| fragment == section_id);
                LinkState { active, aria_current: active.then_some("page") }
            })
            .collect()
    }

    /// Effects that bring every link in line with `section_id`.
    #[must_use]
    pub fn highlight(&self, section_id: &str) -> Vec<Effect> {
        let mut effects = Vec::with_capacity(self.hrefs.len() * 2);
        for (i, state) in self.states(section_id).into_iter().enumerate() {
            let target = Target::NavLink(i);
            effects.push(Effect::class(target, CLASS_ACTIVE_LINK, state.active));
            effects.push(match state.aria_current {
                Some(value) => Effect::attr(target, "aria-current", value),
                None => Effect::RemoveAttribute { target, name: "aria-current" },
            });
        }
        effects
    }
}
