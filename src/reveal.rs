//! Viewport reveal engine.
//!
//! Flips each `[data-reveal]` element from pending to revealed exactly once.
//! The strategy is picked a single time at startup from the host's
//! capabilities and never re-checked:
//!
//! | Capabilities | Strategy | Startup effects |
//! |--------------|----------|-----------------|
//! | reduced motion | [`RevealStrategy::ReducedMotion`] | reveal all |
//! | observer available | [`RevealStrategy::Observe`] | observe all |
//! | neither | [`RevealStrategy::Unsupported`] | reveal all |
//!
//! Only the observing strategy can leave items pending, and only until an
//! intersecting callback arrives for them. Content is never stuck hidden
//! because a capability is missing.

use crate::config::PageConfig;
use crate::consts::CLASS_VISIBLE;
use crate::effect::{Effect, Target};

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// What the host environment offers, detected once at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    /// `prefers-reduced-motion: reduce` matched.
    pub reduced_motion: bool,
    /// An intersection observer constructor exists.
    pub intersection_observer: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealStrategy {
    /// Reveal everything now; the user asked for less motion.
    ReducedMotion,
    /// One shared observer reveals items as they intersect.
    Observe,
    /// No observer primitive; reveal everything now.
    Unsupported,
}

impl RevealStrategy {
    #[must_use]
    pub fn select(caps: Capabilities) -> Self {
        if caps.reduced_motion {
            Self::ReducedMotion
        } else if caps.intersection_observer {
            Self::Observe
        } else {
            Self::Unsupported
        }
    }
}

/// Options for the shared observer.
#[derive(Debug, Clone, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: String,
}

impl ObserverOptions {
    #[must_use]
    pub fn from_config(config: &PageConfig) -> Self {
        Self { threshold: config.reveal_threshold, root_margin: config.reveal_root_margin() }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Pending,
    Revealed,
}

/// One observer callback entry, already mapped to a reveal item index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntersectionEntry {
    pub item: usize,
    pub is_intersecting: bool,
}

#[derive(Debug, Clone)]
pub struct RevealEngine {
    strategy: RevealStrategy,
    options: ObserverOptions,
    items: Vec<RevealState>,
    started: bool,
}

impl RevealEngine {
    #[must_use]
    pub fn new(config: &PageConfig, caps: Capabilities, item_count: usize) -> Self {
        Self {
            strategy: RevealStrategy::select(caps),
            options: ObserverOptions::from_config(config),
            items: vec![RevealState::Pending; item_count],
            started: false,
        }
    }

    #[must_use]
    pub fn strategy(&self) -> RevealStrategy {
        self.strategy
    }

    #[must_use]
    pub fn options(&self) -> &ObserverOptions {
        &self.options
    }

    #[must_use]
    pub fn state(&self, item: usize) -> Option<RevealState> {
        self.items.get(item).copied()
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.items.iter().filter(|s| **s == RevealState::Pending).count()
    }

    /// Whether the host needs to construct an observer at all.
    #[must_use]
    pub fn needs_observer(&self) -> bool {
        self.strategy == RevealStrategy::Observe && !self.items.is_empty()
    }

    /// Run the startup policy. Subsequent calls do nothing.
    pub fn start(&mut self) -> Vec<Effect> {
        if self.started {
            return Vec::new();
        }
        self.started = true;

        match self.strategy {
            RevealStrategy::Observe => (0..self.items.len()).map(Effect::Observe).collect(),
            RevealStrategy::ReducedMotion | RevealStrategy::Unsupported => {
                log::debug!("revealing {} items immediately ({:?})", self.items.len(), self.strategy);
                (0..self.items.len()).filter_map(|i| self.reveal(i)).collect()
            }
        }
    }

    /// Fall back to revealing everything when the host could not build its
    /// observer. Only the observing strategy changes. Items still pending are
    /// revealed now if startup already ran, otherwise by [`Self::start`].
    pub fn degrade(&mut self) -> Vec<Effect> {
        if self.strategy != RevealStrategy::Observe {
            return Vec::new();
        }
        log::warn!("intersection observer unavailable; revealing all items");
        self.strategy = RevealStrategy::Unsupported;
        if !self.started {
            return Vec::new();
        }
        (0..self.items.len()).filter_map(|i| self.reveal(i)).collect()
    }

    /// Handle one observer callback batch.
    ///
    /// Each intersecting, still-pending item is revealed and unobserved.
    /// Entries for revealed items and non-intersecting entries are ignored.
    pub fn on_intersections(&mut self, entries: &[IntersectionEntry]) -> Vec<Effect> {
        let mut effects = Vec::new();
        for entry in entries.iter().filter(|e| e.is_intersecting) {
            if let Some(effect) = self.reveal(entry.item) {
                effects.push(effect);
                effects.push(Effect::Unobserve(entry.item));
            }
        }
        effects
    }

    fn reveal(&mut self, item: usize) -> Option<Effect> {
        let state = self.items.get_mut(item)?;
        if *state == RevealState::Revealed {
            return None;
        }
        *state = RevealState::Revealed;
        Some(Effect::class(Target::RevealItem(item), CLASS_VISIBLE, true))
    }
}
