//! Scroll position tracker.
//!
//! On every scroll or resize tick the host reads the live scroll offset and
//! the live top offset of every `[data-section]`, and hands them over as a
//! [`ScrollSnapshot`]. The tracker derives the current section and the sticky
//! nav state from that snapshot alone; nothing about layout is cached between
//! ticks.
//!
//! SELECTION
//! =========
//! `checkpoint = scroll_y + lookahead`. Starting from the first section, every
//! section whose top is at or above the checkpoint replaces the current one,
//! so the last qualifying section in document order wins. Section counts are
//! single digit, so this is a linear scan over fresh offsets.

use crate::config::PageConfig;
use crate::consts::CLASS_NAV_SCROLLED;
use crate::effect::{Effect, Target};
use crate::highlight::NavLinks;

#[cfg(test)]
#[path = "tracker_test.rs"]
mod tracker_test;

/// A content region and its current offset from the document top.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    pub top: f64,
}

impl Section {
    #[must_use]
    pub fn new(id: impl Into<String>, top: f64) -> Self {
        Self { id: id.into(), top }
    }
}

/// Layout as read by the host at the moment of a scroll/resize event.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollSnapshot {
    pub scroll_y: f64,
    /// Sections in document order.
    pub sections: Vec<Section>,
}

impl ScrollSnapshot {
    #[must_use]
    pub fn new(scroll_y: f64, sections: Vec<Section>) -> Self {
        Self { scroll_y, sections }
    }
}

/// The section that should be marked current, or `None` when there are no sections.
#[must_use]
pub fn current_section(sections: &[Section], scroll_y: f64, lookahead: f64) -> Option<&str> {
    let first = sections.first()?;
    let checkpoint = scroll_y + lookahead;
    let mut current = first.id.as_str();
    for section in sections {
        if section.top <= checkpoint {
            current = section.id.as_str();
        }
    }
    Some(current)
}

/// Tracks the active section and the sticky nav state across ticks.
#[derive(Debug, Clone)]
pub struct ScrollTracker {
    lookahead: f64,
    scrolled_threshold: f64,
    has_top_nav: bool,
    active: Option<String>,
}

impl ScrollTracker {
    #[must_use]
    pub fn new(config: &PageConfig, has_top_nav: bool) -> Self {
        Self {
            lookahead: config.lookahead_px,
            scrolled_threshold: config.scrolled_threshold_px,
            has_top_nav,
            active: None,
        }
    }

    /// Section id chosen by the most recent tick.
    #[must_use]
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Whether the sticky nav counts as scrolled at `scroll_y`.
    #[must_use]
    pub fn is_scrolled(&self, scroll_y: f64) -> bool {
        scroll_y > self.scrolled_threshold
    }

    /// Recompute from a fresh snapshot and drive the link highlighter.
    pub fn tick(&mut self, snapshot: &ScrollSnapshot, links: &NavLinks) -> Vec<Effect> {
        let mut effects = Vec::new();
        if self.has_top_nav {
            effects.push(Effect::class(Target::TopNav, CLASS_NAV_SCROLLED, self.is_scrolled(snapshot.scroll_y)));
        }

        let Some(current) = current_section(&snapshot.sections, snapshot.scroll_y, self.lookahead) else {
            return effects;
        };

        if self.active.as_deref() != Some(current) {
            log::debug!("active section: {:?} -> {current}", self.active);
            self.active = Some(current.to_owned());
        }
        effects.extend(links.highlight(current));
        effects
    }
}
