//! Host events and the subscription table that routes them.
//!
//! Each [`PageEvent`] has an [`EventKind`]. The page keeps an ordered list of
//! `(kind, handler)` subscriptions; dispatch runs every handler subscribed to
//! the event's kind, in subscription order, each to completion.

use crate::contact::ContactSubmission;
use crate::reveal::IntersectionEntry;
use crate::tracker::ScrollSnapshot;

/// A message from the host, carrying whatever layout or DOM facts the
/// handlers need so they never query the DOM themselves.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    Scroll(ScrollSnapshot),
    Resize(ScrollSnapshot),
    /// A `[data-theme-toggle]` button was clicked.
    ThemeToggle,
    /// The mobile menu trigger was clicked.
    MenuToggle,
    /// Document key press, carrying `KeyboardEvent.key`.
    KeyDown(String),
    /// Any document click, with where it landed relative to the menu.
    DocumentClick { inside_menu: bool, on_button: bool },
    /// A `[data-scroll-link]` was clicked.
    ScrollLinkClick { href: Option<String>, target_found: bool },
    /// Observer callback batch.
    Intersections(Vec<IntersectionEntry>),
    /// The contact form was submitted.
    Submit(ContactSubmission),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Scroll,
    Resize,
    ThemeToggle,
    MenuToggle,
    KeyDown,
    DocumentClick,
    ScrollLinkClick,
    Intersections,
    Submit,
}

impl PageEvent {
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Scroll(_) => EventKind::Scroll,
            Self::Resize(_) => EventKind::Resize,
            Self::ThemeToggle => EventKind::ThemeToggle,
            Self::MenuToggle => EventKind::MenuToggle,
            Self::KeyDown(_) => EventKind::KeyDown,
            Self::DocumentClick { .. } => EventKind::DocumentClick,
            Self::ScrollLinkClick { .. } => EventKind::ScrollLinkClick,
            Self::Intersections(_) => EventKind::Intersections,
            Self::Submit(_) => EventKind::Submit,
        }
    }
}

/// Components that can be subscribed to events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handler {
    Tracker,
    Theme,
    Menu,
    AnchorScroll,
    Reveal,
    Contact,
}

/// Ordered `(kind, handler)` pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subscriptions {
    entries: Vec<(EventKind, Handler)>,
}

impl Default for Subscriptions {
    fn default() -> Self {
        let mut subs = Self::empty();
        subs.subscribe(EventKind::Scroll, Handler::Tracker);
        subs.subscribe(EventKind::Resize, Handler::Tracker);
        subs.subscribe(EventKind::ThemeToggle, Handler::Theme);
        subs.subscribe(EventKind::MenuToggle, Handler::Menu);
        subs.subscribe(EventKind::KeyDown, Handler::Menu);
        subs.subscribe(EventKind::DocumentClick, Handler::Menu);
        subs.subscribe(EventKind::ScrollLinkClick, Handler::AnchorScroll);
        subs.subscribe(EventKind::Intersections, Handler::Reveal);
        subs.subscribe(EventKind::Submit, Handler::Contact);
        subs
    }
}

impl Subscriptions {
    #[must_use]
    pub fn empty() -> Self {
        Self { entries: Vec::new() }
    }

    /// Append `handler` to the list for `kind`. Duplicate pairs are ignored.
    pub fn subscribe(&mut self, kind: EventKind, handler: Handler) {
        if !self.entries.contains(&(kind, handler)) {
            self.entries.push((kind, handler));
        }
    }

    /// Handlers for `kind`, in subscription order.
    pub fn handlers(&self, kind: EventKind) -> impl Iterator<Item = Handler> + '_ {
        self.entries.iter().filter(move |(k, _)| *k == kind).map(|(_, h)| *h)
    }
}
