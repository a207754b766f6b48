//! Page context: owns every component and routes host events to them.
//!
//! Built once at startup from a [`PageLayout`] (which optional elements
//! exist) and the detected [`Capabilities`]. Lives for the page session;
//! nothing is torn down explicitly.
//!
//! Separated from the browser binding so the whole behavior layer can be
//! driven and tested without WASM or a DOM.

use crate::anchor::fragment_selector;
use crate::config::PageConfig;
use crate::contact::ContactForm;
use crate::effect::{Effect, Target};
use crate::events::{Handler, PageEvent, Subscriptions};
use crate::highlight::NavLinks;
use crate::menu::{MenuParts, MobileMenu};
use crate::reveal::{Capabilities, RevealEngine};
use crate::theme::{Theme, ThemeButtonParts, ThemeToggle};
use crate::tracker::{ScrollSnapshot, ScrollTracker};

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

/// What the host found in the document at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLayout {
    /// Root element carries the `dark` class.
    pub dark: bool,
    pub has_top_nav: bool,
    pub theme_buttons: Vec<ThemeButtonParts>,
    /// `None` unless both the menu panel and its trigger exist.
    pub menu: Option<MenuParts>,
    /// `href` of each `[data-nav-link]`.
    pub nav_links: Vec<Option<String>>,
    pub reveal_items: usize,
    pub has_form: bool,
    pub has_form_status: bool,
    pub has_current_year: bool,
}

#[derive(Debug, Clone)]
pub struct Page {
    subscriptions: Subscriptions,
    reduced_motion: bool,
    has_current_year: bool,
    links: NavLinks,
    tracker: ScrollTracker,
    reveal: RevealEngine,
    theme: ThemeToggle,
    menu: MobileMenu,
    contact: Option<ContactForm>,
}

impl Page {
    #[must_use]
    pub fn new(config: &PageConfig, layout: PageLayout, caps: Capabilities) -> Self {
        Self {
            subscriptions: Subscriptions::default(),
            reduced_motion: caps.reduced_motion,
            has_current_year: layout.has_current_year,
            links: NavLinks::new(layout.nav_links),
            tracker: ScrollTracker::new(config, layout.has_top_nav),
            reveal: RevealEngine::new(config, caps, layout.reveal_items),
            theme: ThemeToggle::new(Theme::from_dark(layout.dark), layout.theme_buttons, &config.theme_storage_key),
            menu: MobileMenu::new(layout.menu),
            contact: layout.has_form.then(|| ContactForm::new(layout.has_form_status, config.min_message_chars)),
        }
    }

    /// Replace the default subscription table.
    #[must_use]
    pub fn with_subscriptions(mut self, subscriptions: Subscriptions) -> Self {
        self.subscriptions = subscriptions;
        self
    }

    #[must_use]
    pub fn reveal(&self) -> &RevealEngine {
        &self.reveal
    }

    #[must_use]
    pub fn active_section(&self) -> Option<&str> {
        self.tracker.active()
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme.theme()
    }

    #[must_use]
    pub fn menu_open(&self) -> bool {
        self.menu.is_open()
    }

    /// The host could not build an intersection observer; reveal instead.
    pub fn degrade_reveal(&mut self) -> Vec<Effect> {
        self.reveal.degrade()
    }

    /// Startup pass: footer year, theme buttons, initial scroll state, and
    /// the reveal policy, in that order.
    pub fn start(&mut self, snapshot: &ScrollSnapshot, year: u32) -> Vec<Effect> {
        let mut effects = Vec::new();
        if self.has_current_year {
            effects.push(Effect::SetText { target: Target::CurrentYear, text: year.to_string() });
        }
        effects.extend(self.theme.button_effects());
        effects.extend(self.tracker.tick(snapshot, &self.links));
        effects.extend(self.reveal.start());
        effects
    }

    /// Run every handler subscribed to the event's kind.
    pub fn dispatch(&mut self, event: &PageEvent) -> Vec<Effect> {
        let handlers: Vec<Handler> = self.subscriptions.handlers(event.kind()).collect();
        let mut effects = Vec::new();
        for handler in handlers {
            effects.extend(self.run(handler, event));
        }
        effects
    }

    fn run(&mut self, handler: Handler, event: &PageEvent) -> Vec<Effect> {
        match (handler, event) {
            (Handler::Tracker, PageEvent::Scroll(snapshot) | PageEvent::Resize(snapshot)) => {
                self.tracker.tick(snapshot, &self.links)
            }
            (Handler::Theme, PageEvent::ThemeToggle) => self.theme.toggle(),
            (Handler::Menu, PageEvent::MenuToggle) => self.menu.toggle(),
            (Handler::Menu, PageEvent::KeyDown(key)) => self.menu.on_key(key),
            (Handler::Menu, PageEvent::DocumentClick { inside_menu, on_button }) => {
                self.menu.on_document_click(*inside_menu, *on_button)
            }
            (Handler::AnchorScroll, PageEvent::ScrollLinkClick { href, target_found }) => {
                self.scroll_to_anchor(href.as_deref(), *target_found)
            }
            (Handler::Reveal, PageEvent::Intersections(entries)) => self.reveal.on_intersections(entries),
            (Handler::Contact, PageEvent::Submit(submission)) => {
                self.contact.as_ref().map_or_else(Vec::new, |form| form.submit(submission))
            }
            (handler, event) => {
                log::debug!("{handler:?} ignores {:?}", event.kind());
                Vec::new()
            }
        }
    }

    fn scroll_to_anchor(&mut self, href: Option<&str>, target_found: bool) -> Vec<Effect> {
        let Some(selector) = fragment_selector(href) else {
            return Vec::new();
        };
        if !target_found {
            return Vec::new();
        }
        let mut effects = vec![
            Effect::PreventDefault,
            Effect::ScrollIntoView { selector: selector.to_owned(), smooth: !self.reduced_motion },
        ];
        effects.extend(self.menu.set_open(false));
        effects
    }
}
