//! Effects emitted by the page core for the host to apply.
//!
//! Component handlers never touch the DOM. They return a list of [`Effect`]s
//! naming a logical [`Target`]; the host resolves targets to the element
//! handles it captured at startup and performs the writes. A target the host
//! could not resolve is skipped silently.

use crate::contact::Field;
use crate::error::PageError;

#[cfg(test)]
#[path = "effect_test.rs"]
mod effect_test;

/// Logical element addressed by an effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// The document root (`<html>`).
    Root,
    /// Sticky navigation bar.
    TopNav,
    MobileMenu,
    MenuButton,
    MenuOpenIcon,
    MenuCloseIcon,
    /// Theme toggle button by index in document order.
    ThemeButton(usize),
    ThemeLightIcon(usize),
    ThemeDarkIcon(usize),
    ThemeLabel(usize),
    /// Navigation link by index in document order.
    NavLink(usize),
    /// Reveal item by index in document order.
    RevealItem(usize),
    /// Contact form input.
    Field(Field),
    /// Every `.form-input` control in the contact form.
    FormInputs,
    FormStatus,
    CurrentYear,
}

/// A single host-side mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Add (`on`) or remove a class.
    ToggleClass { target: Target, class: &'static str, on: bool },
    SetAttribute { target: Target, name: &'static str, value: String },
    RemoveAttribute { target: Target, name: &'static str },
    SetText { target: Target, text: String },
    /// Write a preference to the local key-value store.
    Persist { key: String, value: String },
    /// Start observing a reveal item for viewport intersection.
    Observe(usize),
    /// Stop observing a reveal item.
    Unobserve(usize),
    /// Scroll the element matching `selector` to the top of the viewport.
    ScrollIntoView { selector: String, smooth: bool },
    /// Clear every contact form control.
    ResetForm,
    /// Suppress the browser's default action for the current event.
    PreventDefault,
}

impl Effect {
    pub(crate) fn class(target: Target, class: &'static str, on: bool) -> Self {
        Self::ToggleClass { target, class, on }
    }

    pub(crate) fn attr(target: Target, name: &'static str, value: impl Into<String>) -> Self {
        Self::SetAttribute { target, name, value: value.into() }
    }
}

/// Environment that can carry out effects.
///
/// Implemented by the browser binding over `web-sys`, and by recording
/// doubles in tests.
pub trait Host {
    fn toggle_class(&mut self, target: Target, class: &str, on: bool) -> Result<(), PageError>;
    fn set_attribute(&mut self, target: Target, name: &str, value: &str) -> Result<(), PageError>;
    fn remove_attribute(&mut self, target: Target, name: &str) -> Result<(), PageError>;
    fn set_text(&mut self, target: Target, text: &str) -> Result<(), PageError>;
    fn persist(&mut self, key: &str, value: &str) -> Result<(), PageError>;
    fn observe(&mut self, item: usize) -> Result<(), PageError>;
    fn unobserve(&mut self, item: usize) -> Result<(), PageError>;
    fn scroll_into_view(&mut self, selector: &str, smooth: bool) -> Result<(), PageError>;
    fn reset_form(&mut self) -> Result<(), PageError>;
}

/// Outcome of [`apply`] that the event source needs to act on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Applied {
    pub prevent_default: bool,
    /// Effects that reported an error.
    pub failures: usize,
}

/// Apply effects in order. A failing effect is logged and the rest still run.
pub fn apply<H: Host + ?Sized>(host: &mut H, effects: &[Effect]) -> Applied {
    let mut applied = Applied::default();
    for effect in effects {
        let result = match effect {
            Effect::ToggleClass { target, class, on } => host.toggle_class(*target, class, *on),
            Effect::SetAttribute { target, name, value } => host.set_attribute(*target, name, value),
            Effect::RemoveAttribute { target, name } => host.remove_attribute(*target, name),
            Effect::SetText { target, text } => host.set_text(*target, text),
            Effect::Persist { key, value } => host.persist(key, value),
            Effect::Observe(item) => host.observe(*item),
            Effect::Unobserve(item) => host.unobserve(*item),
            Effect::ScrollIntoView { selector, smooth } => host.scroll_into_view(selector, *smooth),
            Effect::ResetForm => host.reset_form(),
            Effect::PreventDefault => {
                applied.prevent_default = true;
                Ok(())
            }
        };
        if let Err(err) = result {
            applied.failures += 1;
            match &err {
                PageError::Storage { .. } => log::warn!("{err}"),
                PageError::Dom(_) => log::debug!("{err}"),
            }
        }
    }
    applied
}
