//! [`Host`] implementation over `web-sys`.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlInputElement, HtmlTextAreaElement, IntersectionObserver, Node, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

use super::handles::{Handles, first};
use crate::contact::{ContactSubmission, Field};
use crate::effect::{Host, Target};
use crate::error::PageError;
use crate::tracker::ScrollSnapshot;

pub(crate) struct BrowserHost {
    pub window: Window,
    pub document: Document,
    pub handles: Handles,
    pub observer: Option<IntersectionObserver>,
}

fn dom_err(err: JsValue) -> PageError {
    PageError::Dom(format!("{err:?}"))
}

impl BrowserHost {
    pub fn scroll_y(&self) -> f64 {
        match self.window.scroll_y() {
            Ok(y) => y,
            Err(err) => {
                log::debug!("scroll offset unavailable: {err:?}");
                0.0
            }
        }
    }

    /// Fresh scroll offset and section layout.
    pub fn snapshot(&self) -> ScrollSnapshot {
        ScrollSnapshot::new(self.scroll_y(), self.handles.sections())
    }

    /// Where a document click landed relative to the mobile menu.
    ///
    /// `None` when the menu is not on the page.
    pub fn click_position(&self, target: Option<&Node>) -> Option<(bool, bool)> {
        let (menu, button) = (self.handles.mobile_menu.as_ref()?, self.handles.menu_button.as_ref()?);
        Some((menu.contains(target), button.contains(target)))
    }

    /// Whether `href` names an element on this page.
    pub fn anchor_exists(&self, href: Option<&str>) -> bool {
        match crate::anchor::fragment_selector(href) {
            Some(selector) => first(self.document.query_selector(selector)).is_some(),
            None => false,
        }
    }

    /// Current contact form values; missing controls read as empty.
    pub fn submission(&self) -> ContactSubmission {
        ContactSubmission {
            name: self.field_value(Field::Name),
            email: self.field_value(Field::Email),
            message: self.field_value(Field::Message),
        }
    }

    fn field_element(&self, field: Field) -> Option<Element> {
        let control = self.handles.form.as_ref()?.elements().named_item(field.name())?;
        control.dyn_into::<Element>().into_iter().next()
    }

    fn field_value(&self, field: Field) -> String {
        let Some(el) = self.field_element(field) else {
            return String::new();
        };
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else {
            String::new()
        }
    }

    fn element(&self, target: Target) -> Option<Element> {
        let h = &self.handles;
        match target {
            Target::Root => h.root.clone(),
            Target::TopNav => h.top_nav.clone(),
            Target::MobileMenu => h.mobile_menu.clone(),
            Target::MenuButton => h.menu_button.clone(),
            Target::MenuOpenIcon => h.menu_open_icon.clone(),
            Target::MenuCloseIcon => h.menu_close_icon.clone(),
            Target::ThemeButton(i) => h.theme_buttons.get(i).map(|b| b.button.clone()),
            Target::ThemeLightIcon(i) => h.theme_buttons.get(i).and_then(|b| b.light_icon.clone()),
            Target::ThemeDarkIcon(i) => h.theme_buttons.get(i).and_then(|b| b.dark_icon.clone()),
            Target::ThemeLabel(i) => h.theme_buttons.get(i).and_then(|b| b.label.clone()),
            Target::NavLink(i) => h.nav_links.get(i).cloned(),
            Target::RevealItem(i) => h.reveal_items.get(i).cloned(),
            Target::Field(field) => self.field_element(field),
            Target::FormInputs => None,
            Target::FormStatus => h.form_status.clone(),
            Target::CurrentYear => h.current_year.clone(),
        }
    }

    /// Every element a target resolves to; group targets may yield several.
    fn elements(&self, target: Target) -> Vec<Element> {
        match target {
            Target::FormInputs => self.handles.form_inputs.clone(),
            target => self.element(target).into_iter().collect(),
        }
    }
}

impl Host for BrowserHost {
    fn toggle_class(&mut self, target: Target, class: &str, on: bool) -> Result<(), PageError> {
        for el in self.elements(target) {
            el.class_list().toggle_with_force(class, on).map_err(dom_err)?;
        }
        Ok(())
    }

    fn set_attribute(&mut self, target: Target, name: &str, value: &str) -> Result<(), PageError> {
        for el in self.elements(target) {
            el.set_attribute(name, value).map_err(dom_err)?;
        }
        Ok(())
    }

    fn remove_attribute(&mut self, target: Target, name: &str) -> Result<(), PageError> {
        for el in self.elements(target) {
            el.remove_attribute(name).map_err(dom_err)?;
        }
        Ok(())
    }

    fn set_text(&mut self, target: Target, text: &str) -> Result<(), PageError> {
        for el in self.elements(target) {
            el.set_text_content(Some(text));
        }
        Ok(())
    }

    fn persist(&mut self, key: &str, value: &str) -> Result<(), PageError> {
        let storage_err = |reason: String| PageError::Storage { key: key.to_owned(), reason };
        let storage = self
            .window
            .local_storage()
            .map_err(|err| storage_err(format!("{err:?}")))?
            .ok_or_else(|| storage_err("localStorage unavailable".to_owned()))?;
        storage.set_item(key, value).map_err(|err| storage_err(format!("{err:?}")))
    }

    fn observe(&mut self, item: usize) -> Result<(), PageError> {
        if let (Some(observer), Some(el)) = (&self.observer, self.handles.reveal_items.get(item)) {
            observer.observe(el);
        }
        Ok(())
    }

    fn unobserve(&mut self, item: usize) -> Result<(), PageError> {
        if let (Some(observer), Some(el)) = (&self.observer, self.handles.reveal_items.get(item)) {
            observer.unobserve(el);
        }
        Ok(())
    }

    fn scroll_into_view(&mut self, selector: &str, smooth: bool) -> Result<(), PageError> {
        let Some(el) = self.document.query_selector(selector).map_err(dom_err)? else {
            return Ok(());
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(if smooth { ScrollBehavior::Smooth } else { ScrollBehavior::Auto });
        options.set_block(ScrollLogicalPosition::Start);
        el.scroll_into_view_with_scroll_into_view_options(&options);
        Ok(())
    }

    fn reset_form(&mut self) -> Result<(), PageError> {
        if let Some(form) = &self.handles.form {
            form.reset();
        }
        Ok(())
    }
}
