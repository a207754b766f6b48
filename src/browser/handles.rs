//! Element handles captured once at startup.
//!
//! Every lookup is optional. A missing element becomes `None` (or an empty
//! list) and the effects that would have targeted it are skipped.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlFormElement, Node, NodeList};

use crate::menu::MenuParts;
use crate::page::PageLayout;
use crate::theme::ThemeButtonParts;
use crate::tracker::Section;

pub(crate) struct ThemeButtonHandles {
    pub button: Element,
    pub light_icon: Option<Element>,
    pub dark_icon: Option<Element>,
    pub label: Option<Element>,
}

pub(crate) struct Handles {
    pub root: Option<Element>,
    pub top_nav: Option<Element>,
    pub mobile_menu: Option<Element>,
    pub menu_button: Option<Element>,
    pub menu_open_icon: Option<Element>,
    pub menu_close_icon: Option<Element>,
    pub theme_buttons: Vec<ThemeButtonHandles>,
    pub nav_links: Vec<Element>,
    pub scroll_links: Vec<Element>,
    pub sections: Vec<HtmlElement>,
    pub reveal_items: Vec<Element>,
    pub form: Option<HtmlFormElement>,
    pub form_inputs: Vec<Element>,
    pub form_status: Option<Element>,
    pub current_year: Option<Element>,
}

impl Handles {
    pub fn capture(document: &Document) -> Self {
        let theme_buttons = all(document.query_selector_all("[data-theme-toggle]"))
            .into_iter()
            .map(|button| ThemeButtonHandles {
                light_icon: first(button.query_selector(".theme-icon-light")),
                dark_icon: first(button.query_selector(".theme-icon-dark")),
                label: first(button.query_selector(".theme-state-label")),
                button,
            })
            .collect();

        let form = document
            .get_element_by_id("contactForm")
            .and_then(|el| el.dyn_into::<HtmlFormElement>().into_iter().next());
        let form_inputs = form.as_ref().map_or_else(Vec::new, |form| all(form.query_selector_all(".form-input")));

        Self {
            root: document.document_element(),
            top_nav: document.get_element_by_id("topNav"),
            mobile_menu: document.get_element_by_id("mobileMenu"),
            menu_button: document.get_element_by_id("mobileMenuButton"),
            menu_open_icon: document.get_element_by_id("menuOpenIcon"),
            menu_close_icon: document.get_element_by_id("menuCloseIcon"),
            theme_buttons,
            nav_links: all(document.query_selector_all("[data-nav-link]")),
            scroll_links: all(document.query_selector_all("[data-scroll-link]")),
            sections: all(document.query_selector_all("[data-section]"))
                .into_iter()
                .flat_map(|el| el.dyn_into::<HtmlElement>())
                .collect(),
            reveal_items: all(document.query_selector_all("[data-reveal]")),
            form,
            form_inputs,
            form_status: document.get_element_by_id("formStatus"),
            current_year: document.get_element_by_id("currentYear"),
        }
    }

    /// Describe which optional elements exist, for the page core.
    pub fn layout(&self) -> PageLayout {
        let menu = match (&self.mobile_menu, &self.menu_button) {
            (Some(_), Some(_)) => Some(MenuParts {
                open_icon: self.menu_open_icon.is_some(),
                close_icon: self.menu_close_icon.is_some(),
            }),
            _ => None,
        };

        PageLayout {
            dark: self.root.as_ref().is_some_and(|root| root.class_list().contains(crate::consts::CLASS_DARK)),
            has_top_nav: self.top_nav.is_some(),
            theme_buttons: self
                .theme_buttons
                .iter()
                .map(|b| ThemeButtonParts {
                    light_icon: b.light_icon.is_some(),
                    dark_icon: b.dark_icon.is_some(),
                    label: b.label.is_some(),
                })
                .collect(),
            menu,
            nav_links: self.nav_links.iter().map(|link| link.get_attribute("href")).collect(),
            reveal_items: self.reveal_items.len(),
            has_form: self.form.is_some(),
            has_form_status: self.form_status.is_some(),
            has_current_year: self.current_year.is_some(),
        }
    }

    /// Live section offsets, read fresh on every call.
    pub fn sections(&self) -> Vec<Section> {
        self.sections.iter().map(|el| Section::new(el.id(), f64::from(el.offset_top()))).collect()
    }

    /// Index of the reveal item that is the same node as `target`.
    pub fn reveal_index(&self, target: &Element) -> Option<usize> {
        let target: &Node = target;
        self.reveal_items.iter().position(|item| item.is_same_node(Some(target)))
    }
}

/// Elements of a `querySelectorAll` result, skipping non-element nodes.
pub(crate) fn all(list: Result<NodeList, JsValue>) -> Vec<Element> {
    let list = match list {
        Ok(list) => list,
        Err(err) => {
            log::debug!("selector query failed: {err:?}");
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .flat_map(|node| node.dyn_into::<Element>())
        .collect()
}

/// Result of a `querySelector`, with a thrown selector error treated as no match.
pub(crate) fn first(found: Result<Option<Element>, JsValue>) -> Option<Element> {
    match found {
        Ok(el) => el,
        Err(err) => {
            log::debug!("selector query failed: {err:?}");
            None
        }
    }
}
