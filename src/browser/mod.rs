//! Browser binding: wires DOM events to the [`Page`] core.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only module that touches `web-sys`. It captures element
//! handles once, detects capabilities once, then subscribes listeners whose
//! closures share one `Rc<RefCell<Session>>`. Each listener borrows the
//! session, dispatches a single [`PageEvent`] and applies the resulting
//! effects before returning, so handlers never interleave.
//!
//! Listener closures are leaked for the page session; there is no teardown.

mod handles;
mod host;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    AddEventListenerOptions, Event, EventTarget, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, KeyboardEvent, Node,
};

use self::handles::Handles;
use self::host::BrowserHost;
use crate::config::PageConfig;
use crate::effect::{Applied, apply};
use crate::error::PageError;
use crate::events::PageEvent;
use crate::page::Page;
use crate::reveal::{Capabilities, IntersectionEntry};

struct Session {
    page: Page,
    host: BrowserHost,
}

type Shared = Rc<RefCell<Session>>;

/// WASM entry point, run once the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = mount() {
        log::warn!("page behavior disabled: {err}");
    }
}

fn mount() -> Result<(), PageError> {
    let window = web_sys::window().ok_or_else(|| PageError::Dom("no window".to_owned()))?;
    let document = window.document().ok_or_else(|| PageError::Dom("no document".to_owned()))?;
    let handles = Handles::capture(&document);

    let raw_config = handles.root.as_ref().and_then(|root| root.get_attribute("data-page-config"));
    let config_result = PageConfig::from_json(raw_config.as_deref());
    let debug = config_result.as_ref().is_ok_and(|c| c.debug);
    init_logging(debug);
    let config = config_result.unwrap_or_else(|err| {
        log::warn!("ignoring data-page-config: {err}");
        PageConfig::default()
    });

    let caps = Capabilities {
        reduced_motion: matches!(
            window.match_media("(prefers-reduced-motion: reduce)"),
            Ok(Some(query)) if query.matches()
        ),
        intersection_observer: matches!(
            js_sys::Reflect::has(&window, &JsValue::from_str("IntersectionObserver")),
            Ok(true)
        ),
    };
    log::debug!("capabilities: {caps:?}");

    let page = Page::new(&config, handles.layout(), caps);
    let session: Shared = Rc::new(RefCell::new(Session {
        page,
        host: BrowserHost { window: window.clone(), document: document.clone(), handles, observer: None },
    }));

    if session.borrow().page.reveal().needs_observer() {
        match create_observer(&session) {
            Ok(observer) => session.borrow_mut().host.observer = Some(observer),
            Err(err) => {
                log::warn!("{err}");
                session.borrow_mut().page.degrade_reveal();
            }
        }
    }

    {
        let mut guard = session.borrow_mut();
        let Session { page, host } = &mut *guard;
        let snapshot = host.snapshot();
        let effects = page.start(&snapshot, js_sys::Date::new_0().get_full_year());
        apply(host, &effects);
    }

    subscribe(&session, &window, &document);
    Ok(())
}

fn init_logging(debug: bool) {
    let level = if debug { log::Level::Debug } else { log::Level::Info };
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("console logger not installed: {err}")));
    }
}

/// Build an event from host state, dispatch it, and apply the effects.
fn dispatch(session: &Shared, build: impl FnOnce(&BrowserHost) -> Option<PageEvent>) -> Applied {
    let Ok(mut guard) = session.try_borrow_mut() else {
        log::debug!("dropped re-entrant event");
        return Applied::default();
    };
    let Session { page, host } = &mut *guard;
    let Some(event) = build(host) else {
        return Applied::default();
    };
    let effects = page.dispatch(&event);
    apply(host, &effects)
}

/// Attach a leaked listener. A failure is logged and the caller carries on.
fn listen(target: &EventTarget, kind: &str, passive: bool, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    let result = if passive {
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            kind,
            closure.as_ref().unchecked_ref(),
            &options,
        )
    } else {
        target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
    };
    closure.forget();
    if let Err(err) = result {
        log::warn!("{}", PageError::Dom(format!("{kind} listener: {err:?}")));
    }
}

fn create_observer(session: &Shared) -> Result<IntersectionObserver, PageError> {
    let shared = Rc::clone(session);
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, _observer: IntersectionObserver| {
        dispatch(&shared, |host| {
            let entries = entries
                .iter()
                .flat_map(|value| value.dyn_into::<IntersectionObserverEntry>())
                .filter_map(|entry| {
                    let item = host.handles.reveal_index(&entry.target())?;
                    Some(IntersectionEntry { item, is_intersecting: entry.is_intersecting() })
                })
                .collect();
            Some(PageEvent::Intersections(entries))
        });
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let (threshold, root_margin) = {
        let guard = session.borrow();
        let options = guard.page.reveal().options();
        (options.threshold, options.root_margin.clone())
    };
    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    init.set_root_margin(&root_margin);

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
        .map_err(|err| PageError::Dom(format!("intersection observer: {err:?}")))?;
    callback.forget();
    Ok(observer)
}

fn subscribe(session: &Shared, window: &web_sys::Window, document: &web_sys::Document) {
    let shared = Rc::clone(session);
    listen(window, "scroll", true, move |_| {
        dispatch(&shared, |host| Some(PageEvent::Scroll(host.snapshot())));
    });

    let shared = Rc::clone(session);
    listen(window, "resize", false, move |_| {
        dispatch(&shared, |host| Some(PageEvent::Resize(host.snapshot())));
    });

    let guard = session.borrow();
    let handles = &guard.host.handles;

    for button in &handles.theme_buttons {
        let shared = Rc::clone(session);
        listen(&button.button, "click", false, move |_| {
            dispatch(&shared, |_| Some(PageEvent::ThemeToggle));
        });
    }

    if let Some(button) = &handles.menu_button {
        let shared = Rc::clone(session);
        listen(button, "click", false, move |_| {
            dispatch(&shared, |_| Some(PageEvent::MenuToggle));
        });
    }

    let shared = Rc::clone(session);
    listen(document, "keydown", false, move |event| {
        let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
            return;
        };
        dispatch(&shared, |_| Some(PageEvent::KeyDown(key)));
    });

    let shared = Rc::clone(session);
    listen(document, "click", false, move |event| {
        let target = event.target().and_then(|t| t.dyn_into::<Node>().into_iter().next());
        dispatch(&shared, |host| {
            let (inside_menu, on_button) = host.click_position(target.as_ref())?;
            Some(PageEvent::DocumentClick { inside_menu, on_button })
        });
    });

    for link in &handles.scroll_links {
        let shared = Rc::clone(session);
        let link_for_cb = link.clone();
        listen(link, "click", false, move |event| {
            let applied = dispatch(&shared, |host| {
                let href = link_for_cb.get_attribute("href");
                let target_found = host.anchor_exists(href.as_deref());
                Some(PageEvent::ScrollLinkClick { href, target_found })
            });
            if applied.prevent_default {
                event.prevent_default();
            }
        });
    }

    if let Some(form) = &handles.form {
        let shared = Rc::clone(session);
        listen(form, "submit", false, move |event| {
            let applied = dispatch(&shared, |host| Some(PageEvent::Submit(host.submission())));
            if applied.prevent_default {
                event.prevent_default();
            }
        });
    }
}
