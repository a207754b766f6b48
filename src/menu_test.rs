use super::*;

const BOTH_ICONS: MenuParts = MenuParts { open_icon: true, close_icon: true };

fn menu() -> MobileMenu {
    MobileMenu::new(Some(BOTH_ICONS))
}

#[test]
fn starts_closed() {
    assert!(!menu().is_open());
}

#[test]
fn open_mirrors_aria_and_icons() {
    let mut m = menu();
    let effects = m.set_open(true);
    assert!(m.is_open());
    assert_eq!(
        effects,
        vec![
            Effect::ToggleClass { target: Target::MobileMenu, class: "hidden", on: false },
            Effect::SetAttribute { target: Target::MenuButton, name: "aria-expanded", value: "true".to_owned() },
            Effect::SetAttribute { target: Target::MenuButton, name: "aria-label", value: "Close menu".to_owned() },
            Effect::ToggleClass { target: Target::MenuOpenIcon, class: "hidden", on: true },
            Effect::ToggleClass { target: Target::MenuCloseIcon, class: "hidden", on: false },
        ]
    );
}

#[test]
fn close_restores_open_label() {
    let mut m = menu();
    m.set_open(true);
    let effects = m.set_open(false);
    assert!(effects.contains(&Effect::SetAttribute {
        target: Target::MenuButton,
        name: "aria-label",
        value: "Open menu".to_owned()
    }));
    assert!(effects.contains(&Effect::ToggleClass { target: Target::MobileMenu, class: "hidden", on: true }));
}

#[test]
fn toggle_alternates() {
    let mut m = menu();
    m.toggle();
    assert!(m.is_open());
    m.toggle();
    assert!(!m.is_open());
}

#[test]
fn escape_closes_other_keys_ignored() {
    let mut m = menu();
    m.set_open(true);
    assert!(m.on_key("Enter").is_empty());
    assert!(m.is_open());
    assert!(!m.on_key("Escape").is_empty());
    assert!(!m.is_open());
}

#[test]
fn outside_click_closes_open_menu() {
    let mut m = menu();
    m.set_open(true);
    assert!(!m.on_document_click(false, false).is_empty());
    assert!(!m.is_open());
}

#[test]
fn inside_or_trigger_click_keeps_menu_open() {
    let mut m = menu();
    m.set_open(true);
    assert!(m.on_document_click(true, false).is_empty());
    assert!(m.on_document_click(false, true).is_empty());
    assert!(m.is_open());
}

#[test]
fn outside_click_on_closed_menu_is_noop() {
    let mut m = menu();
    assert!(m.on_document_click(false, false).is_empty());
}

#[test]
fn missing_elements_make_every_operation_noop() {
    let mut m = MobileMenu::new(None);
    assert!(m.toggle().is_empty());
    assert!(m.on_key("Escape").is_empty());
    assert!(m.on_document_click(false, false).is_empty());
    assert!(!m.is_open());
}

#[test]
fn missing_icons_are_skipped() {
    let mut m = MobileMenu::new(Some(MenuParts::default()));
    assert_eq!(m.set_open(true).len(), 3);
}
