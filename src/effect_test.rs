use super::*;

#[derive(Default)]
struct Recorder {
    calls: Vec<String>,
    fail_persist: bool,
    fail_dom: bool,
}

impl Recorder {
    fn dom(&mut self, call: String) -> Result<(), PageError> {
        self.calls.push(call);
        if self.fail_dom { Err(PageError::Dom("boom".to_owned())) } else { Ok(()) }
    }
}

impl Host for Recorder {
    fn toggle_class(&mut self, target: Target, class: &str, on: bool) -> Result<(), PageError> {
        self.dom(format!("class {target:?} {class} {on}"))
    }

    fn set_attribute(&mut self, target: Target, name: &str, value: &str) -> Result<(), PageError> {
        self.dom(format!("attr {target:?} {name}={value}"))
    }

    fn remove_attribute(&mut self, target: Target, name: &str) -> Result<(), PageError> {
        self.dom(format!("rmattr {target:?} {name}"))
    }

    fn set_text(&mut self, target: Target, text: &str) -> Result<(), PageError> {
        self.dom(format!("text {target:?} {text}"))
    }

    fn persist(&mut self, key: &str, value: &str) -> Result<(), PageError> {
        self.calls.push(format!("persist {key}={value}"));
        if self.fail_persist {
            Err(PageError::Storage { key: key.to_owned(), reason: "quota".to_owned() })
        } else {
            Ok(())
        }
    }

    fn observe(&mut self, item: usize) -> Result<(), PageError> {
        self.dom(format!("observe {item}"))
    }

    fn unobserve(&mut self, item: usize) -> Result<(), PageError> {
        self.dom(format!("unobserve {item}"))
    }

    fn scroll_into_view(&mut self, selector: &str, smooth: bool) -> Result<(), PageError> {
        self.dom(format!("scroll {selector} {smooth}"))
    }

    fn reset_form(&mut self) -> Result<(), PageError> {
        self.dom("reset".to_owned())
    }
}

#[test]
fn apply_runs_effects_in_order() {
    let mut host = Recorder::default();
    let applied = apply(
        &mut host,
        &[
            Effect::class(Target::Root, "dark", true),
            Effect::attr(Target::MenuButton, "aria-expanded", "true"),
            Effect::RemoveAttribute { target: Target::NavLink(1), name: "aria-current" },
            Effect::Observe(3),
        ],
    );
    assert_eq!(
        host.calls,
        vec![
            "class Root dark true".to_owned(),
            "attr MenuButton aria-expanded=true".to_owned(),
            "rmattr NavLink(1) aria-current".to_owned(),
            "observe 3".to_owned(),
        ]
    );
    assert_eq!(applied, Applied { prevent_default: false, failures: 0 });
}

#[test]
fn apply_reports_prevent_default_without_host_call() {
    let mut host = Recorder::default();
    let applied = apply(&mut host, &[Effect::PreventDefault, Effect::ResetForm]);
    assert!(applied.prevent_default);
    assert_eq!(host.calls, vec!["reset".to_owned()]);
}

#[test]
fn storage_failure_does_not_stop_later_effects() {
    let mut host = Recorder { fail_persist: true, ..Recorder::default() };
    let applied = apply(
        &mut host,
        &[
            Effect::class(Target::Root, "dark", true),
            Effect::Persist { key: "theme".to_owned(), value: "dark".to_owned() },
            Effect::attr(Target::ThemeButton(0), "aria-pressed", "true"),
        ],
    );
    assert_eq!(applied.failures, 1);
    assert_eq!(host.calls.len(), 3);
    assert_eq!(host.calls[2], "attr ThemeButton(0) aria-pressed=true");
}

#[test]
fn dom_failures_are_counted_not_fatal() {
    let mut host = Recorder { fail_dom: true, ..Recorder::default() };
    let applied = apply(&mut host, &[Effect::Unobserve(0), Effect::Unobserve(1)]);
    assert_eq!(applied.failures, 2);
    assert_eq!(host.calls, vec!["unobserve 0".to_owned(), "unobserve 1".to_owned()]);
}

#[test]
fn storage_error_display_names_key() {
    let err = PageError::Storage { key: "theme".to_owned(), reason: "quota".to_owned() };
    assert_eq!(err.to_string(), "preference store write failed for 'theme': quota");
}
