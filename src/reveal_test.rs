#![allow(clippy::float_cmp)]

use super::*;

const REDUCED: Capabilities = Capabilities { reduced_motion: true, intersection_observer: true };
const OBSERVER: Capabilities = Capabilities { reduced_motion: false, intersection_observer: true };
const NOTHING: Capabilities = Capabilities { reduced_motion: false, intersection_observer: false };

fn engine(caps: Capabilities, count: usize) -> RevealEngine {
    RevealEngine::new(&PageConfig::default(), caps, count)
}

fn observe_calls(effects: &[Effect]) -> usize {
    effects.iter().filter(|e| matches!(e, Effect::Observe(_))).count()
}

fn hit(item: usize) -> IntersectionEntry {
    IntersectionEntry { item, is_intersecting: true }
}

fn miss(item: usize) -> IntersectionEntry {
    IntersectionEntry { item, is_intersecting: false }
}

// =============================================================
// Strategy selection
// =============================================================

#[test]
fn reduced_motion_wins_over_observer() {
    assert_eq!(RevealStrategy::select(REDUCED), RevealStrategy::ReducedMotion);
    assert_eq!(
        RevealStrategy::select(Capabilities { reduced_motion: true, intersection_observer: false }),
        RevealStrategy::ReducedMotion
    );
}

#[test]
fn observer_used_when_motion_allowed() {
    assert_eq!(RevealStrategy::select(OBSERVER), RevealStrategy::Observe);
}

#[test]
fn missing_observer_is_unsupported() {
    assert_eq!(RevealStrategy::select(NOTHING), RevealStrategy::Unsupported);
}

#[test]
fn observer_options_from_defaults() {
    let opts = engine(OBSERVER, 1).options().clone();
    assert_eq!(opts.threshold, 0.14);
    assert_eq!(opts.root_margin, "0px 0px -8% 0px");
}

// =============================================================
// Startup
// =============================================================

#[test]
fn reduced_motion_reveals_all_without_observing() {
    let mut e = engine(REDUCED, 3);
    let effects = e.start();
    assert_eq!(observe_calls(&effects), 0);
    assert_eq!(e.pending_count(), 0);
    assert!(!e.needs_observer());
    assert_eq!(
        effects,
        (0..3)
            .map(|i| Effect::ToggleClass { target: Target::RevealItem(i), class: "is-visible", on: true })
            .collect::<Vec<_>>()
    );
}

#[test]
fn unsupported_reveals_all_regardless_of_motion() {
    let mut e = engine(NOTHING, 4);
    let effects = e.start();
    assert_eq!(observe_calls(&effects), 0);
    assert_eq!(e.pending_count(), 0);
    assert_eq!(effects.len(), 4);
}

#[test]
fn observe_strategy_observes_every_item_and_leaves_pending() {
    let mut e = engine(OBSERVER, 3);
    assert!(e.needs_observer());
    let effects = e.start();
    assert_eq!(effects, vec![Effect::Observe(0), Effect::Observe(1), Effect::Observe(2)]);
    assert_eq!(e.pending_count(), 3);
}

#[test]
fn start_runs_once() {
    let mut e = engine(OBSERVER, 2);
    assert_eq!(e.start().len(), 2);
    assert!(e.start().is_empty());
}

#[test]
fn no_items_needs_no_observer() {
    let mut e = engine(OBSERVER, 0);
    assert!(!e.needs_observer());
    assert!(e.start().is_empty());
}

// =============================================================
// Degrade
// =============================================================

#[test]
fn degrade_before_start_reveals_everything_on_start() {
    let mut e = engine(OBSERVER, 3);
    assert!(e.degrade().is_empty());
    assert_eq!(e.strategy(), RevealStrategy::Unsupported);
    assert!(!e.needs_observer());

    let effects = e.start();
    assert_eq!(observe_calls(&effects), 0);
    assert_eq!(effects.len(), 3);
    assert_eq!(e.pending_count(), 0);
}

#[test]
fn degrade_after_start_reveals_only_pending_items() {
    let mut e = engine(OBSERVER, 3);
    e.start();
    e.on_intersections(&[hit(1)]);

    let effects = e.degrade();
    assert_eq!(
        effects,
        vec![
            Effect::ToggleClass { target: Target::RevealItem(0), class: "is-visible", on: true },
            Effect::ToggleClass { target: Target::RevealItem(2), class: "is-visible", on: true },
        ]
    );
    assert_eq!(e.pending_count(), 0);
}

#[test]
fn degrade_leaves_other_strategies_alone() {
    let mut e = engine(Capabilities { reduced_motion: true, intersection_observer: true }, 2);
    assert!(e.degrade().is_empty());
    assert_eq!(e.strategy(), RevealStrategy::ReducedMotion);
}

// =============================================================
// Intersection callbacks
// =============================================================

#[test]
fn item_stays_pending_until_intersecting() {
    let mut e = engine(OBSERVER, 2);
    e.start();
    assert!(e.on_intersections(&[miss(0), miss(1)]).is_empty());
    assert_eq!(e.state(0), Some(RevealState::Pending));

    let effects = e.on_intersections(&[hit(0), miss(1)]);
    assert_eq!(
        effects,
        vec![
            Effect::ToggleClass { target: Target::RevealItem(0), class: "is-visible", on: true },
            Effect::Unobserve(0),
        ]
    );
    assert_eq!(e.state(0), Some(RevealState::Revealed));
    assert_eq!(e.state(1), Some(RevealState::Pending));
}

#[test]
fn reveal_transitions_exactly_once() {
    let mut e = engine(OBSERVER, 1);
    e.start();
    assert_eq!(e.on_intersections(&[hit(0)]).len(), 2);
    assert!(e.on_intersections(&[hit(0)]).is_empty());
    assert!(e.on_intersections(&[miss(0)]).is_empty());
    assert_eq!(e.state(0), Some(RevealState::Revealed));
}

#[test]
fn duplicate_entries_in_one_batch_reveal_once() {
    let mut e = engine(OBSERVER, 1);
    e.start();
    let effects = e.on_intersections(&[hit(0), hit(0)]);
    assert_eq!(effects.len(), 2);
}

#[test]
fn never_emits_observe_after_reveal() {
    let mut e = engine(OBSERVER, 3);
    e.start();
    let effects: Vec<Effect> = [hit(2), hit(0), hit(1)].iter().flat_map(|entry| e.on_intersections(&[*entry])).collect();
    assert_eq!(observe_calls(&effects), 0);
    assert_eq!(e.pending_count(), 0);
}

#[test]
fn unknown_item_index_is_ignored() {
    let mut e = engine(OBSERVER, 1);
    e.start();
    assert!(e.on_intersections(&[hit(7)]).is_empty());
    assert_eq!(e.state(7), None);
}
