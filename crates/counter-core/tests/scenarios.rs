//! End-to-end scenarios driving the widget the way a host would

use counter_core::{
    parse_attribute, reflect, AttributeUpdate, Command, CounterState, CounterWidget, Effect, Tone,
};

fn mounted(state: CounterState) -> CounterWidget {
    let mut widget = CounterWidget::with_state(state);
    widget.reconcile();
    widget
}

/// Apply host attribute writes as one batch, the way a host flushes them
fn write_attributes(widget: &mut CounterWidget, writes: &[(&str, Option<&str>)]) -> Vec<Effect> {
    let commands: Vec<Command> = writes
        .iter()
        .filter_map(|(name, value)| match parse_attribute(name, *value) {
            Ok(AttributeUpdate::Command(command)) => Some(command),
            _ => None,
        })
        .collect();
    widget.apply(commands).effects
}

#[test]
fn test_increment_to_threshold_celebrates_once() {
    let mut widget = mounted(CounterState::default());
    let mut celebrations = 0;

    for _ in 0..21 {
        celebrations += widget.increment().effects.len();
    }

    assert_eq!(widget.value(), 21);
    assert_eq!(celebrations, 1);
    assert_eq!(widget.appearance().tone, Tone::Celebrate);
}

#[test]
fn test_leaving_and_returning_to_threshold_celebrates_again() {
    let mut widget = mounted(CounterState::new(21, -100, 100));
    assert!(!widget.increment().celebrates());
    assert!(widget.decrement().celebrates());
}

#[test]
fn test_increment_at_max_sets_emphasis() {
    let mut widget = mounted(CounterState::new(100, -100, 100));
    widget.increment();
    assert_eq!(widget.value(), 100);
    assert!(widget.emphasis());
    assert!(widget.appearance().increment_disabled);
}

#[test]
fn test_inverted_bounds_from_host() {
    let mut widget = mounted(CounterState::default());
    write_attributes(&mut widget, &[("min", Some("50")), ("max", Some("10"))]);

    assert_eq!(widget.min(), 10);
    assert_eq!(widget.max(), 50);
    assert_eq!(widget.value(), 10);
    assert!(widget.appearance().decrement_disabled);
}

#[test]
fn test_host_count_write_to_threshold() {
    let mut widget = mounted(CounterState::default());
    let effects = write_attributes(&mut widget, &[("count", Some("21"))]);
    assert_eq!(effects, vec![Effect::Celebrate]);
}

#[test]
fn test_invalid_host_write_leaves_state_alone() {
    let mut widget = mounted(CounterState::new(5, 0, 10));
    let before = *widget.state();
    write_attributes(&mut widget, &[("max", Some("lots"))]);
    assert_eq!(*widget.state(), before);
}

#[test]
fn test_reflection_after_reconcile() {
    let mut widget = mounted(CounterState::new(9, 0, 10));
    widget.increment();

    let attrs = reflect(widget.state());
    assert_eq!(attrs[0], ("count", Some("10".to_string())));
    assert_eq!(attrs[3], ("fancy", Some(String::new())));
}

#[test]
fn test_walk_down_to_min() {
    let mut widget = mounted(CounterState::new(-98, -100, 100));
    widget.decrement();
    assert!(!widget.emphasis());
    widget.decrement();
    assert_eq!(widget.value(), -100);
    assert!(widget.emphasis());
    widget.decrement();
    assert_eq!(widget.value(), -100);
}
