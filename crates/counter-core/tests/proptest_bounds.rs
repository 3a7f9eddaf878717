//! Property tests for bounds reconciliation

use counter_core::{Command, CounterState, CounterWidget, CELEBRATION_VALUE};
use proptest::prelude::*;

// Steps and bound writes; bounds stay small so sequences hit them
fn arb_step() -> impl Strategy<Value = Command> {
    prop_oneof![
        4 => Just(Command::Increment),
        4 => Just(Command::Decrement),
        1 => (-50i64..50).prop_map(Command::SetMin),
        1 => (-50i64..50).prop_map(Command::SetMax),
        1 => any::<bool>().prop_map(Command::SetEmphasis),
    ]
}

// Everything a user or host can issue, including value writes around the threshold
fn arb_command() -> impl Strategy<Value = Command> {
    prop_oneof![
        4 => arb_step(),
        1 => (10i64..35).prop_map(Command::SetValue),
    ]
}

fn arb_state() -> impl Strategy<Value = CounterState> {
    (-50i64..50, -50i64..50, -50i64..50).prop_map(|(value, min, max)| CounterState::new(value, min, max))
}

proptest! {
    /// Property: after any reconciled sequence the state is consistent
    #[test]
    fn prop_value_stays_in_bounds(
        initial in arb_state(),
        commands in prop::collection::vec(arb_step(), 0..200),
    ) {
        let mut widget = CounterWidget::with_state(initial);
        widget.reconcile();
        prop_assert!(widget.state().is_consistent());

        for command in commands {
            widget.apply([command]);
            prop_assert!(widget.state().is_consistent(), "inconsistent: {}", widget.state());
        }
    }

    /// Property: stepping past a bound never moves the value
    #[test]
    fn prop_steps_saturate(initial in arb_state(), steps in 0usize..120) {
        let mut widget = CounterWidget::with_state(initial);
        widget.reconcile();

        for _ in 0..steps {
            widget.increment();
        }
        prop_assert!(widget.value() >= widget.min());
        prop_assert!(widget.value() <= widget.max());

        if widget.value() == widget.max() {
            let before = *widget.state();
            widget.increment();
            prop_assert_eq!(widget.value(), before.value);
            prop_assert!(widget.emphasis());
        }
    }

    /// Property: celebrations equal the number of arrivals at the threshold
    #[test]
    fn prop_celebrates_once_per_arrival(
        moves in prop::collection::vec(any::<bool>(), 0..150),
    ) {
        let mut widget = CounterWidget::new();
        widget.reconcile();

        let mut arrivals = 0;
        let mut celebrations = 0;
        for up in moves {
            let before = widget.value();
            let outcome = if up { widget.increment() } else { widget.decrement() };
            if widget.value() == CELEBRATION_VALUE && before != CELEBRATION_VALUE {
                arrivals += 1;
            }
            celebrations += outcome.effects.len();
        }
        prop_assert_eq!(celebrations, arrivals);
    }

    /// Property: any batch celebrates exactly when the settled value arrives at the threshold
    #[test]
    fn prop_batch_celebrates_once_per_arrival(
        initial in arb_state(),
        batches in prop::collection::vec(prop::collection::vec(arb_command(), 1..4), 0..60),
    ) {
        let mut widget = CounterWidget::with_state(initial);
        let first = widget.reconcile();
        prop_assert_eq!(first.effects.len(), usize::from(widget.value() == CELEBRATION_VALUE));

        for batch in batches {
            let before = widget.value();
            let outcome = widget.apply(batch);
            let arrived = before != CELEBRATION_VALUE && widget.value() == CELEBRATION_VALUE;
            prop_assert_eq!(outcome.effects.len(), usize::from(arrived), "state {}", widget.state());
            prop_assert!(!widget.is_dirty());
        }
    }

    /// Property: reconciliation is idempotent
    #[test]
    fn prop_reconcile_reaches_fixed_point(initial in arb_state()) {
        let mut widget = CounterWidget::with_state(initial);
        widget.reconcile();
        prop_assert!(!widget.is_dirty());
        let second = widget.reconcile();
        prop_assert_eq!(second.passes, 0);
    }
}
