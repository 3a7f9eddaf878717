//! The counter widget: commands and reconciliation
//!
//! Every mutation goes through [`Command`]. Commands are applied in batches
//! and followed by a single [`CounterWidget::reconcile`] pass, mirroring how
//! a reactive host coalesces property writes into one update cycle. Batching
//! matters: writing `min = 50` and `max = 10` together must swap the pair
//! before clamping, which a per-write reconciliation would get wrong.

use tracing::debug;

use crate::appearance::Appearance;
use crate::state::{ChangeSet, CounterState};

/// Reaching this value fires the celebration side effect
pub const CELEBRATION_VALUE: i64 = 21;

/// Upper bound on diff passes per reconciliation. Bound correction can change
/// the value, which is observed on the next pass; after that the state is a
/// fixed point.
const MAX_PASSES: usize = 3;

/// A state mutation requested by the user or the host surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Step up by one unless at the upper bound
    Increment,
    /// Step down by one unless at the lower bound
    Decrement,
    /// External assignment of the value
    SetValue(i64),
    /// External assignment of the lower bound
    SetMin(i64),
    /// External assignment of the upper bound
    SetMax(i64),
    /// External assignment of the emphasis flag
    SetEmphasis(bool),
}

/// A side effect requested by reconciliation, carried out by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Show the celebration sub-widget and retrigger its animation
    Celebrate,
}

/// What a reconciliation observed and asked for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reconciliation {
    /// Number of passes that saw changes
    pub passes: usize,
    /// Union of all fields that changed across passes
    pub changed: ChangeSet,
    /// Side effects to run, in order
    pub effects: Vec<Effect>,
}

impl Reconciliation {
    /// True when a celebration was requested
    #[must_use]
    pub fn celebrates(&self) -> bool {
        self.effects.contains(&Effect::Celebrate)
    }

    fn record(&mut self, changes: ChangeSet) {
        self.passes += 1;
        self.changed.value |= changes.value;
        self.changed.min |= changes.min;
        self.changed.max |= changes.max;
        self.changed.emphasis |= changes.emphasis;
    }
}

/// A bounded counter with derived presentation state.
#[derive(Debug, Clone, Default)]
pub struct CounterWidget {
    state: CounterState,
    /// State as of the last reconciliation; `None` until first reconcile
    snapshot: Option<CounterState>,
}

impl CounterWidget {
    /// Create a widget with the default state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a widget from an initial state.
    ///
    /// The state is taken as-is; call [`reconcile`](Self::reconcile) to
    /// normalize it and collect the first-render effects.
    #[must_use]
    pub fn with_state(state: CounterState) -> Self {
        Self {
            state,
            snapshot: None,
        }
    }

    /// Current state
    #[must_use]
    pub fn state(&self) -> &CounterState {
        &self.state
    }

    #[must_use]
    pub fn value(&self) -> i64 {
        self.state.value
    }

    #[must_use]
    pub fn min(&self) -> i64 {
        self.state.min
    }

    #[must_use]
    pub fn max(&self) -> i64 {
        self.state.max
    }

    #[must_use]
    pub fn emphasis(&self) -> bool {
        self.state.emphasis
    }

    /// Presentation hooks derived from the current state
    #[must_use]
    pub fn appearance(&self) -> Appearance {
        Appearance::from_state(&self.state)
    }

    /// True when there are mutations not yet reconciled
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        !self.state.diff(self.snapshot.as_ref()).is_empty()
    }

    /// Step up and reconcile
    pub fn increment(&mut self) -> Reconciliation {
        self.apply([Command::Increment])
    }

    /// Step down and reconcile
    pub fn decrement(&mut self) -> Reconciliation {
        self.apply([Command::Decrement])
    }

    /// Apply a batch of commands in order, then reconcile once.
    pub fn apply(&mut self, commands: impl IntoIterator<Item = Command>) -> Reconciliation {
        for command in commands {
            self.execute(command);
        }
        self.reconcile()
    }

    /// Mutate the state for a single command without reconciling.
    fn execute(&mut self, command: Command) {
        let state = &mut self.state;
        match command {
            Command::Increment => {
                if state.value < state.max {
                    state.value += 1;
                }
                state.emphasis = state.is_at_max();
            }
            Command::Decrement => {
                if state.value > state.min {
                    state.value -= 1;
                }
                state.emphasis = state.is_at_min();
            }
            Command::SetValue(v) => state.value = v,
            Command::SetMin(v) => state.min = v,
            Command::SetMax(v) => state.max = v,
            Command::SetEmphasis(b) => state.emphasis = b,
        }
    }

    /// Diff against the last snapshot and run reconciliation branches until
    /// the state stops changing.
    ///
    /// 1. A bound change swaps an inverted pair and clamps the value.
    /// 2. Once the passes settle, a value that moved onto
    ///    [`CELEBRATION_VALUE`] requests a single [`Effect::Celebrate`].
    ///    A clamp can move the value a second time within one
    ///    reconciliation; that is still one arrival.
    pub fn reconcile(&mut self) -> Reconciliation {
        let mut outcome = Reconciliation::default();
        let settled = self.snapshot.map(|snapshot| snapshot.value);

        for _ in 0..MAX_PASSES {
            let changes = self.state.diff(self.snapshot.as_ref());
            if changes.is_empty() {
                break;
            }
            outcome.record(changes);
            self.snapshot = Some(self.state);

            debug!(
                state = %self.state,
                changed = ?changes.field_names(),
                "reconciling counter"
            );

            if changes.bounds_changed() {
                self.normalize_bounds();
            }
        }

        if self.state.value == CELEBRATION_VALUE && settled != Some(CELEBRATION_VALUE) {
            debug!("counter reached {CELEBRATION_VALUE}, requesting celebration");
            outcome.effects.push(Effect::Celebrate);
        }

        outcome
    }

    /// Swap inverted bounds, then clamp the value into range.
    fn normalize_bounds(&mut self) {
        let state = &mut self.state;
        if state.min > state.max {
            std::mem::swap(&mut state.min, &mut state.max);
        }
        state.value = state.value.clamp(state.min, state.max);
    }
}
