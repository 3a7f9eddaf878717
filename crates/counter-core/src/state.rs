//! Counter state and change detection
//!
//! The widget keeps the current [`CounterState`] alongside a snapshot of the
//! state as of the last reconciliation. Diffing the two yields a
//! [`ChangeSet`], which decides which reconciliation branches run.

use std::fmt;

/// Default lower bound for a freshly constructed counter
pub const DEFAULT_MIN: i64 = -100;
/// Default upper bound for a freshly constructed counter
pub const DEFAULT_MAX: i64 = 100;

/// The four observable fields of the counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CounterState {
    /// Current displayed count
    pub value: i64,
    /// Inclusive lower bound
    pub min: i64,
    /// Inclusive upper bound
    pub max: i64,
    /// Presentation flag, reflected to the host as `fancy`
    pub emphasis: bool,
}

impl Default for CounterState {
    fn default() -> Self {
        Self {
            value: 0,
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            emphasis: false,
        }
    }
}

impl CounterState {
    /// Create a state with the given value and bounds, emphasis off.
    ///
    /// No normalization happens here; an inverted or out-of-range state is
    /// corrected by the widget's first reconciliation.
    #[must_use]
    pub const fn new(value: i64, min: i64, max: i64) -> Self {
        Self {
            value,
            min,
            max,
            emphasis: false,
        }
    }

    /// Check whether the value sits on the lower bound
    #[must_use]
    pub const fn is_at_min(&self) -> bool {
        self.value == self.min
    }

    /// Check whether the value sits on the upper bound
    #[must_use]
    pub const fn is_at_max(&self) -> bool {
        self.value == self.max
    }

    /// Check whether `v` lies within `[min, max]`
    #[must_use]
    pub const fn contains(&self, v: i64) -> bool {
        self.min <= v && v <= self.max
    }

    /// Check the structural invariants: ordered bounds and value in range
    #[must_use]
    pub const fn is_consistent(&self) -> bool {
        self.min <= self.max && self.contains(self.value)
    }

    /// Compute which fields differ from `previous`.
    ///
    /// `None` stands for "never rendered": every field counts as changed.
    #[must_use]
    pub fn diff(&self, previous: Option<&Self>) -> ChangeSet {
        match previous {
            None => ChangeSet::all(),
            Some(prev) => ChangeSet {
                value: self.value != prev.value,
                min: self.min != prev.min,
                max: self.max != prev.max,
                emphasis: self.emphasis != prev.emphasis,
            },
        }
    }
}

impl fmt::Display for CounterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} in [{}, {}]", self.value, self.min, self.max)?;
        if self.emphasis {
            write!(f, " (fancy)")?;
        }
        Ok(())
    }
}

/// The set of fields that changed between two snapshots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChangeSet {
    pub value: bool,
    pub min: bool,
    pub max: bool,
    pub emphasis: bool,
}

impl ChangeSet {
    /// A change set with every field marked
    #[must_use]
    pub const fn all() -> Self {
        Self {
            value: true,
            min: true,
            max: true,
            emphasis: true,
        }
    }

    /// True when nothing changed
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !(self.value || self.min || self.max || self.emphasis)
    }

    /// True when either bound changed
    #[must_use]
    pub const fn bounds_changed(&self) -> bool {
        self.min || self.max
    }

    /// Names of the changed fields, using the host attribute names
    #[must_use]
    pub fn field_names(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.value {
            names.push("count");
        }
        if self.min {
            names.push("min");
        }
        if self.max {
            names.push("max");
        }
        if self.emphasis {
            names.push("fancy");
        }
        names
    }
}
