//! Presentation hooks derived from counter state
//!
//! Renderers read an [`Appearance`] instead of inspecting the state
//! directly, so every backend agrees on which controls are disabled and
//! which colour role the number takes.

use crate::state::CounterState;
use crate::widget::CELEBRATION_VALUE;

/// The number gets its own highlight at this value
pub const HIGHLIGHT_VALUE: i64 = 18;

/// Colour role for the displayed number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    /// Host text colour
    #[default]
    Normal,
    /// The value equals [`HIGHLIGHT_VALUE`]
    Highlight,
    /// The value equals [`CELEBRATION_VALUE`]
    Celebrate,
    /// Emphasis flag set and no value-specific tone applies
    Emphasis,
}

/// Everything a renderer needs to draw the counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appearance {
    /// The value as display text
    pub label: String,
    /// Colour role for the number
    pub tone: Tone,
    /// Emphasis tints the host text colour
    pub emphasis: bool,
    /// The `-` button is inert at the lower bound
    pub decrement_disabled: bool,
    /// The `+` button is inert at the upper bound
    pub increment_disabled: bool,
}

impl Appearance {
    #[must_use]
    pub fn from_state(state: &CounterState) -> Self {
        let tone = match state.value {
            HIGHLIGHT_VALUE => Tone::Highlight,
            CELEBRATION_VALUE => Tone::Celebrate,
            _ if state.emphasis => Tone::Emphasis,
            _ => Tone::Normal,
        };

        Self {
            label: state.value.to_string(),
            tone,
            emphasis: state.emphasis,
            decrement_disabled: state.is_at_min(),
            increment_disabled: state.is_at_max(),
        }
    }
}
