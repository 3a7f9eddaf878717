//! Host embedding surface
//!
//! The widget is embedded as an element with observable attributes
//! `count`, `min`, `max`, `fancy` and `title`. Attribute writes arrive as
//! optional strings (`None` = attribute removed) and are converted to
//! [`Command`]s; [`reflect`] mirrors the reconciled state back.

use std::fmt;

use crate::error::{CounterError, CounterResult};
use crate::state::CounterState;
use crate::widget::Command;

/// An observable attribute of the host element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Count,
    Min,
    Max,
    Fancy,
    Title,
}

impl Attribute {
    /// All observed attributes, in reflection order
    pub const ALL: [Self; 5] = [Self::Count, Self::Min, Self::Max, Self::Fancy, Self::Title];

    /// Parse an attribute name (case-insensitive, as HTML attribute names are)
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "count" => Some(Self::Count),
            "min" => Some(Self::Min),
            "max" => Some(Self::Max),
            "fancy" => Some(Self::Fancy),
            "title" => Some(Self::Title),
            _ => None,
        }
    }

    /// The attribute name as written on the host element
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Count => "count",
            Self::Min => "min",
            Self::Max => "max",
            Self::Fancy => "fancy",
            Self::Title => "title",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The effect of one attribute write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeUpdate {
    /// A state mutation for the widget
    Command(Command),
    /// A new explicit title; empty means "use the localized default"
    Title(String),
}

/// Convert a host attribute write into an update.
///
/// `value` is `None` when the attribute was removed. Removing a numeric
/// attribute is rejected; removing `fancy` clears the flag and removing
/// `title` falls back to the localized title.
pub fn parse_attribute(name: &str, value: Option<&str>) -> CounterResult<AttributeUpdate> {
    let attribute =
        Attribute::from_name(name).ok_or_else(|| CounterError::UnknownAttribute(name.to_string()))?;

    let update = match attribute {
        Attribute::Count => AttributeUpdate::Command(Command::SetValue(parse_number(attribute, value)?)),
        Attribute::Min => AttributeUpdate::Command(Command::SetMin(parse_number(attribute, value)?)),
        Attribute::Max => AttributeUpdate::Command(Command::SetMax(parse_number(attribute, value)?)),
        Attribute::Fancy => AttributeUpdate::Command(Command::SetEmphasis(value.is_some())),
        Attribute::Title => AttributeUpdate::Title(value.unwrap_or_default().to_string()),
    };
    Ok(update)
}

/// Parse a numeric attribute. Integral float text such as `"5.0"` or `"1e2"`
/// is accepted; fractions and non-numbers are not.
fn parse_number(attribute: Attribute, value: Option<&str>) -> CounterResult<i64> {
    let invalid = |reason: &str| CounterError::InvalidAttribute {
        name: attribute.name().to_string(),
        reason: reason.to_string(),
    };

    let text = value.ok_or_else(|| invalid("attribute removed"))?.trim();
    if text.is_empty() {
        return Err(invalid("empty value"));
    }

    if let Ok(n) = text.parse::<i64>() {
        return Ok(n);
    }

    let float: f64 = text
        .parse()
        .map_err(|_| invalid(&format!("`{text}` is not a number")))?;

    if !float.is_finite() || float.fract() != 0.0 {
        return Err(invalid(&format!("`{text}` is not an integer")));
    }
    if float < i64::MIN as f64 || float >= i64::MAX as f64 {
        return Err(invalid(&format!("`{text}` is out of range")));
    }
    Ok(float as i64)
}

/// Mirror the state to host attributes. `fancy` is absent when false.
#[must_use]
pub fn reflect(state: &CounterState) -> Vec<(&'static str, Option<String>)> {
    vec![
        (Attribute::Count.name(), Some(state.value.to_string())),
        (Attribute::Min.name(), Some(state.min.to_string())),
        (Attribute::Max.name(), Some(state.max.to_string())),
        (Attribute::Fancy.name(), state.emphasis.then(String::new)),
    ]
}
