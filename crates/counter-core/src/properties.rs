//! Editor-facing description of the widget's editable properties
//!
//! Page editors that embed the counter read this schema to build a
//! settings form. It lists every host attribute with its input kind and
//! default.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::attributes::Attribute;
use crate::state::CounterState;

/// Element tag the widget registers under
pub const ELEMENT_TAG: &str = "counter-app";

/// Input kind for a property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyKind {
    Number,
    Boolean,
    Text,
}

/// One editable property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertySpec {
    /// Attribute name on the host element
    pub property: String,
    /// Human readable label
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub kind: PropertyKind,
    pub default: serde_json::Value,
}

/// The full schema for the element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertySchema {
    pub element: String,
    pub title: String,
    pub description: String,
    pub properties: Vec<PropertySpec>,
}

impl PropertySchema {
    /// Schema for the counter element
    #[must_use]
    pub fn counter() -> Self {
        let defaults = CounterState::default();

        let properties = Attribute::ALL
            .iter()
            .map(|&attribute| {
                let (title, description, kind, default) = match attribute {
                    Attribute::Count => ("Count", "Starting value", PropertyKind::Number, json!(defaults.value)),
                    Attribute::Min => ("Minimum", "Lowest reachable value", PropertyKind::Number, json!(defaults.min)),
                    Attribute::Max => ("Maximum", "Highest reachable value", PropertyKind::Number, json!(defaults.max)),
                    Attribute::Fancy => ("Fancy", "Tint the counter", PropertyKind::Boolean, json!(defaults.emphasis)),
                    Attribute::Title => ("Title", "Heading above the counter", PropertyKind::Text, json!("")),
                };
                PropertySpec {
                    property: attribute.name().to_string(),
                    title: title.to_string(),
                    description: Some(description.to_string()),
                    kind,
                    default,
                }
            })
            .collect();

        Self {
            element: ELEMENT_TAG.to_string(),
            title: "Counter".to_string(),
            description: "A bounded counter with plus and minus buttons".to_string(),
            properties,
        }
    }

    /// Look up a property by attribute name
    #[must_use]
    pub fn get(&self, property: &str) -> Option<&PropertySpec> {
        self.properties.iter().find(|p| p.property == property)
    }

    /// Serialize as pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
