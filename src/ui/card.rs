//! Stat summary cards.

use serde::Serialize;

/// Direction and magnitude of a stat's movement.
///
/// The magnitude is non-negative by construction; the rendered indicator is
/// chosen from `is_positive` alone, never inferred from the value.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Trend {
    pub value: u32,
    pub is_positive: bool,
    /// Preformatted indicator, e.g. "▲ 12%".
    pub label: String,
}

impl Trend {
    pub fn new(value: u32, is_positive: bool) -> Self {
        let arrow = if is_positive { "▲" } else { "▼" };
        Trend {
            value,
            is_positive,
            label: format!("{arrow} {value}%"),
        }
    }
}

/// A single summary tile.
///
/// Label and value always render; description and trend are independently
/// optional and omitted from the serialized view when absent.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatCard {
    pub label: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<Trend>,
}

impl StatCard {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        StatCard {
            label: label.into(),
            value: value.into(),
            description: None,
            trend: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_trend(mut self, value: u32, is_positive: bool) -> Self {
        self.trend = Some(Trend::new(value, is_positive));
        self
    }
}
