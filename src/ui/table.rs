//! Tabular record rendering.

use serde::Serialize;

use super::style::StyleToken;

/// One cell of a rendered row.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Cell {
    Text { value: String },
    Badge { label: String, style: StyleToken },
    Avatar { url: String, name: String },
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text {
            value: value.into(),
        }
    }

    pub fn badge(label: impl Into<String>, style: StyleToken) -> Self {
        Cell::Badge {
            label: label.into(),
            style,
        }
    }

    pub fn avatar(url: impl Into<String>, name: impl Into<String>) -> Self {
        Cell::Avatar {
            url: url.into(),
            name: name.into(),
        }
    }
}

/// A rendered table row; one per source record.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Row {
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn new(cells: Vec<Cell>) -> Self {
        Row { cells }
    }
}

/// A rendered table.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableView {
    pub columns: Vec<&'static str>,
    pub rows: Vec<Row>,
}

impl TableView {
    pub fn new(columns: Vec<&'static str>, rows: Vec<Row>) -> Self {
        TableView { columns, rows }
    }
}

/// Render every record in `records` into a row, preserving input order.
///
/// The renderer is total: one row per record, no deduplication, no
/// filtering. A record whose status has no registered style still renders,
/// with the neutral token from the classifier.
pub fn rows_from<T>(records: &[T], render: impl Fn(&T) -> Row) -> Vec<Row> {
    records.iter().map(render).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::style::{style_for, StyleDomain};

    #[test]
    fn test_one_row_per_record_in_input_order() {
        let records = vec!["third", "first", "second", "first"];
        let rows = rows_from(&records, |r| Row::new(vec![Cell::text(*r)]));

        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].cells[0], Cell::text("third"));
        assert_eq!(rows[1].cells[0], Cell::text("first"));
        // Duplicates are kept.
        assert_eq!(rows[3].cells[0], Cell::text("first"));
    }

    #[test]
    fn test_empty_input_renders_empty() {
        let records: Vec<u32> = vec![];
        let rows = rows_from(&records, |r| Row::new(vec![Cell::text(r.to_string())]));
        assert!(rows.is_empty());
    }

    #[test]
    fn test_unmapped_status_still_renders() {
        let statuses = vec!["Completed", "Cancelled"];
        let rows = rows_from(&statuses, |s| {
            Row::new(vec![Cell::badge(
                *s,
                style_for(StyleDomain::DonationStatus, s),
            )])
        });

        assert_eq!(rows.len(), 2);
        match &rows[1].cells[0] {
            Cell::Badge { label, style } => {
                assert_eq!(label, "Cancelled");
                assert!(style.is_neutral());
            }
            other => panic!("expected badge cell, got {other:?}"),
        }
    }

    #[test]
    fn test_cell_serialization_is_tagged() {
        let cell = Cell::badge("High", style_for(StyleDomain::AlertSeverity, "High"));
        let json = serde_json::to_value(&cell).unwrap();
        assert_eq!(json["kind"], "badge");
        assert_eq!(json["label"], "High");
        assert_eq!(json["style"]["text"], "red");
    }
}
