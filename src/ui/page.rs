//! Page view-models and the response envelope.
//!
//! Every routed view serializes to a `PageView` wrapped in a `PageResponse`,
//! following the frontend contract for both apps.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use super::card::StatCard;
use super::table::TableView;

/// A labeled input on a rendered form.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub input_type: &'static str,
}

/// One label/value pair in a details section.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailItem {
    pub label: String,
    pub value: String,
}

/// A block of page content below the stat cards.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Section {
    Table {
        title: String,
        table: TableView,
    },
    Text {
        heading: String,
        body: String,
    },
    Details {
        heading: String,
        items: Vec<DetailItem>,
    },
    Form {
        heading: String,
        action: String,
        fields: Vec<FormField>,
        submit_label: String,
    },
}

/// A fully composed routed view.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageView {
    /// Which app the page belongs to ("bloodlink" or "gatekeeper").
    pub app: &'static str,
    pub title: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cards: Vec<StatCard>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<Section>,
}

impl PageView {
    pub fn new(app: &'static str, title: impl Into<String>) -> Self {
        PageView {
            app,
            title: title.into(),
            cards: Vec::new(),
            sections: Vec::new(),
        }
    }

    pub fn with_cards(mut self, cards: Vec<StatCard>) -> Self {
        self.cards = cards;
        self
    }

    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }
}

/// Response envelope for every page endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse {
    pub success: bool,
    pub page: PageView,
}

impl PageResponse {
    /// A matched route, served with 200.
    pub fn ok(page: PageView) -> Self {
        PageResponse {
            success: true,
            page,
        }
    }

    /// The not-found terminal view, served with 404.
    pub fn not_found(page: PageView) -> Response {
        let body = PageResponse {
            success: false,
            page,
        };
        (StatusCode::NOT_FOUND, Json(body)).into_response()
    }
}

impl IntoResponse for PageResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}
