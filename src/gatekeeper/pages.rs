//! GateKeeper page composers.

use axum::{extract::State, http::Uri, response::Response};

use crate::models::{AccessEvent, SecurityAlert, Visitor};
use crate::ui::{
    rows_from, style_for, Cell, PageResponse, PageView, Row, Section, StatCard, StyleDomain,
    TableView,
};
use crate::AppState;

const APP: &str = "gatekeeper";

/// GET / - marketing index.
pub async fn index(State(_state): State<AppState>) -> PageResponse {
    let page = PageView::new(APP, "GateKeeper")
        .with_cards(vec![
            StatCard::new("Campuses Secured", "312"),
            StatCard::new("Uptime", "99.9%"),
            StatCard::new("Alerts Resolved", "18,400").with_trend(7, true),
        ])
        .with_section(Section::Text {
            heading: "Campus security, unified".to_string(),
            body: "GateKeeper brings access control, visitor management and \
                   real-time alerting into a single dashboard built for campus \
                   operations teams."
                .to_string(),
        })
        .with_section(Section::Text {
            heading: "Access control".to_string(),
            body: "Keycard, facial recognition and license plate entry points, \
                   monitored from one place."
                .to_string(),
        })
        .with_section(Section::Text {
            heading: "Visitor management".to_string(),
            body: "Pre-approve guests, notify hosts on arrival and keep a full \
                   front-desk log."
                .to_string(),
        });

    PageResponse::ok(page)
}

/// GET /solutions
pub async fn solutions(State(_state): State<AppState>) -> PageResponse {
    let page = PageView::new(APP, "Solutions")
        .with_section(Section::Text {
            heading: "Universities".to_string(),
            body: "Dormitory access schedules, event overrides and campus-wide \
                   lockdown drills."
                .to_string(),
        })
        .with_section(Section::Text {
            heading: "Corporate campuses".to_string(),
            body: "Multi-building badge policies with contractor and vendor \
                   time windows."
                .to_string(),
        })
        .with_section(Section::Text {
            heading: "Healthcare".to_string(),
            body: "Restricted wing enforcement with full audit trails for \
                   compliance review."
                .to_string(),
        });

    PageResponse::ok(page)
}

/// GET /dashboard - demo dashboard over the sample security data.
pub async fn dashboard(State(state): State<AppState>) -> PageResponse {
    let data = &state.data.gatekeeper;

    let page = PageView::new(APP, "Security Dashboard")
        .with_cards(vec![
            StatCard::new("Active Alerts", data.alerts.len().to_string()),
            StatCard::new("Access Events Today", data.access_events.len().to_string()),
            StatCard::new("Visitors Expected", data.visitors.len().to_string()),
            StatCard::new("Doors Online", "248").with_description("2 offline for maintenance"),
        ])
        .with_section(Section::Table {
            title: "Security Alerts".to_string(),
            table: alert_table(&data.alerts),
        })
        .with_section(Section::Table {
            title: "Recent Access Events".to_string(),
            table: access_event_table(&data.access_events),
        })
        .with_section(Section::Table {
            title: "Today's Visitors".to_string(),
            table: visitor_table(&data.visitors),
        });

    PageResponse::ok(page)
}

/// Catch-all for unmatched paths.
pub async fn not_found(uri: Uri) -> Response {
    tracing::warn!(path = %uri.path(), "unmatched route");

    let page = PageView::new(APP, "Page Not Found").with_section(Section::Text {
        heading: "404".to_string(),
        body: format!("No page exists at {}", uri.path()),
    });

    PageResponse::not_found(page)
}

fn alert_table(records: &[SecurityAlert]) -> TableView {
    let rows = rows_from(records, |r| {
        Row::new(vec![
            Cell::text(r.alert_type.as_str()),
            Cell::text(r.location.as_str()),
            Cell::text(r.time.format("%I:%M %p").to_string()),
            Cell::badge(
                r.severity.as_str(),
                style_for(StyleDomain::AlertSeverity, r.severity.as_str()),
            ),
        ])
    });

    TableView::new(vec!["Type", "Location", "Time", "Severity"], rows)
}

fn access_event_table(records: &[AccessEvent]) -> TableView {
    let rows = rows_from(records, |r| {
        Row::new(vec![
            Cell::text(r.time.format("%I:%M %p").to_string()),
            Cell::text(r.user.as_str()),
            Cell::text(r.action.as_str()),
            Cell::badge(
                r.status.as_str(),
                style_for(StyleDomain::AccessDecision, r.status.as_str()),
            ),
            Cell::text(r.method.as_str()),
        ])
    });

    TableView::new(vec!["Time", "User", "Access Point", "Status", "Method"], rows)
}

fn visitor_table(records: &[Visitor]) -> TableView {
    let rows = rows_from(records, |r| {
        Row::new(vec![
            Cell::text(r.name.as_str()),
            Cell::text(r.host.as_str()),
            Cell::text(r.purpose.as_str()),
            Cell::text(r.arrival_time.format("%I:%M %p").to_string()),
            Cell::badge(
                r.status.as_str(),
                style_for(StyleDomain::VisitorStatus, r.status.as_str()),
            ),
        ])
    });

    TableView::new(vec!["Visitor", "Host", "Purpose", "Arrival", "Status"], rows)
}
