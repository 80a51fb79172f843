//! BloodLink page composers.
//!
//! Each handler assembles one routed view from the fixture data: records are
//! rendered in input order, categorical fields resolve their badge tones
//! through the shared classifier.

use axum::{
    extract::State,
    http::Uri,
    response::{Redirect, Response},
    Form,
};

use crate::models::{
    AppointmentRecord, DonationRecord, InventoryItem, LoginRequest, UserAccount, UserRole,
};
use crate::ui::{
    rows_from, style_for, Cell, DetailItem, FormField, PageResponse, PageView, Row, Section,
    StatCard, StyleDomain, TableView,
};
use crate::AppState;

const APP: &str = "bloodlink";

/// GET / - redirect to the login page.
pub async fn index_redirect() -> Redirect {
    Redirect::temporary("/login")
}

/// GET /login - the login form.
pub async fn login() -> PageResponse {
    let page = PageView::new(APP, "Sign In").with_section(Section::Form {
        heading: "Welcome back".to_string(),
        action: "/login".to_string(),
        fields: vec![
            FormField {
                name: "email",
                label: "Email",
                input_type: "email",
            },
            FormField {
                name: "password",
                label: "Password",
                input_type: "password",
            },
        ],
        submit_label: "Sign In".to_string(),
    });

    PageResponse::ok(page)
}

/// POST /login - demo stub: navigates to the dashboard without checking
/// credentials.
pub async fn submit_login(Form(request): Form<LoginRequest>) -> Redirect {
    tracing::info!(email = %request.email, "login submitted; no credential check in the demo");
    Redirect::to("/dashboard")
}

/// GET /dashboard - overview with stat cards and recent donations.
pub async fn dashboard(State(state): State<AppState>) -> PageResponse {
    let data = &state.data.bloodlink;
    let recent = &data.donations[..data.donations.len().min(4)];

    let page = PageView::new(APP, "Dashboard")
        .with_cards(vec![
            StatCard::new("Total Donors", "2584").with_trend(12, true),
            StatCard::new("Blood Units Collected", "892")
                .with_description("This quarter")
                .with_trend(4, true),
            StatCard::new("Pending Appointments", "48").with_trend(2, false),
            StatCard::new("Registered Hospitals", "37"),
        ])
        .with_section(Section::Table {
            title: "Recent Donations".to_string(),
            table: donation_table(recent),
        });

    PageResponse::ok(page)
}

/// GET /dashboard/donations
pub async fn donations(State(state): State<AppState>) -> PageResponse {
    let page = PageView::new(APP, "Donations").with_section(Section::Table {
        title: "All Donations".to_string(),
        table: donation_table(&state.data.bloodlink.donations),
    });

    PageResponse::ok(page)
}

/// GET /dashboard/appointments
pub async fn appointments(State(state): State<AppState>) -> PageResponse {
    let page = PageView::new(APP, "Appointments").with_section(Section::Table {
        title: "Upcoming Appointments".to_string(),
        table: appointment_table(&state.data.bloodlink.appointments),
    });

    PageResponse::ok(page)
}

/// GET /dashboard/inventory
pub async fn inventory(State(state): State<AppState>) -> PageResponse {
    let page = PageView::new(APP, "Inventory").with_section(Section::Table {
        title: "Blood Products".to_string(),
        table: inventory_table(&state.data.bloodlink.inventory),
    });

    PageResponse::ok(page)
}

/// GET /dashboard/analytics
pub async fn analytics(State(_state): State<AppState>) -> PageResponse {
    let page = PageView::new(APP, "Analytics")
        .with_cards(vec![
            StatCard::new("Donations This Month", "186").with_trend(9, true),
            StatCard::new("New Donors", "42").with_trend(3, true),
            StatCard::new("Fulfilled Requests", "121").with_trend(2, false),
        ])
        .with_section(Section::Text {
            heading: "Monthly Overview".to_string(),
            body: "Donation volume continues to grow, led by O+ and A+ collections. \
                   Plasma reserves remain below target for the third week."
                .to_string(),
        });

    PageResponse::ok(page)
}

/// GET /dashboard/users
pub async fn users(State(state): State<AppState>) -> PageResponse {
    let page = PageView::new(APP, "Users").with_section(Section::Table {
        title: "Registered Users".to_string(),
        table: user_table(&state.data.bloodlink.users),
    });

    PageResponse::ok(page)
}

/// GET /dashboard/settings
pub async fn settings(State(_state): State<AppState>) -> PageResponse {
    let page = PageView::new(APP, "Settings")
        .with_section(Section::Details {
            heading: "Notifications".to_string(),
            items: vec![
                DetailItem {
                    label: "Email digest".to_string(),
                    value: "Weekly".to_string(),
                },
                DetailItem {
                    label: "Low stock alerts".to_string(),
                    value: "Enabled".to_string(),
                },
            ],
        })
        .with_section(Section::Details {
            heading: "Appearance".to_string(),
            items: vec![DetailItem {
                label: "Theme".to_string(),
                value: "System".to_string(),
            }],
        });

    PageResponse::ok(page)
}

/// GET /dashboard/profile
pub async fn profile(State(state): State<AppState>) -> PageResponse {
    let admin = state
        .data
        .bloodlink
        .users
        .iter()
        .find(|u| u.role == UserRole::Admin);

    let items = match admin {
        Some(user) => vec![
            DetailItem {
                label: "Name".to_string(),
                value: user.name.clone(),
            },
            DetailItem {
                label: "Email".to_string(),
                value: user.email.clone(),
            },
            DetailItem {
                label: "Role".to_string(),
                value: user.role.as_str().to_string(),
            },
            DetailItem {
                label: "Status".to_string(),
                value: user.status.as_str().to_string(),
            },
        ],
        None => Vec::new(),
    };

    let page = PageView::new(APP, "Profile").with_section(Section::Details {
        heading: "Account".to_string(),
        items,
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

fn donation_table(records: &[DonationRecord]) -> TableView {
    let rows = rows_from(records, |r| {
        Row::new(vec![
            Cell::text(r.id.to_string()),
            Cell::text(r.donor_name.as_str()),
            Cell::badge(
                r.blood_type.as_str(),
                style_for(StyleDomain::BloodType, r.blood_type.as_str()),
            ),
            Cell::text(r.date.format("%b %d, %Y").to_string()),
            Cell::text(r.quantity.as_str()),
            Cell::badge(
                r.status.as_str(),
                style_for(StyleDomain::DonationStatus, r.status.as_str()),
            ),
        ])
    });

    TableView::new(
        vec!["ID", "Donor", "Blood Type", "Date", "Quantity", "Status"],
        rows,
    )
}

fn appointment_table(records: &[AppointmentRecord]) -> TableView {
    let rows = rows_from(records, |r| {
        Row::new(vec![
            Cell::text(r.id.to_string()),
            Cell::text(r.name.as_str()),
            Cell::text(r.date.format("%b %d, %Y").to_string()),
            Cell::text(r.time.format("%I:%M %p").to_string()),
            Cell::badge(
                r.blood_type.as_str(),
                style_for(StyleDomain::BloodType, r.blood_type.as_str()),
            ),
            Cell::badge(
                r.status.as_str(),
                style_for(StyleDomain::AppointmentStatus, r.status.as_str()),
            ),
        ])
    });

    TableView::new(
        vec!["ID", "Name", "Date", "Time", "Blood Type", "Status"],
        rows,
    )
}

fn inventory_table(records: &[InventoryItem]) -> TableView {
    let rows = rows_from(records, |r| {
        Row::new(vec![
            Cell::text(r.id.to_string()),
            Cell::text(r.name.as_str()),
            Cell::text(r.quantity.to_string()),
            Cell::badge(
                r.status.as_str(),
                style_for(StyleDomain::StockStatus, r.status.as_str()),
            ),
        ])
    });

    TableView::new(vec!["ID", "Item", "Quantity", "Status"], rows)
}

fn user_table(records: &[UserAccount]) -> TableView {
    let rows = rows_from(records, |r| {
        Row::new(vec![
            Cell::avatar(r.avatar_url.as_str(), r.name.as_str()),
            Cell::text(r.email.as_str()),
            Cell::badge(
                r.role.as_str(),
                style_for(StyleDomain::UserRole, r.role.as_str()),
            ),
            Cell::badge(
                r.status.as_str(),
                style_for(StyleDomain::AccountStatus, r.status.as_str()),
            ),
        ])
    });

    TableView::new(vec!["User", "Email", "Role", "Status"], rows)
}
