//! Integration tests for the demo backend.

use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use axum::Router;
use reqwest::{redirect, Client};
use serde_json::Value;
use tower::ServiceExt;

use crate::{bloodlink, fixtures, gatekeeper, AppState};

/// Test fixture for integration tests.
struct TestFixture {
    client: Client,
    base_url: String,
}

impl TestFixture {
    async fn bloodlink() -> Self {
        Self::spawn(bloodlink::router(test_state())).await
    }

    async fn gatekeeper() -> Self {
        Self::spawn(gatekeeper::router(test_state())).await
    }

    async fn spawn(app: Router) -> Self {
        // Bind to random port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind");
        let addr = listener.local_addr().expect("Failed to get addr");
        let base_url = format!("http://{}", addr);

        // Spawn server
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Wait for server to start
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        // Redirects stay visible so Location headers can be asserted
        let client = Client::builder()
            .redirect(redirect::Policy::none())
            .build()
            .unwrap();

        TestFixture { client, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json(&self, path: &str) -> (reqwest::StatusCode, Value) {
        let resp = self.client.get(self.url(path)).send().await.unwrap();
        let status = resp.status();
        let body = resp.json().await.unwrap();
        (status, body)
    }
}

fn test_state() -> AppState {
    AppState {
        data: Arc::new(fixtures::sample()),
    }
}

#[tokio::test]
async fn test_bloodlink_root_redirects_to_login() {
    let fixture = TestFixture::bloodlink().await;

    let resp = fixture.client.get(fixture.url("/")).send().await.unwrap();

    assert_eq!(resp.status(), 307);
    assert_eq!(resp.headers()["location"], "/login");
}

#[tokio::test]
async fn test_login_page_renders_form() {
    let fixture = TestFixture::bloodlink().await;

    let (status, body) = fixture.get_json("/login").await;

    assert_eq!(status, 200);
    assert_eq!(body["success"], true);
    assert_eq!(body["page"]["app"], "bloodlink");
    assert_eq!(body["page"]["sections"][0]["kind"], "form");
    assert_eq!(body["page"]["sections"][0]["action"], "/login");
}

#[tokio::test]
async fn test_login_submit_redirects_unconditionally() {
    let fixture = TestFixture::bloodlink().await;

    // Arbitrary credentials; the demo stub never validates them
    let resp = fixture
        .client
        .post(fixture.url("/login"))
        .form(&[("email", "nobody@example.com"), ("password", "wrong")])
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 303);
    assert_eq!(resp.headers()["location"], "/dashboard");
}

#[tokio::test]
async fn test_dashboard_stat_card_renders_value_and_trend() {
    let fixture = TestFixture::bloodlink().await;

    let (status, body) = fixture.get_json("/dashboard").await;

    assert_eq!(status, 200);
    let card = &body["page"]["cards"][0];
    assert_eq!(card["value"], "2584");
    assert_eq!(card["trend"]["value"], 12);
    assert_eq!(card["trend"]["isPositive"], true);
    assert_eq!(card["trend"]["label"], "▲ 12%");
}

#[tokio::test]
async fn test_donations_render_one_row_per_record_in_order() {
    let fixture = TestFixture::bloodlink().await;
    let expected = fixtures::sample().bloodlink.donations;

    let (status, body) = fixture.get_json("/dashboard/donations").await;

    assert_eq!(status, 200);
    let rows = body["page"]["sections"][0]["table"]["rows"]
        .as_array()
        .unwrap();
    assert_eq!(rows.len(), expected.len());
    for (row, record) in rows.iter().zip(&expected) {
        assert_eq!(row["cells"][0]["value"], record.id.to_string());
        assert_eq!(row["cells"][1]["value"], record.donor_name);
    }
}

#[tokio::test]
async fn test_donation_status_badges_use_registered_tones() {
    let fixture = TestFixture::bloodlink().await;

    let (_, body) = fixture.get_json("/dashboard/donations").await;

    let rows = body["page"]["sections"][0]["table"]["rows"]
        .as_array()
        .unwrap();
    for row in rows {
        let badge = &row["cells"][5];
        assert_eq!(badge["kind"], "badge");
        match badge["label"].as_str().unwrap() {
            "Completed" => assert_eq!(badge["style"]["text"], "green"),
            "Pending" => assert_eq!(badge["style"]["text"], "amber"),
            other => panic!("unexpected donation status {other}"),
        }
    }
}

#[tokio::test]
async fn test_users_page_renders_avatars_and_role_badges() {
    let fixture = TestFixture::bloodlink().await;

    let (status, body) = fixture.get_json("/dashboard/users").await;

    assert_eq!(status, 200);
    let rows = body["page"]["sections"][0]["table"]["rows"]
        .as_array()
        .unwrap();
    assert_eq!(rows[0]["cells"][0]["kind"], "avatar");
    assert_eq!(rows[0]["cells"][2]["label"], "Admin");
    assert_eq!(rows[0]["cells"][2]["style"]["text"], "purple");
}

#[tokio::test]
async fn test_unknown_dashboard_path_yields_not_found() {
    let fixture = TestFixture::bloodlink().await;

    let (status, body) = fixture.get_json("/dashboard/nonexistent").await;

    assert_eq!(status, 404);
    assert_eq!(body["success"], false);
    assert_eq!(body["page"]["title"], "Page Not Found");
    assert!(body["page"]["sections"][0]["body"]
        .as_str()
        .unwrap()
        .contains("/dashboard/nonexistent"));
}

#[tokio::test]
async fn test_gatekeeper_marketing_pages_render() {
    let fixture = TestFixture::gatekeeper().await;

    let (status, body) = fixture.get_json("/").await;
    assert_eq!(status, 200);
    assert_eq!(body["page"]["app"], "gatekeeper");
    assert!(!body["page"]["sections"].as_array().unwrap().is_empty());

    let (status, body) = fixture.get_json("/solutions").await;
    assert_eq!(status, 200);
    assert_eq!(body["page"]["title"], "Solutions");
}

#[tokio::test]
async fn test_gatekeeper_dashboard_alert_severity_tones() {
    let fixture = TestFixture::gatekeeper().await;

    let (status, body) = fixture.get_json("/dashboard").await;

    assert_eq!(status, 200);
    let rows = body["page"]["sections"][0]["table"]["rows"]
        .as_array()
        .unwrap();
    for row in rows {
        let badge = &row["cells"][3];
        match badge["label"].as_str().unwrap() {
            "High" => assert_eq!(badge["style"]["text"], "red"),
            "Medium" => assert_eq!(badge["style"]["text"], "amber"),
            "Low" => assert_eq!(badge["style"]["text"], "blue"),
            other => panic!("unexpected severity {other}"),
        }
    }
}

#[tokio::test]
async fn test_gatekeeper_unknown_path_yields_not_found() {
    let fixture = TestFixture::gatekeeper().await;

    let (status, body) = fixture.get_json("/pricing").await;

    assert_eq!(status, 404);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_route_dispatch_without_network() {
    // Direct router checks via tower's oneshot
    let app = bloodlink::router(test_state());

    let resp = app
        .clone()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), 307);

    let resp = app
        .oneshot(
            Request::builder()
                .uri("/no/such/page")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}
