//! Mock panel tests for the palgate client.
//!
//! These tests use wiremock to simulate the panel server and exercise the
//! client's cookie-session behavior without a real server or credentials.

use palgate_core::error::{Error, TransportError};
use palgate_core::{Credentials, PanelApi, PanelUrl};
use palgate_client::PanelClient;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper to create a panel URL from a mock server.
fn mock_panel_url(server: &MockServer) -> PanelUrl {
    PanelUrl::new(server.uri()).unwrap()
}

// ============================================================================
// Authentication Tests
// ============================================================================

#[tokio::test]
async fn test_login_success() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/login"))
        .and(body_json(json!({
            "username": "admin",
            "password": "secret123"
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"isLoggedIn": true, "cookie": "abc123"}))
                .insert_header("set-cookie", "login_cookie=abc123; Path=/; Max-Age=86400"),
        )
        .mount(&server)
        .await;

    let client = PanelClient::new(mock_panel_url(&server));
    let outcome = client
        .login(&Credentials::new("admin", "secret123"))
        .await
        .unwrap();

    assert!(outcome.is_logged_in);
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    let server = MockServer::start().await;

    // The panel answers bad credentials with a 401 that still carries a
    // decodable body; the client returns it verbatim instead of erroring.
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"isLoggedIn": false})))
        .mount(&server)
        .await;

    let client = PanelClient::new(mock_panel_url(&server));
    let outcome = client
        .login(&Credentials::new("admin", "wrongpass"))
        .await
        .unwrap();

    assert!(!outcome.is_logged_in);
}

#[tokio::test]
async fn test_cookie_persisted_across_requests() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"isLoggedIn": true, "cookie": "abc123"}))
                .insert_header("set-cookie", "login_cookie=abc123; Path=/; Max-Age=86400"),
        )
        .mount(&server)
        .await;

    // The status check must present the cookie the login response set.
    Mock::given(method("GET"))
        .and(path("/api/check-login-status"))
        .and(header("cookie", "login_cookie=abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"isLoggedIn": true})))
        .mount(&server)
        .await;

    let client = PanelClient::new(mock_panel_url(&server));
    client
        .login(&Credentials::new("admin", "secret"))
        .await
        .unwrap();

    let status = client.check_login_status().await.unwrap();
    assert!(status.is_logged_in);
    assert!(status.error.is_none());
}

#[tokio::test]
async fn test_relogin_overwrites_session_cookie() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/login"))
        .and(body_json(json!({"username": "admin", "password": "first"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"isLoggedIn": true}))
                .insert_header("set-cookie", "login_cookie=first; Path=/; Max-Age=86400"),
        )
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/login"))
        .and(body_json(json!({"username": "admin", "password": "second"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"isLoggedIn": true}))
                .insert_header("set-cookie", "login_cookie=second; Path=/; Max-Age=86400"),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/check-login-status"))
        .and(header("cookie", "login_cookie=second"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"isLoggedIn": true})))
        .mount(&server)
        .await;

    let client = PanelClient::new(mock_panel_url(&server));
    client
        .login(&Credentials::new("admin", "first"))
        .await
        .unwrap();
    client
        .login(&Credentials::new("admin", "second"))
        .await
        .unwrap();

    // Only the freshest cookie is sent; the first one was replaced.
    let status = client.check_login_status().await.unwrap();
    assert!(status.is_logged_in);
}

#[tokio::test]
async fn test_check_login_status_without_session() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/check-login-status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "isLoggedIn": false,
            "error": "Cookie not provided"
        })))
        .mount(&server)
        .await;

    let client = PanelClient::new(mock_panel_url(&server));
    let status = client.check_login_status().await.unwrap();

    // Not logged in is a value, not an error.
    assert!(!status.is_logged_in);
    assert_eq!(status.error.as_deref(), Some("Cookie not provided"));
}

// ============================================================================
// Transport Failure Tests
// ============================================================================

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    // Port 9 (discard) is closed on the loopback in practice; the
    // connection is refused immediately.
    let panel = PanelUrl::new("http://127.0.0.1:9").unwrap();
    let client = PanelClient::new(panel);

    let status = client.check_login_status().await;
    assert!(matches!(status, Err(Error::Transport(_))));

    let login = client.login(&Credentials::new("admin", "secret")).await;
    assert!(matches!(login, Err(Error::Transport(_))));
}

#[tokio::test]
async fn test_undecodable_success_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/check-login-status"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html>login page</html>")
                .insert_header("content-type", "text/html"),
        )
        .mount(&server)
        .await;

    let client = PanelClient::new(mock_panel_url(&server));
    let result = client.check_login_status().await;

    assert!(matches!(
        result,
        Err(Error::Transport(TransportError::Decode { .. }))
    ));
}

#[tokio::test]
async fn test_error_status_without_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = PanelClient::new(mock_panel_url(&server));
    let result = client.login(&Credentials::new("admin", "secret")).await;

    match result {
        Err(Error::Transport(TransportError::Status { status })) => assert_eq!(status, 503),
        other => panic!("expected transport status error, got {:?}", other),
    }
}

// ============================================================================
// Monitoring Endpoint Tests
// ============================================================================

#[tokio::test]
async fn test_sys_info() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "cpu_percent": 7.25,
            "memory": {"total": 16_000_000_000u64, "available": 9_000_000_000u64, "percent": 43.75},
            "disk": {"total": 500_000_000_000u64, "free": 100_000_000_000u64, "percent": 80.0},
            "boot_time": 1_700_000_000u64,
            "process": {
                "pid": 1337,
                "status": "running",
                "memory_used": 420_000_000u64,
                "cpu_percent": 2.5,
                "start_time": 1_700_000_123_000i64
            }
        })))
        .mount(&server)
        .await;

    let client = PanelClient::new(mock_panel_url(&server));
    let info = client.sys_info().await.unwrap();

    assert_eq!(info.process.pid, 1337);
    assert_eq!(info.disk.percent, 80.0);
}

#[tokio::test]
async fn test_players_with_update() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/player"))
        .and(query_param("update", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "name": "alice",
                "steamid": "76561198000000001",
                "playeruid": "uid-1",
                "last_online": "2024-02-01 10:30:00",
                "online": true
            },
            {
                "name": "bob",
                "steamid": "76561198000000002",
                "playeruid": "uid-2",
                "last_online": "2024-01-28 22:10:45",
                "online": false
            }
        ])))
        .mount(&server)
        .await;

    let client = PanelClient::new(mock_panel_url(&server));
    let players = client.players(true).await.unwrap();

    assert_eq!(players.len(), 2);
    assert_eq!(players[0].name, "alice");
    assert!(!players[1].online);
}
