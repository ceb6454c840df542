//! Tests for the HTTP gateway

use super::*;
use crate::error::Error;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_with_token(token: &str) -> HttpClient {
    let config = HttpClientConfig::builder()
        .access_token(token)
        .timeout(Duration::from_secs(5))
        .build();
    HttpClient::new(config).unwrap()
}

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert_eq!(config.connect_timeout, Duration::from_secs(5));
    assert!(config.access_token.is_none());
    assert!(!config.skip_ssl_validation);
    assert!(config.user_agent.starts_with("cf-api/"));
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder()
        .timeout(Duration::from_secs(60))
        .connect_timeout(Duration::from_secs(2))
        .access_token("bearer my-token")
        .skip_ssl_validation(true)
        .header("X-Custom", "value")
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(config.timeout, Duration::from_secs(60));
    assert_eq!(config.connect_timeout, Duration::from_secs(2));
    assert_eq!(config.access_token.as_deref(), Some("bearer my-token"));
    assert!(config.skip_ssl_validation);
    assert_eq!(
        config.default_headers.get("X-Custom"),
        Some(&"value".to_string())
    );
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[test]
fn test_empty_access_token_is_not_sent() {
    let config = HttpClientConfig::builder().access_token("").build();
    assert!(config.access_token.is_none());
}

#[test]
fn test_config_debug_redacts_token() {
    let config = HttpClientConfig::builder()
        .access_token("bearer secret")
        .build();
    let rendered = format!("{config:?}");
    assert!(!rendered.contains("secret"));
    assert!(rendered.contains("has_access_token: true"));
}

#[tokio::test]
async fn test_get_sends_cloud_controller_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/organizations"))
        .and(query_param("order-by", "name"))
        .and(header("accept", "application/json"))
        .and(header("content-type", "application/json"))
        .and(header("authorization", "bearer my-token"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"resources": []}"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_with_token("bearer my-token");
    let body = client
        .get(&format!("{}/v2/organizations?order-by=name", mock_server.uri()))
        .await
        .unwrap();

    assert_eq!(body, r#"{"resources": []}"#);
}

#[tokio::test]
async fn test_get_parses_cloud_controller_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/spaces/bogus"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "code": 40004,
            "description": "The app space could not be found: bogus",
            "error_code": "CF-SpaceNotFound"
        })))
        .mount(&mock_server)
        .await;

    let client = client_with_token("");
    let err = client
        .get(&format!("{}/v2/spaces/bogus", mock_server.uri()))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert_eq!(err.api_error_code(), Some("CF-SpaceNotFound"));
}

#[tokio::test]
async fn test_get_does_not_retry_server_errors() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/organizations"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_with_token("");
    let err = client
        .get(&format!("{}/v2/organizations", mock_server.uri()))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::HttpStatus { status: 502, .. }));
}

#[tokio::test]
async fn test_get_collects_warnings() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/apps"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-Cf-Warnings", "Endpoint+deprecated,second%20warning")
                .set_body_string(r#"{"resources": []}"#),
        )
        .mount(&mock_server)
        .await;

    let client = client_with_token("");
    client
        .get(&format!("{}/v2/apps", mock_server.uri()))
        .await
        .unwrap();

    assert_eq!(
        client.warnings(),
        vec!["Endpoint deprecated".to_string(), "second warning".to_string()]
    );
}

#[tokio::test]
async fn test_warnings_keep_equals_and_ampersands() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/apps"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-Cf-Warnings", "limit=,a%26b%3Dc,plain+text%3D1")
                .set_body_string(r#"{"resources": []}"#),
        )
        .mount(&mock_server)
        .await;

    let client = client_with_token("");
    client
        .get(&format!("{}/v2/apps", mock_server.uri()))
        .await
        .unwrap();

    assert_eq!(
        client.warnings(),
        vec![
            "limit=".to_string(),
            "a&b=c".to_string(),
            "plain text=1".to_string()
        ]
    );
}

#[tokio::test]
async fn test_get_transport_failure() {
    // Nothing listens on port 9 (discard) in the test environment
    let client = client_with_token("");
    let err = client.get("http://127.0.0.1:9/v2/info").await.unwrap_err();
    assert!(matches!(err, Error::Http(_)));
}
