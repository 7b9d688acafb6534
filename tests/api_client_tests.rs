mod common;

use reqwest::Method;
use serde_json::json;
use std::time::Duration;
use tokio::sync::watch;

use monidash::api::{self, ApiClient, ApiError};
use monidash::models::StatusKind;

fn client(url: &str) -> ApiClient {
    api::set_silent(true);
    ApiClient::new(url).unwrap()
}

#[tokio::test]
async fn test_call_returns_json() {
    let backend = common::spawn_backend().await;
    backend.state.set_services(json!({ "services": [{ "name": "redis", "host": "localhost", "port": 6379 }] }));

    let value = client(&backend.url).call("/api/services", Method::GET, None).await.unwrap();
    assert_eq!(value["services"][0]["name"], "redis");
}

#[tokio::test]
async fn test_non_success_status_is_http_error() {
    let backend = common::spawn_backend().await;
    backend.state.fail_instance_info(500);

    let err = client(&backend.url).call("/api/instance-info", Method::GET, None).await.unwrap_err();
    assert_eq!(err, ApiError::Http { status: 500, status_text: "Internal Server Error".into() });
    assert_eq!(err.to_string(), "HTTP 500: Internal Server Error");
}

#[tokio::test]
async fn test_missing_route_is_http_404() {
    let backend = common::spawn_backend().await;
    let err = client(&backend.url).call("/api/nope", Method::GET, None).await.unwrap_err();
    assert!(matches!(err, ApiError::Http { status: 404, .. }));
}

#[tokio::test]
async fn test_malformed_body_is_parse_error() {
    let backend = common::spawn_backend().await;
    let err = client(&backend.url).call("/api/garbage", Method::GET, None).await.unwrap_err();
    assert!(matches!(err, ApiError::Parse(_)));
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    let url = common::dead_url().await;
    let err = client(&url).call("/api/services", Method::GET, None).await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
}

#[tokio::test]
async fn test_requests_carry_json_content_type() {
    let backend = common::spawn_backend().await;
    let status = api::check_service(&client(&backend.url), "localhost", 22).await.unwrap();
    assert_eq!(status.status, StatusKind::Up);
    assert_eq!(
        backend.state.last_content_type.lock().unwrap().as_deref(),
        Some("application/json")
    );
}

#[tokio::test]
async fn test_check_service_reads_backend_vocabulary() {
    let backend = common::spawn_backend().await;
    let status = api::check_service(&client(&backend.url), "down.local", 5432).await.unwrap();
    assert_eq!(status.status, StatusKind::Down);
    assert_eq!(status.message, "Cannot connect to down.local:5432");
}

#[tokio::test]
async fn test_call_with_timeout_expires() {
    let backend = common::spawn_backend().await;
    backend.state.set_diagnostic_delay(Duration::from_secs(3));
    let (_tx, rx) = watch::channel(false);

    let err = client(&backend.url)
        .call_with_timeout("/api/system-info", Method::GET, None, Duration::from_millis(200), rx)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Timeout(_)));
}

#[tokio::test]
async fn test_call_with_timeout_cancelled() {
    let backend = common::spawn_backend().await;
    backend.state.set_diagnostic_delay(Duration::from_secs(3));
    let (tx, rx) = watch::channel(false);

    let api = client(&backend.url);
    let call = tokio::spawn(async move {
        api.call_with_timeout("/api/system-info", Method::GET, None, Duration::from_secs(10), rx)
            .await
    });
    tokio::time::sleep(Duration::from_millis(100)).await;
    tx.send_replace(true);

    let res = tokio::time::timeout(Duration::from_secs(2), call).await.unwrap().unwrap();
    assert_eq!(res, Err(ApiError::Cancelled));
}

#[tokio::test]
async fn test_load_services_empty_list() {
    let backend = common::spawn_backend().await;
    backend.state.set_services(json!({}));
    let services = api::load_services(&client(&backend.url)).await.unwrap();
    assert!(services.is_empty());
}
