use reqwest::Method;
use serde_json::json;
use std::time::Duration;
use tokio::sync::watch;

use crate::models::DiagnosticOutput;
use super::client::ApiClient;
use super::error::ApiError;

pub const SYSTEM_INFO_PATH: &str = "/api/system-info";
pub const NETWORK_SCAN_PATH: &str = "/api/network-scan";

/// Run the backend's system-info script.
pub async fn system_info(
    api: &ApiClient,
    timeout: Duration,
    cancel: watch::Receiver<bool>,
) -> Result<DiagnosticOutput, ApiError> {
    let payload = api
        .call_with_timeout(SYSTEM_INFO_PATH, Method::GET, None, timeout, cancel)
        .await?;
    serde_json::from_value(payload).map_err(|e| ApiError::Parse(e.to_string()))
}

/// Port-scan `target` through the backend. Slow; always bounded by `timeout`.
pub async fn network_scan(
    api: &ApiClient,
    target: &str,
    timeout: Duration,
    cancel: watch::Receiver<bool>,
) -> Result<DiagnosticOutput, ApiError> {
    let body = json!({ "target": target });
    let payload = api
        .call_with_timeout(NETWORK_SCAN_PATH, Method::POST, Some(body), timeout, cancel)
        .await?;
    serde_json::from_value(payload).map_err(|e| ApiError::Parse(e.to_string()))
}
