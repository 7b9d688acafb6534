use reqwest::Method;
use serde_json::json;

use crate::models::{Service, ServiceList, ServiceStatus};
use super::client::ApiClient;
use super::error::ApiError;

pub const SERVICES_PATH: &str = "/api/services";
pub const CHECK_SERVICE_PATH: &str = "/api/check-service";

/// Load the configured service list. An absent or `null` list is empty.
pub async fn load_services(api: &ApiClient) -> Result<Vec<Service>, ApiError> {
    let payload = api.call(SERVICES_PATH, Method::GET, None).await?;
    let list: ServiceList = serde_json::from_value(payload)
        .map_err(|e| ApiError::Parse(e.to_string()))?;
    Ok(list.into_services())
}

/// Ask the backend to open a TCP connection to `host:port`.
pub async fn check_service(api: &ApiClient, host: &str, port: u16) -> Result<ServiceStatus, ApiError> {
    let body = json!({ "host": host, "port": port });
    let payload = api.call(CHECK_SERVICE_PATH, Method::POST, Some(body)).await?;
    serde_json::from_value(payload).map_err(|e| ApiError::Parse(e.to_string()))
}
