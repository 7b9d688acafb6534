use reqwest::Method;

use crate::models::InstanceInfo;
use super::client::ApiClient;
use super::error::ApiError;

pub const INSTANCE_INFO_PATH: &str = "/api/instance-info";

/// Fetch a fresh telemetry snapshot. Nothing is cached between calls.
pub async fn load_instance_info(api: &ApiClient) -> Result<InstanceInfo, ApiError> {
    let payload = api.call(INSTANCE_INFO_PATH, Method::GET, None).await?;
    Ok(InstanceInfo::from_value(&payload))
}
