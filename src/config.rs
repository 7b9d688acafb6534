use std::env;
use std::path::Path;
use std::time::Duration;

// Default configuration constants
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_MONITOR_API_URL: &str = "http://localhost:80";
pub const DEFAULT_REFRESH_INTERVAL_MS: u64 = 30_000;
pub const DEFAULT_DIAGNOSTIC_TIMEOUT_SECS: u64 = 45;
pub const DEFAULT_SCAN_TARGET: &str = "localhost";

/// Runtime settings for the dashboard controller.
#[derive(Clone, Debug)]
pub struct DashboardConfig {
    pub api_base_url: String,
    pub refresh_interval: Duration,
    pub diagnostic_timeout: Duration,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_MONITOR_API_URL.to_string(),
            refresh_interval: Duration::from_millis(DEFAULT_REFRESH_INTERVAL_MS),
            diagnostic_timeout: Duration::from_secs(DEFAULT_DIAGNOSTIC_TIMEOUT_SECS),
        }
    }
}

impl DashboardConfig {
    pub fn from_env() -> Self {
        Self {
            api_base_url: get_monitor_api_url(),
            refresh_interval: get_refresh_interval(),
            diagnostic_timeout: get_diagnostic_timeout(),
        }
    }
}

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        dotenvy::from_path(Path::new(path)).ok();
    } else {
        dotenvy::dotenv().ok();
    }
}

pub fn get_monitor_api_url() -> String {
    sanitize_base_url(&env::var("MONITOR_API_URL").unwrap_or_else(|_| DEFAULT_MONITOR_API_URL.to_string()))
}

pub fn get_refresh_interval() -> Duration {
    Duration::from_millis(positive_u64_var("REFRESH_INTERVAL_MS").unwrap_or(DEFAULT_REFRESH_INTERVAL_MS))
}

pub fn get_diagnostic_timeout() -> Duration {
    Duration::from_secs(positive_u64_var("DIAGNOSTIC_TIMEOUT_SECS").unwrap_or(DEFAULT_DIAGNOSTIC_TIMEOUT_SECS))
}

pub fn get_server_host() -> String {
    env::var("MONIDASH_HOST")
        .ok()
        .map(|h| h.trim().to_string())
        .filter(|h| !h.is_empty())
        .unwrap_or_else(|| DEFAULT_HOST.to_string())
}

pub fn get_server_port() -> u16 {
    env::var("MONIDASH_PORT")
        .ok()
        .and_then(|p| p.trim().parse::<u16>().ok())
        .filter(|p| *p != 0)
        .unwrap_or(DEFAULT_PORT)
}

fn positive_u64_var(name: &str) -> Option<u64> {
    env::var(name)
        .ok()
        .and_then(|raw| raw.trim().parse::<u64>().ok())
        .filter(|v| *v > 0)
}

pub fn sanitize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_MONITOR_API_URL.to_string()
    } else {
        trimmed.to_string()
    }
}
