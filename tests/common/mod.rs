//! Fake monitoring backend for integration tests.
#![allow(dead_code)]

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use monidash::api::ApiClient;
use monidash::config::DashboardConfig;
use monidash::dashboard::Dashboard;
use monidash::page::Page;

#[derive(Clone)]
pub struct BackendState {
    pub instance_info: Arc<Mutex<Value>>,
    pub instance_status: Arc<Mutex<u16>>,
    pub services: Arc<Mutex<Value>>,
    pub services_status: Arc<Mutex<u16>>,
    /// Extra latency per checked host.
    pub check_delays: Arc<Mutex<HashMap<String, Duration>>>,
    pub diagnostic_delay: Arc<Mutex<Duration>>,
    pub instance_calls: Arc<AtomicUsize>,
    pub services_calls: Arc<AtomicUsize>,
    pub check_calls: Arc<AtomicUsize>,
    pub last_content_type: Arc<Mutex<Option<String>>>,
    pub last_scan_target: Arc<Mutex<Option<String>>>,
}

impl Default for BackendState {
    fn default() -> Self {
        Self {
            instance_info: Arc::new(Mutex::new(json!({}))),
            instance_status: Arc::new(Mutex::new(200)),
            services: Arc::new(Mutex::new(json!({ "services": [] }))),
            services_status: Arc::new(Mutex::new(200)),
            check_delays: Arc::new(Mutex::new(HashMap::new())),
            diagnostic_delay: Arc::new(Mutex::new(Duration::ZERO)),
            instance_calls: Arc::new(AtomicUsize::new(0)),
            services_calls: Arc::new(AtomicUsize::new(0)),
            check_calls: Arc::new(AtomicUsize::new(0)),
            last_content_type: Arc::new(Mutex::new(None)),
            last_scan_target: Arc::new(Mutex::new(None)),
        }
    }
}

impl BackendState {
    pub fn set_instance_info(&self, v: Value) {
        *self.instance_info.lock().unwrap() = v;
    }

    pub fn set_services(&self, v: Value) {
        *self.services.lock().unwrap() = v;
    }

    pub fn fail_instance_info(&self, status: u16) {
        *self.instance_status.lock().unwrap() = status;
    }

    pub fn fail_services(&self, status: u16) {
        *self.services_status.lock().unwrap() = status;
    }

    pub fn delay_host(&self, host: &str, delay: Duration) {
        self.check_delays.lock().unwrap().insert(host.to_string(), delay);
    }

    pub fn set_diagnostic_delay(&self, delay: Duration) {
        *self.diagnostic_delay.lock().unwrap() = delay;
    }

    pub fn checks(&self) -> usize {
        self.check_calls.load(Ordering::SeqCst)
    }

    pub fn service_loads(&self) -> usize {
        self.services_calls.load(Ordering::SeqCst)
    }

    pub fn instance_loads(&self) -> usize {
        self.instance_calls.load(Ordering::SeqCst)
    }
}

async fn instance_info(State(s): State<BackendState>) -> impl IntoResponse {
    s.instance_calls.fetch_add(1, Ordering::SeqCst);
    let status = StatusCode::from_u16(*s.instance_status.lock().unwrap()).unwrap();
    let body = s.instance_info.lock().unwrap().clone();
    (status, Json(body))
}

async fn services(State(s): State<BackendState>) -> impl IntoResponse {
    s.services_calls.fetch_add(1, Ordering::SeqCst);
    let status = StatusCode::from_u16(*s.services_status.lock().unwrap()).unwrap();
    let body = s.services.lock().unwrap().clone();
    (status, Json(body))
}

async fn check_service(
    State(s): State<BackendState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    s.check_calls.fetch_add(1, Ordering::SeqCst);
    *s.last_content_type.lock().unwrap() = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let host = body["host"].as_str().unwrap_or("localhost").to_string();
    let port = body["port"].as_u64().unwrap_or(80);
    let delay = s.check_delays.lock().unwrap().get(&host).copied();
    if let Some(d) = delay {
        tokio::time::sleep(d).await;
    }

    match host.as_str() {
        "broken.local" => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "boom" })),
        ),
        "down.local" => (
            StatusCode::OK,
            Json(json!({
                "host": host, "port": port, "type": "tcp",
                "status": "offline",
                "message": format!("Cannot connect to {}:{}", host, port)
            })),
        ),
        _ => (
            StatusCode::OK,
            Json(json!({
                "host": host, "port": port, "type": "tcp",
                "status": "online",
                "message": format!("Successfully connected to {}:{}", host, port)
            })),
        ),
    }
}

async fn system_info(State(s): State<BackendState>) -> impl IntoResponse {
    let delay = *s.diagnostic_delay.lock().unwrap();
    tokio::time::sleep(delay).await;
    Json(json!({ "output": "Linux web-1 6.1.0 x86_64", "error": "" }))
}

async fn network_scan(State(s): State<BackendState>, Json(body): Json<Value>) -> impl IntoResponse {
    let target = body["target"].as_str().unwrap_or_default().to_string();
    *s.last_scan_target.lock().unwrap() = Some(target.clone());
    let delay = *s.diagnostic_delay.lock().unwrap();
    tokio::time::sleep(delay).await;
    Json(json!({ "target": target, "output": "", "error": "nmap: command not found" }))
}

async fn garbage() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/json")], "{not json")
}

pub struct Backend {
    pub url: String,
    pub state: BackendState,
}

/// Start a fake backend on an ephemeral port.
pub async fn spawn_backend() -> Backend {
    let state = BackendState::default();
    let app = Router::new()
        .route("/api/instance-info", get(instance_info))
        .route("/api/services", get(services))
        .route("/api/check-service", post(check_service))
        .route("/api/system-info", get(system_info))
        .route("/api/network-scan", post(network_scan))
        .route("/api/garbage", get(garbage))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    Backend { url: format!("http://{}", addr), state }
}

/// Base URL nothing listens on.
pub async fn dead_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

pub fn test_config(url: &str) -> DashboardConfig {
    DashboardConfig {
        api_base_url: url.to_string(),
        refresh_interval: Duration::from_secs(30),
        diagnostic_timeout: Duration::from_secs(5),
    }
}

pub fn dashboard(url: &str, page: Page) -> Arc<Dashboard> {
    monidash::api::set_silent(true);
    let api = ApiClient::new(url).unwrap();
    Dashboard::new(api, page, test_config(url))
}

pub fn dashboard_with(config: DashboardConfig, page: Page) -> Arc<Dashboard> {
    monidash::api::set_silent(true);
    let api = ApiClient::new(&config.api_base_url).unwrap();
    Dashboard::new(api, page, config)
}

/// Poll `cond` until it holds or `timeout` passes.
pub async fn wait_until<F: Fn() -> bool>(cond: F, timeout: Duration) -> bool {
    let deadline = tokio::time::Instant::now() + timeout;
    while tokio::time::Instant::now() < deadline {
        if cond() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    cond()
}
