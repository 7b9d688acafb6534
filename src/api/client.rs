use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use serde_json::Value;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::watch;
use yansi::Paint;

use super::error::ApiError;

static SILENT: AtomicBool = AtomicBool::new(false);

pub fn set_silent(silent: bool) {
    SILENT.store(silent, Ordering::Relaxed);
}

fn log_output(msg: String) {
    if !SILENT.load(Ordering::Relaxed) {
        println!("{}", msg);
    }
}

fn log_request(method: &Method, url: &str, body: Option<&Value>) {
    let mut parts = Vec::new();
    parts.push(Paint::new("curl").fg(yansi::Color::Green).bold().to_string());
    parts.push(format!("-X {}", Paint::new(method.as_str()).fg(yansi::Color::Yellow).bold()));
    parts.push(format!("'{}'", Paint::new(url).fg(yansi::Color::Cyan)));
    parts.push(format!("{} {}",
        Paint::new("-H").fg(yansi::Color::Magenta),
        Paint::new("'Content-Type: application/json'").fg(yansi::Color::Magenta)
    ));
    if let Some(d) = body {
        let json_str = serde_json::to_string(d).unwrap_or_default();
        let escaped_json = json_str.replace('\'', "'\\''");
        parts.push(format!("{} {}",
            Paint::new("-d").fg(yansi::Color::Blue),
            Paint::new(format!("'{}'", escaped_json)).fg(yansi::Color::White)
        ));
    }
    log_output(format!("Request:\n{}", parts.join(" ")));
}

/// Thin HTTP client for the monitoring backend.
///
/// Every dashboard operation goes through [`ApiClient::call`] (or its bounded
/// variant), so status handling and JSON decoding live in one place.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .user_agent(format!("monidash/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue a request and decode the JSON body.
    ///
    /// No explicit timeout is applied; the transport default decides when a
    /// dead backend gives up.
    pub async fn call(&self, path: &str, method: Method, body: Option<Value>) -> Result<Value, ApiError> {
        self.send(path, method, body, None).await
    }

    /// Like [`ApiClient::call`], bounded by `timeout` and abandoned as soon as
    /// `cancel` flips to `true`.
    pub async fn call_with_timeout(
        &self,
        path: &str,
        method: Method,
        body: Option<Value>,
        timeout: Duration,
        mut cancel: watch::Receiver<bool>,
    ) -> Result<Value, ApiError> {
        if *cancel.borrow() {
            return Err(ApiError::Cancelled);
        }
        let cancelled = async move {
            // A dropped sender means nobody can cancel us any more.
            if cancel.wait_for(|c| *c).await.is_err() {
                std::future::pending::<()>().await;
            }
        };
        tokio::select! {
            res = self.send(path, method, body, Some(timeout)) => res,
            _ = cancelled => Err(ApiError::Cancelled),
        }
    }

    async fn send(
        &self,
        path: &str,
        method: Method,
        body: Option<Value>,
        timeout: Option<Duration>,
    ) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        log_request(&method, &url, body.as_ref());

        let mut req = self
            .client
            .request(method.clone(), &url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(t) = timeout {
            req = req.timeout(t);
        }
        if let Some(ref b) = body {
            req = req.json(b);
        }

        let map_err = |e: reqwest::Error| match timeout {
            Some(t) if e.is_timeout() => ApiError::Timeout(t.as_secs()),
            _ => ApiError::from_transport(e),
        };

        let response = req.send().await.map_err(map_err)?;
        let status = response.status();
        if !status.is_success() {
            let err = ApiError::from_status(status);
            log_output(format!("Response:\n{}", Paint::new(err.to_string()).fg(yansi::Color::Red)));
            tracing::warn!(%method, path, status = status.as_u16(), "Backend returned an error status");
            return Err(err);
        }

        let text = response.text().await.map_err(map_err)?;
        log_output(format!("Response:\n{}", Paint::new(&text).rgb(100, 100, 100)));

        serde_json::from_str(&text).map_err(|e| {
            tracing::warn!(%method, path, %e, "Backend returned malformed JSON");
            ApiError::Parse(e.to_string())
        })
    }
}
