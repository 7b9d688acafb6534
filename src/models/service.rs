use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::utils::parse_port;

/// A monitored `host:port` endpoint. `name` is unique within a list and keys
/// the row it is rendered into.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub name: String,
    pub host: String,
    #[serde(deserialize_with = "port_from_number_or_string")]
    pub port: u16,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPort {
    Number(u64),
    Text(String),
}

/// Service files may carry the port as `5432` or `"5432"`.
fn port_from_number_or_string<'de, D>(deserializer: D) -> Result<u16, D::Error>
where
    D: Deserializer<'de>,
{
    match RawPort::deserialize(deserializer)? {
        RawPort::Number(n) => parse_port(&n.to_string()).map_err(de::Error::custom),
        RawPort::Text(t) => parse_port(&t).map_err(de::Error::custom),
    }
}

/// Body of `GET /api/services`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ServiceList {
    #[serde(default)]
    services: Option<Vec<Value>>,
}

impl ServiceList {
    /// Entries that do not describe a usable service are skipped, so one bad
    /// entry does not hide the rest of the list.
    pub fn into_services(self) -> Vec<Service> {
        self.services
            .unwrap_or_default()
            .into_iter()
            .filter_map(|entry| match Service::deserialize(&entry) {
                Ok(service) => Some(service),
                Err(e) => {
                    tracing::warn!(%entry, %e, "Skipping malformed service entry");
                    None
                }
            })
            .collect()
    }
}

/// Outcome of a reachability check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", rename_all = "lowercase")]
pub enum StatusKind {
    Checking,
    Up,
    Down,
    Error,
}

impl From<String> for StatusKind {
    fn from(raw: String) -> Self {
        StatusKind::parse(&raw)
    }
}

impl StatusKind {
    /// Reads the backend vocabulary. `online`/`offline` are what the check
    /// endpoint actually sends; anything unrecognised counts as an error.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "checking" => StatusKind::Checking,
            "up" | "online" => StatusKind::Up,
            "down" | "offline" => StatusKind::Down,
            _ => StatusKind::Error,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            StatusKind::Checking => "checking",
            StatusKind::Up => "up",
            StatusKind::Down => "down",
            StatusKind::Error => "error",
        }
    }

    pub fn label(&self) -> String {
        self.css_class().to_uppercase()
    }
}

/// Body of `POST /api/check-service`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub status: StatusKind,
    #[serde(default)]
    pub message: String,
}

impl ServiceStatus {
    pub fn checking() -> Self {
        Self { status: StatusKind::Checking, message: String::new() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { status: StatusKind::Error, message: message.into() }
    }

    /// `UP: Successfully connected to db:5432`
    pub fn summary(&self) -> String {
        format!("{}: {}", self.status.label(), self.message)
    }
}
