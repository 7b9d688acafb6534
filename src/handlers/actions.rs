use axum::{
    extract::{Form, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::models::{AppState, Tab};
use super::helpers::back_to_dashboard;

#[derive(Debug, Default, Deserialize)]
pub struct CheckForm {
    #[serde(default)]
    pub host: String,
    #[serde(default)]
    pub port: String,
    /// Selection from the common ports list; fills a blank port.
    #[serde(default)]
    pub common_port: String,
}

impl CheckForm {
    /// A typed port takes precedence over the common-ports selection.
    pub fn effective_port(&self) -> &str {
        if self.port.trim().is_empty() {
            self.common_port.trim()
        } else {
            self.port.trim()
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ScanForm {
    #[serde(default)]
    pub target: Option<String>,
}

pub async fn reload_instance_info(State(state): State<AppState>) -> Response {
    state.dashboard.load_instance_info().await;
    back_to_dashboard()
}

pub async fn reload_services(State(state): State<AppState>) -> Response {
    state.dashboard.load_services().await;
    back_to_dashboard()
}

pub async fn recheck_service(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Response {
    let row = state
        .dashboard
        .page()
        .service_rows()
        .into_iter()
        .find(|r| r.service.name == name);
    let Some(row) = row else {
        return (StatusCode::NOT_FOUND, "Unknown service").into_response();
    };
    state
        .dashboard
        .recheck_service(&row.service.host, row.service.port, &row.service.name)
        .await;
    back_to_dashboard()
}

pub async fn check_custom(
    State(state): State<AppState>,
    Form(form): Form<CheckForm>,
) -> Response {
    state
        .dashboard
        .check_custom_service(&form.host, form.effective_port())
        .await;
    back_to_dashboard()
}

pub async fn system_info(State(state): State<AppState>) -> Response {
    state.dashboard.get_system_info().await;
    back_to_dashboard()
}

pub async fn network_scan(
    State(state): State<AppState>,
    Form(form): Form<ScanForm>,
) -> Response {
    state.dashboard.scan_network(form.target.as_deref()).await;
    back_to_dashboard()
}

pub async fn switch_tab(
    State(state): State<AppState>,
    Path(tab): Path<String>,
) -> Response {
    match tab.parse::<Tab>() {
        Ok(tab) => {
            state.dashboard.switch_tab(tab);
            back_to_dashboard()
        }
        Err(e) => (StatusCode::NOT_FOUND, e).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_port_fills_blank_port() {
        let form = CheckForm { host: "db".into(), port: " ".into(), common_port: "5432".into() };
        assert_eq!(form.effective_port(), "5432");
    }

    #[test]
    fn test_typed_port_wins() {
        let form = CheckForm { host: "db".into(), port: "6432".into(), common_port: "5432".into() };
        assert_eq!(form.effective_port(), "6432");
    }
}
