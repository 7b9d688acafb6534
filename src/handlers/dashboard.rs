use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::models::{AppState, Tab, COMMON_PORTS};
use crate::page::Container;
use crate::templates::{DashboardTemplate, TabView};
use crate::utils::{glances_url, split_host_header};
use super::helpers::render_template;

// Embed the default stylesheet in the binary
pub const DEFAULT_STYLESHEET: &str = include_str!("../../static/styles.css");

pub async fn dashboard_get(State(state): State<AppState>) -> Response {
    let dashboard = &state.dashboard;
    let page = dashboard.page();
    let active = page.active_tab();
    let fragment = |c: Container| page.html(c).unwrap_or_default();
    let placeholder = |c: Container, text: &str| {
        let html = fragment(c);
        if html.is_empty() {
            format!(r#"<div class="checking">{}</div>"#, text)
        } else {
            html
        }
    };

    render_template(DashboardTemplate {
        version: env!("CARGO_PKG_VERSION"),
        api_base_url: dashboard.api().base_url(),
        refresh_secs: dashboard.config().refresh_interval.as_secs().max(1),
        last_refreshed: page
            .services_loaded_at()
            .map(|t| t.format("%H:%M:%S").to_string())
            .unwrap_or_else(|| "never".to_string()),
        tabs: Tab::ALL
            .into_iter()
            .map(|t| TabView { id: t.id(), label: t.label(), active: t == active })
            .collect(),
        common_ports: COMMON_PORTS,
        system_overview: placeholder(Container::SystemOverview, "Loading metrics..."),
        instance_info: placeholder(Container::InstanceInfo, "Loading instance information..."),
        services_list: placeholder(Container::ServicesList, "Loading services..."),
        custom_check_result: fragment(Container::CustomCheckResult),
        network_results: fragment(Container::NetworkResults),
        refresh_indicator: fragment(Container::RefreshIndicator),
    })
}

/// Current HTML of a single container, for partial reloads.
pub async fn fragment_get(
    State(state): State<AppState>,
    Path(container): Path<String>,
) -> Response {
    let Ok(container) = container.parse::<Container>() else {
        return (StatusCode::NOT_FOUND, "Unknown container").into_response();
    };
    match state.dashboard.page().html(container) {
        Some(html) => Html(html).into_response(),
        None => (StatusCode::NOT_FOUND, "Container not mounted").into_response(),
    }
}

pub async fn stylesheet_get(State(state): State<AppState>) -> Response {
    let css = state
        .custom_css
        .clone()
        .unwrap_or_else(|| DEFAULT_STYLESHEET.to_string());
    ([(header::CONTENT_TYPE, "text/css")], css).into_response()
}

/// Redirect to the Glances UI on the host the dashboard was reached through.
pub async fn glances_get(headers: HeaderMap) -> Response {
    let host_header = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("localhost");
    let (host, port) = split_host_header(host_header);
    Redirect::to(&glances_url(host, port)).into_response()
}
