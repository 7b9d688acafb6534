use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use axum::http::header::CACHE_CONTROL;
use axum::http::HeaderValue;

use crate::models::AppState;
use crate::handlers::{actions, dashboard};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(dashboard::dashboard_get))
        .route("/fragments/:container", get(dashboard::fragment_get))
        .route("/glances", get(dashboard::glances_get))
        .route("/actions/instance-info", post(actions::reload_instance_info))
        .route("/actions/services", post(actions::reload_services))
        .route("/actions/services/:name/recheck", post(actions::recheck_service))
        .route("/actions/check", post(actions::check_custom))
        .route("/actions/system-info", post(actions::system_info))
        .route("/actions/network-scan", post(actions::network_scan))
        .route("/actions/tab/:tab", post(actions::switch_tab))
        .route(
            "/static/styles.css",
            get(dashboard::stylesheet_get).layer(SetResponseHeaderLayer::if_not_present(
                CACHE_CONTROL,
                HeaderValue::from_static("public, max-age=3600"),
            )),
        )
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}
