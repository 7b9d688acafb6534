use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};

pub fn render_template<T: askama::Template>(t: T) -> Response {
    match t.render() {
        Ok(body) => Html(body).into_response(),
        Err(e) => {
            tracing::error!(%e, "Template render error");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}

/// Post/redirect/get back to the dashboard.
pub fn back_to_dashboard() -> Response {
    Redirect::to("/").into_response()
}
