//! monidash: a dashboard for a host monitoring backend.
//!
//! The [`dashboard::Dashboard`] controller polls the backend through
//! [`api::ApiClient`], renders HTML fragments into a [`page::Page`] and keeps
//! service statuses current on a fixed timer. [`routes::build_router`] serves
//! the page over HTTP.

pub mod api;
pub mod config;
pub mod dashboard;
pub mod handlers;
pub mod models;
pub mod page;
pub mod routes;
pub mod templates;
pub mod utils;
pub mod views;
