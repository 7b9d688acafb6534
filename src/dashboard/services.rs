use std::sync::Arc;

use crate::api;
use crate::models::ServiceStatus;
use crate::page::Container;
use crate::views::render_message;
use super::Dashboard;

impl Dashboard {
    /// Fetch the service list, render one `checking` row per service and fire
    /// one independent check per row. The checks are not awaited.
    pub async fn load_services(self: &Arc<Self>) {
        if !self.page.is_mounted(Container::ServicesList) {
            return;
        }

        let services = match api::load_services(&self.api).await {
            Ok(services) => services,
            Err(e) => {
                tracing::warn!(%e, "Failed to load services");
                self.page.set_html(
                    Container::ServicesList,
                    render_message("error", &format!("Failed to load services: {}", e)),
                );
                return;
            }
        };

        if services.is_empty() {
            self.page.set_html(Container::ServicesList, render_message("no-data", "No services configured"));
            return;
        }

        tracing::debug!(count = services.len(), "Checking services");
        self.page.show_service_rows(&services);
        for service in services {
            let dashboard = Arc::clone(self);
            tokio::spawn(async move {
                dashboard
                    .check_service(&service.host, service.port, Some(&service.name))
                    .await;
            });
        }
    }

    /// Check `host:port`. With a `name`, the matching row shows the outcome.
    ///
    /// Never fails: a failed call comes back as an `error` status carrying the
    /// failure text. When several checks for the same row overlap, only the
    /// most recently issued one is applied.
    pub async fn check_service(&self, host: &str, port: u16, name: Option<&str>) -> ServiceStatus {
        let ticket = name.and_then(|n| self.page.begin_check(n));

        let status = match api::check_service(&self.api, host, port).await {
            Ok(status) => status,
            Err(e) => {
                tracing::warn!(host, port, %e, "Service check failed");
                ServiceStatus::error(e.to_string())
            }
        };

        if let (Some(name), Some(ticket)) = (name, ticket) {
            if !self.page.apply_check(name, ticket, &status) {
                tracing::debug!(name, "Discarded superseded check result");
            }
        }
        status
    }

    /// User-triggered re-check of one row.
    pub async fn recheck_service(&self, host: &str, port: u16, name: &str) -> ServiceStatus {
        self.check_service(host, port, Some(name)).await
    }
}
