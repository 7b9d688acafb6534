use crate::api;
use crate::config::DEFAULT_SCAN_TARGET;
use crate::page::Container;
use crate::views::{render_message, render_preformatted};
use super::Dashboard;

impl Dashboard {
    /// Dump the backend's system-info script output.
    pub async fn get_system_info(&self) {
        if !self.page.is_mounted(Container::NetworkResults) {
            return;
        }
        self.page.set_html(
            Container::NetworkResults,
            render_message("checking", "Gathering system information..."),
        );

        let result = api::system_info(&self.api, self.config.diagnostic_timeout, self.shutdown.subscribe()).await;
        let html = match result {
            Ok(out) => render_preformatted(out.display_text("No output")),
            Err(e) => {
                tracing::warn!(%e, "System info failed");
                render_message("error", &format!("Failed to get system info: {}", e))
            }
        };
        self.page.set_html(Container::NetworkResults, html);
    }

    /// Port-scan `target` (default `localhost`) through the backend.
    pub async fn scan_network(&self, target: Option<&str>) {
        if !self.page.is_mounted(Container::NetworkResults) {
            return;
        }
        let target = target.map(str::trim).filter(|t| !t.is_empty()).unwrap_or(DEFAULT_SCAN_TARGET);
        self.page.set_html(
            Container::NetworkResults,
            render_message("checking", "Scanning network... (this may take a moment)"),
        );

        let result = api::network_scan(&self.api, target, self.config.diagnostic_timeout, self.shutdown.subscribe()).await;
        let html = match result {
            Ok(out) => render_preformatted(out.display_text("No scan results")),
            Err(e) => {
                tracing::warn!(target, %e, "Network scan failed");
                render_message("error", &format!("Network scan failed: {}", e))
            }
        };
        self.page.set_html(Container::NetworkResults, html);
    }
}
