use crate::models::ServiceStatus;
use crate::page::Container;
use crate::utils::parse_port;
use crate::views::render_message;
use super::Dashboard;

impl Dashboard {
    /// Ad-hoc `host:port` check from the checker form. Does not touch the
    /// service list. Blank or invalid input never reaches the backend.
    pub async fn check_custom_service(&self, host: &str, port: &str) -> Option<ServiceStatus> {
        let host = host.trim();
        let port = port.trim();

        if host.is_empty() || port.is_empty() {
            self.show_result("error", "Please enter both host and port");
            return None;
        }
        let port = match parse_port(port) {
            Ok(p) => p,
            Err(msg) => {
                self.show_result("error", &msg);
                return None;
            }
        };

        self.show_result("checking", "Checking connection...");
        let status = self.check_service(host, port, None).await;
        self.show_result(status.status.css_class(), &status.summary());
        Some(status)
    }

    fn show_result(&self, class: &str, message: &str) {
        self.page.set_html(
            Container::CustomCheckResult,
            render_message(&format!("result {}", class), message),
        );
    }
}
