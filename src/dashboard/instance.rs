use crate::api;
use crate::models::Tab;
use crate::page::Container;
use crate::views::{render_instance_info, render_message, render_system_overview};
use super::Dashboard;

impl Dashboard {
    /// Fetch instance info and render the info panel and the overview cards,
    /// whichever of the two is on the page.
    pub async fn load_instance_info(&self) {
        let has_panel = self.page.is_mounted(Container::InstanceInfo);
        let has_overview = self.page.is_mounted(Container::SystemOverview);
        if !has_panel && !has_overview {
            return;
        }

        match api::load_instance_info(&self.api).await {
            Ok(info) => {
                tracing::debug!(fields = info.len(), "Instance info loaded");
                if has_panel {
                    self.page.set_html(Container::InstanceInfo, render_instance_info(&info, Tab::System));
                }
                if has_overview {
                    self.page.set_html(Container::SystemOverview, render_system_overview(&info));
                }
                self.page.set_instance_info(Some(info));
            }
            Err(e) => {
                tracing::warn!(%e, "Failed to load instance info");
                let html = render_message("error", &format!("Failed to load instance info: {}", e));
                self.page.set_instance_info(None);
                self.page.set_html(Container::InstanceInfo, html.clone());
                self.page.set_html(Container::SystemOverview, html);
            }
        }
    }

    /// Make `tab` the one visible section of the info panel.
    pub fn switch_tab(&self, tab: Tab) {
        self.page.set_active_tab(tab);
        if let Some(info) = self.page.instance_info() {
            self.page.set_html(Container::InstanceInfo, render_instance_info(&info, tab));
        }
    }
}
