use askama::Template;

use crate::models::CommonPort;

#[derive(Clone, Debug)]
pub struct TabView {
    pub id: &'static str,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate<'a> {
    pub version: &'static str,
    pub api_base_url: &'a str,
    pub refresh_secs: u64,
    pub last_refreshed: String,
    pub tabs: Vec<TabView>,
    pub common_ports: &'static [CommonPort],
    pub system_overview: String,
    pub instance_info: String,
    pub services_list: String,
    pub custom_check_result: String,
    pub network_results: String,
    pub refresh_indicator: String,
}
