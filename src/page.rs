//! In-process stand-in for the browser DOM.
//!
//! The page is a set of named containers, each holding an HTML fragment. The
//! service list is kept as structured rows so single status nodes can be
//! updated in place.

use chrono::{DateTime, Local};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::{InstanceInfo, Service, ServiceStatus, Tab};
use crate::views;

/// Named slots of the dashboard page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Container {
    InstanceInfo,
    SystemOverview,
    ServicesList,
    CustomCheckResult,
    NetworkResults,
    RefreshIndicator,
}

impl Container {
    pub const ALL: [Container; 6] = [
        Container::InstanceInfo,
        Container::SystemOverview,
        Container::ServicesList,
        Container::CustomCheckResult,
        Container::NetworkResults,
        Container::RefreshIndicator,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Container::InstanceInfo => "instance-info",
            Container::SystemOverview => "system-overview",
            Container::ServicesList => "services-list",
            Container::CustomCheckResult => "custom-check-result",
            Container::NetworkResults => "network-results",
            Container::RefreshIndicator => "refresh-indicator",
        }
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Container {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Container::ALL
            .into_iter()
            .find(|c| c.id() == s)
            .ok_or_else(|| format!("unknown container: {}", s))
    }
}

/// A rendered service and the latest status applied to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceRow {
    pub service: Service,
    pub status: ServiceStatus,
    /// Ticket of the newest check issued for this row.
    generation: u64,
}

impl ServiceRow {
    pub fn new(service: Service, status: ServiceStatus) -> Self {
        Self { service, status, generation: 0 }
    }
}

#[derive(Clone, Debug)]
enum ServicesPanel {
    Rows(Vec<ServiceRow>),
    /// Placeholder or error block.
    Html(String),
}

#[derive(Debug, Default)]
struct PageState {
    mounted: HashSet<Container>,
    fragments: HashMap<Container, String>,
    services: Option<ServicesPanel>,
    instance_info: Option<InstanceInfo>,
    active_tab: Tab,
    next_ticket: u64,
    services_loaded_at: Option<DateTime<Local>>,
}

/// Shared handle to the page. Cloning is cheap; all clones see the same page.
#[derive(Clone, Debug, Default)]
pub struct Page {
    inner: Arc<RwLock<PageState>>,
}

impl Page {
    /// A page where only `mounted` containers exist. Writes to any other
    /// container are dropped, like writes to a missing DOM node.
    pub fn new(mounted: impl IntoIterator<Item = Container>) -> Self {
        let state = PageState {
            mounted: mounted.into_iter().collect(),
            ..PageState::default()
        };
        let page = Self { inner: Arc::new(RwLock::new(state)) };
        page.set_html(Container::RefreshIndicator, views::IDLE_INDICATOR);
        page
    }

    /// A page with every container mounted.
    pub fn full() -> Self {
        Self::new(Container::ALL)
    }

    fn read(&self) -> RwLockReadGuard<'_, PageState> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, PageState> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn is_mounted(&self, container: Container) -> bool {
        self.read().mounted.contains(&container)
    }

    /// Replace a container's content. Returns `false` if it is not mounted.
    pub fn set_html(&self, container: Container, html: impl Into<String>) -> bool {
        let mut state = self.write();
        if !state.mounted.contains(&container) {
            return false;
        }
        if container == Container::ServicesList {
            state.services = Some(ServicesPanel::Html(html.into()));
        } else {
            state.fragments.insert(container, html.into());
        }
        true
    }

    /// Current content of a container; `None` if it is not mounted.
    pub fn html(&self, container: Container) -> Option<String> {
        let state = self.read();
        if !state.mounted.contains(&container) {
            return None;
        }
        if container == Container::ServicesList {
            return Some(match &state.services {
                Some(ServicesPanel::Rows(rows)) => views::render_services(rows),
                Some(ServicesPanel::Html(html)) => html.clone(),
                None => String::new(),
            });
        }
        Some(state.fragments.get(&container).cloned().unwrap_or_default())
    }

    /// Replace the service list with fresh rows, all `checking`.
    pub fn show_service_rows(&self, services: &[Service]) -> bool {
        let mut state = self.write();
        if !state.mounted.contains(&Container::ServicesList) {
            return false;
        }
        let rows = services
            .iter()
            .cloned()
            .map(|s| ServiceRow::new(s, ServiceStatus::checking()))
            .collect();
        state.services = Some(ServicesPanel::Rows(rows));
        state.services_loaded_at = Some(Local::now());
        true
    }

    pub fn service_rows(&self) -> Vec<ServiceRow> {
        match &self.read().services {
            Some(ServicesPanel::Rows(rows)) => rows.clone(),
            _ => Vec::new(),
        }
    }

    pub fn service_status(&self, name: &str) -> Option<ServiceStatus> {
        match &self.read().services {
            Some(ServicesPanel::Rows(rows)) => rows
                .iter()
                .find(|r| r.service.name == name)
                .map(|r| r.status.clone()),
            _ => None,
        }
    }

    /// Issue a ticket for a new check of row `name`. `None` when no such row
    /// is on the page.
    pub fn begin_check(&self, name: &str) -> Option<u64> {
        let mut state = self.write();
        state.next_ticket += 1;
        let ticket = state.next_ticket;
        match &mut state.services {
            Some(ServicesPanel::Rows(rows)) => {
                let row = rows.iter_mut().find(|r| r.service.name == name)?;
                row.generation = ticket;
                Some(ticket)
            }
            _ => None,
        }
    }

    /// Apply a check result unless a newer check was issued for the row in
    /// the meantime. Returns whether the status node changed.
    pub fn apply_check(&self, name: &str, ticket: u64, status: &ServiceStatus) -> bool {
        let mut state = self.write();
        match &mut state.services {
            Some(ServicesPanel::Rows(rows)) => match rows.iter_mut().find(|r| r.service.name == name) {
                Some(row) if row.generation == ticket => {
                    row.status = status.clone();
                    true
                }
                _ => false,
            },
            _ => false,
        }
    }

    pub fn services_loaded_at(&self) -> Option<DateTime<Local>> {
        self.read().services_loaded_at
    }

    pub fn set_instance_info(&self, info: Option<InstanceInfo>) {
        let mut state = self.write();
        state.instance_info = info;
        state.active_tab = Tab::System;
    }

    pub fn instance_info(&self) -> Option<InstanceInfo> {
        self.read().instance_info.clone()
    }

    pub fn active_tab(&self) -> Tab {
        self.read().active_tab
    }

    pub fn set_active_tab(&self, tab: Tab) {
        self.write().active_tab = tab;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StatusKind;

    fn services() -> Vec<Service> {
        vec![
            Service { name: "redis".into(), host: "localhost".into(), port: 6379 },
            Service { name: "db".into(), host: "db.internal".into(), port: 5432 },
        ]
    }

    fn up(msg: &str) -> ServiceStatus {
        ServiceStatus { status: StatusKind::Up, message: msg.into() }
    }

    #[test]
    fn test_unmounted_container_ignored() {
        let page = Page::new([Container::ServicesList]);
        assert!(!page.set_html(Container::InstanceInfo, "<p>x</p>"));
        assert_eq!(page.html(Container::InstanceInfo), None);
    }

    #[test]
    fn test_container_ids_round_trip() {
        for c in Container::ALL {
            assert_eq!(c.id().parse::<Container>(), Ok(c));
        }
        assert!("sidebar".parse::<Container>().is_err());
    }

    #[test]
    fn test_rows_start_checking() {
        let page = Page::full();
        page.show_service_rows(&services());
        assert_eq!(page.service_status("redis"), Some(ServiceStatus::checking()));
        assert_eq!(page.service_rows().len(), 2);
    }

    #[test]
    fn test_newest_ticket_wins() {
        let page = Page::full();
        page.show_service_rows(&services());
        let older = page.begin_check("redis").unwrap();
        let newer = page.begin_check("redis").unwrap();
        assert!(page.apply_check("redis", newer, &up("fresh")));
        assert!(!page.apply_check("redis", older, &ServiceStatus::error("stale")));
        assert_eq!(page.service_status("redis"), Some(up("fresh")));
    }

    #[test]
    fn test_rows_keyed_by_name() {
        let page = Page::full();
        page.show_service_rows(&services());
        let t = page.begin_check("db").unwrap();
        page.apply_check("db", t, &up("ok"));
        assert_eq!(page.service_status("redis"), Some(ServiceStatus::checking()));
        assert_eq!(page.service_status("db"), Some(up("ok")));
    }

    #[test]
    fn test_unknown_row_gets_no_ticket() {
        let page = Page::full();
        page.show_service_rows(&services());
        assert_eq!(page.begin_check("mongo"), None);
    }

    #[test]
    fn test_reload_discards_pending_results() {
        let page = Page::full();
        page.show_service_rows(&services());
        let t = page.begin_check("redis").unwrap();
        page.show_service_rows(&services());
        assert!(!page.apply_check("redis", t, &up("late")));
        assert_eq!(page.service_status("redis"), Some(ServiceStatus::checking()));
    }

    #[test]
    fn test_services_placeholder_replaces_rows() {
        let page = Page::full();
        page.show_service_rows(&services());
        page.set_html(Container::ServicesList, "<div class=\"no-data\">No services configured</div>");
        assert!(page.service_rows().is_empty());
        assert!(page.html(Container::ServicesList).unwrap().contains("No services configured"));
    }

    #[test]
    fn test_refresh_indicator_starts_idle() {
        let page = Page::full();
        assert_eq!(page.html(Container::RefreshIndicator).as_deref(), Some(views::IDLE_INDICATOR));
    }
}
