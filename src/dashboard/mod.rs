//! The dashboard controller.
//!
//! [`Dashboard`] owns the API client, the page it renders into and the
//! auto-refresh timer. It is shared as an `Arc` between the web handlers and
//! the timer task; no process-wide instance exists.

mod custom_check;
mod diagnostics;
mod instance;
mod polling;
mod services;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::api::ApiClient;
use crate::config::DashboardConfig;
use crate::page::Page;

pub struct Dashboard {
    api: ApiClient,
    page: Page,
    config: DashboardConfig,
    refresh_task: Mutex<Option<JoinHandle<()>>>,
    shutdown: watch::Sender<bool>,
}

impl Dashboard {
    pub fn new(api: ApiClient, page: Page, config: DashboardConfig) -> Arc<Self> {
        let (shutdown, _) = watch::channel(false);
        Arc::new(Self {
            api,
            page,
            config,
            refresh_task: Mutex::new(None),
            shutdown,
        })
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    fn refresh_slot(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        self.refresh_task.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// First load of everything, then the periodic service refresh.
    pub async fn initialize(self: &Arc<Self>) {
        self.shutdown.send_replace(false);
        tracing::info!(api = self.api.base_url(), "Initializing dashboard");
        tokio::join!(self.load_instance_info(), self.load_services());
        self.start_auto_refresh(self.config.refresh_interval);
    }

    /// Stop the timer and abandon running diagnostics. Safe to call at any
    /// time, including repeatedly. Outstanding service checks still finish.
    pub fn teardown(&self) {
        if let Some(task) = self.refresh_slot().take() {
            task.abort();
            tracing::info!("Auto-refresh stopped");
        }
        self.shutdown.send_replace(true);
    }
}
