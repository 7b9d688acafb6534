use std::sync::Arc;
use std::time::Duration;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use crate::page::Container;
use crate::views::{IDLE_INDICATOR, SPINNING_INDICATOR};
use super::Dashboard;

/// How long the refresh indicator spins after each automatic cycle.
pub const INDICATOR_SPIN: Duration = Duration::from_millis(600);

impl Dashboard {
    /// Re-fetch the service list every `period`. Any timer started earlier is
    /// cancelled first, so at most one is ever running.
    ///
    /// Each cycle runs in its own task: a slow backend does not delay the next
    /// tick, and cycles may overlap.
    pub fn start_auto_refresh(self: &Arc<Self>, period: Duration) {
        let mut slot = self.refresh_slot();
        if let Some(previous) = slot.take() {
            previous.abort();
            tracing::debug!("Replaced running auto-refresh timer");
        }

        let weak = Arc::downgrade(self);
        *slot = Some(tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let Some(dashboard) = weak.upgrade() else {
                    break;
                };
                tokio::spawn(async move {
                    dashboard.refresh_services().await;
                });
            }
        }));
        tracing::info!(period_ms = period.as_millis() as u64, "Auto-refresh started");
    }

    pub fn is_auto_refresh_active(&self) -> bool {
        self.refresh_slot()
            .as_ref()
            .map(|task| !task.is_finished())
            .unwrap_or(false)
    }

    /// One automatic cycle.
    pub async fn refresh_services(self: &Arc<Self>) {
        tracing::debug!("Auto-refresh cycle");
        self.show_refresh_indicator();
        self.load_services().await;
    }

    fn show_refresh_indicator(&self) {
        if !self.page.set_html(Container::RefreshIndicator, SPINNING_INDICATOR) {
            return;
        }
        let page = self.page.clone();
        tokio::spawn(async move {
            tokio::time::sleep(INDICATOR_SPIN).await;
            page.set_html(Container::RefreshIndicator, IDLE_INDICATOR);
        });
    }
}
