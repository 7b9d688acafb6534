use crate::models::{InstanceInfo, MetricCard};
use crate::templates::{CardView, SystemOverviewTemplate};
use super::render_fragment;

/// The four overview cards. Missing percentages read as `0%`, a missing
/// uptime as `Unknown`.
pub fn overview_cards(info: &InstanceInfo) -> Vec<MetricCard> {
    vec![
        MetricCard::new("CPU Usage", info.text("cpu_usage").unwrap_or("0%")),
        MetricCard::new("Memory Usage", info.text("memory_usage").unwrap_or("0%")),
        MetricCard::new("Disk Usage", info.text("disk_usage").unwrap_or("0%")),
        MetricCard::new("Uptime", info.text("uptime").unwrap_or("Unknown")),
    ]
}

pub fn render_system_overview(info: &InstanceInfo) -> String {
    let cards = overview_cards(info)
        .into_iter()
        .map(|card| {
            let (has_bar, bar_width, bar_class) = match card.progress {
                Some(p) => (true, p.width, p.level.css_class()),
                None => (false, String::new(), ""),
            };
            CardView {
                label: card.label,
                value: card.value,
                has_bar,
                bar_width,
                bar_class,
            }
        })
        .collect();
    render_fragment(&SystemOverviewTemplate { cards })
}
