use crate::models::{FieldValue, InstanceInfo, Tab};
use crate::templates::{InfoRow, InfoSection, InstanceInfoTemplate};
use crate::utils::truncate_with_ellipsis;
use super::{render_fragment, render_message};

const PROCESSOR_MAX_CHARS: usize = 50;
const PROCESSOR_KEEP_CHARS: usize = 47;

/// Font Awesome icon for an instance-info field, if it has one.
pub fn field_icon(field: &str) -> Option<&'static str> {
    let icon = match field {
        "hostname" => "fa-tag",
        "platform" => "fa-desktop",
        "architecture" => "fa-cog",
        "processor" | "cpu_cores" | "cpu_threads" | "cpu_frequency" => "fa-microchip",
        "container_type" => "fa-box",
        "cloud_provider" => "fa-cloud",
        "cpu_usage" => "fa-chart-line",
        "memory_total" | "memory_used" | "memory_usage" | "memory_available" => "fa-memory",
        "disk_total" | "disk_used" | "disk_free" | "disk_usage" => "fa-hdd",
        "private_ip" => "fa-network-wired",
        "public_ip" => "fa-globe",
        "uptime" => "fa-clock",
        "boot_time" => "fa-power-off",
        _ => return None,
    };
    Some(icon)
}

fn display_lines(field: &str, value: &FieldValue) -> Vec<String> {
    match value {
        FieldValue::List(items) => items.clone(),
        FieldValue::Text(text) if field == "processor" => {
            vec![truncate_with_ellipsis(text, PROCESSOR_MAX_CHARS, PROCESSOR_KEEP_CHARS)]
        }
        FieldValue::Text(text) => vec![text.clone()],
    }
}

fn section_rows(info: &InstanceInfo, tab: Tab) -> Vec<InfoRow> {
    tab.fields()
        .iter()
        .filter_map(|field| {
            let value = info.displayable(field)?;
            Some(InfoRow {
                icon: field_icon(field).unwrap_or(""),
                name: field.replace('_', " "),
                lines: display_lines(field, value),
            })
        })
        .collect()
}

/// Build the tabbed info panel. Sections without any displayable field are
/// left out; `active` marks which section is shown.
pub fn render_instance_info(info: &InstanceInfo, active: Tab) -> String {
    let sections: Vec<InfoSection> = Tab::ALL
        .into_iter()
        .filter_map(|tab| {
            let rows = section_rows(info, tab);
            if rows.is_empty() {
                return None;
            }
            Some(InfoSection {
                id: tab.id(),
                title: tab.title(),
                active: tab == active,
                rows,
            })
        })
        .collect();

    if sections.is_empty() {
        return render_message("no-data", "No system information available");
    }
    render_fragment(&InstanceInfoTemplate { sections })
}
