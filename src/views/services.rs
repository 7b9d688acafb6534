use crate::page::ServiceRow;
use crate::templates::{ServiceRowView, ServicesTemplate};
use super::render_fragment;

pub fn recheck_path(name: &str) -> String {
    format!("/actions/services/{}/recheck", urlencoding::encode(name))
}

/// One row per service: name, current status, re-check control.
pub fn render_services(rows: &[ServiceRow]) -> String {
    let rows = rows
        .iter()
        .map(|row| ServiceRowView {
            name: row.service.name.clone(),
            status_class: row.status.status.css_class(),
            status_label: row.status.status.label(),
            message: row.status.message.clone(),
            recheck_path: recheck_path(&row.service.name),
        })
        .collect();
    render_fragment(&ServicesTemplate { rows })
}
