//! Turns backend payloads into HTML fragments for the page containers.

pub mod instance_info;
pub mod messages;
pub mod overview;
pub mod services;

pub use instance_info::{field_icon, render_instance_info};
pub use messages::{render_message, render_preformatted, IDLE_INDICATOR, SPINNING_INDICATOR};
pub use overview::{overview_cards, render_system_overview};
pub use services::render_services;

use askama::Template;

/// Render a fragment template. Failures are logged and replaced by an inline
/// error block so a broken fragment never takes the page down.
pub(crate) fn render_fragment<T: Template>(template: &T) -> String {
    match template.render() {
        Ok(html) => html,
        Err(e) => {
            tracing::error!(%e, "Fragment render error");
            r#"<div class="error">Failed to render view</div>"#.to_string()
        }
    }
}
