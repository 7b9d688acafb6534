use crate::templates::{MessageTemplate, PreformattedTemplate};
use super::render_fragment;

pub const SPINNING_INDICATOR: &str = r#"<i class="fas fa-sync-alt fa-spin"></i>"#;
pub const IDLE_INDICATOR: &str = r#"<i class="fas fa-hourglass-half"></i>"#;

/// `<div class="{class}">{message}</div>` with the message escaped.
pub fn render_message(class: &str, message: &str) -> String {
    render_fragment(&MessageTemplate { class, message })
}

pub fn render_preformatted(text: &str) -> String {
    render_fragment(&PreformattedTemplate { text })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_is_escaped() {
        let html = render_message("error", "<script>");
        assert!(html.contains(r#"<div class="error">"#));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_preformatted() {
        let html = render_preformatted("PORT   STATE SERVICE");
        assert!(html.starts_with("<pre>PORT   STATE SERVICE</pre>"));
    }
}
