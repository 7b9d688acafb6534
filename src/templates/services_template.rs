use askama::Template;

#[derive(Clone, Debug)]
pub struct ServiceRowView {
    pub name: String,
    pub status_class: &'static str,
    pub status_label: String,
    pub message: String,
    /// Percent-encoded form action for the re-check control.
    pub recheck_path: String,
}

#[derive(Template)]
#[template(path = "fragments/services.html")]
pub struct ServicesTemplate {
    pub rows: Vec<ServiceRowView>,
}
