use askama::Template;

/// Flattened [`crate::models::MetricCard`] for the template.
#[derive(Clone, Debug)]
pub struct CardView {
    pub label: &'static str,
    pub value: String,
    pub has_bar: bool,
    pub bar_width: String,
    pub bar_class: &'static str,
}

#[derive(Template)]
#[template(path = "fragments/system_overview.html")]
pub struct SystemOverviewTemplate {
    pub cards: Vec<CardView>,
}
