use askama::Template;

#[derive(Clone, Debug)]
pub struct InfoRow {
    /// Font Awesome class, empty when the field has no icon.
    pub icon: &'static str,
    pub name: String,
    /// One entry per displayed line.
    pub lines: Vec<String>,
}

#[derive(Clone, Debug)]
pub struct InfoSection {
    pub id: &'static str,
    pub title: &'static str,
    pub active: bool,
    pub rows: Vec<InfoRow>,
}

#[derive(Template)]
#[template(path = "fragments/instance_info.html")]
pub struct InstanceInfoTemplate {
    pub sections: Vec<InfoSection>,
}
