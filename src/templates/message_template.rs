use askama::Template;

/// A single styled block: error, placeholder, progress note or check result.
#[derive(Template)]
#[template(path = "fragments/message.html")]
pub struct MessageTemplate<'a> {
    pub class: &'a str,
    pub message: &'a str,
}

#[derive(Template)]
#[template(path = "fragments/preformatted.html")]
pub struct PreformattedTemplate<'a> {
    pub text: &'a str,
}
