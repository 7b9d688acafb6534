use serde::Deserialize;

/// Body of `/api/system-info` and `/api/network-scan`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct DiagnosticOutput {
    #[serde(default)]
    pub output: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl DiagnosticOutput {
    /// `output` if non-empty, else `error`, else `fallback`.
    pub fn display_text<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.output
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.error.as_deref().filter(|s| !s.is_empty()))
            .unwrap_or(fallback)
    }
}
