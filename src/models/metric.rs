use crate::utils::parse_leading_float;

/// Colouring of a percentage progress bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProgressLevel {
    Normal,
    Warning,
    Error,
}

impl ProgressLevel {
    /// `> 80` is an error, `> 60` a warning; both bounds are exclusive.
    pub fn classify(value: f64) -> Self {
        if value > 80.0 {
            ProgressLevel::Error
        } else if value > 60.0 {
            ProgressLevel::Warning
        } else {
            ProgressLevel::Normal
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ProgressLevel::Normal => "",
            ProgressLevel::Warning => "warning",
            ProgressLevel::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Progress {
    /// CSS width, the metric text itself (e.g. `"85%"`).
    pub width: String,
    pub level: ProgressLevel,
}

/// One card of the system overview.
#[derive(Clone, Debug, PartialEq)]
pub struct MetricCard {
    pub label: &'static str,
    pub value: String,
    pub progress: Option<Progress>,
}

impl MetricCard {
    pub fn new(label: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        let progress = value.contains('%').then(|| Progress {
            width: value.clone(),
            // an unparseable number never crosses a threshold
            level: parse_leading_float(&value)
                .map(ProgressLevel::classify)
                .unwrap_or(ProgressLevel::Normal),
        });
        Self { label, value, progress }
    }

    pub fn level(&self) -> Option<ProgressLevel> {
        self.progress.as_ref().map(|p| p.level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(ProgressLevel::classify(85.0), ProgressLevel::Error);
        assert_eq!(ProgressLevel::classify(81.0), ProgressLevel::Error);
        assert_eq!(ProgressLevel::classify(80.0), ProgressLevel::Warning);
        assert_eq!(ProgressLevel::classify(75.0), ProgressLevel::Warning);
        assert_eq!(ProgressLevel::classify(60.0), ProgressLevel::Normal);
        assert_eq!(ProgressLevel::classify(50.0), ProgressLevel::Normal);
        assert_eq!(ProgressLevel::classify(60.1), ProgressLevel::Warning);
    }

    #[test]
    fn test_percentage_card_has_progress() {
        let card = MetricCard::new("CPU Usage", "92%");
        assert_eq!(card.level(), Some(ProgressLevel::Error));
        assert_eq!(card.progress.unwrap().width, "92%");
    }

    #[test]
    fn test_free_text_card_has_no_progress() {
        let card = MetricCard::new("Uptime", "3 days");
        assert!(card.progress.is_none());
    }

    #[test]
    fn test_garbled_percentage_is_normal() {
        let card = MetricCard::new("Disk Usage", "n/a%");
        assert_eq!(card.level(), Some(ProgressLevel::Normal));
    }
}
