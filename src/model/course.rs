use serde::{Deserialize, Serialize};

/// Shown wherever a field could not be extracted.
pub const PLACEHOLDER: &str = "N/A";

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct CourseInfo {
    pub url: String,
    pub name: Option<String>,
    pub language: Option<String>,
    pub weeks: Option<usize>,
    pub average_score: Option<f64>,
    pub start_date: Option<String>,
}

impl CourseInfo {
    /// A record with every field set to the placeholder.
    pub fn empty(url: &str) -> Self {
        CourseInfo {
            url: url.to_string(),
            ..Default::default()
        }
    }

    pub fn name_or_placeholder(&self) -> &str {
        self.name.as_deref().unwrap_or(PLACEHOLDER)
    }

    pub fn language_or_placeholder(&self) -> &str {
        self.language.as_deref().unwrap_or(PLACEHOLDER)
    }

    pub fn start_date_or_placeholder(&self) -> &str {
        self.start_date.as_deref().unwrap_or(PLACEHOLDER)
    }

    /// Number of fields that fell back to the placeholder.
    pub fn missing_fields(&self) -> usize {
        [
            self.name.is_none(),
            self.language.is_none(),
            self.weeks.is_none(),
            self.average_score.is_none(),
            self.start_date.is_none(),
        ]
        .into_iter()
        .filter(|missing| *missing)
        .count()
    }
}
