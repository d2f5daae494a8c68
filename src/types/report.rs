use crate::scoring::{format_percentage, Score};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct CategoryReport {
    pub category: String,
    pub title: String,
    pub ratings: Vec<i64>,
    pub labels: Vec<String>,
    pub score: Score,
    pub defaulted: Vec<String>,
}

impl CategoryReport {
    /// The score line shown to users, e.g. `Final Score SDG 7: 66.67%`.
    pub fn score_line(&self) -> String {
        format!(
            "Final Score {}: {}",
            self.category,
            format_percentage(self.score)
        )
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SurveyReport {
    pub generated_at: String,
    pub categories: Vec<CategoryReport>,
}

impl SurveyReport {
    pub fn has_defaulted_answers(&self) -> bool {
        self.categories
            .iter()
            .any(|category| !category.defaulted.is_empty())
    }
}
