use crate::error::Result;
use crate::scoring::{score, RatingPolicy};
use crate::survey::answers::AnswerSheet;
use crate::survey::Category;
use crate::types::report::{CategoryReport, SurveyReport};
use chrono::Utc;

pub fn assess_category(
    category: &'static Category,
    sheet: &AnswerSheet,
    policy: RatingPolicy,
) -> Result<CategoryReport> {
    let resolved = sheet.resolve(category)?;
    let ratings = policy.apply(&resolved.ratings)?;
    let percentage = score(&ratings)?;
    tracing::info!(category = category.name, score = percentage, "scored category");

    Ok(CategoryReport {
        category: category.name.to_string(),
        title: category.title.to_string(),
        ratings,
        labels: resolved.labels,
        score: percentage,
        defaulted: resolved.defaulted,
    })
}

pub fn assess(
    categories: &[&'static Category],
    sheet: &AnswerSheet,
    policy: RatingPolicy,
) -> Result<SurveyReport> {
    let categories = categories
        .iter()
        .copied()
        .map(|category| assess_category(category, sheet, policy))
        .collect::<Result<Vec<_>>>()?;
    Ok(SurveyReport {
        generated_at: Utc::now().to_rfc3339(),
        categories,
    })
}
