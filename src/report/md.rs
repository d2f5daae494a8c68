use crate::scoring::format_percentage;
use crate::types::report::SurveyReport;

pub fn to_markdown(report: &SurveyReport) -> String {
    let mut output = String::new();
    output.push_str("# SDG Attributes Report\n\n");

    for category in &report.categories {
        output.push_str(&format!("## {} ({})\n\n", category.category, category.title));
        output.push_str(&format!("{}\n\n", category.score_line()));

        output.push_str("| Question | Rating |\n|---|---|\n");
        for (label, rating) in category.labels.iter().zip(&category.ratings) {
            output.push_str(&format!("| {label} | {rating} |\n"));
        }
        output.push('\n');

        if !category.defaulted.is_empty() {
            output.push_str(&format!(
                "Unanswered (scored 0): {}\n\n",
                category.defaulted.join(", ")
            ));
        }
    }

    if report.categories.len() > 1 {
        output.push_str("## Summary\n\n");
        for category in &report.categories {
            output.push_str(&format!(
                "- {}: {}\n",
                category.category,
                format_percentage(category.score)
            ));
        }
    }

    output
}
