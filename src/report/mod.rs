pub mod json;
pub mod manifest;
pub mod md;

use crate::error::SurveyError;
use crate::types::report::SurveyReport;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(report: &SurveyReport, format: OutputFormat) -> Result<String, SurveyError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(SurveyError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}
