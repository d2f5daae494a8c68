use crate::types::report::SurveyReport;

pub fn to_json(report: &SurveyReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
