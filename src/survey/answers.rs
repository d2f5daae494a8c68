use super::{find_category, option_score, Category, Question};
use crate::error::{Result, SurveyError};
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

/// A recorded answer: either the rating itself or the selected option text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Rating(i64),
    Option(String),
}

impl AnswerValue {
    /// Rating for `question`; option text must be one of its listed options.
    pub fn rating(&self, question: &Question) -> Result<i64> {
        match self {
            Self::Rating(value) => Ok(*value),
            Self::Option(text) => question
                .find_option(text)
                .ok_or_else(|| SurveyError::InvalidOption(text.clone()))
                .and_then(option_score),
        }
    }
}

/// Answers for every category, keyed by category name then question id.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct AnswerSheet {
    categories: BTreeMap<String, BTreeMap<String, AnswerValue>>,
}

/// Ratings and tick labels for one category, in question order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryAnswers {
    pub ratings: Vec<i64>,
    pub labels: Vec<String>,
    /// Question ids left unanswered and scored with their first option.
    pub defaulted: Vec<String>,
}

impl AnswerSheet {
    pub fn parse(content: &str) -> Result<Self> {
        let sheet: AnswerSheet =
            toml::from_str(content).map_err(|e| SurveyError::AnswersParse(e.to_string()))?;
        sheet.validate()?;
        Ok(sheet)
    }

    /// Checks that every table and question id exists in the catalog and
    /// that no category or question is answered twice under different spellings.
    pub fn validate(&self) -> Result<()> {
        let mut seen_categories = BTreeSet::new();
        for (name, answers) in &self.categories {
            let category = find_category(name)?;
            if !seen_categories.insert(category.name) {
                return Err(SurveyError::DuplicateAnswer {
                    category: category.name.to_string(),
                    key: format!("table {name:?}"),
                });
            }

            let mut seen_questions = BTreeSet::new();
            for id in answers.keys() {
                let Some(question) = category.question(id) else {
                    return Err(SurveyError::UnknownQuestion {
                        category: category.name.to_string(),
                        question: id.clone(),
                    });
                };
                if !seen_questions.insert(question.id) {
                    return Err(SurveyError::DuplicateAnswer {
                        category: category.name.to_string(),
                        key: format!("question {id:?}"),
                    });
                }
            }
        }
        Ok(())
    }

    fn answers_for(&self, category: &Category) -> Option<&BTreeMap<String, AnswerValue>> {
        self.categories.iter().find_map(|(name, answers)| {
            find_category(name)
                .ok()
                .filter(|found| found.name == category.name)
                .map(|_| answers)
        })
    }

    pub fn resolve(&self, category: &'static Category) -> Result<CategoryAnswers> {
        let answers = self.answers_for(category);
        let mut ratings = Vec::with_capacity(category.questions.len());
        let mut defaulted = Vec::new();

        for question in category.questions {
            let recorded = answers.and_then(|answers| {
                answers
                    .iter()
                    .find(|(id, _)| id.trim() == question.id)
                    .map(|(_, value)| value)
            });
            let rating = match recorded {
                Some(value) => value.rating(question)?,
                None => {
                    defaulted.push(question.id.to_string());
                    option_score(question.default_option())?
                }
            };
            ratings.push(rating);
        }

        if !defaulted.is_empty() {
            tracing::warn!(
                category = category.name,
                questions = %defaulted.join(", "),
                "unanswered questions scored with their first option"
            );
        }

        Ok(CategoryAnswers {
            ratings,
            labels: category.labels(),
            defaulted,
        })
    }
}

pub fn load_answers(path: &Path) -> Result<AnswerSheet> {
    if !path.exists() {
        return Err(SurveyError::PathNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), "loading answers");
    AnswerSheet::parse(&content).map_err(|err| match err {
        SurveyError::AnswersParse(msg) => {
            SurveyError::AnswersParse(format!("{}: {}", path.display(), msg))
        }
        other => other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn resolve_reads_ratings_and_option_texts_in_question_order() {
        let sheet = AnswerSheet::parse(
            r#"
["SDG 7"]
"7.2" = "1: At least one program, resulting in up to 5% reduction in energy consumption."
"7.1" = 3
"7.3" = 2
"7.4" = 2
"7.5" = 1
"7.6" = 0
"7.7" = 3
"7.8" = 1
"7.9" = 2
"#,
        )
        .expect("answers should parse");

        let category = find_category("SDG 7").expect("category should exist");
        let resolved = sheet.resolve(category).expect("answers should resolve");
        assert_eq!(resolved.ratings, vec![3, 1, 2, 2, 1, 0, 3, 1, 2]);
        assert_eq!(resolved.labels.len(), resolved.ratings.len());
        assert_eq!(resolved.labels[0], "7.1");
        assert!(resolved.defaulted.is_empty());
    }

    #[test]
    fn resolve_defaults_missing_answers_to_first_option() {
        let sheet = AnswerSheet::parse(
            r#"
["SDG 13"]
"13.1" = 3
"#,
        )
        .expect("answers should parse");

        let category = find_category("SDG 13").expect("category should exist");
        let resolved = sheet.resolve(category).expect("answers should resolve");
        assert_eq!(resolved.ratings, vec![3, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(resolved.defaulted.len(), 7);
        assert_eq!(resolved.defaulted[0], "13.2");
    }

    #[test]
    fn resolve_matches_category_tables_loosely() {
        let sheet = AnswerSheet::parse(
            r#"
[sdg13]
"13.2" = 2
"#,
        )
        .expect("answers should parse");
        let category = find_category("SDG 13").expect("category should exist");
        let resolved = sheet.resolve(category).expect("answers should resolve");
        assert_eq!(resolved.ratings[1], 2);
    }

    #[test]
    fn parse_rejects_unknown_category() {
        let err = AnswerSheet::parse(
            r#"
["SDG 4"]
"4.1" = 1
"#,
        )
        .expect_err("unknown category should fail");
        assert!(matches!(err, SurveyError::UnknownCategory(_)));
    }

    #[test]
    fn parse_rejects_unknown_question() {
        let err = AnswerSheet::parse(
            r#"
["SDG 7"]
"7.10" = 1
"#,
        )
        .expect_err("unknown question should fail");
        assert!(err.to_string().contains("unknown question 7.10 in SDG 7"));
    }

    #[test]
    fn resolve_rejects_option_text_without_digit() {
        let sheet = AnswerSheet::parse(
            r#"
["SDG 7"]
"7.1" = "No program in operation."
"#,
        )
        .expect("answers should parse");
        let category = find_category("SDG 7").expect("category should exist");
        let err = sheet.resolve(category).expect_err("resolution should fail");
        assert!(matches!(err, SurveyError::InvalidOption(_)));
    }

    #[test]
    fn resolve_rejects_option_text_not_listed_for_question() {
        let sheet = AnswerSheet::parse(
            r#"
["SDG 7"]
"7.1" = "2: not an option of 7.1"
"#,
        )
        .expect("answers should parse");
        let category = find_category("SDG 7").expect("category should exist");
        let err = sheet.resolve(category).expect_err("resolution should fail");
        assert!(matches!(err, SurveyError::InvalidOption(_)));
        assert!(err.is_input_error());
    }

    #[test]
    fn resolve_accepts_listed_option_with_surrounding_whitespace() {
        let category = find_category("SDG 7").expect("category should exist");
        let option = category.questions[0].options[2];
        let sheet = AnswerSheet::parse(&format!("[\"SDG 7\"]\n\"7.1\" = \"  {option} \"\n"))
            .expect("answers should parse");
        let resolved = sheet.resolve(category).expect("answers should resolve");
        assert_eq!(resolved.ratings[0], 2);
    }

    #[test]
    fn parse_rejects_category_answered_under_two_spellings() {
        let err = AnswerSheet::parse(
            r#"
[sdg7]
"7.1" = 3

["SDG 7"]
"7.1" = 0
"7.2" = 3
"#,
        )
        .expect_err("duplicate category should fail");
        assert!(matches!(err, SurveyError::DuplicateAnswer { .. }));
        assert!(err.is_input_error());
    }

    #[test]
    fn parse_rejects_question_answered_under_two_spellings() {
        let err = AnswerSheet::parse(
            r#"
["SDG 7"]
"7.1" = 3
" 7.1" = 0
"#,
        )
        .expect_err("duplicate question should fail");
        assert!(err.to_string().contains("duplicate answer"));
    }

    #[test]
    fn load_answers_reports_missing_file() {
        let dir = TempDir::new().expect("temp dir should be created");
        let err = load_answers(&dir.path().join("missing.toml")).expect_err("should fail");
        assert!(matches!(err, SurveyError::PathNotFound(_)));
    }

    #[test]
    fn load_answers_prefixes_parse_errors_with_path() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("answers.toml");
        fs::write(&path, "[\"SDG 7\"\n").expect("answers should write");
        let err = load_answers(&path).expect_err("should fail");
        assert!(err.to_string().contains("answers.toml"));
    }
}
