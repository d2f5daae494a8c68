pub mod answers;
mod catalog;

use crate::error::{Result, SurveyError};

/// Highest rating a single option can encode.
pub const MAX_RATING: i64 = 3;

#[derive(Debug, PartialEq, Eq)]
pub struct Question {
    pub id: &'static str,
    pub name: &'static str,
    pub options: [&'static str; 4],
}

impl Question {
    /// Tick label used on the radar chart: the leading token of the name.
    pub fn label(&self) -> &'static str {
        self.name.split_whitespace().next().unwrap_or(self.id)
    }

    pub fn default_option(&self) -> &'static str {
        self.options[0]
    }

    /// Finds the listed option matching `text`, ignoring surrounding whitespace.
    pub fn find_option(&self, text: &str) -> Option<&'static str> {
        let wanted = text.trim();
        self.options
            .iter()
            .copied()
            .find(|option| option.trim() == wanted)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Category {
    pub name: &'static str,
    pub title: &'static str,
    pub questions: &'static [Question],
}

impl Category {
    pub fn labels(&self) -> Vec<String> {
        self.questions
            .iter()
            .map(|question| question.label().to_string())
            .collect()
    }

    pub fn question(&self, id: &str) -> Option<&'static Question> {
        self.questions.iter().find(|question| question.id == id.trim())
    }
}

pub fn catalog() -> &'static [Category] {
    &catalog::CATEGORIES
}

pub fn find_category(name: &str) -> Result<&'static Category> {
    let wanted = normalize(name);
    catalog()
        .iter()
        .find(|category| normalize(category.name) == wanted)
        .ok_or_else(|| SurveyError::UnknownCategory(name.to_string()))
}

/// Resolves an optional category filter into the categories to process.
pub fn select_categories(filter: Option<&str>) -> Result<Vec<&'static Category>> {
    match filter {
        Some(name) => Ok(vec![find_category(name)?]),
        None => Ok(catalog().iter().collect()),
    }
}

/// Reads the score encoded in the first character of an option text.
pub fn option_score(option: &str) -> Result<i64> {
    option
        .chars()
        .next()
        .and_then(|ch| ch.to_digit(10))
        .map(i64::from)
        .ok_or_else(|| SurveyError::InvalidOption(option.to_string()))
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|ch| !ch.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_both_sdg_groups_in_order() {
        let names = catalog()
            .iter()
            .map(|category| category.name)
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["SDG 7", "SDG 13"]);
        assert_eq!(catalog()[0].questions.len(), 9);
        assert_eq!(catalog()[1].questions.len(), 8);
    }

    #[test]
    fn every_option_encodes_its_position() {
        for category in catalog() {
            for question in category.questions {
                for (index, option) in question.options.iter().enumerate() {
                    let score = option_score(option).expect("catalog options should parse");
                    assert_eq!(score, index as i64, "{} option {index}", question.id);
                }
            }
        }
    }

    #[test]
    fn labels_are_leading_question_tokens() {
        let category = find_category("SDG 13").expect("category should exist");
        let labels = category.labels();
        assert_eq!(labels.first().map(String::as_str), Some("13.1"));
        assert_eq!(labels.last().map(String::as_str), Some("13.8"));
        for question in category.questions {
            assert_eq!(question.label(), question.id);
        }
    }

    #[test]
    fn find_category_ignores_case_and_spacing() {
        let category = find_category("sdg7").expect("lookup should normalize");
        assert_eq!(category.name, "SDG 7");
    }

    #[test]
    fn find_category_rejects_unknown_name() {
        let err = find_category("SDG 99").expect_err("lookup should fail");
        assert!(matches!(err, SurveyError::UnknownCategory(_)));
        assert!(err.is_input_error());
    }

    #[test]
    fn option_score_rejects_text_without_digit() {
        let err = option_score("No program in operation.").expect_err("should fail");
        assert!(matches!(err, SurveyError::InvalidOption(_)));
        assert!(option_score("").is_err());
    }

    #[test]
    fn option_score_reads_first_character_strictly() {
        assert_eq!(option_score("2: Yes").expect("digit should parse"), 2);
        assert!(option_score(" 2: Yes").is_err());
    }

    #[test]
    fn select_categories_without_filter_returns_all() {
        let categories = select_categories(None).expect("selection should succeed");
        assert_eq!(categories.len(), 2);
    }
}
