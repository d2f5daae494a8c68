use crate::error::{Result, SurveyError};
use crate::survey::MAX_RATING;
use serde::Deserialize;

pub type Score = f64;

/// How ratings outside 0..=3 are treated before scoring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RatingPolicy {
    #[default]
    Reject,
    Clamp,
    #[serde(alias = "passthrough")]
    Pass,
}

impl RatingPolicy {
    pub fn apply(self, ratings: &[i64]) -> Result<Vec<i64>> {
        match self {
            Self::Reject => {
                if let Some(bad) = ratings
                    .iter()
                    .find(|rating| !(0..=MAX_RATING).contains(*rating))
                {
                    return Err(SurveyError::RatingOutOfRange(*bad));
                }
                Ok(ratings.to_vec())
            }
            Self::Clamp => Ok(ratings
                .iter()
                .map(|rating| (*rating).clamp(0, MAX_RATING))
                .collect()),
            Self::Pass => Ok(ratings.to_vec()),
        }
    }
}

/// Percentage of the maximum attainable rating sum.
///
/// Values are taken as given; range handling belongs to [`RatingPolicy`].
pub fn score(ratings: &[i64]) -> Result<Score> {
    if ratings.is_empty() {
        return Err(SurveyError::EmptyInput);
    }
    // f64 accumulation: passed-through ratings may be arbitrarily large.
    let total: f64 = ratings.iter().map(|rating| *rating as f64).sum();
    let max_total = ratings.len() as f64 * MAX_RATING as f64;
    Ok(total / max_total * 100.0)
}

pub fn format_percentage(score: Score) -> String {
    format!("{score:.2}%")
}
