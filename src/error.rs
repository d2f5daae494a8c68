use thiserror::Error;

#[derive(Error, Debug)]
pub enum SurveyError {
    #[error("input mismatch: {ratings} ratings but {labels} labels")]
    InputMismatch { ratings: usize, labels: usize },

    #[error("empty input: at least one rating is required")]
    EmptyInput,

    #[error("rating out of range: {0} (expected 0-3)")]
    RatingOutOfRange(i64),

    #[error("invalid option: {0:?} is not a listed answer option")]
    InvalidOption(String),

    #[error("duplicate answer {key} in {category}")]
    DuplicateAnswer { category: String, key: String },

    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("unknown question {question} in {category}")]
    UnknownQuestion { category: String, question: String },

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("answers parse error: {0}")]
    AnswersParse(String),

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("png encoding error: {0}")]
    Png(#[from] png::EncodingError),
}

impl SurveyError {
    /// True for errors caused by the survey answers rather than the runtime.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InputMismatch { .. }
                | Self::EmptyInput
                | Self::RatingOutOfRange(_)
                | Self::InvalidOption(_)
                | Self::UnknownCategory(_)
                | Self::UnknownQuestion { .. }
                | Self::DuplicateAnswer { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, SurveyError>;
