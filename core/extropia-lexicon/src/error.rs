use thiserror::Error;

/// Failures while loading a dictionary. Lookups never fail; they return `None`.
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("dictionary is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("dictionary root must be an object of groups")]
    NotAnObject,

    #[error("dictionary group '{0}' must be an object of morphemes")]
    Group(String),

    #[error("morpheme '{token}' is malformed: {source}")]
    Entry {
        token: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("empty morpheme token in group '{0}'")]
    EmptyToken(String),

    #[error("morpheme '{token}' has difficulty {difficulty}, expected 1-5")]
    Difficulty { token: String, difficulty: u8 },

    #[error("dictionary archive rejected: {0}")]
    Archive(String),
}
