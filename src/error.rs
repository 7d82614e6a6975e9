use thiserror::Error;

#[derive(Error, Debug)]
pub enum TraceForgeError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Path Parsing Error at '{token}': {reason}")]
    PathParse { token: String, reason: String },

    #[error("Unknown Letter: '{0}' has no reference path")]
    UnknownLetter(char),

    #[error("Configuration Error: {0}")]
    Config(String),
}

impl TraceForgeError {
    pub(crate) fn path_parse(token: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::PathParse {
            token: token.into(),
            reason: reason.into(),
        }
    }
}

pub type TfResult<T> = Result<T, TraceForgeError>;
