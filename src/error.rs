use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArtError {
    /// A required parameter is missing or has the wrong shape
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unknown image kind: {0}")]
    UnknownKind(String),

    /// A selector string inside a known kind did not match any renderer option
    #[error("Unknown {kind} style: {style}")]
    UnknownStyle { kind: &'static str, style: String },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ArtError {
    pub fn validation(msg: impl Into<String>) -> Self {
        ArtError::Validation(msg.into())
    }

    pub fn unknown_style(kind: &'static str, style: impl Into<String>) -> Self {
        ArtError::UnknownStyle {
            kind,
            style: style.into(),
        }
    }

    /// True for errors caused by the caller's parameters.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ArtError::Validation(_) | ArtError::UnknownStyle { .. } | ArtError::UnknownKind(_)
        )
    }
}

impl From<serde_json::Error> for ArtError {
    fn from(e: serde_json::Error) -> Self {
        ArtError::Serialization(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ArtError>;
