use std::fmt;
use thiserror::Error;

pub type K2Result<T> = Result<T, K2Error>;

/// Which record family a validation failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Campaign,
    Product,
    Attribution,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Campaign => f.write_str("campaign"),
            Self::Product => f.write_str("product"),
            Self::Attribution => f.write_str("attribution"),
        }
    }
}

#[derive(Error, Debug)]
pub enum K2Error {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid {kind} record '{id}': {reason}")]
    Validation {
        kind: RecordKind,
        id: String,
        reason: String,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl K2Error {
    pub fn validation(kind: RecordKind, id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            kind,
            id: id.into(),
            reason: reason.into(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}
