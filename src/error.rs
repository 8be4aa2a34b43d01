// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanHealthError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Could not parse {source_id} payload: {source}")]
    Xml {
        source: roxmltree::Error,
        source_id: &'static str,
    },

    #[error("Unexpected {source_id} payload: expected <{expected}> but found <{found}>")]
    UnexpectedRoot {
        source_id: &'static str,
        expected: &'static str,
        found: String,
    },

    #[error("Missing <{element}> in {source_id} payload")]
    MissingElement {
        source_id: &'static str,
        element: &'static str,
    },

    #[error("Invalid {attribute}=\"{value}\" in {source_id} payload")]
    InvalidAttribute {
        source_id: &'static str,
        attribute: &'static str,
        value: String,
    },

    #[error("Malformed module size \"{raw}\": {reason}")]
    MalformedSize { raw: String, reason: String },

    #[error("Invalid date \"{raw}\": {source}")]
    InvalidDate {
        raw: String,
        source: chrono::ParseError,
    },

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Invalid config value for {key}: {reason}")]
    InvalidConfig { key: &'static str, reason: String },

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ScanHealthError {
    /// True for errors caused by the content of an upstream payload rather
    /// than the environment (files, config).
    #[must_use]
    pub fn is_payload_error(&self) -> bool {
        matches!(
            self,
            Self::Xml { .. }
                | Self::UnexpectedRoot { .. }
                | Self::MissingElement { .. }
                | Self::InvalidAttribute { .. }
                | Self::MalformedSize { .. }
                | Self::InvalidDate { .. }
        )
    }

    /// True when the payload is not the expected document at all, which is
    /// how the service answers for data an older scan never produced.
    #[must_use]
    pub fn is_missing_payload(&self) -> bool {
        matches!(self, Self::Xml { .. } | Self::UnexpectedRoot { .. })
    }
}

pub type Result<T> = std::result::Result<T, ScanHealthError>;

// Allow `?` on std::io::Error by converting to ScanHealthError::Io with unknown path.
impl From<std::io::Error> for ScanHealthError {
    fn from(source: std::io::Error) -> Self {
        ScanHealthError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}
