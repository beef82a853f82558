//! Error types for the user API client and its settings.
//!
//! # Design
//! Each `ApiError` variant names the pipeline stage that failed and keeps the
//! underlying cause as its `source`, so callers can tell "server unreachable"
//! from "server said no" from "server sent garbage" without string matching.

use std::path::PathBuf;

use thiserror::Error;

use crate::http::TransportError;

/// Errors returned by `ApiClient::fetch_user`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The transport could not complete the request.
    #[error("request failed: {0}")]
    Transport(#[source] TransportError),

    /// A response arrived with a status other than 200. The body is not read.
    #[error("unexpected status code: {status}")]
    UnexpectedStatus { status: u16 },

    /// The status was accepted but the body could not be read to the end.
    #[error("unable to read response body: {0}")]
    BodyRead(#[source] std::io::Error),

    /// The body was read but is not a JSON user object.
    #[error("unable to decode response JSON: {0}")]
    Decode(#[source] serde_json::Error),
}

impl ApiError {
    /// The observed status code, for `UnexpectedStatus`.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::UnexpectedStatus { status } => Some(*status),
            _ => None,
        }
    }
}

/// Errors raised while loading or reading `Settings`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("setting `{key}` must be a {expected}")]
    Invalid { key: String, expected: &'static str },
}
