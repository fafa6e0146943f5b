use chrono::{DateTime, Utc};
use thiserror::Error;

/// Exit code used for every fatal error
pub const FATAL_EXIT_CODE: i32 = 2;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("API key not set. Pass --api-key or set YOUTUBE_API_KEY.")]
    ApiKeyMissing,

    #[error("Invalid date '{0}' (expected yyyy-mm-dd)")]
    InvalidDate(String),

    #[error("Latest date {latest} cannot be before earliest date {earliest}")]
    InvalidRange {
        earliest: DateTime<Utc>,
        latest: DateTime<Utc>,
    },

    #[error("Interval must be strictly positive")]
    InvalidInterval,

    #[error("The channel id could not be retrieved for '{0}'. Make sure the channel name is correct")]
    ChannelNotFound(String),

    #[error("Failed to resolve channel id for '{channel}': {source}")]
    Resolution {
        channel: String,
        #[source]
        source: Box<Error>,
    },

    #[error("API error ({status}): {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl Error {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        FATAL_EXIT_CODE
    }
}

pub type Result<T> = std::result::Result<T, Error>;
