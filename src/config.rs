use std::path::PathBuf;
use std::time::Duration;

use crate::error::{Error, Result};

/// Default YouTube Data API v3 endpoint
pub const DEFAULT_API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Default timeout for a single API request
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Get the config directory (~/.config/yt-channel-videos/ on Linux)
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("yt-channel-videos"))
}

/// Get the .env file path
pub fn env_file_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(".env"))
}

/// Load environment variables from the config directory's .env file
pub fn load_env() {
    match env_file_path() {
        Some(env_path) if env_path.exists() => {
            let _ = dotenvy::from_path(&env_path);
        }
        _ => {
            // Try current directory as fallback
            let _ = dotenvy::dotenv();
        }
    }
}

/// Get the YouTube Data API key from the environment
pub fn youtube_api_key() -> Option<String> {
    std::env::var("YOUTUBE_API_KEY")
        .ok()
        .filter(|key| !key.trim().is_empty())
}

/// Pick the API key from the command line, falling back to the environment
pub fn resolve_api_key(flag: Option<String>) -> Result<String> {
    flag.filter(|key| !key.trim().is_empty())
        .or_else(youtube_api_key)
        .ok_or(Error::ApiKeyMissing)
}

/// Get the API base URL, overridable with YOUTUBE_API_BASE_URL
pub fn api_base_url() -> String {
    std::env::var("YOUTUBE_API_BASE_URL")
        .map(|url| url.trim_end_matches('/').to_string())
        .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string())
}

/// Get the per-request timeout, overridable with YOUTUBE_REQUEST_TIMEOUT_SECS
pub fn request_timeout() -> Result<Duration> {
    parse_timeout(std::env::var("YOUTUBE_REQUEST_TIMEOUT_SECS").ok().as_deref())
}

fn parse_timeout(raw: Option<&str>) -> Result<Duration> {
    let Some(raw) = raw else {
        return Ok(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS));
    };

    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(Error::Config(format!(
            "YOUTUBE_REQUEST_TIMEOUT_SECS must be a positive number of seconds, got '{}'",
            raw
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_defaults_when_unset() {
        assert_eq!(
            parse_timeout(None).unwrap(),
            Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS)
        );
    }

    #[test]
    fn timeout_rejects_zero_and_garbage() {
        assert_eq!(parse_timeout(Some(" 12 ")).unwrap(), Duration::from_secs(12));
        assert!(matches!(parse_timeout(Some("0")), Err(Error::Config(_))));
        assert!(matches!(parse_timeout(Some("soon")), Err(Error::Config(_))));
    }

    #[test]
    fn flag_api_key_wins() {
        assert_eq!(
            resolve_api_key(Some("from-flag".to_string())).unwrap(),
            "from-flag"
        );
    }
}
