//! YouTube Data API request and response types, and the transport seam the
//! resolver and collector talk through.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::Result;
use crate::window::{Window, rfc3339};

/// Largest page the search endpoint will return
pub const MAX_RESULTS_PER_PAGE: u32 = 50;

/// Sends one API request and returns the parsed response.
///
/// [`crate::client::YouTubeClient`] talks to the real API; tests plug in
/// scripted fakes.
#[async_trait]
pub trait Transport: Send + Sync {
    /// `channels.list` filtered by the channel's username
    async fn channels_by_username(&self, username: &str) -> Result<ChannelListResponse>;

    /// One page of `search.list` restricted to a channel's videos
    async fn search_videos(&self, query: &SearchQuery) -> Result<SearchListResponse>;
}

/// Parameters for one page of a channel video search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub channel_id: String,
    pub published_after: DateTime<Utc>,
    pub published_before: DateTime<Utc>,
    pub page_token: Option<String>,
}

impl SearchQuery {
    pub fn new(channel_id: &str, window: &Window) -> Self {
        Self {
            channel_id: channel_id.to_string(),
            published_after: window.published_after,
            published_before: window.published_before,
            page_token: None,
        }
    }

    pub fn with_page_token(&self, page_token: Option<String>) -> Self {
        Self {
            page_token,
            ..self.clone()
        }
    }

    /// Query string pairs, without the API key
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("channelId", self.channel_id.clone()),
            ("part", "id".to_string()),
            ("order", "date".to_string()),
            ("type", "video".to_string()),
            ("publishedBefore", rfc3339(&self.published_before)),
            ("publishedAfter", rfc3339(&self.published_after)),
            ("maxResults", MAX_RESULTS_PER_PAGE.to_string()),
        ];
        if let Some(token) = &self.page_token {
            params.push(("pageToken", token.clone()));
        }
        params
    }
}

/// Paging details attached to list responses
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub total_results: u32,
}

/// Response of `channels.list`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelListResponse {
    pub page_info: PageInfo,
    /// Left out by the API when nothing matches
    #[serde(default)]
    pub items: Vec<ChannelItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChannelItem {
    pub id: Option<String>,
}

/// Response of `search.list`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchListResponse {
    pub items: Vec<SearchResult>,
    pub next_page_token: Option<String>,
}

impl SearchListResponse {
    /// Continuation token, treating an empty token as the last page
    pub fn continuation(&self) -> Option<&str> {
        self.next_page_token.as_deref().filter(|token| !token.is_empty())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResult {
    pub id: ResourceId,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceId {
    pub kind: Option<String>,
    pub video_id: Option<String>,
}
