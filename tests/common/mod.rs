#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use yt_channel_videos::api::{
    ChannelItem, ChannelListResponse, MAX_RESULTS_PER_PAGE, PageInfo, ResourceId,
    SearchListResponse, SearchQuery, SearchResult, Transport,
};
use yt_channel_videos::error::{Error, Result};
use yt_channel_videos::reporter::{Anomaly, Reporter};
use yt_channel_videos::window::parse_date;

pub const CHANNEL_ID: &str = "UC_fake_channel";

type ChannelScript = Box<dyn Fn(&str) -> Result<ChannelListResponse> + Send + Sync>;
type SearchScript = Box<dyn Fn(&SearchQuery) -> Result<SearchListResponse> + Send + Sync>;

/// Transport that answers from scripts and records every request it sees
pub struct FakeTransport {
    channels: ChannelScript,
    search: SearchScript,
    lookups: Mutex<Vec<String>>,
    searches: Mutex<Vec<SearchQuery>>,
}

impl FakeTransport {
    pub fn new(
        channels: impl Fn(&str) -> Result<ChannelListResponse> + Send + Sync + 'static,
        search: impl Fn(&SearchQuery) -> Result<SearchListResponse> + Send + Sync + 'static,
    ) -> Self {
        Self {
            channels: Box::new(channels),
            search: Box::new(search),
            lookups: Mutex::new(Vec::new()),
            searches: Mutex::new(Vec::new()),
        }
    }

    /// A single channel whose uploads are `videos`
    pub fn with_catalogue(videos: Vec<(DateTime<Utc>, String)>) -> Self {
        Self::new(
            |_| Ok(channel_matches(&[CHANNEL_ID])),
            move |query| Ok(catalogue_page(&videos, query)),
        )
    }

    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }

    pub fn searches(&self) -> Vec<SearchQuery> {
        self.searches.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn channels_by_username(&self, username: &str) -> Result<ChannelListResponse> {
        self.lookups.lock().unwrap().push(username.to_string());
        (self.channels)(username)
    }

    async fn search_videos(&self, query: &SearchQuery) -> Result<SearchListResponse> {
        self.searches.lock().unwrap().push(query.clone());
        (self.search)(query)
    }
}

/// Reporter that keeps everything it is told
#[derive(Default)]
pub struct RecordingReporter {
    progress: Mutex<Vec<String>>,
    anomalies: Mutex<Vec<Anomaly>>,
}

impl RecordingReporter {
    pub fn progress_messages(&self) -> Vec<String> {
        self.progress.lock().unwrap().clone()
    }

    pub fn anomalies(&self) -> Vec<Anomaly> {
        self.anomalies.lock().unwrap().clone()
    }
}

impl Reporter for RecordingReporter {
    fn progress(&self, message: &str) {
        self.progress.lock().unwrap().push(message.to_string());
    }

    fn anomaly(&self, anomaly: &Anomaly) {
        self.anomalies.lock().unwrap().push(anomaly.clone());
    }
}

pub fn date(raw: &str) -> DateTime<Utc> {
    parse_date(raw).unwrap()
}

pub fn server_error() -> Error {
    Error::Api {
        status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        body: "backend error".to_string(),
    }
}

/// Channel lookup answer listing the given ids
pub fn channel_matches(ids: &[&str]) -> ChannelListResponse {
    ChannelListResponse {
        page_info: PageInfo { total_results: ids.len() as u32 },
        items: ids
            .iter()
            .map(|id| ChannelItem {
                id: Some(id.to_string()),
            })
            .collect(),
    }
}

pub fn page(ids: &[&str], next_page_token: Option<&str>) -> SearchListResponse {
    SearchListResponse {
        items: ids
            .iter()
            .map(|id| SearchResult {
                id: ResourceId {
                    kind: Some("youtube#video".to_string()),
                    video_id: Some(id.to_string()),
                },
            })
            .collect(),
        next_page_token: next_page_token.map(str::to_string),
    }
}

/// Answer a search the way the API does: newest first, 50 per page, with the
/// page token holding the offset of the next page.
pub fn catalogue_page(videos: &[(DateTime<Utc>, String)], query: &SearchQuery) -> SearchListResponse {
    let mut matching: Vec<_> = videos
        .iter()
        .filter(|(published, _)| {
            *published >= query.published_after && *published < query.published_before
        })
        .collect();
    matching.sort_by(|a, b| b.0.cmp(&a.0));

    let per_page = MAX_RESULTS_PER_PAGE as usize;
    let offset: usize = query
        .page_token
        .as_deref()
        .map(|token| token.parse().unwrap())
        .unwrap_or(0);
    let ids: Vec<&str> = matching
        .iter()
        .skip(offset)
        .take(per_page)
        .map(|(_, id)| id.as_str())
        .collect();
    let next = (offset + per_page < matching.len()).then(|| (offset + per_page).to_string());

    page(&ids, next.as_deref())
}
