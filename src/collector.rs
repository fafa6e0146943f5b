//! Windowed retrieval of every video id a channel published in a date range.

use chrono::{DateTime, Utc};

use crate::api::{SearchQuery, Transport};
use crate::error::{Error, Result};
use crate::reporter::{Anomaly, Reporter};
use crate::window::{DateRange, Interval, Window, platform_floor};

/// Optional bounds for a collection run
#[derive(Debug, Clone, Copy, Default)]
pub struct CollectOptions {
    /// Defaults to the platform's founding date
    pub earliest: Option<DateTime<Utc>>,
    /// Defaults to now
    pub latest: Option<DateTime<Utc>>,
    /// Defaults to 52 weeks
    pub interval: Option<Interval>,
}

impl CollectOptions {
    /// Fill in defaults and check that the range is not inverted
    pub fn resolve(&self, now: DateTime<Utc>) -> Result<(DateRange, Interval)> {
        let range = DateRange::new(
            self.earliest.unwrap_or_else(platform_floor),
            self.latest.unwrap_or(now),
        )?;
        Ok((range, self.interval.unwrap_or_default()))
    }
}

/// Collect the ids of every video published by `channel_id` within the
/// requested range, most recent first.
///
/// A window whose pagination fails keeps the ids fetched before the failure
/// and the run moves on to the next window.
pub async fn collect_videos(
    transport: &dyn Transport,
    reporter: &dyn Reporter,
    channel_id: &str,
    options: &CollectOptions,
) -> Result<Vec<String>> {
    let (range, interval) = options.resolve(Utc::now())?;

    reporter.progress(&format!(
        "Searching for videos published in channel between {} and {}",
        range.latest(),
        range.earliest()
    ));

    let mut videos = Vec::new();
    for window in range.windows(interval) {
        if window.is_final {
            tracing::debug!("Last round-trip");
        }

        let fetched = fetch_window(transport, reporter, channel_id, &window).await;
        videos.extend(fetched);
        tracing::debug!("Total video(s) found so far: {}", videos.len());
    }

    reporter.progress(&format!("Found {} video(s) in total", videos.len()));
    Ok(videos)
}

/// Pagination progress for a single window
#[derive(Debug)]
enum PageState {
    Started,
    Fetching(Option<String>),
    HasMore(String),
    Done,
    Aborted(Error),
}

/// Page through one window until the API stops handing out continuation
/// tokens or a request fails.
pub async fn fetch_window(
    transport: &dyn Transport,
    reporter: &dyn Reporter,
    channel_id: &str,
    window: &Window,
) -> Vec<String> {
    reporter.progress(&format!(
        "Getting videos published before {} and after {}",
        window.published_before, window.published_after
    ));

    let query = SearchQuery::new(channel_id, window);
    let mut videos = Vec::new();
    let mut pages_fetched = 0;
    let mut state = PageState::Started;

    loop {
        state = match state {
            PageState::Started => PageState::Fetching(None),
            PageState::HasMore(token) => {
                tracing::debug!("More videos to load, continuing");
                PageState::Fetching(Some(token))
            }
            PageState::Fetching(token) => {
                match transport.search_videos(&query.with_page_token(token)).await {
                    Ok(page) => {
                        pages_fetched += 1;
                        for result in &page.items {
                            match &result.id.video_id {
                                Some(video_id) => videos.push(video_id.clone()),
                                None => tracing::debug!(kind = ?result.id.kind, "Skipping result without a video id"),
                            }
                        }

                        match page.continuation() {
                            Some(next) => PageState::HasMore(next.to_string()),
                            None => PageState::Done,
                        }
                    }
                    Err(e) => PageState::Aborted(e),
                }
            }
            PageState::Done => {
                tracing::debug!("No more videos to load");
                break;
            }
            PageState::Aborted(e) => {
                reporter.anomaly(&Anomaly::WindowFetchFailed {
                    window: *window,
                    pages_fetched,
                    collected: videos.len(),
                    error: e.to_string(),
                });
                break;
            }
        };
    }

    reporter.progress(&format!(
        "Found {} video(s) in this time interval",
        videos.len()
    ));
    videos
}
