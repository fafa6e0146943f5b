use std::io::{self, Write};

use crate::api::Transport;
use crate::client::YouTubeClient;
use crate::collector::{CollectOptions, collect_videos};
use crate::config::resolve_api_key;
use crate::error::Result;
use crate::reporter::{Reporter, TracingReporter};
use crate::resolver::resolve_channel_id;

/// Resolve the channel, then collect its videos.
///
/// Collection never starts when the channel id cannot be resolved.
pub async fn find_channel_videos(
    transport: &dyn Transport,
    reporter: &dyn Reporter,
    channel: &str,
    options: &CollectOptions,
) -> Result<Vec<String>> {
    let channel_id = resolve_channel_id(transport, reporter, channel).await?;
    collect_videos(transport, reporter, &channel_id, options).await
}

/// Write one video id per line
pub fn write_video_ids(out: &mut impl Write, videos: &[String]) -> Result<()> {
    for video in videos {
        writeln!(out, "{}", video)?;
    }
    out.flush()?;
    Ok(())
}

pub async fn run(api_key: Option<String>, channel: &str, options: &CollectOptions) -> Result<()> {
    let api_key = resolve_api_key(api_key)?;
    let client = YouTubeClient::new(api_key)?;
    let reporter = TracingReporter;

    let videos = find_channel_videos(&client, &reporter, channel, options).await?;

    if videos.is_empty() {
        tracing::info!(
            "No video found for that channel! Either there's none or a problem occurred. \
             Enable verbose or debug logging for more details."
        );
        return Ok(());
    }

    write_video_ids(&mut io::stdout().lock(), &videos)?;
    tracing::info!("Done!");

    Ok(())
}
