use crate::api::Transport;
use crate::error::{Error, Result};
use crate::reporter::{Anomaly, Reporter};

/// Look up the channel id behind a channel username.
///
/// When several channels match, the first one is used and an
/// [`Anomaly::AmbiguousChannel`] is reported.
pub async fn resolve_channel_id(
    transport: &dyn Transport,
    reporter: &dyn Reporter,
    channel_name: &str,
) -> Result<String> {
    reporter.progress(&format!("Searching channel id for channel: {}", channel_name));

    let response = transport
        .channels_by_username(channel_name)
        .await
        .map_err(|source| Error::Resolution {
            channel: channel_name.to_string(),
            source: Box::new(source),
        })?;

    let matches = response.page_info.total_results;
    if matches == 0 {
        tracing::debug!("Response received but it contains no item");
        return Err(Error::ChannelNotFound(channel_name.to_string()));
    }

    let channel_id = response
        .items
        .into_iter()
        .next()
        .and_then(|item| item.id)
        .ok_or_else(|| Error::ChannelNotFound(channel_name.to_string()))?;

    if matches > 1 {
        reporter.anomaly(&Anomaly::AmbiguousChannel {
            channel: channel_name.to_string(),
            matches,
            chosen: channel_id.clone(),
        });
    }

    reporter.progress(&format!("Channel id found: {}", channel_id));
    Ok(channel_id)
}
