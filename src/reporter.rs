//! Progress and anomaly reporting for a collection run.

use std::fmt;

use crate::window::Window;

/// Something unexpected that did not stop the run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Anomaly {
    /// The username matched several channels and the first one was used
    AmbiguousChannel {
        channel: String,
        matches: u32,
        chosen: String,
    },
    /// A window's pagination failed; the ids collected before the failure
    /// were kept
    WindowFetchFailed {
        window: Window,
        pages_fetched: usize,
        collected: usize,
        error: String,
    },
}

impl fmt::Display for Anomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Anomaly::AmbiguousChannel {
                channel,
                matches,
                chosen,
            } => write!(
                f,
                "{} channels match '{}', using the first one ({})",
                matches, channel, chosen
            ),
            Anomaly::WindowFetchFailed {
                window,
                pages_fetched,
                collected,
                error,
            } => write!(
                f,
                "Stopped fetching window {} after {} page(s) and {} video(s): {}",
                window, pages_fetched, collected, error
            ),
        }
    }
}

/// Receives progress and anomalies from the resolver and collector
pub trait Reporter: Send + Sync {
    fn progress(&self, message: &str);

    fn anomaly(&self, anomaly: &Anomaly);
}

/// Forwards everything to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn progress(&self, message: &str) {
        tracing::info!("{}", message);
    }

    fn anomaly(&self, anomaly: &Anomaly) {
        match anomaly {
            Anomaly::AmbiguousChannel { .. } => tracing::warn!("{}", anomaly),
            Anomaly::WindowFetchFailed { .. } => tracing::error!("{}", anomaly),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::parse_date;

    #[test]
    fn describes_window_failure() {
        let anomaly = Anomaly::WindowFetchFailed {
            window: Window {
                published_after: parse_date("2020-06-06").unwrap(),
                published_before: parse_date("2020-12-03").unwrap(),
                is_final: false,
            },
            pages_fetched: 1,
            collected: 50,
            error: "HTTP error: timed out".to_string(),
        };
        assert_eq!(
            anomaly.to_string(),
            "Stopped fetching window 2020-12-03T00:00:00Z -> 2020-06-06T00:00:00Z \
             after 1 page(s) and 50 video(s): HTTP error: timed out"
        );
    }
}
