pub mod api;
pub mod client;
pub mod collector;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod reporter;
pub mod resolver;
pub mod window;

pub use api::Transport;
pub use collector::{CollectOptions, collect_videos};
pub use error::{Error, Result};
pub use reporter::{Anomaly, Reporter, TracingReporter};
pub use resolver::resolve_channel_id;
