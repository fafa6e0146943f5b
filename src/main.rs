use chrono::{DateTime, Utc};
use clap::Parser;

use yt_channel_videos::collector::CollectOptions;
use yt_channel_videos::commands;
use yt_channel_videos::config::load_env;
use yt_channel_videos::error::Result;
use yt_channel_videos::logging::{self, Verbosity};
use yt_channel_videos::window::{Interval, parse_date};

#[derive(Parser)]
#[command(name = "yt-channel-videos")]
#[command(about = "Find all videos published by a YouTube channel")]
#[command(version)]
struct Cli {
    /// YouTube Data API key (defaults to YOUTUBE_API_KEY)
    #[arg(short = 'k', long)]
    api_key: Option<String>,

    /// YouTube channel username to get videos from
    #[arg(short, long)]
    channel: String,

    /// Videos published after this date are skipped (yyyy-mm-dd, default: now)
    #[arg(short = 'x', long = "latest-date", value_parser = parse_date)]
    latest: Option<DateTime<Utc>>,

    /// Videos published before this date are skipped (yyyy-mm-dd, default: 2005-02-14)
    #[arg(short = 'y', long = "earliest-date", value_parser = parse_date)]
    earliest: Option<DateTime<Utc>>,

    /// Longest period in days to query at once. The API returns at most
    /// ~500 results per query, so busy channels need a smaller value (default: 364)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    interval: Option<u32>,

    /// Only print results or fatal errors
    #[arg(short, long, conflicts_with_all = ["verbose", "debug"])]
    quiet: bool,

    /// Print progress for each date window
    #[arg(short, long, conflicts_with = "debug")]
    verbose: bool,

    /// Print every request and response
    #[arg(short, long)]
    debug: bool,
}

impl Cli {
    fn collect_options(&self) -> Result<CollectOptions> {
        Ok(CollectOptions {
            earliest: self.earliest,
            latest: self.latest,
            interval: self.interval.map(Interval::days).transpose()?,
        })
    }
}

async fn run_cli(cli: Cli) -> Result<()> {
    let options = cli.collect_options()?;
    commands::videos::run(cli.api_key, &cli.channel, &options).await
}

#[tokio::main]
async fn main() {
    // Load environment variables
    load_env();

    let cli = Cli::parse();
    logging::init(Verbosity::from_flags(cli.quiet, cli.verbose, cli.debug));

    if let Err(e) = run_cli(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}
