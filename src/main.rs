use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use dirwatcher::{DirectoryWatcher, WatchConfig};

/// Watches a directory for files containing magic text
#[derive(Parser)]
#[command(name = "dirwatcher")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory to be watched
    path: PathBuf,

    /// Magic string to watch for
    magic_string: String,

    /// Polling interval in seconds
    #[arg(short, long, default_value_t = 1.0)]
    interval: f64,

    /// Extension of files to search
    #[arg(short, long, default_value = ".txt")]
    extension: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

/// Resolve on SIGINT or SIGTERM, whichever comes first.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => warn!("Received SIGINT"),
                    _ = sigterm.recv() => warn!("Received SIGTERM"),
                }
            }
            Err(err) => {
                warn!("Failed to install SIGTERM handler: {err}");
                let _ = tokio::signal::ctrl_c().await;
                warn!("Received SIGINT");
            }
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
        warn!("Received SIGINT");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let interval = Duration::try_from_secs_f64(cli.interval)
        .map_err(|err| anyhow::anyhow!("invalid interval {}: {err}", cli.interval))?;

    let config = WatchConfig::new(cli.path, cli.magic_string)
        .with_extension(cli.extension)
        .with_interval(interval);

    let mut watcher = DirectoryWatcher::new(config)?;
    let token = watcher.cancellation_token();

    tokio::spawn(async move {
        shutdown_signal().await;
        token.cancel();
    });

    watcher.run().await;
    Ok(())
}
