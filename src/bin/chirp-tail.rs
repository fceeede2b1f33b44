//! Tail a stream to stdout.
//!
//! Registers printing handlers for the common kinds, opens the requested
//! stream, and reports why the connection ended. Reconnect policy is left
//! to the operator (or a supervisor); the exit message names the failure
//! class so that decision is informed.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chirpstream::endpoints::FilterParams;
use chirpstream::resilience::classify_failure;
use chirpstream::{load_config, Client, Kind, Payload};

#[derive(Parser)]
#[command(name = "chirp-tail")]
#[command(about = "Tail a streaming API endpoint", long_about = None)]
struct Cli {
    /// Path to the TOML config with credentials.
    #[arg(short, long, default_value = "chirpstream.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Tail the public sample stream
    Sample,
    /// Tail the public filter stream
    Filter {
        /// Comma-separated phrases to track
        #[arg(short, long)]
        track: Option<String>,
        /// Comma-separated user IDs to follow
        #[arg(short, long)]
        follow: Option<String>,
        /// Comma-separated bounding boxes
        #[arg(short, long)]
        locations: Option<String>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chirpstream=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = match load_config(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("chirp-tail: {e}");
            return ExitCode::FAILURE;
        }
    };

    let client = match Client::new(config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("chirp-tail: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = register_printers(&client) {
        eprintln!("chirp-tail: {e}");
        return ExitCode::FAILURE;
    }

    let result = match cli.command {
        Commands::Sample => client.public().sample().await,
        Commands::Filter {
            track,
            follow,
            locations,
        } => {
            let params = FilterParams {
                track,
                follow,
                locations,
            };
            client.public().filter(&params).await
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("chirp-tail: stream ended: {e} ({:?})", classify_failure(&e));
            ExitCode::FAILURE
        }
    }
}

fn register_printers(client: &Client) -> chirpstream::Result<()> {
    client.register_fn(Kind::Tweet, |envelope| async move {
        if let Payload::Tweet(tweet) = &envelope.payload {
            let author = tweet
                .user
                .as_ref()
                .map(|u| u.screen_name.as_str())
                .unwrap_or("?");
            println!("@{author}: {}", tweet.text);
        }
    })?;

    client.register_fn(Kind::Delete, |envelope| async move {
        if let Payload::Delete(notice) = &envelope.payload {
            if let Some(status) = notice.delete.as_ref().and_then(|d| d.status.as_ref()) {
                println!("[deleted] status {}", status.id);
            }
        }
    })?;

    client.register_fn(Kind::Warning, |envelope| async move {
        if let Payload::Warning(notice) = &envelope.payload {
            if let Some(warning) = &notice.warning {
                println!("[warning] {}: {}", warning.code, warning.message);
            }
        }
    })?;

    Ok(())
}
