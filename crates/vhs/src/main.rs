//! VHS command line.
//!
//! Usage:
//!   vhs inspect <name> [--fixtures DIR] [--schema headers|tagged]
//!   vhs play <name> --url URL [--method M] [--config FILE] [--repeat N]

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use vhs::cassette::{Cassette, DEFAULT_FIXTURE_DIR, FIXTURE_DIR_ENV};
use vhs::{BodySchema, FixtureStore, IncomingRequest, Method, PlaybackConfig, Vcr};

#[derive(Parser, Debug)]
#[command(name = "vhs")]
#[command(author, version, about = "Replay recorded HTTP interactions from JSON cassettes")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the tracks of a cassette
    Inspect {
        /// Fixture name, without the `.json` extension
        name: String,

        /// Directory containing fixtures
        #[arg(short, long, env = FIXTURE_DIR_ENV, default_value = DEFAULT_FIXTURE_DIR)]
        fixtures: PathBuf,

        /// Body layout: headers (default) or tagged
        #[arg(short, long, default_value = "headers")]
        schema: BodySchema,
    },

    /// Answer a request from a cassette
    Play {
        /// Fixture name, without the `.json` extension
        name: String,

        /// Absolute request URL
        #[arg(short, long)]
        url: String,

        /// Request method
        #[arg(short, long, default_value = "GET")]
        method: String,

        /// Playback configuration (YAML or JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Directory containing fixtures; overrides the config file
        #[arg(short, long, env = FIXTURE_DIR_ENV)]
        fixtures: Option<PathBuf>,

        /// Number of times to send the request
        #[arg(short, long, default_value_t = 1)]
        repeat: usize,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    match args.command {
        Command::Inspect {
            name,
            fixtures,
            schema,
        } => {
            let cassette = FixtureStore::new(fixtures).with_schema(schema).load(&name)?;
            print_tracks(&cassette);
        }
        Command::Play {
            name,
            url,
            method,
            config,
            fixtures,
            repeat,
        } => {
            let mut config = match config {
                Some(path) => PlaybackConfig::from_file(&path)
                    .with_context(|| format!("Failed to load config {}", path.display()))?,
                None => PlaybackConfig::default(),
            };
            if fixtures.is_some() {
                config.fixture_dir = fixtures;
            }

            let cassette = config.fixture_store().load(&name)?;
            let vcr = Vcr::from_config(&cassette, &config)?;
            let request = IncomingRequest::get(&url)?.with_method(Method::parse(Some(method.as_str())));
            info!(
                "Playing {} {} {} time(s), replay {:?}",
                request.method,
                request.url,
                repeat,
                vcr.replay_mode()
            );

            for attempt in 1..=repeat {
                match vcr.send(request.clone()).await {
                    Ok(response) => {
                        println!(
                            "#{attempt} {}",
                            response
                                .status
                                .map_or_else(|| "-".to_string(), |s| s.to_string())
                        );
                        let mut headers: Vec<_> =
                            response.headers.iter().flatten().collect();
                        headers.sort();
                        for (key, value) in headers {
                            println!("{key}: {value}");
                        }
                        if let Some(body) = &response.body {
                            println!("\n{}", String::from_utf8_lossy(body));
                        }
                    }
                    Err(e) => println!("#{attempt} {} ({} {})", e, vhs::VcrError::DOMAIN, e.code()),
                }
            }
        }
    }
    Ok(())
}

fn print_tracks(cassette: &Cassette) {
    for (index, track) in cassette.iter().enumerate() {
        let status = track
            .response
            .status
            .map_or_else(|| "-".to_string(), |s| s.to_string());
        let body_len = track.response.body.as_ref().map_or(0, |b| b.len());
        println!(
            "[{index}] {} {} -> {status} ({} bytes, {})",
            track.request.method,
            track.request.url,
            body_len,
            track.response.content_kind.as_str()
        );
    }
}
