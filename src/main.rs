mod dispatch;
mod link;
mod model;
mod state;
mod web;

use clap::{Parser, Subcommand};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

use crate::dispatch::Dispatcher;
use crate::link::{LinkSupervisor, ReplayClient};
use crate::state::Stores;
use crate::web::config::{Config, SourceConfig};

#[derive(Parser)]
#[command(name = "simdeck")]
#[command(about = "Flight simulator companion state service")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a config file
    Validate { config: String },
    /// Run the companion service
    Run { config: String },
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { config } => validate(&config),
        Commands::Run { config } => run(&config).await,
    }
}

fn validate(path: &str) -> ExitCode {
    match Config::from_file(path) {
        Ok(config) => {
            println!("Config is valid");
            println!("  bind: {}", config.web.bind);
            let SourceConfig::Replay { path, interval_ms } = &config.link.source;
            println!(
                "  source: replay {} (one frame every {} ms)",
                path.display(),
                interval_ms
            );
            println!("  recording stop delay: {} ms", config.recording.stop_delay_ms);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Config error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(path: &str) -> ExitCode {
    let config = match Config::from_file(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let stores = Arc::new(Stores::new(config.recording.stop_delay()));

    let (events_tx, events_rx) = mpsc::channel(64);
    tokio::spawn(Dispatcher::new(stores.clone(), events_rx).run());

    let SourceConfig::Replay {
        path: replay_path,
        interval_ms,
    } = &config.link.source;
    let client = ReplayClient::new(replay_path.clone(), Duration::from_millis(*interval_ms));
    let supervisor = LinkSupervisor::new(
        client,
        events_tx,
        config.link.retry_interval(),
        config.link.heartbeat_timeout(),
    );
    tokio::spawn(supervisor.run());

    if let Err(e) = web::run_server(config, stores).await {
        eprintln!("Server error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
