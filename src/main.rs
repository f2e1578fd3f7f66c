// src/main.rs

mod cli;

use careernexus::{AppState, config::Config};
use clap::Parser;
use dotenvy::dotenv;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenv().ok();

    let cli = cli::Cli::parse();

    // Load configuration from environment
    let config = Config::from_env();

    let file_appender = tracing_appender::rolling::daily("logs", "careernexus.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = EnvFilter::new(&config.rust_log);
    // stdout belongs to the REPL; console logs go to stderr
    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);
    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    // Initialize Tracing (Logging)
    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    let mut state = match AppState::new(config) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("Failed to start: {}", e);
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };
    tracing::debug!("backend at {}", state.api.base());

    if let Err(e) = cli::run(cli, &mut state).await {
        tracing::debug!("command failed: {:?}", e);
        eprintln!("{}", e.toast_message());
        std::process::exit(1);
    }
}
