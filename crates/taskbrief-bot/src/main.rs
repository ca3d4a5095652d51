/*
[INPUT]:  CLI arguments, YAML configuration file, OS shutdown signals
[OUTPUT]: Running digest/interaction server with graceful shutdown
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, startup flow, or shutdown handling
*/

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use taskbrief_adapter::{SlackClient, TodoistClient};
use taskbrief_bot::{AppState, BotConfig, server};

#[derive(Parser, Debug)]
#[command(name = "taskbrief-bot", version, about = "Todoist digest bot for Slack")]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: PathBuf,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    info!(
        config_path = %args.config_path.display(),
        "starting taskbrief-bot"
    );

    let config = load_config(&args.config_path)?;
    info!(
        channel = %config.channel_id,
        utc_offset_minutes = config.utc_offset_minutes,
        "configuration loaded"
    );

    let source = TodoistClient::new(&config.todoist_token).context("build todoist client")?;
    let slack = SlackClient::new(&config.slack_bot_token).context("build slack client")?;
    let state = AppState {
        source: Arc::new(source),
        slack: Arc::new(slack),
        channel_id: config.channel_id.clone(),
        utc_offset_minutes: config.utc_offset_minutes,
    };

    let shutdown = CancellationToken::new();
    setup_signal_handlers(shutdown.clone());

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .with_context(|| format!("bind {}", config.listen_addr))?;
    server::run(listener, state, shutdown).await?;
    info!("shutdown complete");

    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

fn load_config(path: &PathBuf) -> Result<BotConfig> {
    let path_str = path
        .to_str()
        .context("config path must be valid utf-8")?;
    BotConfig::from_file(path_str).context("load config")
}

fn setup_signal_handlers(shutdown: CancellationToken) {
    let shutdown_clone = shutdown.clone();
    tokio::spawn(async move {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "failed to install SIGINT handler");
            return;
        }
        info!("received SIGINT");
        shutdown_clone.cancel();
    });

    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let shutdown_clone = shutdown.clone();
        tokio::spawn(async move {
            match signal(SignalKind::terminate()) {
                Ok(mut stream) => {
                    stream.recv().await;
                    info!("received SIGTERM");
                    shutdown_clone.cancel();
                }
                Err(err) => {
                    warn!(error = %err, "failed to install SIGTERM handler");
                }
            }
        });
    }
}
