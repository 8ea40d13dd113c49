//! stakeview daemon — entry point for running the dashboard service.

mod config;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing::info;

use stakeview_client::{HttpPriceSource, ReadingWatcher, RpcGateway};
use stakeview_server::{Dashboard, DashboardServer};
use stakeview_types::AccountAddress;
use stakeview_utils::{init_tracing, LogFormat};

use crate::config::DashboardConfig;

#[derive(Parser)]
#[command(name = "stakeview-daemon", about = "stakeview staking dashboard daemon")]
struct Cli {
    /// Base URL of the node gateway.
    #[arg(long, env = "STAKEVIEW_NODE_URL")]
    node_url: Option<String>,

    /// Account whose per-user stake the panel follows.
    #[arg(long, env = "STAKEVIEW_ACCOUNT")]
    account: Option<String>,

    /// Port for the dashboard HTTP server.
    #[arg(long, env = "STAKEVIEW_PORT")]
    port: Option<u16>,

    /// Poll interval for new blocks, in milliseconds.
    #[arg(long, env = "STAKEVIEW_POLL_INTERVAL_MS")]
    poll_interval_ms: Option<u64>,

    /// Block explorer base URL; pass an empty string to disable links.
    #[arg(long, env = "STAKEVIEW_EXPLORER_URL")]
    explorer_url: Option<String>,

    /// Price endpoint returning {"usd": <price>}.
    #[arg(long, env = "STAKEVIEW_PRICE_URL")]
    price_url: Option<String>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "STAKEVIEW_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "STAKEVIEW_LOG_FORMAT")]
    log_format: Option<String>,

    /// Path to a TOML configuration file. If provided, file settings are
    /// used as the base; CLI flags and env vars override them.
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Cli {
    /// File (or defaults) as the base, CLI/env on top.
    fn into_config(self) -> anyhow::Result<DashboardConfig> {
        let mut config = match &self.config {
            Some(path) => DashboardConfig::from_toml_file(path)?,
            None => DashboardConfig::default(),
        };

        if let Some(node_url) = self.node_url {
            config.node_url = node_url;
        }
        if let Some(account) = self.account {
            config.account = account;
        }
        if let Some(port) = self.port {
            config.listen_port = port;
        }
        if let Some(poll) = self.poll_interval_ms {
            config.poll_interval_ms = poll;
        }
        if let Some(explorer) = self.explorer_url {
            config.explorer_url = (!explorer.is_empty()).then_some(explorer);
        }
        if let Some(price_url) = self.price_url {
            config.price_url = Some(price_url);
        }
        if let Some(log_level) = self.log_level {
            config.log_level = log_level;
        }
        if let Some(log_format) = self.log_format {
            config.log_format = log_format;
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Cli::parse().into_config()?;
    init_tracing(&config.log_level, LogFormat::parse(&config.log_format));

    info!(
        "starting stakeview dashboard (node: {}, account: {}, HTTP: {})",
        config.node_url, config.account, config.listen_port,
    );

    let gateway = Arc::new(RpcGateway::new(config.node_url.as_str())?);
    let price = config.price_url.as_deref().map(HttpPriceSource::new);
    let dashboard = Arc::new(Dashboard::new(
        Arc::clone(&gateway),
        price,
        config.explorer_url.clone(),
    ));

    let (watcher, mut updates) = ReadingWatcher::spawn(
        gateway,
        AccountAddress::new(config.account.as_str()),
        Duration::from_millis(config.poll_interval_ms),
    );

    let update_loop = {
        let dashboard = Arc::clone(&dashboard);
        tokio::spawn(async move {
            while let Some(update) = updates.recv().await {
                dashboard.apply(update).await;
            }
        })
    };

    let server = DashboardServer::new(config.listen_port);
    tokio::select! {
        result = server.start(Arc::clone(&dashboard)) => result?,
        _ = tokio::signal::ctrl_c() => {
            info!("shutdown signal received — stopping dashboard");
        }
    }

    watcher.stop();
    update_loop.abort();

    info!("stakeview daemon exited cleanly");
    Ok(())
}
