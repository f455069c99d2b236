//! Node runtime entry point.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use node_runtime::config::RuntimeConfig;
use node_runtime::RulesNode;
use np_01_node_rules::NodeRulesApi;

/// Default config path when none is given on the command line.
const DEFAULT_CONFIG_PATH: &str = "node-rules.toml";

/// Interval between periodic status log lines.
const STATUS_INTERVAL: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to install tracing subscriber")?;

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

    let config = if path.exists() {
        info!(path = %path.display(), "loading configuration");
        RuntimeConfig::load(&path).with_context(|| format!("loading {}", path.display()))?
    } else {
        warn!(path = %path.display(), "config file not found, starting empty");
        RuntimeConfig::default()
    };

    let node = RulesNode::from_config(&config).context("seeding rules engine")?;

    // Audit task: every whitelist mutation attempt lands in the log.
    let mut audit_rx = node.bus.subscribe();
    tokio::spawn(async move {
        loop {
            match audit_rx.recv().await {
                Ok(event) => info!(?event, "audit"),
                Err(tokio::sync::broadcast::error::RecvError::Lagged(missed)) => {
                    warn!(missed, "audit subscriber lagged, events dropped")
                }
                Err(tokio::sync::broadcast::error::RecvError::Closed) => break,
            }
        }
    });

    // Periodic status line.
    let rules = node.rules.clone();
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(STATUS_INTERVAL);
        ticker.tick().await; // first tick fires immediately
        loop {
            ticker.tick().await;
            let guard = rules.read();
            info!(
                whitelisted = guard.get_size(),
                read_only = guard.is_read_only(),
                "rules engine status"
            );
        }
    });

    info!("node runtime started, press ctrl-c to stop");
    tokio::signal::ctrl_c()
        .await
        .context("waiting for shutdown signal")?;
    info!("shutting down");

    Ok(())
}
