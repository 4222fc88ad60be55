//! itemForge - Item Repair and Enchantment Console
//!
//! Runs the repair and enchant command handlers against an in-memory
//! player, reading commands from stdin.

use std::sync::Arc;

use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use item_forge::config::{LogFormat, BUNDLED_ALIASES};
use item_forge::console::{demo_player, Console};
use item_forge::handlers::{EnchantHandler, RepairHandler, SuicideHandler};
use item_forge::host::StaticRegistry;
use item_forge::{AliasTable, Config, ConfigError};

/// Initialize tracing/logging
fn init_tracing(config: &Config) {
    let default_filter = if config.is_production() {
        "item_forge=info"
    } else {
        "item_forge=debug"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());
    let registry = tracing_subscriber::registry().with(filter);

    // Logs go to stderr so stdout carries only command replies
    match config.log_format {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
    }
}

/// Load the alias table; any error here must stop startup
fn load_aliases(config: &Config) -> Result<AliasTable, ConfigError> {
    match &config.alias_table_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading alias table from file");
            AliasTable::load(path)
        }
        None => {
            tracing::info!("Loading bundled alias table");
            AliasTable::from_json(BUNDLED_ALIASES)
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize tracing
    init_tracing(&config);

    tracing::info!(environment = %config.environment, "Starting itemForge console");

    let aliases = match load_aliases(&config) {
        Ok(aliases) => Arc::new(aliases),
        Err(e) => {
            tracing::error!(error = %e, "Alias table is unusable");
            return Err(e.into());
        }
    };
    let registry = Arc::new(StaticRegistry::vanilla());

    let enchant = EnchantHandler::new(aliases, registry)
        .with_default_level(config.default_enchant_level);
    let console = Console::new(RepairHandler::new(), enchant, SuicideHandler::new());

    let mut player = demo_player("Console");
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();

    tokio::select! {
        result = console.run(&mut player, stdin, &mut stdout) => {
            result?;
            tracing::info!("Input closed");
        },
        _ = shutdown_signal() => {},
    }

    tracing::info!("Console shutting down. Goodbye!");
    Ok(())
}

/// Shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        },
    }
}
