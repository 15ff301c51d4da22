//! # Signet Ledger Node Runtime
//!
//! The main entry point for a Signet Ledger node.
//!
//! ## Request Flow
//!
//! ```text
//! stdin line ──→ TransferHandler ──→ TransferAuthorizer (SG-03)
//!                                        │          │
//!                                        ↓          ↓
//!                               Recoverer (SG-01)  Ledger (SG-02)
//!                                                   │
//! stdout line ←──────────── receipt / error ←───────┘
//! ```
//!
//! ## Startup Sequence
//!
//! 1. Install the log subscriber (stderr; stdout carries responses)
//! 2. Load configuration from the environment
//! 3. Build genesis and wire the subsystems
//! 4. Serve request lines until EOF or Ctrl+C

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use node_runtime::container::config::ENV_LOG_LEVEL;
use node_runtime::{load_config, SubsystemContainer, TransferHandler};

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_env(ENV_LOG_LEVEL).unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing()?;

    info!("===========================================");
    info!("  Signet Ledger Node Runtime v{}", env!("CARGO_PKG_VERSION"));
    info!("===========================================");

    let config = load_config();
    let container = SubsystemContainer::new(config).context("Failed to initialize subsystems")?;
    let handler = TransferHandler::new(container.transfers());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    info!("Node is running. Reading requests from stdin.");
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read request")? else {
                    info!("Input closed");
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }
                let mut response = handler.handle_line(&line);
                response.push('\n');
                stdout
                    .write_all(response.as_bytes())
                    .await
                    .context("Failed to write response")?;
                stdout.flush().await.context("Failed to flush response")?;
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Shutdown signal received");
                break;
            }
        }
    }

    info!("Shutdown complete");
    Ok(())
}
