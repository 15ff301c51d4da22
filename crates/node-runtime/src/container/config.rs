//! # Node Configuration
//!
//! Unified configuration for the subsystems and runtime parameters.
//!
//! All values have defaults; environment variables override them. A value
//! that fails to parse is reported and the default is kept.

use sg_03_transfer_authorization::{AuthorizerConfig, ReplayProtection};
use std::path::PathBuf;
use tracing::{info, warn};

/// Maximum amount accepted in a single transfer.
pub const ENV_MAX_TRANSFER_AMOUNT: &str = "SG_MAX_TRANSFER_AMOUNT";
/// `disabled` or `sequence`.
pub const ENV_REPLAY_PROTECTION: &str = "SG_REPLAY_PROTECTION";
/// JSON genesis file; the development genesis is used when unset.
pub const ENV_GENESIS_PATH: &str = "SG_GENESIS_PATH";
/// `EnvFilter` directive for the log subscriber.
pub const ENV_LOG_LEVEL: &str = "SG_LOG_LEVEL";

/// Complete node configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeConfig {
    /// Transfer authorization configuration.
    pub authorizer: AuthorizerConfig,
    /// Genesis file. `None` selects the development genesis.
    pub genesis_path: Option<PathBuf>,
}

/// Load configuration from the process environment.
pub fn load_config() -> NodeConfig {
    load_config_from(|key| std::env::var(key).ok())
}

/// Load configuration from an arbitrary variable source.
pub fn load_config_from<F>(lookup: F) -> NodeConfig
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = NodeConfig::default();

    if let Some(raw) = lookup(ENV_MAX_TRANSFER_AMOUNT) {
        match raw.trim().parse::<u64>() {
            Ok(max) if max > 0 => config.authorizer.max_transfer_amount = max,
            _ => warn!(
                var = ENV_MAX_TRANSFER_AMOUNT,
                value = %raw,
                "Expected a positive integer, keeping default"
            ),
        }
    }

    if let Some(raw) = lookup(ENV_REPLAY_PROTECTION) {
        match raw.parse::<ReplayProtection>() {
            Ok(mode) => config.authorizer.replay_protection = mode,
            Err(e) => warn!(var = ENV_REPLAY_PROTECTION, value = %raw, "{}, keeping default", e),
        }
    }

    if let Some(raw) = lookup(ENV_GENESIS_PATH) {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            config.genesis_path = Some(PathBuf::from(trimmed));
        }
    }

    info!(
        max_transfer_amount = config.authorizer.max_transfer_amount,
        replay_protection = %config.authorizer.replay_protection,
        genesis = ?config.genesis_path,
        "Configuration loaded"
    );

    config
}
