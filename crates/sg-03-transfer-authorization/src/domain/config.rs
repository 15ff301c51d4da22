//! # Authorizer Configuration

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default per-transfer ceiling.
pub const DEFAULT_MAX_TRANSFER_AMOUNT: u64 = 1_000_000;

/// Whether resubmitting an identical signed request is allowed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplayProtection {
    /// No replay protection: an identical signed request settles again.
    #[default]
    Disabled,
    /// Each request must carry the sender's current sequence number, which
    /// is bound into the signed message and advanced on settlement.
    SequenceNumber,
}

impl FromStr for ReplayProtection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "disabled" | "off" | "none" => Ok(Self::Disabled),
            "sequence" | "sequence_number" | "nonce" => Ok(Self::SequenceNumber),
            other => Err(format!("unknown replay protection mode: {other}")),
        }
    }
}

impl fmt::Display for ReplayProtection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disabled => f.write_str("disabled"),
            Self::SequenceNumber => f.write_str("sequence"),
        }
    }
}

/// Transfer authorizer configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizerConfig {
    /// Largest amount a single transfer may move.
    pub max_transfer_amount: u64,
    pub replay_protection: ReplayProtection,
}

impl Default for AuthorizerConfig {
    fn default() -> Self {
        Self {
            max_transfer_amount: DEFAULT_MAX_TRANSFER_AMOUNT,
            replay_protection: ReplayProtection::Disabled,
        }
    }
}
