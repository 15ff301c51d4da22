//! # Transfer Handler
//!
//! Line-delimited JSON front end for the transfer API. Each input line is
//! one request; each request yields exactly one response line.
//!
//! ```text
//! → {"op":"submit_transfer","recipient":"0x…","amount":30,"signature":"…","recovery":0}
//! ← {"ok":{"new_sender_balance":70,"amount":30}}
//!
//! → {"op":"balance","address":"0x…"}
//! ← {"error":{"kind":"not_found","message":"…"}}
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{json, Number, Value};
use sg_03_transfer_authorization::{TransferApi, TransferError, TransferReceipt};
use tracing::debug;

/// A decoded request line.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum WireRequest {
    SubmitTransfer {
        recipient: String,
        /// Kept as a raw number so negative and fractional amounts are
        /// reported as invalid amounts rather than malformed requests.
        amount: Number,
        signature: String,
        recovery: u64,
        #[serde(default)]
        nonce: Option<u64>,
    },
    ListAccounts,
    Balance {
        address: String,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
enum WireResponse {
    Ok(Value),
    Error(WireError),
}

#[derive(Debug, Serialize)]
struct WireError {
    kind: &'static str,
    message: String,
}

impl WireResponse {
    fn error(kind: &'static str, message: impl Into<String>) -> Self {
        Self::Error(WireError {
            kind,
            message: message.into(),
        })
    }
}

impl From<TransferError> for WireResponse {
    fn from(err: TransferError) -> Self {
        Self::error(err.kind().as_str(), err.to_string())
    }
}

/// Serves wire requests against a [`TransferApi`].
pub struct TransferHandler<T: TransferApi> {
    api: Arc<T>,
}

impl<T: TransferApi> TransferHandler<T> {
    pub fn new(api: Arc<T>) -> Self {
        Self { api }
    }

    /// Handle one request line and render its response line (no trailing
    /// newline).
    pub fn handle_line(&self, line: &str) -> String {
        let response = match serde_json::from_str::<WireRequest>(line) {
            Ok(request) => self.dispatch(request),
            Err(e) => {
                debug!(error = %e, "Malformed request line");
                WireResponse::error("bad_request", e.to_string())
            }
        };

        serde_json::to_string(&response).unwrap_or_else(|e| internal_error_line(&e.to_string()))
    }

    fn dispatch(&self, request: WireRequest) -> WireResponse {
        match request {
            WireRequest::SubmitTransfer {
                recipient,
                amount,
                signature,
                recovery,
                nonce,
            } => match self.submit(&recipient, &amount, &signature, recovery, nonce) {
                Ok(receipt) => WireResponse::Ok(json!(receipt)),
                Err(e) => e.into(),
            },
            WireRequest::ListAccounts => WireResponse::Ok(json!(self.api.list_accounts())),
            WireRequest::Balance { address } => match self.api.balance_of(&address) {
                Some(balance) => WireResponse::Ok(json!({
                    "address": address,
                    "balance": balance,
                })),
                None => WireResponse::error("not_found", format!("No account for key {address}")),
            },
        }
    }

    fn submit(
        &self,
        recipient: &str,
        amount: &Number,
        signature: &str,
        recovery: u64,
        nonce: Option<u64>,
    ) -> Result<TransferReceipt, TransferError> {
        let amount = amount.as_u64().ok_or_else(|| {
            TransferError::InvalidAmount(format!("{amount} is not a whole number of units"))
        })?;
        // Undecodable signatures and indicators are left for the authorizer
        // to reject at the recovery stage, after the amount check.
        let digits = signature.strip_prefix("0x").unwrap_or(signature);
        let signature = hex::decode(digits).unwrap_or_default();
        let recovery = u8::try_from(recovery).unwrap_or(u8::MAX);

        self.api
            .submit_transfer(recipient, amount, &signature, recovery, nonce)
    }
}

/// Response line used when a response itself cannot be encoded.
fn internal_error_line(message: &str) -> String {
    json!({ "error": { "kind": "internal", "message": message } }).to_string()
}
