//! # Transfer Authorization Subsystem (SG-03)
//!
//! The protocol's decision point: turns a signed transfer request into a
//! settled ledger transaction, or a definitive rejection.
//!
//! ## Pipeline
//!
//! ```text
//! Received -> Hashed -> Recovered -> Resolved -> Authorized -> Settled
//!    |           |          |            |            |           |
//!    v           v          v            v            v           v
//! InvalidAmount  .   InvalidSignature UnknownSender  Replay     Insufficient
//!                                     UnknownRecip.  Insufficient  Funds (re-read)
//!                                     SelfTransfer     Funds      Replay
//! ```
//!
//! ## Security
//!
//! - The sender is whoever [`recover_address`](sg_01_signature_recovery::recover_address)
//!   says signed the canonical message. Requests have no sender field.
//! - Recipient and amount (and nonce, when present) are bound into the
//!   signed message, so a signature cannot be replayed against other terms.
//! - Every rejection happens before the ledger is touched.

pub mod domain;
pub mod ports;
pub mod service;
pub mod wallet;

pub use domain::config::{AuthorizerConfig, ReplayProtection, DEFAULT_MAX_TRANSFER_AMOUNT};
pub use domain::entities::{TransferReceipt, TransferRequest, TransferStage};
pub use domain::errors::{TransferError, TransferErrorKind};
pub use ports::inbound::TransferApi;
pub use service::TransferAuthorizationService;
pub use wallet::Wallet;
