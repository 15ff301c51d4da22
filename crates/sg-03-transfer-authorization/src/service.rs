//! # Transfer Authorization Service
//!
//! Application service that implements `TransferApi` by running the
//! authorization pipeline over a signature recoverer and a ledger.
//!
//! ## Architecture
//!
//! - Implements the inbound port (`TransferApi`)
//! - Uses `SignatureRecoveryApi` (SG-01) for hashing and recovery
//! - Uses `LedgerApi` (SG-02) for account resolution and settlement

use crate::domain::config::{AuthorizerConfig, ReplayProtection};
use crate::domain::entities::{TransferReceipt, TransferRequest, TransferStage};
use crate::domain::errors::TransferError;
use crate::ports::inbound::TransferApi;
use sg_01_signature_recovery::{
    CanonicalMessage, EcdsaSignature, SignatureRecoveryApi, SignatureRecoveryService,
};
use sg_02_account_ledger::{AccountSummary, LedgerApi, LedgerTransaction};
use shared_types::{format_address, parse_address};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Transfer Authorization Service.
///
/// Holds the ledger by `Arc` so the same store can be shared with other
/// readers for the lifetime of the process.
pub struct TransferAuthorizationService<
    L: LedgerApi,
    R: SignatureRecoveryApi = SignatureRecoveryService,
> {
    ledger: Arc<L>,
    recoverer: R,
    config: AuthorizerConfig,
}

impl<L: LedgerApi> TransferAuthorizationService<L, SignatureRecoveryService> {
    pub fn new(ledger: Arc<L>, config: AuthorizerConfig) -> Self {
        Self::with_recoverer(ledger, SignatureRecoveryService::new(), config)
    }
}

impl<L: LedgerApi, R: SignatureRecoveryApi> TransferAuthorizationService<L, R> {
    pub fn with_recoverer(ledger: Arc<L>, recoverer: R, config: AuthorizerConfig) -> Self {
        Self {
            ledger,
            recoverer,
            config,
        }
    }

    pub fn config(&self) -> &AuthorizerConfig {
        &self.config
    }

    pub fn ledger(&self) -> &Arc<L> {
        &self.ledger
    }

    /// Run the authorization pipeline.
    ///
    /// Stages run strictly in order and each failure exits before any
    /// ledger mutation. The funds and nonce checks are repeated by the
    /// ledger inside its critical section.
    pub fn authorize(&self, request: &TransferRequest) -> Result<TransferReceipt, TransferError> {
        self.run(request).map_err(|(stage, err)| {
            warn!(
                stage = %stage,
                kind = err.kind().as_str(),
                reason = %err,
                "Transfer rejected"
            );
            err
        })
    }

    fn run(
        &self,
        request: &TransferRequest,
    ) -> Result<TransferReceipt, (TransferStage, TransferError)> {
        // Step 1: Received
        let stage = TransferStage::Received;
        let amount = request.amount;
        if amount == 0 {
            return Err((
                stage,
                TransferError::InvalidAmount("amount must be positive".to_string()),
            ));
        }
        if amount > self.config.max_transfer_amount {
            return Err((
                stage,
                TransferError::InvalidAmount(format!(
                    "amount {amount} exceeds maximum {}",
                    self.config.max_transfer_amount
                )),
            ));
        }
        debug!(stage = %stage, amount, "Transfer request received");

        // Step 2: Hashed
        // A recipient that does not parse is signed over verbatim and
        // rejected at Resolved, after the signature has been checked.
        let stage = TransferStage::Hashed;
        let parsed_recipient = parse_address(&request.recipient);
        let message = match &parsed_recipient {
            Ok(recipient) => CanonicalMessage::with_nonce(recipient, amount, request.nonce),
            Err(_) => {
                CanonicalMessage::from_recipient_text(&request.recipient, amount, request.nonce)
            }
        };
        let digest = self.recoverer.hash_message(&message);
        debug!(stage = %stage, message = %message, "Canonical message hashed");

        // Step 3: Recovered
        let stage = TransferStage::Recovered;
        let signature = EcdsaSignature::from_compact(&request.signature, request.recovery_id)
            .map_err(|e| (stage, e.into()))?;
        let public_key = self
            .recoverer
            .recover_public_key(&digest, &signature)
            .map_err(|e| (stage, e.into()))?;
        let sender_address = public_key.address();
        debug!(
            stage = %stage,
            sender = %format_address(&sender_address),
            public_key = %hex::encode(public_key.bytes),
            "Signer recovered"
        );

        // Step 4: Resolved (sender, then recipient)
        let stage = TransferStage::Resolved;
        let sender = self.ledger.resolve(&sender_address).ok_or((
            stage,
            TransferError::UnknownSender {
                address: sender_address,
            },
        ))?;
        let recipient = parsed_recipient.map_err(|_| {
            (
                stage,
                TransferError::UnknownRecipient {
                    recipient: request.recipient.clone(),
                },
            )
        })?;
        if self.ledger.resolve(&recipient).is_none() {
            return Err((
                stage,
                TransferError::UnknownRecipient {
                    recipient: format_address(&recipient),
                },
            ));
        }
        if sender.address == recipient {
            return Err((stage, TransferError::SelfTransfer));
        }

        // Step 5: Authorized
        let stage = TransferStage::Authorized;
        let expected_nonce = match self.config.replay_protection {
            ReplayProtection::Disabled => None,
            ReplayProtection::SequenceNumber => {
                if request.nonce != Some(sender.nonce) {
                    return Err((
                        stage,
                        TransferError::Replay {
                            expected: sender.nonce,
                            actual: request.nonce,
                        },
                    ));
                }
                request.nonce
            }
        };
        if sender.balance < amount {
            return Err((
                stage,
                TransferError::InsufficientFunds {
                    required: amount,
                    available: sender.balance,
                },
            ));
        }

        // Step 6: Settled
        let stage = TransferStage::Settled;
        let transaction = LedgerTransaction::new(sender.address, recipient, amount)
            .with_expected_nonce(expected_nonce);
        let settlement = self
            .ledger
            .transfer(&transaction)
            .map_err(|e| (stage, TransferError::from_settlement(e, &sender.address)))?;

        info!(
            sender = %format_address(&settlement.sender),
            recipient = %format_address(&settlement.recipient),
            amount = settlement.amount,
            new_sender_balance = settlement.sender_balance,
            "Transfer settled"
        );

        Ok(TransferReceipt {
            new_sender_balance: settlement.sender_balance,
            amount: settlement.amount,
        })
    }
}

impl<L: LedgerApi, R: SignatureRecoveryApi> TransferApi for TransferAuthorizationService<L, R> {
    fn submit(&self, request: &TransferRequest) -> Result<TransferReceipt, TransferError> {
        self.authorize(request)
    }

    fn list_accounts(&self) -> Vec<AccountSummary> {
        self.ledger.list_accounts()
    }

    fn balance_of(&self, public_key: &str) -> Option<u64> {
        let address = parse_address(public_key).ok()?;
        self.ledger.balance_of(&address)
    }
}

// =============================================================================
// TESTS
// =============================================================================
