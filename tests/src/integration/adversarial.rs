//! # Adversarial Requests
//!
//! Forged, tampered and malleated signatures. None of them may move funds.

use super::fixtures::network;
use k256::elliptic_curve::PrimeField;
use k256::{FieldBytes, Scalar};
use sg_01_signature_recovery::SignatureError;
use sg_02_account_ledger::LedgerApi;
use sg_03_transfer_authorization::{
    AuthorizerConfig, TransferApi, TransferError, TransferErrorKind, TransferRequest,
};
use shared_types::format_address;

fn reject<T: TransferApi>(api: &T, request: &TransferRequest) -> TransferError {
    api.submit(request).unwrap_err()
}

/// `n - s`, the other valid S for the same signature.
fn negate_s(s: &[u8]) -> Vec<u8> {
    let repr = *FieldBytes::from_slice(s);
    let scalar = Option::<Scalar>::from(Scalar::from_repr(repr)).unwrap();
    (-scalar).to_bytes().to_vec()
}

#[test]
fn test_high_s_twin_rejected() {
    let (service, w) = network(&[100, 0], AuthorizerConfig::default());
    let honest = w[0].sign_transfer(&w[1].address(), 10, None).unwrap();

    let mut twin = honest.clone();
    let high_s = negate_s(&honest.signature[32..]);
    twin.signature[32..].copy_from_slice(&high_s);
    twin.recovery_id ^= 1;

    assert_eq!(
        reject(&*service, &twin),
        TransferError::InvalidSignature(SignatureError::MalleableSignature)
    );
    assert!(service.submit(&honest).is_ok());
}

#[test]
fn test_zero_scalars_rejected() {
    let (service, w) = network(&[100, 0], AuthorizerConfig::default());
    let honest = w[0].sign_transfer(&w[1].address(), 10, None).unwrap();

    let mut zero_r = honest.clone();
    zero_r.signature[..32].fill(0);
    let mut zero_s = honest;
    zero_s.signature[32..].fill(0);

    for forged in [zero_r, zero_s] {
        assert_eq!(
            reject(&*service, &forged).kind(),
            TransferErrorKind::InvalidSignature
        );
    }
    assert_eq!(service.ledger().balance_of(&w[0].address()), Some(100));
}

#[test]
fn test_recovery_indicator_must_be_a_bit() {
    let (service, w) = network(&[100, 0], AuthorizerConfig::default());

    for recovery_id in [2u8, 3, 27, 28] {
        let mut request = w[0].sign_transfer(&w[1].address(), 10, None).unwrap();
        request.recovery_id = recovery_id;
        assert_eq!(
            reject(&*service, &request),
            TransferError::InvalidSignature(SignatureError::InvalidRecoveryId(recovery_id))
        );
    }
}

#[test]
fn test_signature_length_enforced() {
    let (service, w) = network(&[100, 0], AuthorizerConfig::default());
    let honest = w[0].sign_transfer(&w[1].address(), 10, None).unwrap();

    let mut with_v_byte = honest.clone();
    with_v_byte.signature.push(honest.recovery_id);
    let mut empty = honest;
    empty.signature.clear();

    for forged in [with_v_byte, empty] {
        assert_eq!(
            reject(&*service, &forged),
            TransferError::InvalidSignature(SignatureError::InvalidFormat)
        );
    }
}

#[test]
fn test_redirected_signature_cannot_debit_signer() {
    let (service, w) = network(&[100, 0, 0], AuthorizerConfig::default());
    let (victim, intended, thief) = (&w[0], &w[1], &w[2]);
    let signed = victim.sign_transfer(&intended.address(), 50, None).unwrap();

    let mut redirected = signed.clone();
    redirected.recipient = format_address(&thief.address());
    let mut inflated = signed.clone();
    inflated.amount = 100;
    let mut flipped = signed;
    flipped.recovery_id ^= 1;

    for forged in [redirected, inflated, flipped] {
        // Either recovery fails, or it yields some key that is not the victim.
        let err = reject(&*service, &forged);
        assert!(
            matches!(
                err.kind(),
                TransferErrorKind::InvalidSignature | TransferErrorKind::UnknownSender
            ),
            "unexpected {err:?}"
        );
    }

    assert_eq!(service.ledger().balance_of(&victim.address()), Some(100));
    assert_eq!(service.ledger().balance_of(&thief.address()), Some(0));
}

#[test]
fn test_recipient_casing_does_not_change_signed_message() {
    let (service, w) = network(&[100, 0], AuthorizerConfig::default());
    let mut request = w[0].sign_transfer(&w[1].address(), 10, None).unwrap();

    request.recipient = format!("0X{}", hex::encode_upper(w[1].address()));

    assert_eq!(service.submit(&request).unwrap().new_sender_balance, 90);
}
