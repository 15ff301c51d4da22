//! # ECDSA Recovery (secp256k1)
//!
//! Pure domain logic for recovering the signer of a transfer message.
//!
//! ## Security Notes
//!
//! - **Malleability Prevention**: S must be STRICTLY LESS THAN SECP256K1_HALF_ORDER
//! - **Scalar Range Validation**: R and S must be in [1, n-1]
//! - **Single-Bit Recovery**: only recovery indicators 0 and 1 are accepted
//! - **Constant-Time Operations**: Uses `subtle` crate for side-channel resistance
//! - Uses k256 crate for cryptographic operations

use super::entities::{EcdsaPublicKey, EcdsaSignature};
use super::errors::SignatureError;
use super::hashing::keccak256;
use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};
use shared_types::{Address, Hash};
use subtle::{Choice, ConstantTimeEq};

/// secp256k1 curve order n
/// n = 0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141
const SECP256K1_ORDER: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE,
    0xBA, 0xAE, 0xDC, 0xE6, 0xAF, 0x48, 0xA0, 0x3B, 0xBF, 0xD2, 0x5E, 0x8C, 0xD0, 0x36, 0x41, 0x41,
];

/// Half of the secp256k1 curve order (for malleability check).
const SECP256K1_HALF_ORDER: [u8; 32] = [
    0x7F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0x5D, 0x57, 0x6E, 0x73, 0x57, 0xA4, 0x50, 0x1D, 0xDF, 0xE9, 0x2F, 0x46, 0x68, 0x1B, 0x20, 0xA0,
];

// =============================================================================
// CORE RECOVERY FUNCTIONS
// =============================================================================

/// Recover the public key that signed `message_hash`.
///
/// Validations performed, in order:
/// 1. Recovery indicator is 0 or 1
/// 2. R and S are in range [1, n-1]
/// 3. S is in the lower half of the curve order
/// 4. Public key recovery succeeds
pub fn recover_public_key(
    message_hash: &Hash,
    signature: &EcdsaSignature,
) -> Result<EcdsaPublicKey, SignatureError> {
    let key = recover_verifying_key(message_hash, signature)?;
    Ok(encode_public_key(&key))
}

/// Recover the signer's account address from a signature.
pub fn recover_address(
    message_hash: &Hash,
    signature: &EcdsaSignature,
) -> Result<Address, SignatureError> {
    let key = recover_verifying_key(message_hash, signature)?;
    Ok(address_from_pubkey(&key))
}

fn recover_verifying_key(
    message_hash: &Hash,
    signature: &EcdsaSignature,
) -> Result<VerifyingKey, SignatureError> {
    use zeroize::Zeroize;

    let recovery_id = parse_recovery_id(signature.v)?;

    if !is_valid_scalar(&signature.r) || !is_valid_scalar(&signature.s) {
        return Err(SignatureError::InvalidFormat);
    }

    if !is_low_s(&signature.s) {
        return Err(SignatureError::MalleableSignature);
    }

    let mut sig_bytes = signature.to_compact();
    let parsed = Signature::from_slice(&sig_bytes);
    sig_bytes.zeroize();
    let sig = parsed.map_err(|_| SignatureError::InvalidFormat)?;

    VerifyingKey::recover_from_prehash(message_hash, &sig, recovery_id)
        .map_err(|_| SignatureError::RecoveryFailed)
}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Derive the account address from a public key.
pub fn address_from_pubkey(public_key: &VerifyingKey) -> Address {
    encode_public_key(public_key).address()
}

fn encode_public_key(public_key: &VerifyingKey) -> EcdsaPublicKey {
    let encoded = public_key.to_encoded_point(false);
    let mut bytes = [0u8; 65];
    bytes.copy_from_slice(encoded.as_bytes());
    EcdsaPublicKey { bytes }
}

impl EcdsaPublicKey {
    /// Account address: last 20 bytes of keccak256 over `x || y`.
    pub fn address(&self) -> Address {
        // Skip the 0x04 SEC1 prefix
        let hash = keccak256(&self.bytes[1..]);
        let mut address = [0u8; 20];
        address.copy_from_slice(&hash[12..]);
        address
    }
}

/// Check if S value is in lower half of curve order.
///
/// S must be STRICTLY LESS THAN half_order (not equal).
///
/// ## Security: Constant-Time Implementation
///
/// The comparison runs in fixed time regardless of input values.
pub(crate) fn is_low_s(s: &[u8; 32]) -> bool {
    let mut less = Choice::from(0u8);
    let mut greater = Choice::from(0u8);

    for i in 0..32 {
        let s_byte = s[i];
        let h_byte = SECP256K1_HALF_ORDER[i];

        // less = less OR (NOT decided AND s[i] < h[i])
        let not_decided = !(less | greater);
        let byte_less = Choice::from((s_byte < h_byte) as u8);
        let byte_greater = Choice::from((s_byte > h_byte) as u8);

        less |= not_decided & byte_less;
        greater |= not_decided & byte_greater;
    }

    less.into()
}

/// Check if a scalar value is in valid range [1, n-1] for ECDSA.
fn is_valid_scalar(scalar: &[u8; 32]) -> bool {
    let mut is_zero = Choice::from(1u8);
    for &byte in scalar {
        is_zero &= byte.ct_eq(&0u8);
    }

    let mut less = Choice::from(0u8);
    let mut greater = Choice::from(0u8);

    for i in 0..32 {
        let s_byte = scalar[i];
        let n_byte = SECP256K1_ORDER[i];

        let not_decided = !(less | greater);
        let byte_less = Choice::from((s_byte < n_byte) as u8);
        let byte_greater = Choice::from((s_byte > n_byte) as u8);

        less |= not_decided & byte_less;
        greater |= not_decided & byte_greater;
    }

    let valid = !is_zero & less;
    valid.into()
}

/// Parse the single-bit recovery indicator.
fn parse_recovery_id(v: u8) -> Result<RecoveryId, SignatureError> {
    if v > 1 {
        return Err(SignatureError::InvalidRecoveryId(v));
    }

    RecoveryId::try_from(v).map_err(|_| SignatureError::InvalidRecoveryId(v))
}

/// Invert S value: s' = n - s
pub(crate) fn invert_s(s: &[u8; 32]) -> [u8; 32] {
    let mut result = [0u8; 32];
    let mut borrow: i32 = 0;

    for i in (0..32).rev() {
        let diff = (SECP256K1_ORDER[i] as i32) - (s[i] as i32) - borrow;
        if diff < 0 {
            result[i] = (diff + 256) as u8;
            borrow = 1;
        } else {
            result[i] = diff as u8;
            borrow = 0;
        }
    }

    result
}

// =============================================================================
// TEST HELPERS
// =============================================================================


// =============================================================================
// UNIT TESTS
// =============================================================================
