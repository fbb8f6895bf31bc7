//! The seed-provisioning pipeline.
//!
//! Takes a base64-encoded RSA-OAEP(SHA-256) ciphertext, decrypts it with
//! the recipient's private key, validates the plaintext as a 64-hex seed,
//! and hands it to the [`SeedStore`]. Each step fails closed: nothing is
//! written unless every prior step succeeded, and decryption failures are
//! reported as a single generic error.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use sesame_crypto_core::{asymmetric, RsaPrivateKey};
use tracing::{info, warn};
use zeroize::Zeroize;

use crate::error::ProvisionError;
use crate::seed::SeedHex;
use crate::store::SeedStore;

/// Decrypt, validate, and persist an encrypted seed.
///
/// Repeated calls are idempotent overwrites: the latest successful call
/// wins. A failed call leaves any previously stored seed untouched.
///
/// # Errors
/// - [`ProvisionError::DecryptionFailed`] — base64 or OAEP failure, with
///   no further detail.
/// - [`ProvisionError::InvalidSeedFormat`] — plaintext is not UTF-8 text
///   holding exactly 64 hex characters.
/// - [`ProvisionError::Storage`] — the seed could not be persisted.
pub fn provision_seed(
    store: &SeedStore,
    private_key: &RsaPrivateKey,
    encrypted_seed_b64: &str,
) -> Result<(), ProvisionError> {
    let ciphertext = BASE64
        .decode(encrypted_seed_b64.trim())
        .map_err(|_| ProvisionError::DecryptionFailed)?;

    let mut plaintext = asymmetric::oaep_decrypt(private_key, &ciphertext).map_err(|_| {
        warn!("seed provisioning rejected: undecryptable payload");
        ProvisionError::DecryptionFailed
    })?;

    let seed = std::str::from_utf8(&plaintext)
        .map_err(|_| ProvisionError::InvalidSeedFormat)
        .and_then(SeedHex::parse);
    plaintext.zeroize();
    let seed = seed?;

    store.put(&seed)?;
    info!("seed provisioned");
    Ok(())
}

// ── Tests ───────────────────────────────────────────────────────────
