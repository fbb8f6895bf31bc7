//! The ownership-proof pipeline.
//!
//! Signs a 40-character hexadecimal identifier (a commit hash) with the
//! owner's private key using RSA-PSS(SHA-256, MGF1-SHA-256, maximum salt),
//! then encrypts the signature for a third party with RSA-OAEP(SHA-256)
//! and emits base64. Structurally the mirror image of the provisioning
//! pipeline; both share [`sesame_crypto_core::asymmetric`].

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use sesame_crypto_core::{asymmetric, RsaPrivateKey, RsaPublicKey};
use tracing::info;

use crate::error::ProvisionError;

/// Identifier length in hex characters (20 bytes, e.g. a Git commit hash).
pub const IDENTIFIER_HEX_LEN: usize = 40;

/// Sign `identifier` and encrypt the signature for `recipient`.
///
/// The signature covers the identifier's ASCII bytes as written (case is
/// preserved). Output is the base64 encoding of the OAEP ciphertext.
///
/// The signature is modulus-sized, and OAEP(SHA-256) can carry at most
/// `modulus − 66` bytes, so the recipient's modulus must exceed the
/// signer's by at least 66 bytes — e.g. a 2048-bit signer needs a
/// ≥ 3072-bit recipient. An undersized recipient fails with
/// [`ProvisionError::Crypto`] at the encryption step.
///
/// # Errors
/// - [`ProvisionError::InvalidIdentifier`] — not 40 hex characters.
/// - [`ProvisionError::Crypto`] — signing or encryption failure,
///   including a recipient key too small for the signature.
pub fn build_proof(
    identifier: &str,
    signer: &RsaPrivateKey,
    recipient: &RsaPublicKey,
) -> Result<String, ProvisionError> {
    let identifier = identifier.trim();
    if identifier.len() != IDENTIFIER_HEX_LEN
        || !identifier.bytes().all(|b| b.is_ascii_hexdigit())
    {
        return Err(ProvisionError::InvalidIdentifier);
    }

    let signature = asymmetric::pss_sign(signer, identifier.as_bytes())?;
    let ciphertext = asymmetric::oaep_encrypt(recipient, &signature)?;
    info!(identifier, "proof built");
    Ok(BASE64.encode(ciphertext))
}

// ── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{recipient_keys, test_keys};

    const COMMIT: &str = "a94a8fe5ccb19ba61c4c0873d391e987982fbbd3";

    #[test]
    fn proof_decrypts_to_a_valid_signature() {
        let (signer_private, signer_public) = test_keys();
        let (recipient_private, recipient_public) = recipient_keys();

        let proof = build_proof(COMMIT, signer_private, recipient_public).expect("build proof");
        let ciphertext = BASE64.decode(proof).expect("proof is base64");
        let signature =
            asymmetric::oaep_decrypt(recipient_private, &ciphertext).expect("recipient decrypt");
        asymmetric::pss_verify(signer_public, COMMIT.as_bytes(), &signature)
            .expect("signature covers the ASCII identifier");
    }

    #[test]
    fn identifier_whitespace_is_trimmed() {
        let (signer_private, _) = test_keys();
        let (_, recipient_public) = recipient_keys();
        let proof = build_proof(&format!("  {COMMIT}\n"), signer_private, recipient_public);
        assert!(proof.is_ok());
    }

    #[test]
    fn short_identifier_is_rejected() {
        let (signer_private, _) = test_keys();
        let (_, recipient_public) = recipient_keys();
        let result = build_proof(&COMMIT[..39], signer_private, recipient_public);
        assert!(matches!(result, Err(ProvisionError::InvalidIdentifier)));
    }

    #[test]
    fn non_hex_identifier_is_rejected() {
        let (signer_private, _) = test_keys();
        let (_, recipient_public) = recipient_keys();
        let tainted = format!("z{}", &COMMIT[1..]);
        let result = build_proof(&tainted, signer_private, recipient_public);
        assert!(matches!(result, Err(ProvisionError::InvalidIdentifier)));
    }

    #[test]
    fn uppercase_identifier_is_accepted_and_signed_as_written() {
        let (signer_private, signer_public) = test_keys();
        let (recipient_private, recipient_public) = recipient_keys();
        let upper = COMMIT.to_uppercase();

        let proof = build_proof(&upper, signer_private, recipient_public).expect("build proof");
        let ciphertext = BASE64.decode(proof).expect("base64");
        let signature =
            asymmetric::oaep_decrypt(recipient_private, &ciphertext).expect("decrypt");

        // Case is preserved: the lowercase spelling must not verify.
        asymmetric::pss_verify(signer_public, upper.as_bytes(), &signature)
            .expect("uppercase verifies");
        assert!(asymmetric::pss_verify(signer_public, COMMIT.as_bytes(), &signature).is_err());
    }

    #[test]
    fn undersized_recipient_key_fails_at_encryption() {
        // A same-sized recipient cannot carry a modulus-sized signature:
        // OAEP(SHA-256) caps the plaintext at modulus − 66 bytes.
        let (signer_private, signer_public) = test_keys();
        let result = build_proof(COMMIT, signer_private, signer_public);
        assert!(matches!(result, Err(ProvisionError::Crypto(_))));
    }
}
