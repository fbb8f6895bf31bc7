//! Hex → base32 canonicalization for OTP secrets.
//!
//! Authenticator-style OTP engines key their HMAC off an unpadded RFC 4648
//! base32 secret (`A`–`Z`, `2`–`7`, no `=` padding). Seeds are exchanged as
//! hex, so this module is the bridge: decode the hex byte sequence, re-emit
//! it as base32. Both directions are pure and deterministic.

use data_encoding::{BASE32_NOPAD, HEXLOWER_PERMISSIVE};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::CryptoError;

/// Re-encode a hexadecimal string as unpadded base32.
///
/// Accepts upper- and lowercase hex digits.
///
/// # Errors
/// Returns [`CryptoError::MalformedInput`] if the input has odd length or
/// contains non-hex characters.
pub fn encode_hex_to_base32(hex: &str) -> Result<String, CryptoError> {
    let bytes = decode_hex(hex)?;
    Ok(BASE32_NOPAD.encode(&bytes))
}

/// Decode a hexadecimal string into raw bytes.
///
/// # Errors
/// Returns [`CryptoError::MalformedInput`] if the input has odd length or
/// contains non-hex characters.
pub fn decode_hex(hex: &str) -> Result<Vec<u8>, CryptoError> {
    HEXLOWER_PERMISSIVE
        .decode(hex.as_bytes())
        .map_err(|e| CryptoError::MalformedInput(format!("invalid hex: {e}")))
}

/// Decode an unpadded base32 string into raw bytes.
///
/// # Errors
/// Returns [`CryptoError::MalformedInput`] if the input is not valid
/// unpadded base32.
pub fn decode_base32(base32: &str) -> Result<Vec<u8>, CryptoError> {
    BASE32_NOPAD
        .decode(base32.as_bytes())
        .map_err(|e| CryptoError::MalformedInput(format!("invalid base32: {e}")))
}

/// An OTP secret in its canonical unpadded-base32 form.
///
/// This is a derived value: a pure, deterministic re-encoding of the raw
/// secret bytes. It is recomputed on demand and never persisted on its
/// own. Zeroized on drop and masked in `Debug` like the raw secret.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct CanonicalSecret(String);

impl CanonicalSecret {
    /// Canonicalize a hex-encoded secret.
    ///
    /// # Errors
    /// Returns [`CryptoError::MalformedInput`] if `hex` is not a valid
    /// even-length hexadecimal string.
    pub fn from_hex(hex: &str) -> Result<Self, CryptoError> {
        encode_hex_to_base32(hex).map(Self)
    }

    /// The base32 text form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The raw secret bytes, for keying the OTP HMAC.
    ///
    /// # Errors
    /// Returns [`CryptoError::MalformedInput`] if the inner string is not
    /// valid base32 (unreachable for values built via [`Self::from_hex`]).
    pub fn key_bytes(&self) -> Result<Vec<u8>, CryptoError> {
        decode_base32(&self.0)
    }
}

impl std::fmt::Debug for CanonicalSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("CanonicalSecret(***)")
    }
}

// ── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // RFC 4226 Appendix D secret: ASCII "12345678901234567890".
    const RFC4226_SECRET_HEX: &str = "3132333435363738393031323334353637383930";
    const RFC4226_SECRET_B32: &str = "GEZDGNBVGY3TQOJQGEZDGNBVGY3TQOJQ";

    #[test]
    fn encode_rfc4226_secret() {
        let b32 = encode_hex_to_base32(RFC4226_SECRET_HEX).expect("valid hex");
        assert_eq!(b32, RFC4226_SECRET_B32);
    }

    #[test]
    fn encode_is_case_insensitive() {
        let lower = encode_hex_to_base32("deadbeef").expect("lowercase hex");
        let upper = encode_hex_to_base32("DEADBEEF").expect("uppercase hex");
        assert_eq!(lower, upper);
    }

    #[test]
    fn encode_omits_padding() {
        // 4 bytes → 7 base32 chars, a padded encoder would emit "35AK3XU=".
        let b32 = encode_hex_to_base32("deadbeef").expect("valid hex");
        assert!(!b32.contains('='), "no `=` padding expected, got {b32}");
        assert_eq!(b32.len(), 7);
    }

    #[test]
    fn encode_rejects_odd_length() {
        let result = encode_hex_to_base32("abc");
        assert!(
            matches!(result, Err(CryptoError::MalformedInput(_))),
            "odd-length hex should be rejected, got: {result:?}"
        );
    }

    #[test]
    fn encode_rejects_non_hex() {
        let result = encode_hex_to_base32("zz00");
        assert!(
            matches!(result, Err(CryptoError::MalformedInput(_))),
            "non-hex characters should be rejected, got: {result:?}"
        );
    }

    #[test]
    fn canonical_secret_roundtrip() {
        let secret = CanonicalSecret::from_hex(RFC4226_SECRET_HEX).expect("valid hex");
        assert_eq!(secret.as_str(), RFC4226_SECRET_B32);
        assert_eq!(
            secret.key_bytes().expect("decode"),
            b"12345678901234567890"
        );
    }

    #[test]
    fn canonical_secret_alphabet() {
        // 32-byte secret covering all byte patterns in a spread.
        let hex: String = (0u8..32).map(|b| format!("{:02x}", b.wrapping_mul(8))).collect();
        let secret = CanonicalSecret::from_hex(&hex).expect("valid hex");
        assert!(
            secret
                .as_str()
                .chars()
                .all(|c| c.is_ascii_uppercase() || ('2'..='7').contains(&c)),
            "canonical form must stay within the RFC 4648 base32 alphabet: {}",
            secret.as_str()
        );
    }

    #[test]
    fn canonical_secret_debug_is_masked() {
        let secret = CanonicalSecret::from_hex(RFC4226_SECRET_HEX).expect("valid hex");
        assert_eq!(format!("{secret:?}"), "CanonicalSecret(***)");
    }
}
