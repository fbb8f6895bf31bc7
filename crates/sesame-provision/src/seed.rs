//! The validated 2FA seed type.

use sesame_crypto_core::CanonicalSecret;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::ProvisionError;

/// Seed length in hex characters (32 bytes).
pub const SEED_HEX_LEN: usize = 64;

/// A provisioned 2FA seed: exactly 64 hexadecimal characters.
///
/// Construction goes through [`SeedHex::parse`], so a value of this type
/// is always well-formed — an invalid seed is never stored or consumed.
/// The inner string is zeroized on drop and masked in `Debug`.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SeedHex(String);

impl SeedHex {
    /// Validate raw text as a seed.
    ///
    /// Surrounding whitespace is trimmed; the remainder must be exactly
    /// [`SEED_HEX_LEN`] hex characters, either case.
    ///
    /// # Errors
    /// Returns [`ProvisionError::InvalidSeedFormat`] otherwise.
    pub fn parse(raw: &str) -> Result<Self, ProvisionError> {
        let trimmed = raw.trim();
        if trimmed.len() != SEED_HEX_LEN || !trimmed.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ProvisionError::InvalidSeedFormat);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// The seed as persisted: the bare hex string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The canonical base32 form required by the OTP engine.
    ///
    /// # Errors
    /// Propagates codec errors (unreachable for a validated seed).
    pub fn to_canonical(&self) -> Result<CanonicalSecret, ProvisionError> {
        Ok(CanonicalSecret::from_hex(&self.0)?)
    }
}

impl std::fmt::Debug for SeedHex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SeedHex(***)")
    }
}

// ── Tests ───────────────────────────────────────────────────────────
