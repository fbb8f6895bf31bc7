//! Error types for `sesame-provision`.

use sesame_crypto_core::CryptoError;
use thiserror::Error;

/// Errors produced by provisioning, storage, and 2FA operations.
///
/// The user-correctable conditions ([`Self::SeedNotProvisioned`],
/// [`Self::InvalidSeedFormat`], [`Self::InvalidIdentifier`]) are distinct
/// variants so callers can report them separately from environment or
/// attacker-input failures ([`Self::DecryptionFailed`], [`Self::Storage`],
/// [`Self::StoreCorrupted`]).
#[derive(Debug, Error)]
pub enum ProvisionError {
    /// Cryptographic operation failed (delegated from crypto-core).
    #[error(transparent)]
    Crypto(#[from] CryptoError),

    /// The encrypted payload could not be decrypted.
    ///
    /// Covers base64 transport decoding as well as the OAEP operation
    /// itself; the single generic variant keeps the failure mode opaque
    /// to a remote caller.
    #[error("decryption failed")]
    DecryptionFailed,

    /// The decrypted payload is not a 64-character hexadecimal seed.
    #[error("invalid seed format: expected 64 hexadecimal characters")]
    InvalidSeedFormat,

    /// An identifier to be signed is not a 40-character hexadecimal string.
    #[error("invalid identifier: expected 40 hexadecimal characters")]
    InvalidIdentifier,

    /// No seed has been provisioned yet — provisioning must succeed before
    /// codes can be generated or verified.
    #[error("no seed provisioned")]
    SeedNotProvisioned,

    /// I/O failure reading or writing the persisted seed.
    #[error("seed storage failed: {0}")]
    Storage(#[from] std::io::Error),

    /// The persisted seed file exists but does not hold a valid seed.
    ///
    /// Valid seeds are validated before every write, so this indicates
    /// external tampering or corruption, not a user mistake.
    #[error("stored seed is corrupted: not a 64-character hex string")]
    StoreCorrupted,

    /// The system clock reports a time before the Unix epoch.
    #[error("system clock is before the Unix epoch")]
    ClockSkew,
}
