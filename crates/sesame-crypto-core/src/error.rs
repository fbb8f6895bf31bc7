//! Cryptographic error types for `sesame-crypto-core`.

use thiserror::Error;

/// Errors produced by cryptographic operations.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// Input had the wrong shape for a codec (odd-length hex, bad alphabet).
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// RSA-OAEP decryption failed.
    ///
    /// Deliberately carries no detail: padding, length, and key errors are
    /// indistinguishable to the caller so the error cannot be used as a
    /// decryption oracle.
    #[error("decryption failed")]
    Decryption,

    /// RSA-PSS signature creation or verification failure.
    #[error("signature error: {0}")]
    Signature(String),

    /// Invalid key material (unparseable PEM, wrong key type).
    #[error("invalid key material: {0}")]
    InvalidKeyMaterial(String),

    /// TOTP/HOTP generation or validation error.
    #[error("OTP error: {0}")]
    Otp(String),
}
