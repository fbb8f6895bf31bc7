//! `sesame-crypto-core` — Pure cryptographic primitives for SESAME.
//!
//! This crate is the audit target: zero I/O, zero network, zero transport
//! dependencies. It holds the hex→base32 codec, the RFC 4226/6238 OTP
//! engine, and the shared RSA (OAEP/PSS) primitives.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod asymmetric;
pub mod codec;
pub mod error;
pub mod otp;

pub use asymmetric::{
    generate_keypair, load_private_key_pem, load_public_key_pem, oaep_decrypt, oaep_encrypt,
    pss_sign, pss_verify,
};
pub use codec::{decode_base32, decode_hex, encode_hex_to_base32, CanonicalSecret};
pub use error::CryptoError;
pub use otp::{
    generate_hotp, generate_totp, seconds_remaining, validate_totp, DEFAULT_WINDOW, DIGITS, PERIOD,
};

// Re-exported so downstream crates name key types without a direct `rsa`
// dependency.
pub use rsa::{RsaPrivateKey, RsaPublicKey};
