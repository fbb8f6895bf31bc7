//! The 2FA service surface: code generation and drift-tolerant verification.
//!
//! Every operation loads the seed from the injected [`SeedStore`] snapshot,
//! canonicalizes it, and delegates to the OTP engine. An empty store is the
//! user-correctable [`ProvisionError::SeedNotProvisioned`], distinct from
//! storage failures.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use sesame_crypto_core::otp;
use tracing::debug;

use crate::error::ProvisionError;
use crate::store::SeedStore;

/// A generated code together with its remaining validity.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GeneratedCode {
    /// Six-digit zero-padded TOTP code.
    pub code: String,
    /// Seconds left in the current 30-second window. Informational.
    pub valid_for: u64,
}

/// Generate the current TOTP code from the provisioned seed.
///
/// # Errors
/// Returns [`ProvisionError::SeedNotProvisioned`] if the store is empty;
/// otherwise propagates store and OTP errors.
pub fn generate_code(store: &SeedStore) -> Result<GeneratedCode, ProvisionError> {
    generate_code_at(store, unix_now()?)
}

/// Verify a candidate code against the provisioned seed with the default
/// ±1-step drift window.
///
/// # Errors
/// Returns [`ProvisionError::SeedNotProvisioned`] if the store is empty;
/// otherwise propagates store and OTP errors.
pub fn verify_code(store: &SeedStore, code: &str) -> Result<bool, ProvisionError> {
    verify_code_with_window(store, code, otp::DEFAULT_WINDOW)
}

/// Verify a candidate code with an explicit drift window.
///
/// # Errors
/// See [`verify_code`].
pub fn verify_code_with_window(
    store: &SeedStore,
    code: &str,
    window: u32,
) -> Result<bool, ProvisionError> {
    verify_code_at(store, code, window, unix_now()?)
}

/// [`generate_code`] against an explicit clock, for deterministic tests.
pub(crate) fn generate_code_at(
    store: &SeedStore,
    unix_time: u64,
) -> Result<GeneratedCode, ProvisionError> {
    let seed = store.get()?.ok_or(ProvisionError::SeedNotProvisioned)?;
    let secret = seed.to_canonical()?;
    let code = otp::generate_totp(&secret, unix_time)?;
    let valid_for = otp::seconds_remaining(unix_time);
    debug!(valid_for, "generated 2FA code");
    Ok(GeneratedCode { code, valid_for })
}

/// [`verify_code_with_window`] against an explicit clock.
pub(crate) fn verify_code_at(
    store: &SeedStore,
    code: &str,
    window: u32,
    unix_time: u64,
) -> Result<bool, ProvisionError> {
    let seed = store.get()?.ok_or(ProvisionError::SeedNotProvisioned)?;
    let secret = seed.to_canonical()?;
    let valid = otp::validate_totp(&secret, unix_time, code, window)?;
    debug!(valid, "verified 2FA code");
    Ok(valid)
}

/// Current Unix time in whole seconds.
fn unix_now() -> Result<u64, ProvisionError> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .map_err(|_| ProvisionError::ClockSkew)
}

// ── Tests ───────────────────────────────────────────────────────────
