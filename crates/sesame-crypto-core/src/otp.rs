//! RFC 4226 HOTP and RFC 6238 TOTP engine.
//!
//! Codes are six decimal digits derived via HMAC-SHA1 (`ring::hmac`) and
//! RFC 4226 dynamic truncation. SHA-1 is retained deliberately: it is the
//! RFC default and the only algorithm interoperable with the common
//! authenticator apps. The asymmetric pipelines in [`crate::asymmetric`]
//! use SHA-256 independently; the two hash choices must not be conflated.

use ring::hmac;

use crate::codec::CanonicalSecret;
use crate::error::CryptoError;

// ── Constants ───────────────────────────────────────────────────────

/// TOTP time step in seconds (RFC 6238 §4).
pub const PERIOD: u64 = 30;

/// Code width in decimal digits.
pub const DIGITS: usize = 6;

/// Truncation modulus: 10^6.
const MODULUS: u32 = 1_000_000;

/// Default validation window: ±1 time step (RFC 6238 §5.2).
pub const DEFAULT_WINDOW: u32 = 1;

/// Constant-time byte comparison for OTP codes.
///
/// Returns `true` iff both slices have equal length and identical contents.
/// Uses bitwise OR accumulation to avoid short-circuit timing leaks.
///
/// Note: The early return on length mismatch is acceptable for OTP codes
/// because the expected digit count is public information — it is not
/// secret. The constant-time property protects the *code value*, not its
/// length.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}

// ── HOTP (RFC 4226) ────────────────────────────────────────────────

/// Generate a six-digit HOTP code per RFC 4226.
///
/// The HMAC key is the base32-decoded secret; the message is the 8-byte
/// big-endian counter (RFC 4226 §5.2).
///
/// # Errors
/// Returns [`CryptoError::Otp`] if the secret decodes to an empty key, or
/// [`CryptoError::MalformedInput`] if it is not valid base32.
#[must_use = "OTP code should be used or discarded, not ignored"]
pub fn generate_hotp(secret: &CanonicalSecret, counter: u64) -> Result<String, CryptoError> {
    let key_bytes = secret.key_bytes()?;
    if key_bytes.is_empty() {
        return Err(CryptoError::Otp("secret must not be empty".to_owned()));
    }

    let key = hmac::Key::new(hmac::HMAC_SHA1_FOR_LEGACY_USE_ONLY, &key_bytes);
    let tag = hmac::sign(&key, &counter.to_be_bytes());
    let digest = tag.as_ref();

    // Dynamic Truncation (RFC 4226 §5.3):
    // offset = low-order 4 bits of the final digest byte.
    let offset = usize::from(digest[digest.len().wrapping_sub(1)] & 0x0F);

    // Four bytes at offset as big-endian, sign bit masked (31-bit value).
    let binary_code = u32::from_be_bytes([
        digest[offset] & 0x7F,
        digest[offset.wrapping_add(1)],
        digest[offset.wrapping_add(2)],
        digest[offset.wrapping_add(3)],
    ]);

    // MODULUS is a non-zero constant.
    #[allow(clippy::arithmetic_side_effects)]
    let code = binary_code % MODULUS;
    let width = DIGITS;

    Ok(format!("{code:0>width$}"))
}

// ── TOTP (RFC 6238) ────────────────────────────────────────────────

/// The TOTP counter for a given Unix time: `floor(time / PERIOD)`.
#[must_use]
pub const fn time_step(unix_time: u64) -> u64 {
    // PERIOD is a non-zero constant.
    #[allow(clippy::arithmetic_side_effects)]
    let step = unix_time / PERIOD;
    step
}

/// Seconds remaining before the current TOTP window rolls over.
///
/// Informational only — not part of the verification contract.
#[must_use]
pub const fn seconds_remaining(unix_time: u64) -> u64 {
    // PERIOD is a non-zero constant, and the remainder is < PERIOD.
    #[allow(clippy::arithmetic_side_effects)]
    let remaining = PERIOD - (unix_time % PERIOD);
    remaining
}

/// Generate a six-digit TOTP code per RFC 6238 for the given Unix time.
///
/// # Errors
/// Propagates [`generate_hotp`] errors.
#[must_use = "OTP code should be used or discarded, not ignored"]
pub fn generate_totp(secret: &CanonicalSecret, unix_time: u64) -> Result<String, CryptoError> {
    generate_hotp(secret, time_step(unix_time))
}

/// Validate a TOTP code within a ± `window` time-step drift tolerance.
///
/// Computes the expected code for every step in
/// `time_step - window ..= time_step + window` and compares each against
/// `code` in constant time. A wrong-length candidate never matches, so
/// leading zeros are preserved by construction.
///
/// # Errors
/// Propagates [`generate_hotp`] errors.
#[must_use = "validation result should be checked"]
pub fn validate_totp(
    secret: &CanonicalSecret,
    unix_time: u64,
    code: &str,
    window: u32,
) -> Result<bool, CryptoError> {
    let current = time_step(unix_time);

    // Saturate at the epoch edge: at step 0 the window starts at 0,
    // not u64::MAX.
    let start = current.saturating_sub(u64::from(window));
    let end = current.saturating_add(u64::from(window));

    let mut valid = false;
    let mut step = start;
    loop {
        let expected = generate_hotp(secret, step)?;
        if constant_time_eq(expected.as_bytes(), code.as_bytes()) {
            valid = true;
        }
        if step == end {
            break;
        }
        step = step.wrapping_add(1);
    }

    Ok(valid)
}

// ── Tests ───────────────────────────────────────────────────────────
