//! `sesame-provision` — Seed provisioning and 2FA service logic for SESAME.
//!
//! Wraps the pure primitives in [`sesame_crypto_core`] with the stateful
//! pieces: the single-slot [`SeedStore`], the provisioning pipeline that
//! fills it, the authenticator surface that generates and verifies codes
//! from it, and the ownership-proof pipeline. The HTTP/CLI transports are
//! thin shells owned by collaborators; everything here is synchronous and
//! returns typed errors.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod authenticator;
pub mod error;
pub mod proof;
pub mod provision;
pub mod seed;
pub mod store;

pub use authenticator::{generate_code, verify_code, verify_code_with_window, GeneratedCode};
pub use error::ProvisionError;
pub use proof::{build_proof, IDENTIFIER_HEX_LEN};
pub use provision::provision_seed;
pub use seed::{SeedHex, SEED_HEX_LEN};
pub use store::SeedStore;
