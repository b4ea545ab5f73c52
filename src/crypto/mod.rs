//! Cryptographic primitives for PwVault.
//!
//! This module provides:
//! - AES-256-GCM encryption and decryption (`encryption`)
//! - Key generation, persistence, and loading (`keystore`)

pub mod encryption;
pub mod keystore;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{encrypt, decrypt, Key};
pub use encryption::{decrypt, encrypt};
pub use keystore::Key;
