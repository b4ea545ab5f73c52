//! Vault module — encrypted password storage.
//!
//! This module provides:
//! - Per-record encryption and the persisted line format (`record`)
//! - The in-memory mapping and its append/rewrite persistence (`store`)
//! - The high-level `VaultService` composing key and store (`service`)

pub mod record;
pub mod service;
pub mod store;

// Re-export the most commonly used items.
pub use service::VaultService;
pub use store::VaultStore;
