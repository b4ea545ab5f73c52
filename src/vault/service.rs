//! High-level vault operations used by CLI commands.
//!
//! `VaultService` composes the key and the store so the rest of the
//! application works with simple method calls.  It is a plain value
//! owned by the caller — no process-wide singleton — and it is the
//! single place that enforces "a key must be loaded before any
//! encryption-dependent operation".

use std::path::Path;

use crate::crypto::{keystore, Key};
use crate::errors::{PwVaultError, Result};

use super::store::VaultStore;

/// The main vault handle.  Construct one with `VaultService::new`,
/// load or generate a key, then use its methods to manage entries.
pub struct VaultService {
    /// The session key, if one has been generated or loaded.
    key: Option<Key>,

    /// The in-memory vault (starts empty and unbound).
    store: VaultStore,
}

impl VaultService {
    /// Create a service with no key and an empty, unbound vault.
    pub fn new() -> Self {
        Self {
            key: None,
            store: VaultStore::new(),
        }
    }

    // ------------------------------------------------------------------
    // Key lifecycle
    // ------------------------------------------------------------------

    /// Generate a fresh key, persist it to `path`, and keep it loaded.
    ///
    /// `confirmed` gates overwriting an existing key file.
    pub fn generate_key(&mut self, path: &Path, confirmed: bool) -> Result<()> {
        let key = keystore::generate(path, confirmed)?;
        self.key = Some(key);
        Ok(())
    }

    /// Load an existing key from `path`.
    pub fn load_key(&mut self, path: &Path) -> Result<()> {
        let key = keystore::load(path)?;
        self.key = Some(key);
        Ok(())
    }

    /// Returns `true` if a key has been generated or loaded.
    pub fn has_key(&self) -> bool {
        self.key.is_some()
    }

    // ------------------------------------------------------------------
    // Vault lifecycle
    // ------------------------------------------------------------------

    /// Create a new empty vault bound to `path`, then add each of the
    /// `initial` pairs in order.
    ///
    /// With a non-empty `initial` list a key must be loaded, since
    /// each pair goes through `add`; creating an empty vault needs no
    /// key at all.
    pub fn create_vault(
        &mut self,
        path: &Path,
        confirmed: bool,
        initial: &[(String, String)],
    ) -> Result<()> {
        self.store.create(path, confirmed)?;
        for (service, password) in initial {
            self.add(service, password)?;
        }
        Ok(())
    }

    /// Load a vault file from `path`, decrypting every record with
    /// the loaded key.
    pub fn load_vault(&mut self, path: &Path) -> Result<()> {
        let key = self.key.as_ref().ok_or(PwVaultError::KeyNotLoaded)?;
        self.store.load(path, key)
    }

    // ------------------------------------------------------------------
    // Entry operations
    // ------------------------------------------------------------------

    /// Add a new entry (appends to the bound file).
    pub fn add(&mut self, service: &str, password: &str) -> Result<()> {
        let key = self.key.as_ref().ok_or(PwVaultError::KeyNotLoaded)?;
        self.store.add(key, service, password)
    }

    /// Update an existing entry (rewrites the bound file).
    pub fn update(&mut self, service: &str, new_password: &str) -> Result<()> {
        let key = self.key.as_ref().ok_or(PwVaultError::KeyNotLoaded)?;
        self.store.update(key, service, new_password)
    }

    /// Look up a password; `None` is a miss, `EmptyVault` means there
    /// is nothing to look in.
    pub fn get(&self, service: &str) -> Result<Option<&str>> {
        self.store.get(service)
    }

    /// List stored service names in insertion order.
    pub fn list(&self) -> Result<Vec<&str>> {
        self.store.list()
    }

    /// Returns a reference to the underlying store.
    pub fn store(&self) -> &VaultStore {
        &self.store
    }
}

impl Default for VaultService {
    fn default() -> Self {
        Self::new()
    }
}
