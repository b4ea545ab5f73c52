//! In-memory vault mapping and its on-disk persistence.
//!
//! `VaultStore` owns the `service -> plaintext password` mapping plus
//! the file path it is bound to (if any).  Persistence policy is
//! deliberately asymmetric:
//!
//! - `add` APPENDS one encrypted line — O(1) regardless of vault size.
//! - `update` REWRITES the whole file — an in-place append cannot
//!   replace an existing line without leaving a stale duplicate for
//!   the same service, so a full re-encrypting rewrite is the simplest
//!   correct policy, at O(vault size) cost.
//!
//! Do not collapse the two into rewrite-everything; the asymmetry is
//! intentional.
//!
//! `add` inserts into memory before the file write.  If the append
//! fails, memory holds an entry the file does not — an accepted
//! divergence for a single-user local tool, resolved on next load.

use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::crypto::Key;
use crate::errors::{PwVaultError, Result};

use super::record;

/// The in-memory vault: an insertion-ordered mapping of service name
/// to plaintext password, optionally bound to a file on disk.
pub struct VaultStore {
    /// Map of service name -> plaintext password.
    entries: HashMap<String, String>,

    /// Service names in insertion order, for `list`.
    order: Vec<String>,

    /// Path of the backing file, or `None` for a transient vault.
    bound_path: Option<PathBuf>,
}

impl VaultStore {
    /// Create an empty, unbound vault.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            order: Vec::new(),
            bound_path: None,
        }
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Reset to an empty vault bound to `path`.
    ///
    /// Requires `confirmed == true` (the overwrite prompt lives in the
    /// caller); otherwise nothing happens and `Cancelled` is returned.
    ///
    /// Any stale file at `path` is removed so that records appended
    /// later never mix with content from a previous vault.  No new
    /// file is created until the first `add`.
    pub fn create(&mut self, path: &Path, confirmed: bool) -> Result<()> {
        if !confirmed {
            return Err(PwVaultError::Cancelled);
        }

        if path.exists() {
            fs::remove_file(path)?;
        }

        self.entries.clear();
        self.order.clear();
        self.bound_path = Some(path.to_path_buf());
        Ok(())
    }

    /// Load a vault file, replacing the current mapping.
    ///
    /// Fails with `VaultNotFound` if `path` does not exist.  Every
    /// line is parsed and decrypted into a temporary mapping; the
    /// first malformed or undecryptable line aborts the whole load
    /// with `VaultLoadError` and leaves the previous in-memory state
    /// untouched.  A partially loaded vault under the wrong key is
    /// worse than no vault, so this is strict fail-fast, no line
    /// skipping.
    pub fn load(&mut self, path: &Path, key: &Key) -> Result<()> {
        if !path.exists() {
            return Err(PwVaultError::VaultNotFound(path.to_path_buf()));
        }

        let contents = fs::read_to_string(path)?;

        let mut entries = HashMap::new();
        let mut order = Vec::new();

        for line in contents.lines() {
            let (service, password) = Self::decode_line(line, key).map_err(|cause| {
                PwVaultError::VaultLoadError {
                    path: path.to_path_buf(),
                    cause: Box::new(cause),
                }
            })?;

            if !entries.contains_key(&service) {
                order.push(service.clone());
            }
            entries.insert(service, password);
        }

        // Only now, with every line accounted for, swap the new state in.
        self.entries = entries;
        self.order = order;
        self.bound_path = Some(path.to_path_buf());
        Ok(())
    }

    fn decode_line(line: &str, key: &Key) -> Result<(String, String)> {
        let (service, ciphertext) = record::parse_line(line)?;
        let password = record::open(key, &ciphertext)?;
        Ok((service, password))
    }

    // ------------------------------------------------------------------
    // Entry operations
    // ------------------------------------------------------------------

    /// Add a new entry, appending one encrypted line if bound.
    ///
    /// Fails with `DuplicateEntry` if the service already exists (the
    /// existing password is untouched) and `InvalidServiceName` if the
    /// name is empty or contains `:`.
    pub fn add(&mut self, key: &Key, service: &str, password: &str) -> Result<()> {
        if self.entries.contains_key(service) {
            return Err(PwVaultError::DuplicateEntry(service.to_string()));
        }

        // Encrypt and render the line before mutating anything, so a
        // bad service name or encryption failure leaves no trace.
        let ciphertext = record::seal(key, password)?;
        let line = record::format_line(service, &ciphertext)?;

        self.entries
            .insert(service.to_string(), password.to_string());
        self.order.push(service.to_string());

        if let Some(path) = self.bound_path.clone() {
            self.append_line(&path, &line)?;
        }
        Ok(())
    }

    /// Replace an existing entry's password, rewriting the whole file
    /// if bound (every entry re-encrypted with a fresh nonce).
    ///
    /// Fails with `EntryNotFound` if the service is absent.
    pub fn update(&mut self, key: &Key, service: &str, new_password: &str) -> Result<()> {
        match self.entries.get_mut(service) {
            Some(stored) => *stored = new_password.to_string(),
            None => return Err(PwVaultError::EntryNotFound(service.to_string())),
        }

        if let Some(path) = self.bound_path.clone() {
            self.rewrite(&path, key)?;
        }
        Ok(())
    }

    /// Look up a password.
    ///
    /// `EmptyVault` if there are no entries at all; otherwise `None`
    /// is an ordinary lookup miss, not an error.
    pub fn get(&self, service: &str) -> Result<Option<&str>> {
        if self.entries.is_empty() {
            return Err(PwVaultError::EmptyVault);
        }
        Ok(self.entries.get(service).map(String::as_str))
    }

    /// List service names in insertion order.
    ///
    /// `EmptyVault` if there are no entries.
    pub fn list(&self) -> Result<Vec<&str>> {
        if self.entries.is_empty() {
            return Err(PwVaultError::EmptyVault);
        }
        Ok(self.order.iter().map(String::as_str).collect())
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Returns the bound file path, if any.
    pub fn bound_path(&self) -> Option<&Path> {
        self.bound_path.as_deref()
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the vault holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // ------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------

    /// Append one record line to the vault file.
    ///
    /// The handle is scoped to this call, so it is closed on every
    /// exit path.
    fn append_line(&self, path: &Path, line: &str) -> Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        file.write_all(line.as_bytes())?;
        file.write_all(b"\n")?;
        Ok(())
    }

    /// Rewrite the whole vault file from the current mapping.
    ///
    /// Serializes every entry (insertion order, fresh nonces) into a
    /// buffer, writes it to a temp file in the same directory, then
    /// renames over the target so readers never see a half-written
    /// vault.
    fn rewrite(&self, path: &Path, key: &Key) -> Result<()> {
        let mut buf = String::new();
        for service in &self.order {
            // Every name in `order` has an entry; insertions keep the
            // two structures in lockstep.
            let password = &self.entries[service];
            let ciphertext = record::seal(key, password)?;
            buf.push_str(&record::format_line(service, &ciphertext)?);
            buf.push('\n');
        }

        let parent = path.parent().unwrap_or(Path::new("."));
        let tmp_path = parent.join(format!(
            ".{}.tmp",
            path.file_name().unwrap_or_default().to_string_lossy()
        ));

        fs::write(&tmp_path, buf.as_bytes())?;
        fs::rename(&tmp_path, path)?;
        Ok(())
    }
}

impl Default for VaultStore {
    fn default() -> Self {
        Self::new()
    }
}
