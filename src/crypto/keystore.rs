//! Key generation, persistence, and loading.
//!
//! The symmetric key is a raw 32-byte file with no header or version
//! marker.  `generate` refuses to overwrite an existing key file
//! unless the caller confirmed it (the yes/no prompt lives in the CLI
//! layer and arrives here as a boolean).
//!
//! `load` reads the file verbatim and does NOT validate its length:
//! a truncated or oversized key is accepted and only fails later, at
//! the first encrypt or decrypt.  This keeps key files fully opaque
//! to the loader.

use std::fs;
use std::path::Path;

use rand::TryRngCore;
use zeroize::Zeroize;

use crate::errors::{PwVaultError, Result};

/// Length of a freshly generated key in bytes (AES-256).
const KEY_LEN: usize = 32;

/// A symmetric encryption key whose memory is zeroed on drop.
///
/// Holds an unvalidated byte buffer rather than a fixed-size array
/// because `load` accepts whatever the key file contains.
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct Key {
    bytes: Vec<u8>,
}

impl Key {
    /// Wrap raw key bytes.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Access the raw key bytes (e.g. to build a cipher).
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// Generate a fresh random key and write it to `path`.
///
/// If a file already exists at `path`, `confirmed` must be `true` or
/// the operation is cancelled without touching the file.
///
/// On Unix the key file is restricted to owner-only read/write.
pub fn generate(path: &Path, confirmed: bool) -> Result<Key> {
    if path.exists() && !confirmed {
        return Err(PwVaultError::Cancelled);
    }

    // 32 cryptographically random bytes from the OS RNG.
    let mut bytes = vec![0u8; KEY_LEN];
    rand::rngs::OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| PwVaultError::EncryptionFailed(format!("OS RNG failure: {e}")))?;

    fs::write(path, &bytes)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let perms = fs::Permissions::from_mode(0o600);
        fs::set_permissions(path, perms)?;
    }

    Ok(Key::new(bytes))
}

/// Load a key from `path` verbatim.
///
/// Fails with `KeyNotFound` if the file does not exist.  No length or
/// format check is performed — see the module docs.
pub fn load(path: &Path) -> Result<Key> {
    if !path.exists() {
        return Err(PwVaultError::KeyNotFound(path.to_path_buf()));
    }

    let bytes = fs::read(path)?;
    Ok(Key::new(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn generate_writes_key_len_bytes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("test.key");

        let key = generate(&path, false).unwrap();
        assert_eq!(key.as_bytes().len(), KEY_LEN);
        assert_eq!(fs::read(&path).unwrap(), key.as_bytes());
    }

    #[test]
    fn generate_refuses_overwrite_without_confirmation() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("test.key");

        generate(&path, false).unwrap();
        let result = generate(&path, false);
        assert!(matches!(result, Err(PwVaultError::Cancelled)));
    }

    #[test]
    fn generate_overwrites_when_confirmed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("test.key");

        let first = generate(&path, false).unwrap();
        let second = generate(&path, true).unwrap();
        assert_ne!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn load_fails_if_missing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nonexistent.key");

        let result = load(&path);
        assert!(matches!(result, Err(PwVaultError::KeyNotFound(_))));
    }

    #[test]
    fn load_accepts_any_length() {
        // Key files are opaque at load time; a short key only fails
        // later when building a cipher.
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("short.key");
        fs::write(&path, [0u8; 7]).unwrap();

        let key = load(&path).unwrap();
        assert_eq!(key.as_bytes().len(), 7);
    }
}
