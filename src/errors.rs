use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur in PwVault.
#[derive(Debug, Error)]
pub enum PwVaultError {
    // --- Key errors ---
    #[error("Key file not found at {0}")]
    KeyNotFound(PathBuf),

    #[error("No encryption key loaded — load or generate a key first")]
    KeyNotLoaded,

    // --- Crypto errors ---
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Decryption failed — wrong key or corrupted data")]
    DecryptionFailed,

    // --- Vault errors ---
    #[error("Vault not found at {0}")]
    VaultNotFound(PathBuf),

    #[error("Failed to load vault at {path}: {cause}")]
    VaultLoadError {
        path: PathBuf,
        #[source]
        cause: Box<PwVaultError>,
    },

    #[error("Malformed record line: {0}")]
    MalformedRecord(String),

    #[error("Invalid service name '{0}' — must be non-empty and must not contain ':'")]
    InvalidServiceName(String),

    #[error("An entry for '{0}' already exists (use `update` to change it)")]
    DuplicateEntry(String),

    #[error("No entry found for '{0}' (use `add` to create one)")]
    EntryNotFound(String),

    #[error("Vault is empty or not loaded")]
    EmptyVault,

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error("Operation cancelled")]
    Cancelled,

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for PwVault results.
pub type Result<T> = std::result::Result<T, PwVaultError>;
