use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{PwVaultError, Result};

/// Name of the optional per-project config file.
const CONFIG_FILE: &str = ".pwvault.toml";

/// Project-level configuration, loaded from `.pwvault.toml`.
///
/// Every field has a sensible default so PwVault works out-of-the-box
/// without any config file at all.  CLI flags take precedence over
/// config values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Path to the key file used when `--key-file` is not passed.
    #[serde(default = "default_key_file")]
    pub key_file: String,

    /// Path to the vault file used when `--vault` is not passed.
    #[serde(default = "default_vault_file")]
    pub vault_file: String,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_key_file() -> String {
    "pwvault.key".to_string()
}

fn default_vault_file() -> String {
    "pwvault.vault".to_string()
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            key_file: default_key_file(),
            vault_file: default_vault_file(),
        }
    }
}

impl Settings {
    /// Load settings from `<dir>/.pwvault.toml`.
    ///
    /// A missing file yields pure defaults; a file that exists but
    /// fails to parse is a `ConfigError` rather than being silently
    /// ignored.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)?;
        toml::from_str(&contents)
            .map_err(|e| PwVaultError::ConfigError(format!("{}: {e}", path.display())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_config_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let settings = Settings::load(dir.path()).unwrap();
        assert_eq!(settings.key_file, "pwvault.key");
        assert_eq!(settings.vault_file, "pwvault.vault");
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "key_file = \"my.key\"\n").unwrap();

        let settings = Settings::load(dir.path()).unwrap();
        assert_eq!(settings.key_file, "my.key");
        assert_eq!(settings.vault_file, "pwvault.vault");
    }

    #[test]
    fn malformed_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "key_file = [not toml").unwrap();

        let result = Settings::load(dir.path());
        assert!(matches!(result, Err(PwVaultError::ConfigError(_))));
    }
}
