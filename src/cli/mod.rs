//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::Parser;
use zeroize::Zeroizing;

use crate::config::Settings;
use crate::errors::{PwVaultError, Result};
use crate::vault::VaultService;

/// PwVault CLI: local encrypted password vault.
#[derive(Parser)]
#[command(name = "pwvault", about = "Local encrypted password vault", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the encryption key file (default: pwvault.key, or .pwvault.toml)
    #[arg(short, long, global = true)]
    pub key_file: Option<String>,

    /// Path to the vault file (default: pwvault.vault, or .pwvault.toml)
    #[arg(long, global = true)]
    pub vault: Option<String>,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Generate a new encryption key
    GenerateKey {
        /// Overwrite an existing key file without prompting
        #[arg(short, long)]
        force: bool,
    },

    /// Create a new vault, optionally seeded with SERVICE=PASSWORD pairs
    Create {
        /// Initial entries as SERVICE=PASSWORD pairs
        entries: Vec<String>,

        /// Overwrite an existing vault without prompting
        #[arg(short, long)]
        force: bool,
    },

    /// Add a new password
    Add {
        /// Service name (e.g. email)
        service: String,
        /// Password (omit for interactive prompt)
        password: Option<String>,
    },

    /// Update an existing password
    Update {
        /// Service name
        service: String,
        /// New password (omit for interactive prompt)
        password: Option<String>,
    },

    /// Get a password
    Get {
        /// Service name
        service: String,
    },

    /// List stored services
    List,
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Resolve the key file path: CLI flag, then config, then default.
pub fn key_path(cli: &Cli, settings: &Settings) -> PathBuf {
    match &cli.key_file {
        Some(path) => PathBuf::from(path),
        None => PathBuf::from(&settings.key_file),
    }
}

/// Resolve the vault file path: CLI flag, then config, then default.
pub fn vault_path(cli: &Cli, settings: &Settings) -> PathBuf {
    match &cli.vault {
        Some(path) => PathBuf::from(path),
        None => PathBuf::from(&settings.vault_file),
    }
}

/// Load settings from the current directory.
pub fn load_settings() -> Result<Settings> {
    let cwd = std::env::current_dir()?;
    Settings::load(&cwd)
}

/// Build a `VaultService` with the key loaded and the vault file at
/// `vault` loaded into memory.  The common setup for `update`, `get`,
/// and `list`.
pub fn open_vault(cli: &Cli) -> Result<(VaultService, PathBuf)> {
    let settings = load_settings()?;
    let mut service = VaultService::new();
    service.load_key(&key_path(cli, &settings))?;

    let vault = vault_path(cli, &settings);
    service.load_vault(&vault)?;
    Ok((service, vault))
}

/// Read a password argument, falling back to `PWVAULT_PASSWORD` and
/// then a hidden interactive prompt.
///
/// Returns `Zeroizing<String>` so the password is wiped from memory on drop.
pub fn resolve_password(arg: Option<&str>, prompt: &str) -> Result<Zeroizing<String>> {
    if let Some(pw) = arg {
        return Ok(Zeroizing::new(pw.to_string()));
    }

    // Environment variable next (CI/scripting friendly).
    if let Ok(pw) = std::env::var("PWVAULT_PASSWORD") {
        if !pw.is_empty() {
            return Ok(Zeroizing::new(pw));
        }
    }

    let pw = dialoguer::Password::new()
        .with_prompt(prompt)
        .interact()
        .map_err(|e| PwVaultError::CommandFailed(format!("password prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

/// Ask a yes/no overwrite question, unless `force` already answered it.
pub fn confirm_overwrite(prompt: &str, force: bool) -> Result<bool> {
    if force {
        return Ok(true);
    }

    dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| PwVaultError::CommandFailed(format!("failed to read confirmation: {e}")))
}

/// Parse a `SERVICE=PASSWORD` pair used to seed a new vault.
pub fn parse_entry_pair(pair: &str) -> Result<(String, String)> {
    match pair.split_once('=') {
        Some((service, password)) if !service.is_empty() => {
            Ok((service.to_string(), password.to_string()))
        }
        _ => Err(PwVaultError::CommandFailed(format!(
            "invalid entry '{pair}' — expected SERVICE=PASSWORD"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_service_password_pair() {
        let (service, password) = parse_entry_pair("email=123456").unwrap();
        assert_eq!(service, "email");
        assert_eq!(password, "123456");
    }

    #[test]
    fn pair_password_may_contain_equals() {
        let (service, password) = parse_entry_pair("svc=a=b=c").unwrap();
        assert_eq!(service, "svc");
        assert_eq!(password, "a=b=c");
    }

    #[test]
    fn rejects_pair_without_equals() {
        assert!(parse_entry_pair("no-separator").is_err());
    }

    #[test]
    fn rejects_pair_with_empty_service() {
        assert!(parse_entry_pair("=password").is_err());
    }
}
