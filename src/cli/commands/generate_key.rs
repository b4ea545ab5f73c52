//! `pwvault generate-key` — generate and persist a fresh encryption key.

use crate::cli::{confirm_overwrite, key_path, load_settings, output, Cli};
use crate::errors::{PwVaultError, Result};
use crate::vault::VaultService;

/// Execute the `generate-key` command.
pub fn execute(cli: &Cli, force: bool) -> Result<()> {
    let settings = load_settings()?;
    let path = key_path(cli, &settings);

    // Only prompt when an overwrite would actually happen.
    let confirmed = if path.exists() {
        confirm_overwrite(
            &format!("This will overwrite the existing key at {}. Continue?", path.display()),
            force,
        )?
    } else {
        true
    };

    let mut service = VaultService::new();
    match service.generate_key(&path, confirmed) {
        Ok(()) => {
            output::success(&format!("New encryption key saved to {}", path.display()));
            output::warning("Anyone with this file can read your vault — keep it safe.");
            Ok(())
        }
        Err(PwVaultError::Cancelled) => {
            output::warning("Key generation cancelled.");
            Ok(())
        }
        Err(e) => Err(e),
    }
}
