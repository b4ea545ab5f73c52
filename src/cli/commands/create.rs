//! `pwvault create` — create a new vault, optionally seeded with entries.

use crate::cli::{
    confirm_overwrite, key_path, load_settings, output, parse_entry_pair, vault_path, Cli,
};
use crate::errors::{PwVaultError, Result};
use crate::vault::VaultService;

/// Execute the `create` command.
pub fn execute(cli: &Cli, entries: &[String], force: bool) -> Result<()> {
    let settings = load_settings()?;
    let path = vault_path(cli, &settings);

    let initial: Vec<(String, String)> = entries
        .iter()
        .map(|pair| parse_entry_pair(pair))
        .collect::<Result<_>>()?;

    let mut service = VaultService::new();

    // Seeding entries encrypts them, which needs the key up front.
    // An empty vault needs no key at all.
    if !initial.is_empty() {
        service.load_key(&key_path(cli, &settings))?;
    }

    let confirmed = confirm_overwrite(
        "This will overwrite any existing vault at that path. Continue?",
        force,
    )?;

    match service.create_vault(&path, confirmed, &initial) {
        Ok(()) => {
            output::success(&format!("Vault created at {}", path.display()));
            if !initial.is_empty() {
                output::info(&format!("Seeded {} entries.", initial.len()));
            }
            output::tip("Run `pwvault add <SERVICE>` to store a password.");
            Ok(())
        }
        Err(PwVaultError::Cancelled) => {
            output::warning("Vault creation cancelled.");
            Ok(())
        }
        Err(e) => Err(e),
    }
}
