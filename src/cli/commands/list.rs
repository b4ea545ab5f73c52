//! `pwvault list` — display all stored service names.

use crate::cli::{open_vault, output, Cli};
use crate::errors::{PwVaultError, Result};

/// Execute the `list` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let (service, _vault) = open_vault(cli)?;

    match service.list() {
        Ok(services) => {
            output::print_services(&services);
            Ok(())
        }
        Err(PwVaultError::EmptyVault) => {
            output::info("No passwords stored in the vault.");
            output::tip("Run `pwvault add <SERVICE>` to store one.");
            Ok(())
        }
        Err(e) => Err(e),
    }
}
