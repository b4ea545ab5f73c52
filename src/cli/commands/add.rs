//! `pwvault add` — store a password for a new service.

use crate::cli::{key_path, load_settings, output, resolve_password, vault_path, Cli};
use crate::errors::Result;
use crate::vault::VaultService;

/// Execute the `add` command.
pub fn execute(cli: &Cli, service_name: &str, password: Option<&str>) -> Result<()> {
    let settings = load_settings()?;
    let mut service = VaultService::new();
    service.load_key(&key_path(cli, &settings))?;

    // A vault created with no entries has no file yet; bind to the
    // path in that case instead of failing with VaultNotFound.
    let vault = vault_path(cli, &settings);
    if vault.exists() {
        service.load_vault(&vault)?;
    } else {
        service.create_vault(&vault, true, &[])?;
    }

    let password = resolve_password(password, &format!("Password for {service_name}"))?;
    service.add(service_name, &password)?;

    output::success(&format!("Password for {service_name} added."));
    Ok(())
}
