//! `pwvault update` — replace the password for an existing service.

use crate::cli::{open_vault, output, resolve_password, Cli};
use crate::errors::Result;

/// Execute the `update` command.
pub fn execute(cli: &Cli, service_name: &str, password: Option<&str>) -> Result<()> {
    let (mut service, _vault) = open_vault(cli)?;

    let password = resolve_password(password, &format!("New password for {service_name}"))?;
    service.update(service_name, &password)?;

    output::success(&format!("Password for {service_name} updated."));
    Ok(())
}
