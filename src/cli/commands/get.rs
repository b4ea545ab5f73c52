//! `pwvault get` — retrieve and print a single password.

use crate::cli::{open_vault, output, Cli};
use crate::errors::Result;

/// Execute the `get` command.
pub fn execute(cli: &Cli, service_name: &str) -> Result<()> {
    let (service, _vault) = open_vault(cli)?;

    // A miss is not a hard error; report it and exit cleanly.
    match service.get(service_name)? {
        Some(password) => println!("{password}"),
        None => output::warning(&format!("No password stored for '{service_name}'.")),
    }
    Ok(())
}
