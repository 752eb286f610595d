//! Print the install command for a registry item.

use anyhow::{bail, Result};
use drawkit_registry::{install_command, PackageManager};

/// Run the add command.
pub fn run(name: &str, base_url: &str, package_manager: PackageManager) -> Result<()> {
    if base_url.is_empty() {
        bail!("No base URL configured. Set [install] base_url in drawkit.toml or pass --base-url.");
    }

    println!("{}", install_command(base_url, name, package_manager));

    Ok(())
}
