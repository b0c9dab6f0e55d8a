//! Defaults command implementation.

use crate::error::CliError;
use crate::utils::{build_loader, GlobalOptions};
use clap::Args;
use dtconf::configuration::ConfigurationLoader;
use std::io::Write;

/// Print the default properties.
#[derive(Args)]
pub struct DefaultsCommand {}

impl DefaultsCommand {
    /// Execute the defaults command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let loader = build_loader(global)?;
        let defaults = loader.load_default_configuration()?;

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        handle.write_all(defaults.to_properties_string().as_bytes())?;

        Ok(())
    }
}
