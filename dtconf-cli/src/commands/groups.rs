//! Groups command implementation.

use crate::error::CliError;
use crate::utils::{build_loader, parse_locale, GlobalOptions};
use clap::Args;
use dtconf::configuration::ConfigurationLoader;

/// List the groups defined for a locale.
#[derive(Args)]
pub struct GroupsCommand {
    /// Locale to resolve for (e.g. fr_FR); the base bundle when omitted
    #[arg(long, value_name = "LOCALE")]
    pub locale: Option<String>,
}

impl GroupsCommand {
    /// Execute the groups command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let loader = build_loader(global)?;
        let locale = parse_locale(self.locale.as_deref())?;

        let user = loader.load_user_configuration(&locale);
        for group in loader.resolve_groups(&user) {
            println!("{group}");
        }

        Ok(())
    }
}
