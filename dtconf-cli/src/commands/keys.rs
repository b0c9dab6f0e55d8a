//! Keys command implementation.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use dtconf::ConfigurationKey;

/// List every known configuration option.
#[derive(Args)]
pub struct KeysCommand {
    /// Only list options of this category (e.g. feature, ajax, export)
    #[arg(long, value_name = "CATEGORY")]
    pub category: Option<String>,

    /// Print the category next to each option
    #[arg(long)]
    pub long: bool,
}

impl KeysCommand {
    /// Execute the keys command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let keys: Vec<ConfigurationKey> = ConfigurationKey::ALL
            .iter()
            .copied()
            .filter(|key| {
                self.category
                    .as_deref()
                    .map_or(true, |category| key.category() == category)
            })
            .collect();

        if keys.is_empty() {
            if let Some(category) = &self.category {
                return Err(CliError::InvalidArguments(format!(
                    "no option in category '{category}'"
                )));
            }
        }

        for key in keys {
            if self.long {
                println!("{}\t{}", key.name(), key.category());
            } else {
                println!("{key}");
            }
        }

        Ok(())
    }
}
