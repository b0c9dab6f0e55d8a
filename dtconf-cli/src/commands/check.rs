//! Command to check a user bundle file.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use dtconf::configuration::GroupResolver;
use dtconf::{ConfigurationKey, PropertySet};
use std::path::PathBuf;

/// Check a bundle file for misplaced or unknown options.
#[derive(Args)]
pub struct CheckCommand {
    /// Bundle file to check (e.g. datatables_fr.properties)
    #[arg(value_name = "BUNDLE_PATH")]
    pub bundle_path: PathBuf,
}

/// Problems found in a bundle.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CheckReport {
    /// Keys without a group prefix.
    pub ungrouped: Vec<String>,
    /// Keys whose option is unknown.
    pub unknown: Vec<String>,
    /// Number of groups the bundle defines.
    pub groups: usize,
}

impl CheckReport {
    /// Inspect every key of `properties`.
    pub fn inspect(properties: &PropertySet) -> Self {
        let mut report = Self {
            groups: properties
                .keys()
                .filter(|key| !GroupResolver::is_reserved(key))
                .filter_map(GroupResolver::group_of)
                .collect::<std::collections::BTreeSet<_>>()
                .len(),
            ..Default::default()
        };

        for key in properties.keys() {
            if GroupResolver::is_reserved(key) {
                continue;
            }
            if GroupResolver::group_of(key).is_none() {
                report.ungrouped.push(key.to_string());
            } else if ConfigurationKey::find_by_name(GroupResolver::strip_group(key)).is_none() {
                report.unknown.push(key.to_string());
            }
        }

        report
    }

    /// Whether no problem was found.
    pub fn is_clean(&self) -> bool {
        self.ungrouped.is_empty() && self.unknown.is_empty()
    }
}

impl CheckCommand {
    /// Execute the check command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Check file exists
        if !self.bundle_path.is_file() {
            return Err(CliError::InvalidArguments(format!(
                "File not found: {}",
                self.bundle_path.display()
            )));
        }

        // 2. Parse the file
        let contents = std::fs::read_to_string(&self.bundle_path)?;
        let properties = dtconf::properties::parse(&contents)
            .map_err(|e| CliError::SemanticFailure(format!("Bundle check failed: {e}")))?;

        // 3. Report
        let report = CheckReport::inspect(&properties);
        for key in &report.ungrouped {
            eprintln!("No group prefix: {key}");
        }
        for key in &report.unknown {
            eprintln!("Unknown option: {key}");
        }

        if report.is_clean() {
            println!(
                "Bundle is valid ({} properties in {} groups)",
                properties.len(),
                report.groups
            );
            Ok(())
        } else {
            Err(CliError::SemanticFailure(format!(
                "Bundle check failed: {} problem(s)",
                report.ungrouped.len() + report.unknown.len()
            )))
        }
    }
}
