//! Resolve command implementation.
//!
//! This module implements the `resolve` command, which runs a full
//! resolution pass and prints the configurations in various formats
//! (human, JSON, YAML, properties, CSV).

use crate::error::CliError;
use crate::utils::{build_loader, request_context, GlobalOptions};
use clap::{Args, ValueEnum};
use dtconf::configuration::ConfigurationLoader;
use dtconf::output::OutputFormat as LibOutputFormat;
use dtconf::TableConfiguration;
use std::collections::BTreeMap;
use std::io::Write;

/// Column headers for CSV output.
const COLUMN_HEADERS: [&str; 3] = ["group", "option", "value"];

/// Resolve the table configurations for a locale.
#[derive(Args)]
pub struct ResolveCommand {
    /// Locale to resolve for (e.g. fr_FR); the base bundle when omitted
    #[arg(long, value_name = "LOCALE")]
    pub locale: Option<String>,

    /// Only print this group
    #[arg(long, value_name = "GROUP")]
    pub group: Option<String>,

    /// Output format
    #[arg(
        long,
        value_enum,
        default_value = "human",
        env = "DTCONF_OUTPUT_FORMAT",
        ignore_case = true
    )]
    pub format: OutputFormat,
}

/// Output format for the resolve command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable listing per group
    Human,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
    /// Properties format, readable back as a bundle
    Properties,
    /// CSV format (group, option, value)
    Csv,
}

impl ResolveCommand {
    /// Execute the resolve command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Build the loader from settings
        let loader = build_loader(global)?;

        // 2. Resolve
        let context = request_context(self.locale.as_deref())?;
        let mut resolution = loader.resolve(&context)?;

        if !resolution.unknown_properties.is_empty() {
            log::info!(
                "{} unknown option(s) were ignored",
                resolution.unknown_properties.len()
            );
        }

        // 3. Apply the group filter
        let configurations = match &self.group {
            Some(group) => {
                let configuration = resolution.configurations.remove(group).ok_or_else(|| {
                    CliError::SemanticFailure(format!(
                        "Group '{group}' is not defined for the locale '{}'",
                        context.locale
                    ))
                })?;
                BTreeMap::from([(group.clone(), configuration)])
            }
            None => resolution.configurations,
        };

        // 4. Format and output to stdout
        match self.format {
            OutputFormat::Human => print_formatted(LibOutputFormat::Human, &configurations),
            OutputFormat::Json => print_formatted(LibOutputFormat::Json, &configurations),
            OutputFormat::Yaml => print_formatted(LibOutputFormat::Yaml, &configurations),
            OutputFormat::Properties => {
                print_formatted(LibOutputFormat::Properties, &configurations)
            }
            OutputFormat::Csv => format_as_csv(&configurations),
        }
    }
}

/// Print configurations with one of the library formatters.
fn print_formatted(
    format: LibOutputFormat,
    configurations: &BTreeMap<String, TableConfiguration>,
) -> Result<(), CliError> {
    let output = format.create_formatter().format(configurations)?;

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    write!(handle, "{output}")?;
    if !output.ends_with('\n') {
        writeln!(handle)?;
    }
    Ok(())
}

/// Format configurations as CSV, one row per option.
fn format_as_csv(configurations: &BTreeMap<String, TableConfiguration>) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let handle = stdout.lock();
    let mut writer = csv::Writer::from_writer(handle);

    writer.write_record(COLUMN_HEADERS)?;

    for (group, configuration) in configurations {
        for (key, value) in configuration.values() {
            writer.write_record([group.as_str(), key.name(), value.as_str()])?;
        }
    }

    writer.flush()?;

    Ok(())
}
