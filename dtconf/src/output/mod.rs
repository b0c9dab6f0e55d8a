//! Output formatting of resolved table configurations.
//!
//! Formats the `group -> configuration` map of a resolution as
//! human-readable text, JSON, YAML or a properties file.

mod formatters;

use std::collections::BTreeMap;

use crate::configuration::TableConfiguration;
use crate::Result;

pub use formatters::{HumanFormatter, JsonFormatter, PropertiesFormatter, YamlFormatter};

/// Trait for formatting resolved configurations.
pub trait OutputFormatter {
    /// Format the configurations, keyed by group name.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format(&self, configurations: &BTreeMap<String, TableConfiguration>) -> Result<String>;
}

/// Available output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable listing per group.
    #[default]
    Human,
    /// JSON object of groups.
    Json,
    /// YAML mapping of groups.
    Yaml,
    /// `<group>.<option>=<value>` lines.
    Properties,
}

impl OutputFormat {
    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(&self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Human => Box::new(HumanFormatter),
            Self::Json => Box::new(JsonFormatter),
            Self::Yaml => Box::new(YamlFormatter),
            Self::Properties => Box::new(PropertiesFormatter),
        }
    }
}
