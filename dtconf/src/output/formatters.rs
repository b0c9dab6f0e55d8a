//! Formatter implementations.

use std::collections::BTreeMap;

use crate::configuration::{ConfigurationKey, TableConfiguration};
use crate::output::OutputFormatter;
use crate::properties::PropertySet;
use crate::Result;

type GroupValues<'a> = BTreeMap<&'a str, &'a BTreeMap<ConfigurationKey, String>>;

fn group_values(configurations: &BTreeMap<String, TableConfiguration>) -> GroupValues<'_> {
    configurations
        .iter()
        .map(|(group, configuration)| (group.as_str(), configuration.values()))
        .collect()
}

/// Formatter for JSON output.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, configurations: &BTreeMap<String, TableConfiguration>) -> Result<String> {
        Ok(serde_json::to_string_pretty(&group_values(configurations))?)
    }
}

/// Formatter for YAML output.
pub struct YamlFormatter;

impl OutputFormatter for YamlFormatter {
    fn format(&self, configurations: &BTreeMap<String, TableConfiguration>) -> Result<String> {
        Ok(serde_yaml::to_string(&group_values(configurations))?)
    }
}

/// Formatter writing one `<group>.<option>=<value>` line per value.
///
/// The output reads back as a user bundle that reproduces the same
/// configurations.
pub struct PropertiesFormatter;

impl OutputFormatter for PropertiesFormatter {
    fn format(&self, configurations: &BTreeMap<String, TableConfiguration>) -> Result<String> {
        let properties: PropertySet = configurations
            .iter()
            .flat_map(|(group, configuration)| {
                configuration
                    .values()
                    .iter()
                    .map(move |(key, value)| (format!("{group}.{}", key.name()), value.clone()))
            })
            .collect();
        Ok(properties.to_properties_string())
    }
}

/// Formatter for human-readable output.
///
/// Blank values are shown as `-`.
pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format(&self, configurations: &BTreeMap<String, TableConfiguration>) -> Result<String> {
        if configurations.is_empty() {
            return Ok("No configurations resolved.".to_string());
        }

        let mut lines = Vec::new();
        for (group, configuration) in configurations {
            if !lines.is_empty() {
                lines.push(String::new());
            }
            lines.push(format!("[{group}] ({} options)", configuration.len()));

            let width = configuration
                .values()
                .keys()
                .map(|key| key.name().len())
                .max()
                .unwrap_or(0);
            for (key, value) in configuration.values() {
                let shown = if value.trim().is_empty() { "-" } else { value.as_str() };
                lines.push(format!("  {:<width$}  {shown}", key.name()));
            }
        }

        Ok(lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration::RequestContext;
    use crate::output::OutputFormat;

    fn create_test_configurations() -> BTreeMap<String, TableConfiguration> {
        let mut global = BTreeMap::new();
        global.insert(ConfigurationKey::AjaxPipeSize, "5".to_string());
        global.insert(ConfigurationKey::CssClass, String::new());

        let mut group_a = global.clone();
        group_a.insert(ConfigurationKey::CssClass, "display compact".to_string());

        let mut map = BTreeMap::new();
        map.insert(
            "global".to_string(),
            TableConfiguration::new(global, RequestContext::default()),
        );
        map.insert(
            "groupA".to_string(),
            TableConfiguration::new(group_a, RequestContext::default()),
        );
        map
    }

    #[test]
    fn test_json_formatter() {
        let output = JsonFormatter.format(&create_test_configurations()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed["global"]["ajax.pipesize"], "5");
        assert_eq!(parsed["global"]["css.class"], "");
        assert_eq!(parsed["groupA"]["css.class"], "display compact");
    }

    #[test]
    fn test_json_formatter_empty() {
        let output = JsonFormatter.format(&BTreeMap::new()).unwrap();
        assert_eq!(output, "{}");
    }

    #[test]
    fn test_yaml_formatter() {
        let output = YamlFormatter.format(&create_test_configurations()).unwrap();
        let parsed: serde_yaml::Value = serde_yaml::from_str(&output).unwrap();

        assert_eq!(parsed["groupA"]["ajax.pipesize"].as_str(), Some("5"));
        assert_eq!(parsed["groupA"]["css.class"].as_str(), Some("display compact"));
    }

    #[test]
    fn test_properties_formatter_reads_back() {
        let output = PropertiesFormatter
            .format(&create_test_configurations())
            .unwrap();
        let parsed: PropertySet = output.parse().unwrap();

        assert_eq!(parsed.len(), 4);
        assert_eq!(parsed.get("global.ajax.pipesize"), Some("5"));
        assert_eq!(parsed.get("groupA.css.class"), Some("display compact"));
        assert_eq!(parsed.get("global.css.class"), Some(""));
    }

    #[test]
    fn test_human_formatter() {
        let output = HumanFormatter.format(&create_test_configurations()).unwrap();

        assert!(output.contains("[global] (2 options)"));
        assert!(output.contains("[groupA] (2 options)"));
        assert!(output.contains("ajax.pipesize  5"));
        assert!(output.contains("display compact"));
        // Blank values are shown as a dash.
        assert!(output.contains("css.class      -"));
    }

    #[test]
    fn test_human_formatter_empty() {
        let output = HumanFormatter.format(&BTreeMap::new()).unwrap();
        assert_eq!(output, "No configurations resolved.");
    }

    #[test]
    fn test_create_formatter() {
        let configurations = create_test_configurations();
        for format in [
            OutputFormat::Human,
            OutputFormat::Json,
            OutputFormat::Yaml,
            OutputFormat::Properties,
        ] {
            let output = format.create_formatter().format(&configurations).unwrap();
            assert!(output.contains("groupA"));
        }
    }
}
