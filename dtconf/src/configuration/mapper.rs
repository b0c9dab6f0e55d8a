//! Mapping of merged string properties onto typed configuration keys.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::configuration::key::ConfigurationKey;
use crate::configuration::table::{RequestContext, TableConfiguration};
use crate::properties::PropertySet;

/// A property whose name matches no [`ConfigurationKey`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct UnknownProperty {
    /// Group the property was resolved in.
    pub group: String,
    /// Option name, without group prefix.
    pub key: String,
}

/// Output of mapping one group.
#[derive(Debug, Clone)]
pub struct MappedGroup {
    /// The built configuration.
    pub configuration: TableConfiguration,
    /// Properties that were dropped.
    pub unknown: Vec<UnknownProperty>,
}

/// Turns a group's merged properties into a [`TableConfiguration`].
pub struct ConfigurationMapper;

impl ConfigurationMapper {
    /// Maps `grouped_properties` (option names without group prefix).
    ///
    /// Unknown names are skipped; each produces one warning and one
    /// [`UnknownProperty`].
    ///
    /// # Examples
    ///
    /// ```
    /// use dtconf::configuration::ConfigurationMapper;
    /// use dtconf::{ConfigurationKey, PropertySet, RequestContext};
    ///
    /// let grouped: PropertySet = [("ajax.pipesize", "5"), ("no.such.option", "x")]
    ///     .into_iter()
    ///     .collect();
    ///
    /// let mapped = ConfigurationMapper::map("global", &grouped, &RequestContext::default());
    /// assert_eq!(mapped.configuration.get(ConfigurationKey::AjaxPipeSize), Some("5"));
    /// assert_eq!(mapped.unknown.len(), 1);
    /// ```
    #[must_use]
    pub fn map(
        group: &str,
        grouped_properties: &PropertySet,
        context: &RequestContext,
    ) -> MappedGroup {
        let mut staged = BTreeMap::new();
        let mut unknown = Vec::new();

        for (key, value) in grouped_properties.iter() {
            match ConfigurationKey::find_by_name(key) {
                Some(configuration_key) => {
                    staged.insert(configuration_key, value.to_string());
                }
                None => {
                    log::warn!("The property '{key}' (inside the '{group}' group) doesn't exist");
                    unknown.push(UnknownProperty {
                        group: group.to_string(),
                        key: key.to_string(),
                    });
                }
            }
        }

        MappedGroup {
            configuration: TableConfiguration::new(staged, context.clone()),
            unknown,
        }
    }
}
