//! Per-group merging of default and user properties.
//!
//! Precedence, lowest to highest:
//!
//! 1. Default properties (group prefix stripped)
//! 2. User properties of the default group (`global.<option>`)
//! 3. User properties of the group itself (`<group>.<option>`)

use std::collections::{BTreeMap, BTreeSet};

use crate::configuration::groups::{GroupResolver, DEFAULT_GROUP_NAME, LOCALE_RESOLVER_KEY};
use crate::configuration::key::ConfigurationKey;
use crate::configuration::mapper::{ConfigurationMapper, UnknownProperty};
use crate::configuration::table::{RequestContext, TableConfiguration};
use crate::properties::PropertySet;

/// Merges properties per group and builds their configurations.
///
/// # Examples
///
/// ```
/// use dtconf::configuration::ConfigurationMerger;
/// use dtconf::PropertySet;
///
/// let defaults: PropertySet = [("global.css.class", ""), ("global.ajax.pipesize", "5")]
///     .into_iter()
///     .collect();
/// let user: PropertySet = [("global.ajax.pipesize", "10"), ("groupA.css.class", "x")]
///     .into_iter()
///     .collect();
///
/// let global = ConfigurationMerger::global_properties(&defaults, &user);
/// assert_eq!(global.get("ajax.pipesize"), Some("10"));
///
/// let group_a = ConfigurationMerger::grouped_properties(&global, &user, "groupA");
/// assert_eq!(group_a.get("css.class"), Some("x"));
/// assert_eq!(group_a.get("ajax.pipesize"), Some("10"));
/// ```
pub struct ConfigurationMerger;

impl ConfigurationMerger {
    /// Builds the properties every group inherits.
    ///
    /// Default keys lose their group prefix; user keys of the default group
    /// then override them. The locale resolver option is left out.
    #[must_use]
    pub fn global_properties(
        default_properties: &PropertySet,
        user_properties: &PropertySet,
    ) -> PropertySet {
        let mut global = PropertySet::new();

        for (key, value) in default_properties.iter() {
            let option = GroupResolver::strip_group(key);
            if option != LOCALE_RESOLVER_KEY {
                global.insert(option, value);
            }
        }

        global.overlay(&Self::group_overrides(user_properties, DEFAULT_GROUP_NAME));
        global
    }

    /// Builds the properties of `group`: `global_properties` overlaid with
    /// the user keys prefixed exactly `<group>.`.
    #[must_use]
    pub fn grouped_properties(
        global_properties: &PropertySet,
        user_properties: &PropertySet,
        group: &str,
    ) -> PropertySet {
        let mut grouped = global_properties.clone();
        grouped.overlay(&Self::group_overrides(user_properties, group));
        grouped
    }

    /// Resolves one [`TableConfiguration`] per group into `output`,
    /// replacing entries with the same group name.
    ///
    /// Returns the properties dropped because their option is unknown. Each
    /// offending key is reported once: unknown options of the global layer
    /// under the default group, others under the group that sets them.
    pub fn resolve_configurations(
        output: &mut BTreeMap<String, TableConfiguration>,
        groups: &BTreeSet<String>,
        default_properties: &PropertySet,
        user_properties: &PropertySet,
        context: &RequestContext,
    ) -> Vec<UnknownProperty> {
        log::debug!("Resolving configurations for the locale {}...", context.locale);

        let global = Self::global_properties(default_properties, user_properties);
        let inherited: PropertySet = global
            .iter()
            .filter(|(option, _)| ConfigurationKey::find_by_name(option).is_some())
            .collect();
        let mut unknown = Vec::new();

        for group in groups {
            let base = if group == DEFAULT_GROUP_NAME {
                &global
            } else {
                &inherited
            };
            let grouped = Self::grouped_properties(base, user_properties, group);
            log::debug!(
                "The group '{group}' is initialized and contains {} properties",
                grouped.len()
            );

            let mapped = ConfigurationMapper::map(group, &grouped, context);
            unknown.extend(mapped.unknown);
            output.insert(group.clone(), mapped.configuration);
        }

        log::debug!(
            "{} group(s) resolved ({:?}) for the locale {}",
            groups.len(),
            groups,
            context.locale
        );
        unknown
    }

    fn group_overrides(user_properties: &PropertySet, group: &str) -> PropertySet {
        user_properties
            .iter()
            .filter(|(key, _)| !GroupResolver::is_reserved(key))
            .filter_map(|(key, value)| {
                GroupResolver::option_in_group(key, group).map(|option| (option, value))
            })
            .collect()
    }
}
