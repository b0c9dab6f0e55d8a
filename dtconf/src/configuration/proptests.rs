//! Property-based tests for group resolution and merging.

use std::collections::{BTreeMap, BTreeSet};

use super::groups::{GroupResolver, DEFAULT_GROUP_NAME, LOCALE_RESOLVER_KEY};
use super::key::ConfigurationKey;
use super::merger::ConfigurationMerger;
use super::table::{RequestContext, TableConfiguration};
use crate::properties::PropertySet;
use proptest::prelude::*;

// Strategy for option names known to the configuration
fn known_option_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(ConfigurationKey::ALL).prop_map(ConfigurationKey::name)
}

// Strategy for group names that are never the default group
fn group_strategy() -> impl Strategy<Value = String> {
    "group[A-Z][a-z]{0,5}"
}

// Strategy for option names no key uses
fn unknown_option_strategy() -> impl Strategy<Value = String> {
    "unknown[A-Z][a-z]{0,8}"
}

fn value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{0,12}"
}

// Strategy for user bundles mixing known, unknown and reserved keys
fn user_properties_strategy() -> impl Strategy<Value = PropertySet> {
    let entry = prop_oneof![
        (known_option_strategy(), value_strategy())
            .prop_map(|(option, value)| (format!("{DEFAULT_GROUP_NAME}.{option}"), value)),
        (group_strategy(), known_option_strategy(), value_strategy())
            .prop_map(|(group, option, value)| (format!("{group}.{option}"), value)),
        (group_strategy(), unknown_option_strategy(), value_strategy())
            .prop_map(|(group, option, value)| (format!("{group}.{option}"), value)),
        (group_strategy(), value_strategy())
            .prop_map(|(group, value)| (format!("{group}.{LOCALE_RESOLVER_KEY}"), value)),
    ];
    prop::collection::vec(entry, 0..20).prop_map(|entries| entries.into_iter().collect())
}

fn defaults() -> PropertySet {
    let mut defaults: PropertySet = ConfigurationKey::ALL
        .iter()
        .map(|key| (format!("{DEFAULT_GROUP_NAME}.{}", key.name()), "default"))
        .collect();
    defaults.insert(
        format!("{DEFAULT_GROUP_NAME}.{LOCALE_RESOLVER_KEY}"),
        "std.Resolver",
    );
    defaults
}

fn resolve(user: &PropertySet) -> (BTreeMap<String, TableConfiguration>, Vec<super::UnknownProperty>) {
    let groups = GroupResolver::resolve_groups(user);
    let mut output = BTreeMap::new();
    let unknown = ConfigurationMerger::resolve_configurations(
        &mut output,
        &groups,
        &defaults(),
        user,
        &RequestContext::default(),
    );
    (output, unknown)
}

// The `property-tests` feature runs the exhaustive case count.
const CASES: u32 = if cfg!(feature = "property-tests") { 10_000 } else { 500 };

proptest! {
    #![proptest_config(ProptestConfig {
        cases: CASES,
        .. ProptestConfig::default()
    })]

    // Every user group plus the default group gets exactly one configuration
    #[test]
    fn one_configuration_per_group(user in user_properties_strategy()) {
        let groups = GroupResolver::resolve_groups(&user);
        let (output, _) = resolve(&user);

        prop_assert!(groups.contains(DEFAULT_GROUP_NAME));
        let resolved: BTreeSet<String> = output.keys().cloned().collect();
        prop_assert_eq!(resolved, groups);
    }

    // Resolving twice from the same inputs gives the same output
    #[test]
    fn resolution_is_idempotent(user in user_properties_strategy()) {
        let (first, first_unknown) = resolve(&user);
        let (second, second_unknown) = resolve(&user);

        prop_assert_eq!(first_unknown, second_unknown);
        prop_assert_eq!(first.len(), second.len());
        for (group, configuration) in &first {
            prop_assert_eq!(configuration.values(), second[group].values());
        }
    }

    // Every configuration holds every default option
    #[test]
    fn defaults_always_present(user in user_properties_strategy()) {
        let (output, _) = resolve(&user);

        for configuration in output.values() {
            prop_assert_eq!(configuration.len(), ConfigurationKey::ALL.len());
        }
    }

    // The reserved locale resolver option never lands in a group's properties
    #[test]
    fn locale_resolver_never_merged(
        user in user_properties_strategy(),
        group in group_strategy()
    ) {
        let global = ConfigurationMerger::global_properties(&defaults(), &user);
        let grouped = ConfigurationMerger::grouped_properties(&global, &user, &group);

        prop_assert!(!global.contains_key(LOCALE_RESOLVER_KEY));
        prop_assert!(!grouped.contains_key(LOCALE_RESOLVER_KEY));
    }

    // Unknown options are reported and never stored
    #[test]
    fn unknown_options_reported(
        group in group_strategy(),
        option in unknown_option_strategy()
    ) {
        let user: PropertySet = [(format!("{group}.{option}"), "x".to_string())]
            .into_iter()
            .collect();
        let (output, unknown) = resolve(&user);

        prop_assert_eq!(unknown.len(), 1);
        prop_assert_eq!(&unknown[0].group, &group);
        prop_assert_eq!(&unknown[0].key, &option);
        prop_assert_eq!(output[&group].len(), ConfigurationKey::ALL.len());
    }

    // An unknown global option is reported once, however many groups inherit it
    #[test]
    fn unknown_global_option_reported_once(
        groups in prop::collection::btree_set(group_strategy(), 0..6),
        option in unknown_option_strategy()
    ) {
        let mut user: PropertySet = groups
            .iter()
            .map(|group| (format!("{group}.css.class"), "x".to_string()))
            .collect();
        user.insert(format!("{DEFAULT_GROUP_NAME}.{option}"), "y");
        let (output, unknown) = resolve(&user);

        prop_assert_eq!(output.len(), groups.len() + 1);
        prop_assert_eq!(unknown.len(), 1);
        prop_assert_eq!(unknown[0].group.as_str(), DEFAULT_GROUP_NAME);
        prop_assert_eq!(&unknown[0].key, &option);
    }

    // A group's own value beats the global override, which beats the default
    #[test]
    fn group_override_wins(
        key in prop::sample::select(ConfigurationKey::ALL),
        group in group_strategy(),
        global_value in "g[a-z]{1,6}",
        group_value in "x[a-z]{1,6}"
    ) {
        let user: PropertySet = [
            (format!("{DEFAULT_GROUP_NAME}.{}", key.name()), global_value.clone()),
            (format!("{group}.{}", key.name()), group_value.clone()),
        ]
        .into_iter()
        .collect();
        let (output, _) = resolve(&user);

        prop_assert_eq!(output[DEFAULT_GROUP_NAME].raw(key), Some(global_value.as_str()));
        prop_assert_eq!(output[&group].raw(key), Some(group_value.as_str()));
    }
}
