//! Group discovery from user property keys.
//!
//! User keys have the form `<group>.<option>`. The set of groups present in a
//! user bundle, plus the default group, drives how many configurations a
//! resolution pass produces.

use std::collections::BTreeSet;

use crate::properties::PropertySet;

/// Name of the group every other group inherits from.
pub const DEFAULT_GROUP_NAME: &str = "global";

/// Reserved option naming the locale resolver; never grouped or mapped.
pub const LOCALE_RESOLVER_KEY: &str = "i18n.locale.resolver";

/// Discovers group names and splits grouped keys.
pub struct GroupResolver;

impl GroupResolver {
    /// Computes the set of groups present in `user_properties`.
    ///
    /// Keys mentioning the locale resolver are ignored. Keys without a group
    /// prefix are skipped with a warning. The default group is always part
    /// of the result.
    ///
    /// # Examples
    ///
    /// ```
    /// use dtconf::configuration::GroupResolver;
    /// use dtconf::PropertySet;
    ///
    /// let user: PropertySet = [
    ///     ("groupA.feature.info", "false"),
    ///     ("groupB.css.class", "display"),
    ///     ("global.i18n.locale.resolver", "my.Resolver"),
    /// ]
    /// .into_iter()
    /// .collect();
    ///
    /// let groups = GroupResolver::resolve_groups(&user);
    /// let names: Vec<_> = groups.iter().map(String::as_str).collect();
    /// assert_eq!(names, vec!["global", "groupA", "groupB"]);
    /// ```
    #[must_use]
    pub fn resolve_groups(user_properties: &PropertySet) -> BTreeSet<String> {
        let mut groups = BTreeSet::new();

        for key in user_properties.keys() {
            if Self::is_reserved(key) {
                continue;
            }
            match Self::group_of(key) {
                Some(group) => {
                    groups.insert(group.to_string());
                }
                None => {
                    log::warn!("The property '{key}' has no group prefix and is ignored");
                }
            }
        }

        groups.insert(DEFAULT_GROUP_NAME.to_string());

        log::debug!("{} group(s) resolved ({:?})", groups.len(), groups);
        groups
    }

    /// The group prefix of `key`: the text before its first `.`.
    ///
    /// Returns `None` when there is no `.` or the prefix is empty.
    #[must_use]
    pub fn group_of(key: &str) -> Option<&str> {
        key.split_once('.')
            .map(|(group, _)| group)
            .filter(|group| !group.is_empty())
    }

    /// `key` without its group prefix; keys without a `.` are returned whole.
    #[must_use]
    pub fn strip_group(key: &str) -> &str {
        key.split_once('.').map_or(key, |(_, rest)| rest)
    }

    /// The option name of `key` if it belongs to exactly `group`.
    ///
    /// Matching requires the group name followed by a dot, so `globalFoo.x`
    /// does not belong to `global`.
    #[must_use]
    pub fn option_in_group<'a>(key: &'a str, group: &str) -> Option<&'a str> {
        key.strip_prefix(group)
            .and_then(|rest| rest.strip_prefix('.'))
    }

    /// Returns true for keys mentioning the reserved locale resolver option.
    #[must_use]
    pub fn is_reserved(key: &str) -> bool {
        key.contains(LOCALE_RESOLVER_KEY)
    }
}
