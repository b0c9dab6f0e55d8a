//! Template-engine compatibility shim for user properties.
//!
//! When the caller renders through JSP with JSTL available, tables without
//! an explicit message resolver get the JSTL-backed one.

use crate::configuration::groups::DEFAULT_GROUP_NAME;
use crate::configuration::key::ConfigurationKey;
use crate::properties::PropertySet;

/// Message resolver injected when JSTL is available.
pub const JSTL_MESSAGE_RESOLVER: &str = "com.github.dandelion.datatables.jsp.i18n.JstlMessageResolver";

/// Adjusts user properties for the template engine in use.
///
/// # Examples
///
/// ```
/// use dtconf::configuration::{TemplateEngineAdapter, JSTL_MESSAGE_RESOLVER};
/// use dtconf::PropertySet;
///
/// let mut user = PropertySet::new();
/// TemplateEngineAdapter::new(true).apply(&mut user);
/// assert_eq!(
///     user.get("global.internal.messageresolver"),
///     Some(JSTL_MESSAGE_RESOLVER)
/// );
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TemplateEngineAdapter {
    jstl_available: bool,
}

impl TemplateEngineAdapter {
    /// Creates an adapter; `jstl_available` is the caller's capability flag.
    #[must_use]
    pub const fn new(jstl_available: bool) -> Self {
        Self { jstl_available }
    }

    /// Whether the JSTL capability is enabled.
    #[must_use]
    pub const fn jstl_available(&self) -> bool {
        self.jstl_available
    }

    /// Applies the shim to `user_properties`, returning the number of
    /// entries written.
    ///
    /// Without JSTL nothing changes. With JSTL, blank message-resolver
    /// entries are filled in; an empty set receives a `global` entry.
    pub fn apply(&self, user_properties: &mut PropertySet) -> usize {
        if !self.jstl_available {
            return 0;
        }

        let resolver_name = ConfigurationKey::InternalMessageResolver.name();

        if user_properties.is_empty() {
            user_properties.insert(
                format!("{DEFAULT_GROUP_NAME}.{resolver_name}"),
                JSTL_MESSAGE_RESOLVER,
            );
            log::debug!("Message resolver defaulted to {JSTL_MESSAGE_RESOLVER}");
            return 1;
        }

        let mut written = 0;
        for (key, value) in user_properties.values_mut() {
            if key.contains(resolver_name) && value.trim().is_empty() {
                *value = JSTL_MESSAGE_RESOLVER.to_string();
                written += 1;
            }
        }

        if written > 0 {
            log::debug!("Message resolver defaulted to {JSTL_MESSAGE_RESOLVER} in {written} place(s)");
        }
        written
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(entries: &[(&str, &str)]) -> PropertySet {
        entries.iter().copied().collect()
    }

    #[test]
    fn test_disabled_never_mutates() {
        let adapter = TemplateEngineAdapter::new(false);

        let mut empty = PropertySet::new();
        assert_eq!(adapter.apply(&mut empty), 0);
        assert!(empty.is_empty());

        let original = set(&[("groupA.internal.messageresolver", "")]);
        let mut user = original.clone();
        assert_eq!(adapter.apply(&mut user), 0);
        assert_eq!(user, original);
    }

    #[test]
    fn test_enabled_fills_blank_resolvers() {
        let mut user = set(&[
            ("groupA.internal.messageresolver", "  "),
            ("groupB.internal.messageresolver", "my.Resolver"),
            ("groupA.css.class", ""),
        ]);
        assert_eq!(TemplateEngineAdapter::new(true).apply(&mut user), 1);
        assert_eq!(
            user.get("groupA.internal.messageresolver"),
            Some(JSTL_MESSAGE_RESOLVER)
        );
        assert_eq!(user.get("groupB.internal.messageresolver"), Some("my.Resolver"));
        assert_eq!(user.get("groupA.css.class"), Some(""));
        assert_eq!(user.len(), 3);
    }

    #[test]
    fn test_enabled_on_non_empty_set_without_resolver_adds_nothing() {
        let mut user = set(&[("global.css.class", "display")]);
        assert_eq!(TemplateEngineAdapter::new(true).apply(&mut user), 0);
        assert_eq!(user.len(), 1);
    }

    #[test]
    fn test_enabled_on_empty_set_inserts_global_entry() {
        let mut user = PropertySet::new();
        assert_eq!(TemplateEngineAdapter::new(true).apply(&mut user), 1);
        assert_eq!(user.len(), 1);
        assert_eq!(
            user.get("global.internal.messageresolver"),
            Some(JSTL_MESSAGE_RESOLVER)
        );
    }
}
