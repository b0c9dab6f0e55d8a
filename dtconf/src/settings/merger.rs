//! Layering of settings sources.

use crate::settings::loader::SettingsSource;
use crate::settings::schema::Settings;

/// Merges settings from several sources.
///
/// # Examples
///
/// ```
/// use dtconf::settings::{Settings, SettingsMerger};
///
/// let mut target = Settings {
///     bundle_name: Some("tables".to_string()),
///     ..Default::default()
/// };
/// let source = Settings {
///     jstl: Some(true),
///     ..Default::default()
/// };
///
/// SettingsMerger::merge_into(&mut target, &source);
/// assert_eq!(target.bundle_name.as_deref(), Some("tables"));
/// assert_eq!(target.jstl, Some(true));
/// ```
pub struct SettingsMerger;

impl SettingsMerger {
    /// Merges `sources`, lowest precedence first.
    #[must_use]
    pub fn merge(sources: Vec<SettingsSource>) -> Settings {
        let mut result = Settings::default();
        for source in sources {
            Self::merge_into(&mut result, &source.settings);
        }
        result
    }

    /// Merges `source` into `target`; set fields of `source` win.
    pub fn merge_into(target: &mut Settings, source: &Settings) {
        if source.configuration_dir.is_some() {
            target.configuration_dir.clone_from(&source.configuration_dir);
        }

        if source.fallback_dir.is_some() {
            target.fallback_dir.clone_from(&source.fallback_dir);
        }

        if source.defaults_dir.is_some() {
            target.defaults_dir.clone_from(&source.defaults_dir);
        }

        if source.bundle_name.is_some() {
            target.bundle_name.clone_from(&source.bundle_name);
        }

        if source.default_resource.is_some() {
            target.default_resource.clone_from(&source.default_resource);
        }

        if source.jstl.is_some() {
            target.jstl = source.jstl;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::path::PathBuf;

    fn source(precedence: u8, settings: Settings) -> SettingsSource {
        SettingsSource {
            path: PathBuf::from(format!("/settings/{precedence}.yaml")),
            precedence,
            settings,
        }
    }

    #[test]
    fn test_merge_empty_sources() {
        assert_eq!(SettingsMerger::merge(Vec::new()), Settings::default());
    }

    #[test]
    fn test_later_sources_win() {
        let low = source(
            1,
            Settings {
                bundle_name: Some("low".to_string()),
                fallback_dir: Some(PathBuf::from("/low")),
                ..Default::default()
            },
        );
        let high = source(
            2,
            Settings {
                bundle_name: Some("high".to_string()),
                ..Default::default()
            },
        );

        let merged = SettingsMerger::merge(vec![low, high]);
        assert_eq!(merged.bundle_name.as_deref(), Some("high"));
        assert_eq!(merged.fallback_dir, Some(PathBuf::from("/low")));
    }

    #[test]
    fn test_jstl_false_overrides_true() {
        let mut target = Settings {
            jstl: Some(true),
            ..Default::default()
        };
        SettingsMerger::merge_into(
            &mut target,
            &Settings {
                jstl: Some(false),
                ..Default::default()
            },
        );
        assert_eq!(target.jstl, Some(false));
    }

    fn settings_strategy() -> impl Strategy<Value = Settings> {
        (
            prop::option::of("/[a-z]{1,8}"),
            prop::option::of("[a-z]{1,8}"),
            prop::option::of(any::<bool>()),
        )
            .prop_map(|(dir, bundle, jstl)| Settings {
                configuration_dir: dir.map(PathBuf::from),
                bundle_name: bundle,
                jstl,
                ..Default::default()
            })
    }

    proptest! {
        // Merging into an empty target copies the source
        #[test]
        fn merge_into_default_is_identity(settings in settings_strategy()) {
            let mut target = Settings::default();
            SettingsMerger::merge_into(&mut target, &settings);
            prop_assert_eq!(target, settings);
        }

        // A set field in the higher source always wins
        #[test]
        fn higher_precedence_wins(low in settings_strategy(), high in settings_strategy()) {
            let mut target = low.clone();
            SettingsMerger::merge_into(&mut target, &high);

            prop_assert_eq!(&target.bundle_name, if high.bundle_name.is_some() { &high.bundle_name } else { &low.bundle_name });
            prop_assert_eq!(target.jstl, high.jstl.or(low.jstl));
            prop_assert_eq!(
                &target.configuration_dir,
                if high.configuration_dir.is_some() { &high.configuration_dir } else { &low.configuration_dir }
            );
        }
    }
}
