//! Loader settings schema.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::configuration::source::DEFAULT_BUNDLE_NAME;
use crate::resource::DEFAULT_RESOURCE;

/// Settings as read from one source (file, environment or code).
///
/// Every field is optional so sources can be layered; unset fields fall
/// through to lower-precedence sources and finally to the built-in defaults.
///
/// # Examples
///
/// ```
/// use dtconf::settings::Settings;
///
/// let settings: Settings = serde_yaml::from_str("bundle_name: tables\njstl: true\n").unwrap();
/// assert_eq!(settings.bundle_name.as_deref(), Some("tables"));
/// assert_eq!(settings.jstl, Some(true));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// External directory searched first for user bundles.
    pub configuration_dir: Option<PathBuf>,

    /// Directory searched for user bundles after the embedded resources.
    pub fallback_dir: Option<PathBuf>,

    /// Directory holding the default properties resource.
    pub defaults_dir: Option<PathBuf>,

    /// Base name of the user bundles.
    pub bundle_name: Option<String>,

    /// File name of the default properties resource.
    pub default_resource: Option<String>,

    /// Whether the JSP tag library is in use.
    pub jstl: Option<bool>,
}

/// Fully resolved settings of a configuration loader.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LoaderSettings {
    /// External directory searched first for user bundles.
    pub configuration_dir: Option<PathBuf>,
    /// Directory searched for user bundles after the embedded resources.
    pub fallback_dir: Option<PathBuf>,
    /// Directory holding the default properties resource; the embedded
    /// resources when unset.
    pub defaults_dir: Option<PathBuf>,
    /// Base name of the user bundles.
    pub bundle_name: String,
    /// File name of the default properties resource.
    pub default_resource: String,
    /// Whether the JSP tag library is in use.
    pub jstl: bool,
}

impl Default for LoaderSettings {
    fn default() -> Self {
        Self {
            configuration_dir: None,
            fallback_dir: None,
            defaults_dir: None,
            bundle_name: DEFAULT_BUNDLE_NAME.to_string(),
            default_resource: DEFAULT_RESOURCE.to_string(),
            jstl: false,
        }
    }
}

impl From<Settings> for LoaderSettings {
    fn from(settings: Settings) -> Self {
        let defaults = Self::default();
        Self {
            configuration_dir: settings.configuration_dir,
            fallback_dir: settings.fallback_dir,
            defaults_dir: settings.defaults_dir,
            bundle_name: settings.bundle_name.unwrap_or(defaults.bundle_name),
            default_resource: settings
                .default_resource
                .unwrap_or(defaults.default_resource),
            jstl: settings.jstl.unwrap_or(defaults.jstl),
        }
    }
}
