//! Environment variable overrides for loader settings.

use std::env;
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::settings::schema::Settings;

/// External directory searched first for user bundles.
pub const CONFIGURATION_DIR_ENV: &str = "DANDELION_DT_CONFIGURATION";
/// Fallback directory for user bundles.
pub const FALLBACK_DIR_ENV: &str = "DTCONF_FALLBACK_DIR";
/// Directory holding the default properties resource.
pub const DEFAULTS_DIR_ENV: &str = "DTCONF_DEFAULTS_DIR";
/// Base name of user bundles.
pub const BUNDLE_NAME_ENV: &str = "DTCONF_BUNDLE_NAME";
/// File name of the default properties resource.
pub const DEFAULT_RESOURCE_ENV: &str = "DTCONF_DEFAULT_RESOURCE";
/// Whether the JSP tag library is in use.
pub const JSTL_ENV: &str = "DTCONF_JSTL";

/// Reads settings overrides from the environment.
///
/// Blank values count as unset.
///
/// # Examples
///
/// ```no_run
/// use dtconf::settings::{EnvironmentSettings, Settings};
///
/// let mut settings = Settings::default();
/// EnvironmentSettings::apply_overrides(&mut settings).unwrap();
/// ```
pub struct EnvironmentSettings;

impl EnvironmentSettings {
    /// Applies the environment variables present to `settings`.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `DTCONF_JSTL` is not a boolean.
    pub fn apply_overrides(settings: &mut Settings) -> Result<()> {
        if let Some(dir) = Self::var(CONFIGURATION_DIR_ENV) {
            settings.configuration_dir = Some(PathBuf::from(dir));
        }

        if let Some(dir) = Self::var(FALLBACK_DIR_ENV) {
            settings.fallback_dir = Some(PathBuf::from(dir));
        }

        if let Some(dir) = Self::var(DEFAULTS_DIR_ENV) {
            settings.defaults_dir = Some(PathBuf::from(dir));
        }

        if let Some(name) = Self::var(BUNDLE_NAME_ENV) {
            settings.bundle_name = Some(name);
        }

        if let Some(name) = Self::var(DEFAULT_RESOURCE_ENV) {
            settings.default_resource = Some(name);
        }

        if let Some(value) = Self::var(JSTL_ENV) {
            settings.jstl = Some(Self::parse_bool(JSTL_ENV, &value)?);
        }

        Ok(())
    }

    fn var(name: &str) -> Option<String> {
        env::var(name)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }

    /// Parses a boolean flag the way the CLI and settings files accept it.
    pub(crate) fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
