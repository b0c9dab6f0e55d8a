//! Validation of resolved loader settings.

use std::path::Path;

use crate::error::{Error, Result};
use crate::settings::schema::LoaderSettings;

/// Validates [`LoaderSettings`] before a loader is built from them.
///
/// # Examples
///
/// ```
/// use dtconf::settings::{LoaderSettings, SettingsValidator};
///
/// SettingsValidator::validate(&LoaderSettings::default()).unwrap();
///
/// let bad = LoaderSettings {
///     bundle_name: "../escape".to_string(),
///     ..Default::default()
/// };
/// assert!(SettingsValidator::validate(&bad).is_err());
/// ```
pub struct SettingsValidator;

impl SettingsValidator {
    /// Validates every field of `settings`.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first invalid field.
    pub fn validate(settings: &LoaderSettings) -> Result<()> {
        Self::validate_resource_name("bundle_name", &settings.bundle_name)?;
        Self::validate_resource_name("default_resource", &settings.default_resource)?;

        if !settings.default_resource.ends_with(".properties") {
            return Err(Error::Validation {
                field: "default_resource".into(),
                message: "Must end with '.properties'".into(),
            });
        }

        // Blank external directories are reported when used, not here.
        if let Some(dir) = &settings.fallback_dir {
            Self::validate_dir("fallback_dir", dir)?;
        }
        if let Some(dir) = &settings.defaults_dir {
            Self::validate_dir("defaults_dir", dir)?;
        }

        Ok(())
    }

    /// Resource names are looked up inside a directory, so they must be
    /// plain file names.
    fn validate_resource_name(field: &str, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot be empty or only whitespace".into(),
            });
        }

        if value.contains('\0') {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot contain null bytes".into(),
            });
        }

        if value.contains('/') || value.contains('\\') || value == ".." {
            return Err(Error::Validation {
                field: field.into(),
                message: format!("'{value}' must be a file name, not a path"),
            });
        }

        Ok(())
    }

    fn validate_dir(field: &str, dir: &Path) -> Result<()> {
        if dir.as_os_str().is_empty() {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot be an empty path".into(),
            });
        }
        Ok(())
    }
}
