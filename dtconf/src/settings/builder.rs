//! Builder resolving loader settings from every source.

use std::env;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::settings::environment::EnvironmentSettings;
use crate::settings::loader::SettingsLoader;
use crate::settings::merger::SettingsMerger;
use crate::settings::schema::{LoaderSettings, Settings};
use crate::settings::validator::SettingsValidator;

/// Resolves [`LoaderSettings`] from files, the environment and code.
///
/// Precedence, lowest to highest: built-in defaults, settings files,
/// environment variables, [`with_settings`](Self::with_settings).
///
/// # Examples
///
/// ```
/// use dtconf::settings::{Settings, SettingsBuilder};
///
/// let settings = SettingsBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_settings(Settings {
///         jstl: Some(true),
///         ..Default::default()
///     })
///     .build()
///     .unwrap();
///
/// assert!(settings.jstl);
/// assert_eq!(settings.bundle_name, "datatables");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SettingsBuilder {
    working_dir: Option<PathBuf>,
    user_dir: Option<PathBuf>,
    file: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Settings>,
}

impl SettingsBuilder {
    /// Creates a builder reading every source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the directory `dtconf.yaml` discovery starts from; the current
    /// directory by default.
    #[must_use]
    pub fn with_working_dir(mut self, dir: &Path) -> Self {
        self.working_dir = Some(dir.to_path_buf());
        self
    }

    /// Sets the directory holding the user `settings.yaml`.
    #[must_use]
    pub fn with_user_dir(mut self, dir: &Path) -> Self {
        self.user_dir = Some(dir.to_path_buf());
        self
    }

    /// Reads exactly this settings file instead of discovering files.
    #[must_use]
    pub fn with_file(mut self, path: &Path) -> Self {
        self.file = Some(path.to_path_buf());
        self
    }

    /// Skips settings file discovery. An explicit
    /// [`with_file`](Self::with_file) is still read.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignores environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Adds programmatic settings with the highest precedence.
    #[must_use]
    pub fn with_settings(mut self, settings: Settings) -> Self {
        match &mut self.overrides {
            Some(existing) => SettingsMerger::merge_into(existing, &settings),
            None => self.overrides = Some(settings),
        }
        self
    }

    /// Resolves and validates the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if a settings file cannot be read or parsed, an
    /// environment variable is invalid, or the result fails validation.
    pub fn build(self) -> Result<LoaderSettings> {
        let mut settings = match &self.file {
            Some(path) => SettingsLoader::load_file(path)?,
            None if self.skip_files => Settings::default(),
            None => {
                let working_dir = match &self.working_dir {
                    Some(dir) => dir.clone(),
                    None => env::current_dir()?,
                };
                SettingsMerger::merge(SettingsLoader::load_all(
                    &working_dir,
                    self.user_dir.as_deref(),
                )?)
            }
        };

        if !self.skip_env {
            EnvironmentSettings::apply_overrides(&mut settings)?;
        }

        if let Some(overrides) = &self.overrides {
            SettingsMerger::merge_into(&mut settings, overrides);
        }

        let resolved = LoaderSettings::from(settings);
        SettingsValidator::validate(&resolved)?;
        Ok(resolved)
    }
}
