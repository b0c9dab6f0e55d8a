//! Settings file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::settings::schema::Settings;

/// File name of project settings, searched from the working directory up.
pub const PROJECT_SETTINGS_FILE: &str = "dtconf.yaml";

/// Directory, under the home directory, holding the user settings.
pub const USER_SETTINGS_DIR: &str = ".dtconf";

/// File name of the user settings.
pub const USER_SETTINGS_FILE: &str = "settings.yaml";

/// A settings file with its precedence level.
///
/// Lower precedence values are overridden by higher ones.
#[derive(Debug, Clone)]
pub struct SettingsSource {
    /// Path of the settings file.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed settings.
    pub settings: Settings,
}

/// Loads settings files.
///
/// # Examples
///
/// ```no_run
/// use dtconf::settings::SettingsLoader;
/// use std::path::Path;
///
/// let sources = SettingsLoader::load_all(Path::new("."), None).unwrap();
/// println!("Found {} settings files", sources.len());
/// ```
pub struct SettingsLoader;

impl SettingsLoader {
    /// Discovers and loads every settings file.
    ///
    /// Searches for:
    /// 1. `settings.yaml` in `user_dir`, or `~/.dtconf` when `None` (precedence 1)
    /// 2. The nearest `dtconf.yaml` walking up from `working_dir` (precedence 2)
    ///
    /// # Errors
    ///
    /// Returns an error if a settings file exists but cannot be read or
    /// parsed.
    pub fn load_all(working_dir: &Path, user_dir: Option<&Path>) -> Result<Vec<SettingsSource>> {
        let mut sources = Vec::new();

        let user_dir = user_dir
            .map(Path::to_path_buf)
            .or_else(|| home::home_dir().map(|home| home.join(USER_SETTINGS_DIR)));
        if let Some(dir) = user_dir {
            let path = dir.join(USER_SETTINGS_FILE);
            if path.is_file() {
                let settings = Self::load_file(&path)?;
                sources.push(SettingsSource {
                    path,
                    precedence: 1,
                    settings,
                });
            }
        }

        if let Some(path) = Self::discover(working_dir) {
            let settings = Self::load_file(&path)?;
            sources.push(SettingsSource {
                path,
                precedence: 2,
                settings,
            });
        }

        sources.sort_by_key(|source| source.precedence);
        Ok(sources)
    }

    /// The nearest `dtconf.yaml` in `start_dir` or one of its ancestors.
    #[must_use]
    pub fn discover(start_dir: &Path) -> Option<PathBuf> {
        start_dir
            .ancestors()
            .map(|dir| dir.join(PROJECT_SETTINGS_FILE))
            .find(|path| path.is_file())
    }

    /// Loads and parses a YAML settings file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Settings> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read settings file: {e}"),
        })?;

        log::debug!("Loading settings from {}", path.display());

        // An empty file is valid and sets nothing.
        if contents.trim().is_empty() {
            return Ok(Settings::default());
        }

        serde_yaml::from_str(&contents).map_err(|e| Error::Validation {
            field: format!("{}", path.display()),
            message: format!("Invalid YAML: {e}"),
        })
    }
}
