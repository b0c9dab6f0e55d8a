//! Loading of default and user property sets.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use crate::error::{Error, Result};
use crate::locale::Locale;
use crate::properties::{self, PropertySet};
use crate::resource::{DirectoryResources, ResourceLocator, DEFAULT_RESOURCE};

/// Default base name of user bundles.
pub const DEFAULT_BUNDLE_NAME: &str = "datatables";

/// Loads the default configuration once and user bundles on demand.
///
/// User bundles are looked up, in order, in the external configuration
/// directory, the primary locator and the fallback locator. The first
/// locator holding any candidate file for the locale wins.
pub struct PropertySource {
    defaults_locator: Arc<dyn ResourceLocator>,
    default_resource: String,
    primary: Arc<dyn ResourceLocator>,
    fallback: Option<Arc<dyn ResourceLocator>>,
    configuration_dir: Option<PathBuf>,
    bundle_name: String,
    defaults: Mutex<Option<Arc<PropertySet>>>,
}

impl PropertySource {
    /// Creates a source reading defaults and bundles from `locator`.
    #[must_use]
    pub fn new(locator: Arc<dyn ResourceLocator>) -> Self {
        Self {
            defaults_locator: Arc::clone(&locator),
            default_resource: DEFAULT_RESOURCE.to_string(),
            primary: locator,
            fallback: None,
            configuration_dir: None,
            bundle_name: DEFAULT_BUNDLE_NAME.to_string(),
            defaults: Mutex::new(None),
        }
    }

    /// Reads the default configuration from a different locator.
    #[must_use]
    pub fn with_defaults_locator(mut self, locator: Arc<dyn ResourceLocator>) -> Self {
        self.defaults_locator = locator;
        self
    }

    /// Changes the name of the default configuration resource.
    #[must_use]
    pub fn with_default_resource(mut self, name: impl Into<String>) -> Self {
        self.default_resource = name.into();
        self
    }

    /// Adds a locator tried after the primary one.
    #[must_use]
    pub fn with_fallback(mut self, locator: Arc<dyn ResourceLocator>) -> Self {
        self.fallback = Some(locator);
        self
    }

    /// Sets the external bundle directory, tried before any locator.
    #[must_use]
    pub fn with_configuration_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.configuration_dir = dir;
        self
    }

    /// Changes the bundle base name.
    #[must_use]
    pub fn with_bundle_name(mut self, name: impl Into<String>) -> Self {
        self.bundle_name = name.into();
        self
    }

    /// The bundle base name.
    #[must_use]
    pub fn bundle_name(&self) -> &str {
        &self.bundle_name
    }

    /// Returns the default configuration, loading it on first call.
    ///
    /// The loaded set is cached for the lifetime of this source; concurrent
    /// first calls load it once.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigurationLoading`] if the resource is missing,
    /// unreadable or malformed. Nothing is cached in that case.
    pub fn load_default_configuration(&self) -> Result<Arc<PropertySet>> {
        let mut cached = self.defaults.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(defaults) = cached.as_ref() {
            return Ok(Arc::clone(defaults));
        }

        log::debug!("Loading default configuration...");

        let text = self
            .defaults_locator
            .read(&self.default_resource)
            .map_err(|e| Error::ConfigurationLoading {
                resource: self.default_resource.clone(),
                reason: e.to_string(),
            })?
            .ok_or_else(|| Error::ConfigurationLoading {
                resource: self.default_resource.clone(),
                reason: format!("not found in {}", self.defaults_locator.describe()),
            })?;

        let defaults = Arc::new(properties::parse(&text).map_err(|e| {
            Error::ConfigurationLoading {
                resource: self.default_resource.clone(),
                reason: e.to_string(),
            }
        })?);
        *cached = Some(Arc::clone(&defaults));

        log::debug!("Default configuration loaded ({} properties)", defaults.len());
        Ok(defaults)
    }

    /// Loads the user bundle for `locale`.
    ///
    /// Never fails: when no bundle is found anywhere, the result is empty and
    /// defaults apply.
    #[must_use]
    pub fn load_user_configuration(&self, locale: &Locale) -> PropertySet {
        if let Some(dir) = self.external_dir() {
            if let Some(found) = self.load_external(&dir, locale) {
                return found;
            }
        }

        if let Some(found) = self.load_bundle(self.primary.as_ref(), locale) {
            return found;
        }

        if let Some(fallback) = &self.fallback {
            if let Some(found) = self.load_bundle(fallback.as_ref(), locale) {
                return found;
            }
        }

        log::debug!("No custom configuration. Using default one.");
        PropertySet::new()
    }

    fn external_dir(&self) -> Option<PathBuf> {
        let dir = self.configuration_dir.as_ref()?;
        let text = dir.to_string_lossy();
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        Some(expand_home(Path::new(text)))
    }

    fn load_external(&self, dir: &Path, locale: &Locale) -> Option<PropertySet> {
        if !dir.is_dir() {
            log::warn!(
                "Wrong path to the externalized bundle: {} is not a directory",
                dir.display()
            );
            return None;
        }

        let found = self.load_bundle(&DirectoryResources::new(dir), locale);
        if found.is_none() {
            log::info!(
                "No *.properties file in {}. Trying the embedded resources...",
                dir.display()
            );
        }
        found
    }

    /// Reads every candidate of the bundle from `locator`, least specific
    /// first, so more specific files override less specific ones.
    fn load_bundle(&self, locator: &dyn ResourceLocator, locale: &Locale) -> Option<PropertySet> {
        let mut merged: Option<PropertySet> = None;

        for candidate in locale.bundle_candidates(&self.bundle_name) {
            let loaded = locator
                .read(&candidate)
                .and_then(|text| text.map(|text| properties::parse(&text)).transpose());
            match loaded {
                Ok(Some(found)) => {
                    log::debug!("Loaded {candidate} from {}", locator.describe());
                    merged.get_or_insert_with(PropertySet::new).overlay(&found);
                }
                Ok(None) => {}
                Err(e) => {
                    log::warn!("Skipping {candidate} from {}: {e}", locator.describe());
                }
            }
        }

        merged
    }
}

fn expand_home(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => home::home_dir().map_or_else(|| path.to_path_buf(), |home| home.join(rest)),
        Err(_) => path.to_path_buf(),
    }
}
