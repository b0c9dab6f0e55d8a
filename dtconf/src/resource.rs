//! Resource locators: where default and user `.properties` text comes from.
//!
//! A [`ResourceLocator`] plays the role of a search root. The loader asks it
//! for a resource by file name and gets the UTF-8 text back, or `None` when
//! the locator does not have it.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// File name of the bundled default configuration.
pub const DEFAULT_RESOURCE: &str = "datatables-default.properties";

const BUILTIN_DEFAULTS: &str = include_str!("../resources/datatables-default.properties");

/// A source of named text resources.
#[cfg_attr(test, mockall::automock)]
pub trait ResourceLocator: Send + Sync {
    /// Short description used in log messages.
    fn describe(&self) -> String;

    /// Reads the resource called `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if the resource exists but cannot be read.
    fn read(&self, name: &str) -> Result<Option<String>>;
}

/// Resources compiled into the binary or registered in memory.
///
/// # Examples
///
/// ```
/// use dtconf::resource::{EmbeddedResources, ResourceLocator, DEFAULT_RESOURCE};
///
/// let resources = EmbeddedResources::builtin()
///     .with_resource("datatables.properties", "global.css.class=display");
/// assert!(resources.read(DEFAULT_RESOURCE).unwrap().is_some());
/// assert!(resources.read("datatables.properties").unwrap().is_some());
/// assert!(resources.read("missing.properties").unwrap().is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct EmbeddedResources {
    resources: BTreeMap<String, String>,
}

impl EmbeddedResources {
    /// An empty resource set.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The resource set holding the bundled default configuration.
    #[must_use]
    pub fn builtin() -> Self {
        Self::empty().with_resource(DEFAULT_RESOURCE, BUILTIN_DEFAULTS)
    }

    /// Registers (or replaces) a resource.
    #[must_use]
    pub fn with_resource(mut self, name: impl Into<String>, content: impl Into<String>) -> Self {
        self.resources.insert(name.into(), content.into());
        self
    }

    /// The bundled default configuration text.
    #[must_use]
    pub fn builtin_defaults() -> &'static str {
        BUILTIN_DEFAULTS
    }
}

impl ResourceLocator for EmbeddedResources {
    fn describe(&self) -> String {
        "embedded resources".to_string()
    }

    fn read(&self, name: &str) -> Result<Option<String>> {
        Ok(self.resources.get(name).cloned())
    }
}

/// Resources read from files in a directory.
#[derive(Debug, Clone)]
pub struct DirectoryResources {
    root: PathBuf,
}

impl DirectoryResources {
    /// Creates a locator rooted at `root`. The directory is not checked.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory this locator reads from.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ResourceLocator for DirectoryResources {
    fn describe(&self) -> String {
        format!("directory {}", self.root.display())
    }

    fn read(&self, name: &str) -> Result<Option<String>> {
        let path = self.root.join(name);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::InvalidPath {
                path,
                reason: format!("failed to read resource: {e}"),
            }),
        }
    }
}
