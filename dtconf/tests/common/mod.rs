//! Common test utilities for integration tests.
//!
//! This module provides fixture builders for bundle directories and an
//! environment guard for tests touching process-global variables.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use dtconf::configuration::{PropertySource, StandardConfigurationLoader, TemplateEngineAdapter};
use dtconf::resource::{DirectoryResources, EmbeddedResources};
use tempfile::TempDir;

/// Builder for a temporary directory of `.properties` bundles.
///
/// # Examples
///
/// ```no_run
/// # use common::BundleFixture;
/// let fixture = BundleFixture::new()
///     .with_bundle("datatables.properties", "groupA.css.class=compact")
///     .build();
/// ```
#[allow(dead_code)]
pub struct BundleFixture {
    files: Vec<(String, String)>,
}

#[allow(dead_code)]
impl BundleFixture {
    /// Creates an empty fixture.
    pub fn new() -> Self {
        Self { files: Vec::new() }
    }

    /// Adds a file to the fixture directory.
    pub fn with_bundle(mut self, name: &str, content: &str) -> Self {
        self.files.push((name.to_string(), content.to_string()));
        self
    }

    /// Writes the files into a new temporary directory.
    pub fn build(self) -> TempDir {
        let dir = tempfile::tempdir().expect("create temp dir");
        for (name, content) in self.files {
            fs::write(dir.path().join(name), content).expect("write bundle");
        }
        dir
    }
}

/// A loader reading user bundles from `dir` on top of the builtin defaults.
#[allow(dead_code)]
pub fn directory_loader(dir: &Path) -> StandardConfigurationLoader {
    let source = PropertySource::new(Arc::new(EmbeddedResources::builtin()))
        .with_configuration_dir(Some(dir.to_path_buf()));
    StandardConfigurationLoader::new(source)
}

/// A loader with the given in-memory user bundle.
#[allow(dead_code)]
pub fn bundle_loader(name: &str, content: &str, jstl: bool) -> StandardConfigurationLoader {
    let resources = EmbeddedResources::builtin().with_resource(name, content);
    StandardConfigurationLoader::new(PropertySource::new(Arc::new(resources)))
        .with_template_adapter(TemplateEngineAdapter::new(jstl))
}

/// A loader whose bundles only come from the fallback directory `dir`.
#[allow(dead_code)]
pub fn fallback_loader(dir: &Path) -> StandardConfigurationLoader {
    let source = PropertySource::new(Arc::new(EmbeddedResources::builtin()))
        .with_fallback(Arc::new(DirectoryResources::new(dir)));
    StandardConfigurationLoader::new(source)
}

/// Path of a file inside a fixture directory.
#[allow(dead_code)]
pub fn fixture_file(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}

/// RAII guard for setting and restoring environment variables.
///
/// Tests using it must be `#[serial]`.
#[allow(dead_code)]
pub struct EnvGuard {
    key: String,
    old_value: Option<String>,
}

#[allow(dead_code)]
impl EnvGuard {
    /// Sets `key` to `value` until the guard is dropped.
    pub fn new(key: &str, value: &str) -> Self {
        let old_value = env::var(key).ok();
        env::set_var(key, value);
        Self {
            key: key.to_string(),
            old_value,
        }
    }

    /// Removes `key` until the guard is dropped.
    pub fn remove(key: &str) -> Self {
        let old_value = env::var(key).ok();
        env::remove_var(key);
        Self {
            key: key.to_string(),
            old_value,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(val) => env::set_var(&self.key, val),
            None => env::remove_var(&self.key),
        }
    }
}

/// Clears every variable the settings layer reads.
#[allow(dead_code)]
pub fn clear_dtconf_env_vars() -> Vec<EnvGuard> {
    [
        "DANDELION_DT_CONFIGURATION",
        "DTCONF_FALLBACK_DIR",
        "DTCONF_DEFAULTS_DIR",
        "DTCONF_BUNDLE_NAME",
        "DTCONF_DEFAULT_RESOURCE",
        "DTCONF_JSTL",
    ]
    .iter()
    .map(|key| EnvGuard::remove(key))
    .collect()
}
