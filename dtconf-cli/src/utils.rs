//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including settings loading, loader construction and locale parsing.

use crate::error::CliError;
use dtconf::settings::{LoaderSettings, Settings, SettingsBuilder};
use dtconf::{Locale, RequestContext, StandardConfigurationLoader};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
#[allow(dead_code)] // verbose/quiet are consumed by the logger in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Explicit settings file.
    pub settings: Option<PathBuf>,

    /// Directory searched first for user bundles.
    pub configuration_dir: Option<PathBuf>,

    /// Resolve as if the JSP tag library were in use.
    pub jstl: bool,
}

/// Load loader settings.
///
/// Settings are merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Settings files
/// 4. Built-in defaults (lowest priority)
pub fn load_settings(global: &GlobalOptions) -> Result<LoaderSettings, CliError> {
    let mut builder = SettingsBuilder::new();

    if let Some(path) = &global.settings {
        builder = builder.with_file(path);
    }

    let overrides = Settings {
        configuration_dir: global.configuration_dir.clone(),
        jstl: global.jstl.then_some(true),
        ..Default::default()
    };

    builder
        .with_settings(overrides)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Build a configuration loader from the global options.
pub fn build_loader(global: &GlobalOptions) -> Result<StandardConfigurationLoader, CliError> {
    let settings = load_settings(global)?;
    log::debug!("Loader settings: {settings:?}");
    Ok(StandardConfigurationLoader::from_settings(&settings))
}

/// Parse an optional locale tag; the root locale when absent.
pub fn parse_locale(tag: Option<&str>) -> Result<Locale, CliError> {
    match tag {
        Some(tag) => {
            Locale::parse(tag).map_err(|e| CliError::InvalidArguments(e.to_string()))
        }
        None => Ok(Locale::root()),
    }
}

/// Build the request context for an optional locale tag.
pub fn request_context(tag: Option<&str>) -> Result<RequestContext, CliError> {
    Ok(RequestContext::new(parse_locale(tag)?))
}
