//! Settings of the configuration loader.
//!
//! Settings decide where bundles are read from, not what the tables look
//! like. They are layered from several sources:
//!
//! 1. Programmatic overrides (via `SettingsBuilder::with_settings`)
//! 2. Environment variables (`DANDELION_DT_CONFIGURATION`, `DTCONF_*`)
//! 3. Project settings (nearest `dtconf.yaml`)
//! 4. User settings (`~/.dtconf/settings.yaml`)
//! 5. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use dtconf::configuration::StandardConfigurationLoader;
//! use dtconf::settings::SettingsBuilder;
//!
//! let settings = SettingsBuilder::new().build().unwrap();
//! let loader = StandardConfigurationLoader::from_settings(&settings);
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use builder::SettingsBuilder;
pub use environment::{EnvironmentSettings, CONFIGURATION_DIR_ENV};
pub use loader::{SettingsLoader, SettingsSource};
pub use merger::SettingsMerger;
pub use schema::{LoaderSettings, Settings};
pub use validator::SettingsValidator;
