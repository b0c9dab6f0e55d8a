#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # dtconf
//!
//! A library for resolving data-table configurations.
//!
//! Table options are read from a bundled set of defaults and from
//! locale-specific user bundles (`datatables[_lang[_COUNTRY[_variant]]].properties`).
//! User keys are prefixed with a group name; every group gets its own
//! [`TableConfiguration`], built from the defaults, the `global` group's
//! overrides and the group's own overrides.
//!
//! ## Core Types
//!
//! - [`StandardConfigurationLoader`]: runs a full resolution pass
//! - [`TableConfiguration`] and [`ConfigurationKey`]: the resolved options
//! - [`PropertySet`]: parsed `.properties` content
//! - [`Locale`] and [`RequestContext`]: what a configuration is resolved for
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use std::sync::Arc;
//! use dtconf::configuration::{ConfigurationLoader, PropertySource, StandardConfigurationLoader};
//! use dtconf::resource::EmbeddedResources;
//! use dtconf::{ConfigurationKey, Locale, RequestContext};
//!
//! let resources = EmbeddedResources::builtin().with_resource(
//!     "datatables_fr.properties",
//!     "global.ajax.pipesize=10\nreports.css.class=compact\n",
//! );
//! let loader = StandardConfigurationLoader::new(PropertySource::new(Arc::new(resources)));
//!
//! let context = RequestContext::new(Locale::parse("fr_FR").unwrap());
//! let resolution = loader.resolve(&context).unwrap();
//!
//! let reports = resolution.configuration("reports").unwrap();
//! assert_eq!(reports.get(ConfigurationKey::CssClass), Some("compact"));
//! assert_eq!(reports.get_u32(ConfigurationKey::AjaxPipeSize).unwrap(), Some(10));
//! ```

pub mod configuration;
pub mod error;
pub mod locale;
pub mod logging;
pub mod output;
pub mod properties;
pub mod resource;
pub mod settings;

// Re-export key types at crate root for convenience
pub use configuration::{
    ConfigurationKey, ConfigurationLoader, ExportType, RequestContext, Resolution,
    StandardConfigurationLoader, TableConfiguration, UnknownProperty,
};
pub use error::{Error, Result};
pub use locale::Locale;
pub use logging::{init_logger, LogLevel, Logger};
pub use properties::PropertySet;
pub use settings::{LoaderSettings, SettingsBuilder};
