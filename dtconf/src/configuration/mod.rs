//! Table configuration resolution.
//!
//! A resolution pass turns the bundled default properties and a locale's
//! user bundle into one [`TableConfiguration`] per group:
//!
//! 1. [`PropertySource`] loads the defaults (once) and the user bundle
//! 2. [`GroupResolver`] finds the groups named in the user bundle
//! 3. [`TemplateEngineAdapter`] fills in the message resolver when JSTL is used
//! 4. [`ConfigurationMerger`] layers defaults, `global` overrides and group
//!    overrides
//! 5. [`ConfigurationMapper`] maps option names to [`ConfigurationKey`]s
//!
//! [`StandardConfigurationLoader`] runs the whole pass.
//!
//! # Examples
//!
//! ```no_run
//! use dtconf::configuration::{ConfigurationLoader, StandardConfigurationLoader};
//! use dtconf::{Locale, RequestContext};
//!
//! let loader = StandardConfigurationLoader::shared().unwrap();
//! let context = RequestContext::new(Locale::parse("fr_FR").unwrap());
//! let resolution = loader.resolve(&context).unwrap();
//!
//! for (group, configuration) in &resolution.configurations {
//!     println!("{group}: {} options", configuration.len());
//! }
//! ```

pub mod groups;
pub mod key;
pub mod loader;
pub mod mapper;
pub mod merger;
pub mod source;
pub mod table;
pub mod template;

#[cfg(test)]
mod proptests;

pub use groups::{GroupResolver, DEFAULT_GROUP_NAME, LOCALE_RESOLVER_KEY};
pub use key::ConfigurationKey;
pub use loader::{locale_resolver, ConfigurationLoader, Resolution, StandardConfigurationLoader};
pub use mapper::{ConfigurationMapper, MappedGroup, UnknownProperty};
pub use merger::ConfigurationMerger;
pub use source::{PropertySource, DEFAULT_BUNDLE_NAME};
pub use table::{ExportType, RequestContext, TableConfiguration};
pub use template::{TemplateEngineAdapter, JSTL_MESSAGE_RESOLVER};
