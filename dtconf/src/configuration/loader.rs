//! Orchestration of a full resolution pass.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::sync::{Arc, OnceLock};

use serde::Serialize;

use crate::configuration::groups::{GroupResolver, DEFAULT_GROUP_NAME, LOCALE_RESOLVER_KEY};
use crate::configuration::mapper::UnknownProperty;
use crate::configuration::merger::ConfigurationMerger;
use crate::configuration::source::PropertySource;
use crate::configuration::table::{RequestContext, TableConfiguration};
use crate::configuration::template::TemplateEngineAdapter;
use crate::error::Result;
use crate::locale::Locale;
use crate::properties::PropertySet;
use crate::resource::{DirectoryResources, EmbeddedResources, ResourceLocator};
use crate::settings::{LoaderSettings, SettingsBuilder};

/// Everything a resolution pass produces.
#[derive(Debug, Clone, Serialize)]
pub struct Resolution {
    /// Groups found in the user bundle, default group included.
    pub groups: BTreeSet<String>,
    /// One configuration per group.
    pub configurations: BTreeMap<String, TableConfiguration>,
    /// Properties dropped because their option is unknown.
    pub unknown_properties: Vec<UnknownProperty>,
    /// The locale resolver class, user value first, then default.
    pub locale_resolver: Option<String>,
}

impl Resolution {
    /// The configuration of `group`, if resolved.
    #[must_use]
    pub fn configuration(&self, group: &str) -> Option<&TableConfiguration> {
        self.configurations.get(group)
    }

    /// The configuration of the default group.
    #[must_use]
    pub fn default_configuration(&self) -> Option<&TableConfiguration> {
        self.configuration(DEFAULT_GROUP_NAME)
    }
}

/// The steps of configuration resolution.
///
/// Implementations are stateless between calls: every intermediate result is
/// passed in and returned explicitly.
pub trait ConfigurationLoader: Send + Sync {
    /// Returns the default properties, loading them on first use.
    ///
    /// # Errors
    ///
    /// Returns an error if the default resource cannot be loaded.
    fn load_default_configuration(&self) -> Result<Arc<PropertySet>>;

    /// Loads the user properties for `locale`; empty when none exist.
    fn load_user_configuration(&self, locale: &Locale) -> PropertySet;

    /// Computes the groups present in `user_properties`.
    fn resolve_groups(&self, user_properties: &PropertySet) -> BTreeSet<String>;

    /// Resolves one configuration per group into `output`.
    ///
    /// # Errors
    ///
    /// Returns an error if the default properties cannot be loaded.
    fn resolve_configurations(
        &self,
        output: &mut BTreeMap<String, TableConfiguration>,
        groups: &BTreeSet<String>,
        user_properties: &PropertySet,
        context: &RequestContext,
    ) -> Result<Vec<UnknownProperty>>;

    /// Runs a full pass for the request's locale.
    ///
    /// # Errors
    ///
    /// Returns an error if the default properties cannot be loaded.
    fn resolve(&self, context: &RequestContext) -> Result<Resolution> {
        let defaults = self.load_default_configuration()?;
        let user = self.load_user_configuration(&context.locale);
        let groups = self.resolve_groups(&user);

        let mut configurations = BTreeMap::new();
        let unknown_properties =
            self.resolve_configurations(&mut configurations, &groups, &user, context)?;

        Ok(Resolution {
            locale_resolver: locale_resolver(&defaults, &user),
            groups,
            configurations,
            unknown_properties,
        })
    }
}

/// The standard loader: bundled defaults, locale bundles, JSTL shim.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use dtconf::configuration::{ConfigurationLoader, PropertySource, StandardConfigurationLoader};
/// use dtconf::resource::EmbeddedResources;
/// use dtconf::{ConfigurationKey, RequestContext};
///
/// let resources = EmbeddedResources::builtin()
///     .with_resource("datatables.properties", "groupA.css.class=compact\n");
/// let loader = StandardConfigurationLoader::new(PropertySource::new(Arc::new(resources)));
///
/// let resolution = loader.resolve(&RequestContext::default()).unwrap();
/// assert_eq!(resolution.groups.len(), 2);
/// assert_eq!(
///     resolution.configuration("groupA").unwrap().get(ConfigurationKey::CssClass),
///     Some("compact")
/// );
/// ```
pub struct StandardConfigurationLoader {
    source: PropertySource,
    adapter: TemplateEngineAdapter,
}

impl StandardConfigurationLoader {
    /// Creates a loader over `source` with the template shim disabled.
    #[must_use]
    pub fn new(source: PropertySource) -> Self {
        Self {
            source,
            adapter: TemplateEngineAdapter::default(),
        }
    }

    /// Replaces the template-engine adapter.
    #[must_use]
    pub fn with_template_adapter(mut self, adapter: TemplateEngineAdapter) -> Self {
        self.adapter = adapter;
        self
    }

    /// Builds a loader from resolved settings.
    ///
    /// Bundles are read from the external directory, then the embedded
    /// resources, then the fallback directory.
    #[must_use]
    pub fn from_settings(settings: &LoaderSettings) -> Self {
        let primary: Arc<dyn ResourceLocator> = Arc::new(EmbeddedResources::builtin());

        let mut source = PropertySource::new(primary)
            .with_default_resource(settings.default_resource.clone())
            .with_bundle_name(settings.bundle_name.clone())
            .with_configuration_dir(settings.configuration_dir.clone());

        if let Some(dir) = &settings.defaults_dir {
            source = source.with_defaults_locator(directory(dir));
        }
        if let Some(dir) = &settings.fallback_dir {
            source = source.with_fallback(directory(dir));
        }

        Self::new(source).with_template_adapter(TemplateEngineAdapter::new(settings.jstl))
    }

    /// The process-wide loader, configured from the environment.
    ///
    /// Its default properties are loaded at most once per process.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment holds invalid settings.
    pub fn shared() -> Result<&'static Self> {
        static SHARED: OnceLock<StandardConfigurationLoader> = OnceLock::new();

        if let Some(loader) = SHARED.get() {
            return Ok(loader);
        }

        let settings = SettingsBuilder::new().skip_files().build()?;
        Ok(SHARED.get_or_init(|| Self::from_settings(&settings)))
    }

    /// The underlying property source.
    #[must_use]
    pub fn source(&self) -> &PropertySource {
        &self.source
    }

    /// The template-engine adapter in use.
    #[must_use]
    pub fn adapter(&self) -> TemplateEngineAdapter {
        self.adapter
    }
}

impl ConfigurationLoader for StandardConfigurationLoader {
    fn load_default_configuration(&self) -> Result<Arc<PropertySet>> {
        self.source.load_default_configuration()
    }

    fn load_user_configuration(&self, locale: &Locale) -> PropertySet {
        self.source.load_user_configuration(locale)
    }

    fn resolve_groups(&self, user_properties: &PropertySet) -> BTreeSet<String> {
        log::debug!("Resolving groups...");
        GroupResolver::resolve_groups(user_properties)
    }

    fn resolve_configurations(
        &self,
        output: &mut BTreeMap<String, TableConfiguration>,
        groups: &BTreeSet<String>,
        user_properties: &PropertySet,
        context: &RequestContext,
    ) -> Result<Vec<UnknownProperty>> {
        let defaults = self.load_default_configuration()?;

        let mut user = user_properties.clone();
        self.adapter.apply(&mut user);

        Ok(ConfigurationMerger::resolve_configurations(
            output, groups, &defaults, &user, context,
        ))
    }
}

/// The configured locale resolver: the user's `global` value when set,
/// otherwise the default one.
#[must_use]
pub fn locale_resolver(defaults: &PropertySet, user: &PropertySet) -> Option<String> {
    let key = format!("{DEFAULT_GROUP_NAME}.{LOCALE_RESOLVER_KEY}");
    [user, defaults]
        .into_iter()
        .filter_map(|set| set.get(&key))
        .map(str::trim)
        .find(|value| !value.is_empty())
        .map(str::to_string)
}

fn directory(dir: &Path) -> Arc<dyn ResourceLocator> {
    Arc::new(DirectoryResources::new(dir))
}
