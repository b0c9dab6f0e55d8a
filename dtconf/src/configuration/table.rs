//! Resolved per-group table configuration.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::configuration::key::ConfigurationKey;
use crate::error::{Error, Result};
use crate::locale::Locale;

/// The request a configuration is resolved for.
///
/// Consumers use it for locale-dependent rendering and to derive default
/// export names from the request URI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContext {
    /// Locale of the request.
    pub locale: Locale,
    /// Path of the requested page, if known.
    pub request_uri: Option<String>,
}

impl RequestContext {
    /// Creates a context for `locale` without a request URI.
    #[must_use]
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            request_uri: None,
        }
    }

    /// Sets the request URI.
    #[must_use]
    pub fn with_request_uri(mut self, uri: impl Into<String>) -> Self {
        self.request_uri = Some(uri.into());
        self
    }
}

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportType {
    /// Comma separated values.
    Csv,
    /// XML document.
    Xml,
    /// Legacy Excel workbook.
    Xls,
    /// Excel workbook.
    Xlsx,
    /// PDF document.
    Pdf,
}

impl ExportType {
    /// The option naming the default implementation for this format.
    #[must_use]
    pub const fn default_class_key(self) -> ConfigurationKey {
        match self {
            Self::Csv => ConfigurationKey::ExportCsvDefaultClass,
            Self::Xml => ConfigurationKey::ExportXmlDefaultClass,
            Self::Xls => ConfigurationKey::ExportXlsDefaultClass,
            Self::Xlsx => ConfigurationKey::ExportXlsxDefaultClass,
            Self::Pdf => ConfigurationKey::ExportPdfDefaultClass,
        }
    }
}

impl fmt::Display for ExportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => write!(f, "csv"),
            Self::Xml => write!(f, "xml"),
            Self::Xls => write!(f, "xls"),
            Self::Xlsx => write!(f, "xlsx"),
            Self::Pdf => write!(f, "pdf"),
        }
    }
}

impl FromStr for ExportType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "xml" => Ok(Self::Xml),
            "xls" => Ok(Self::Xls),
            "xlsx" => Ok(Self::Xlsx),
            "pdf" => Ok(Self::Pdf),
            other => Err(format!("unknown export type: {other}")),
        }
    }
}

/// The configuration of one table group.
///
/// Values are stored as the raw strings read from properties files; the
/// typed accessors coerce on demand. Blank values mean "not configured".
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use dtconf::{ConfigurationKey, RequestContext, TableConfiguration};
///
/// let mut values = BTreeMap::new();
/// values.insert(ConfigurationKey::AjaxPipeSize, "5".to_string());
/// values.insert(ConfigurationKey::FeatureInfo, String::new());
///
/// let conf = TableConfiguration::new(values, RequestContext::default());
/// assert_eq!(conf.get_u32(ConfigurationKey::AjaxPipeSize).unwrap(), Some(5));
/// assert_eq!(conf.get(ConfigurationKey::FeatureInfo), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfiguration {
    values: BTreeMap<ConfigurationKey, String>,
    context: RequestContext,
}

impl TableConfiguration {
    /// Builds a configuration from staged values and the request context.
    #[must_use]
    pub fn new(values: BTreeMap<ConfigurationKey, String>, context: RequestContext) -> Self {
        Self { values, context }
    }

    /// The request this configuration was resolved for.
    #[must_use]
    pub fn context(&self) -> &RequestContext {
        &self.context
    }

    /// All stored values, blank ones included.
    #[must_use]
    pub fn values(&self) -> &BTreeMap<ConfigurationKey, String> {
        &self.values
    }

    /// Number of stored options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no option is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns true if `key` is stored, even with a blank value.
    #[must_use]
    pub fn contains(&self, key: ConfigurationKey) -> bool {
        self.values.contains_key(&key)
    }

    /// The stored value, blank or not.
    #[must_use]
    pub fn raw(&self, key: ConfigurationKey) -> Option<&str> {
        self.values.get(&key).map(String::as_str)
    }

    /// The trimmed value, or `None` when missing or blank.
    #[must_use]
    pub fn get(&self, key: ConfigurationKey) -> Option<&str> {
        self.raw(key).map(str::trim).filter(|v| !v.is_empty())
    }

    /// Overrides a value programmatically.
    pub fn set(&mut self, key: ConfigurationKey, value: impl Into<String>) -> &mut Self {
        self.values.insert(key, value.into());
        self
    }

    /// Reads a boolean option (`true`/`false`, case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidValue`] for any other non-blank value.
    pub fn get_bool(&self, key: ConfigurationKey) -> Result<Option<bool>> {
        self.get(key)
            .map(|value| match value.to_lowercase().as_str() {
                "true" => Ok(true),
                "false" => Ok(false),
                _ => Err(invalid(key, value, "true or false")),
            })
            .transpose()
    }

    /// Reads an unsigned integer option.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidValue`] when the value is not a `u32`.
    pub fn get_u32(&self, key: ConfigurationKey) -> Result<Option<u32>> {
        self.get(key)
            .map(|value| {
                value
                    .parse()
                    .map_err(|_| invalid(key, value, "an unsigned integer"))
            })
            .transpose()
    }

    /// Reads a comma separated option; empty items are dropped.
    #[must_use]
    pub fn get_list(&self, key: ConfigurationKey) -> Vec<&str> {
        self.get(key)
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|item| !item.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The export formats listed in `export.types`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidValue`] when a listed format is unknown.
    pub fn export_types(&self) -> Result<Vec<ExportType>> {
        self.get_list(ConfigurationKey::ExportTypes)
            .into_iter()
            .map(|item| {
                item.parse()
                    .map_err(|_| invalid(ConfigurationKey::ExportTypes, item, "csv, xml, xls, xlsx or pdf"))
            })
            .collect()
    }

    /// The default implementation class configured for an export format.
    #[must_use]
    pub fn export_class(&self, export_type: ExportType) -> Option<&str> {
        self.get(export_type.default_class_key())
    }
}

fn invalid(key: ConfigurationKey, value: &str, expected: &str) -> Error {
    Error::InvalidValue {
        key: key.name().to_string(),
        value: value.to_string(),
        expected: expected.to_string(),
    }
}
