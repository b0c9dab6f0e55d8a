//! Locale identifiers and resource-bundle candidate names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A locale made of a language, an optional country and an optional variant.
///
/// The root locale has an empty language and selects only the base bundle.
///
/// # Examples
///
/// ```
/// use dtconf::Locale;
///
/// let locale: Locale = "fr-fr".parse().unwrap();
/// assert_eq!(locale.language(), "fr");
/// assert_eq!(locale.country(), Some("FR"));
/// assert_eq!(locale.to_string(), "fr_FR");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale {
    language: String,
    country: Option<String>,
    variant: Option<String>,
}

impl Locale {
    /// The root locale.
    #[must_use]
    pub const fn root() -> Self {
        Self {
            language: String::new(),
            country: None,
            variant: None,
        }
    }

    /// Parses a locale tag such as `en`, `en_US`, `en-US` or `en_US_POSIX`.
    ///
    /// An empty tag yields the root locale.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLocale`] when a component contains characters
    /// other than ASCII letters and digits, or when there are more than three
    /// components.
    pub fn parse(tag: &str) -> Result<Self> {
        let tag = tag.trim();
        if tag.is_empty() {
            return Ok(Self::root());
        }

        let parts: Vec<&str> = tag.split(['_', '-']).collect();
        if parts.len() > 3 {
            return Err(Error::InvalidLocale {
                value: tag.to_string(),
                reason: "expected at most language, country and variant".to_string(),
            });
        }

        let invalid = |reason: &str| Error::InvalidLocale {
            value: tag.to_string(),
            reason: reason.to_string(),
        };

        let language = parts[0];
        if language.is_empty() || !language.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(invalid("language must be alphabetic"));
        }

        let country = match parts.get(1) {
            Some(c) if c.chars().all(|ch| ch.is_ascii_alphanumeric()) => {
                (!c.is_empty()).then(|| c.to_ascii_uppercase())
            }
            Some(_) => return Err(invalid("country must be alphanumeric")),
            None => None,
        };

        let variant = match parts.get(2) {
            Some(v) if !v.is_empty() && v.chars().all(|ch| ch.is_ascii_alphanumeric()) => {
                Some((*v).to_string())
            }
            Some(_) => return Err(invalid("variant must be alphanumeric")),
            None => None,
        };

        Ok(Self {
            language: language.to_ascii_lowercase(),
            country,
            variant,
        })
    }

    /// The language code, empty for the root locale.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// The country code, uppercased.
    #[must_use]
    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    /// The variant.
    #[must_use]
    pub fn variant(&self) -> Option<&str> {
        self.variant.as_deref()
    }

    /// Returns true for the root locale.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.language.is_empty()
    }

    /// Bundle file names to look up for `base_name`, least specific first.
    ///
    /// # Examples
    ///
    /// ```
    /// use dtconf::Locale;
    ///
    /// let locale = Locale::parse("fr_FR").unwrap();
    /// assert_eq!(
    ///     locale.bundle_candidates("datatables"),
    ///     vec![
    ///         "datatables.properties",
    ///         "datatables_fr.properties",
    ///         "datatables_fr_FR.properties",
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn bundle_candidates(&self, base_name: &str) -> Vec<String> {
        let mut suffixes = vec![String::new()];

        if !self.is_root() {
            let mut suffix = format!("_{}", self.language);
            suffixes.push(suffix.clone());

            // A variant without a country still yields `lang__variant`.
            if let Some(country) = &self.country {
                suffix.push('_');
                suffix.push_str(country);
                suffixes.push(suffix.clone());
            } else if self.variant.is_some() {
                suffix.push('_');
            }

            if let Some(variant) = &self.variant {
                suffix.push('_');
                suffix.push_str(variant);
                suffixes.push(suffix);
            }
        }

        suffixes
            .into_iter()
            .map(|suffix| format!("{base_name}{suffix}.properties"))
            .collect()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.language)?;
        if let Some(country) = &self.country {
            write!(f, "_{country}")?;
        }
        if let Some(variant) = &self.variant {
            if self.country.is_none() {
                f.write_str("_")?;
            }
            write!(f, "_{variant}")?;
        }
        Ok(())
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Locale {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_language_only() {
        let locale = Locale::parse("EN").unwrap();
        assert_eq!(locale.language(), "en");
        assert_eq!(locale.country(), None);
        assert_eq!(locale.to_string(), "en");
    }

    #[test]
    fn test_parse_with_variant() {
        let locale = Locale::parse("en_us_POSIX").unwrap();
        assert_eq!(locale.country(), Some("US"));
        assert_eq!(locale.variant(), Some("POSIX"));
        assert_eq!(locale.to_string(), "en_US_POSIX");
    }

    #[test]
    fn test_parse_empty_is_root() {
        let locale = Locale::parse("  ").unwrap();
        assert!(locale.is_root());
        assert_eq!(locale, Locale::root());
        assert_eq!(locale.to_string(), "");
    }

    #[test]
    fn test_parse_rejects_bad_tags() {
        assert!(Locale::parse("e$").is_err());
        assert!(Locale::parse("_FR").is_err());
        assert!(Locale::parse("fr_F!").is_err());
        assert!(Locale::parse("a_b_c_d").is_err());
    }

    #[test]
    fn test_root_candidates() {
        assert_eq!(
            Locale::root().bundle_candidates("datatables"),
            vec!["datatables.properties"]
        );
    }

    #[test]
    fn test_full_candidates() {
        let locale = Locale::parse("en_US_POSIX").unwrap();
        assert_eq!(
            locale.bundle_candidates("b"),
            vec![
                "b.properties",
                "b_en.properties",
                "b_en_US.properties",
                "b_en_US_POSIX.properties",
            ]
        );
    }

    #[test]
    fn test_variant_without_country() {
        let locale = Locale::parse("de__old").unwrap();
        assert_eq!(locale.country(), None);
        assert_eq!(locale.variant(), Some("old"));
        assert_eq!(locale.to_string(), "de__old");
        assert_eq!(
            locale.bundle_candidates("b"),
            vec!["b.properties", "b_de.properties", "b_de__old.properties"]
        );
    }

    #[test]
    fn test_serde_roundtrip_as_string() {
        let locale = Locale::parse("fr_FR").unwrap();
        let json = serde_json::to_string(&locale).unwrap();
        assert_eq!(json, "\"fr_FR\"");
        let back: Locale = serde_json::from_str(&json).unwrap();
        assert_eq!(back, locale);
    }
}
