/* src/server/engine/rust/src/catalog.rs */

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::SiteError;

/// Per-locale translation trees, one JSON document per locale.
///
/// Paths are `namespace` + dotted key (`servicesData` + `laser.details`).
/// A missing path is a `MissingTranslation` error, never an empty string.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
  documents: BTreeMap<String, Value>,
}

impl Catalog {
  pub fn from_documents<I, S>(documents: I) -> Self
  where
    I: IntoIterator<Item = (S, Value)>,
    S: Into<String>,
  {
    Self { documents: documents.into_iter().map(|(l, v)| (l.into(), v)).collect() }
  }

  pub fn locales(&self) -> impl Iterator<Item = &str> {
    self.documents.keys().map(String::as_str)
  }

  pub fn document(&self, locale: &str) -> Result<&Value, SiteError> {
    self.documents.get(locale).ok_or_else(|| SiteError::InvalidLocale(locale.to_string()))
  }

  /// Raw lookup: the value at `namespace.key`, string or structured.
  /// An empty `key` returns the whole namespace.
  pub fn lookup(&self, locale: &str, namespace: &str, key: &str) -> Result<&Value, SiteError> {
    let doc = self.document(locale)?;
    let mut current = doc.get(namespace).ok_or_else(|| SiteError::missing(locale, namespace))?;
    if key.is_empty() {
      return Ok(current);
    }
    for segment in key.split('.') {
      current =
        current.get(segment).ok_or_else(|| SiteError::missing(locale, join(namespace, key)))?;
    }
    Ok(current)
  }

  /// Scalar lookup: fails on structured values.
  pub fn text(&self, locale: &str, namespace: &str, key: &str) -> Result<&str, SiteError> {
    self.lookup(locale, namespace, key)?.as_str().ok_or_else(|| SiteError::NotText {
      locale: locale.to_string(),
      path: join(namespace, key),
    })
  }

  /// Raw lookup deserialized into typed records, e.g. `Vec<Detail>`.
  pub fn list<T: DeserializeOwned>(
    &self,
    locale: &str,
    namespace: &str,
    key: &str,
  ) -> Result<T, SiteError> {
    let value = self.lookup(locale, namespace, key)?;
    T::deserialize(value).map_err(|e| SiteError::Malformed {
      locale: locale.to_string(),
      path: join(namespace, key),
      reason: e.to_string(),
    })
  }

  /// Handle scoped to one locale and namespace.
  pub fn translator<'c>(&'c self, locale: &'c str, namespace: &'c str) -> Translator<'c> {
    Translator { catalog: self, locale, namespace }
  }
}

fn join(namespace: &str, key: &str) -> String {
  if key.is_empty() { namespace.to_string() } else { format!("{namespace}.{key}") }
}

/// Locale + namespace scoped view over a `Catalog`.
#[derive(Debug, Clone, Copy)]
pub struct Translator<'c> {
  catalog: &'c Catalog,
  locale: &'c str,
  namespace: &'c str,
}

impl<'c> Translator<'c> {
  pub fn locale(&self) -> &'c str {
    self.locale
  }

  pub fn text(&self, key: &str) -> Result<&'c str, SiteError> {
    self.catalog.text(self.locale, self.namespace, key)
  }

  pub fn raw(&self, key: &str) -> Result<&'c Value, SiteError> {
    self.catalog.lookup(self.locale, self.namespace, key)
  }

  pub fn list<T: DeserializeOwned>(&self, key: &str) -> Result<T, SiteError> {
    self.catalog.list(self.locale, self.namespace, key)
  }

  /// The whole namespace tree.
  pub fn all(&self) -> Result<&'c Value, SiteError> {
    self.raw("")
  }
}
