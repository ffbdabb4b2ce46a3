/* src/server/engine/rust/src/locale.rs */

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How locale codes appear in URLs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PrefixPolicy {
  /// Only non-default locales carry a `/{locale}` prefix.
  #[default]
  AsNeeded,
  /// Every locale, including the default, carries the prefix.
  Always,
}

impl FromStr for PrefixPolicy {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "as-needed" => Ok(Self::AsNeeded),
      "always" => Ok(Self::Always),
      other => Err(format!("unknown locale prefix policy \"{other}\"")),
    }
  }
}

impl fmt::Display for PrefixPolicy {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Self::AsNeeded => "as-needed",
      Self::Always => "always",
    })
  }
}

/// Ordered, closed set of supported locales with a designated default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleRegistry {
  locales: Vec<String>,
  default: String,
  prefix: PrefixPolicy,
}

impl LocaleRegistry {
  pub fn new(
    locales: Vec<String>,
    default: impl Into<String>,
    prefix: PrefixPolicy,
  ) -> Result<Self, String> {
    let default = default.into();
    if locales.is_empty() {
      return Err("locale list must not be empty".to_string());
    }
    for (i, locale) in locales.iter().enumerate() {
      if locale.is_empty() || locale.contains('/') {
        return Err(format!("invalid locale code \"{locale}\""));
      }
      if locales[..i].contains(locale) {
        return Err(format!("duplicate locale \"{locale}\""));
      }
    }
    if !locales.contains(&default) {
      return Err(format!("default locale \"{default}\" is not in {locales:?}"));
    }
    Ok(Self { locales, default, prefix })
  }

  /// The clinic's registry: Romanian (default, unprefixed) and English.
  pub fn canis() -> Self {
    Self {
      locales: vec!["ro".to_string(), "en".to_string()],
      default: "ro".to_string(),
      prefix: PrefixPolicy::AsNeeded,
    }
  }

  pub fn locales(&self) -> &[String] {
    &self.locales
  }

  pub fn default_locale(&self) -> &str {
    &self.default
  }

  pub fn prefix(&self) -> PrefixPolicy {
    self.prefix
  }

  pub fn is_supported(&self, code: &str) -> bool {
    self.locales.iter().any(|l| l == code)
  }

  pub fn is_default(&self, code: &str) -> bool {
    self.default == code
  }

  /// Whether canonical URLs for `code` carry a locale segment.
  pub fn needs_prefix(&self, code: &str) -> bool {
    match self.prefix {
      PrefixPolicy::Always => true,
      PrefixPolicy::AsNeeded => !self.is_default(code),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn canis_registry() {
    let reg = LocaleRegistry::canis();
    assert_eq!(reg.locales(), ["ro", "en"]);
    assert_eq!(reg.default_locale(), "ro");
    assert_eq!(reg.prefix(), PrefixPolicy::AsNeeded);
  }

  #[test]
  fn is_supported_is_total() {
    let reg = LocaleRegistry::canis();
    assert!(reg.is_supported("ro"));
    assert!(reg.is_supported("en"));
    for code in ["", "fr", "RO", "en-US", "../ro", "ro/"] {
      assert!(!reg.is_supported(code), "{code} should be unsupported");
    }
  }

  #[test]
  fn prefix_as_needed() {
    let reg = LocaleRegistry::canis();
    assert!(!reg.needs_prefix("ro"));
    assert!(reg.needs_prefix("en"));
  }

  #[test]
  fn prefix_always() {
    let reg = LocaleRegistry::new(vec!["ro".into(), "en".into()], "ro", PrefixPolicy::Always)
      .unwrap();
    assert!(reg.needs_prefix("ro"));
  }

  #[test]
  fn new_validates() {
    assert!(LocaleRegistry::new(vec![], "ro", PrefixPolicy::AsNeeded).is_err());
    assert!(LocaleRegistry::new(vec!["en".into()], "ro", PrefixPolicy::AsNeeded).is_err());
    assert!(
      LocaleRegistry::new(vec!["ro".into(), "ro".into()], "ro", PrefixPolicy::AsNeeded).is_err()
    );
    assert!(LocaleRegistry::new(vec!["r/o".into()], "r/o", PrefixPolicy::AsNeeded).is_err());
  }

  #[test]
  fn policy_parse() {
    assert_eq!("as-needed".parse::<PrefixPolicy>(), Ok(PrefixPolicy::AsNeeded));
    assert_eq!("always".parse::<PrefixPolicy>(), Ok(PrefixPolicy::Always));
    assert!("never".parse::<PrefixPolicy>().is_err());
    assert_eq!(PrefixPolicy::AsNeeded.to_string(), "as-needed");
  }
}
