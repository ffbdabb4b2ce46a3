/* src/cli/core/src/config/types.rs */

use std::path::Path;

use anyhow::{Result, anyhow};
use canis_engine::{LocaleRegistry, PrefixPolicy};
use canis_server::SiteOptions;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct CanisConfig {
  pub project: ProjectConfig,
  #[serde(default)]
  pub i18n: I18nSection,
  #[serde(default)]
  pub build: BuildSection,
  #[serde(default)]
  pub serve: ServeSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectConfig {
  pub name: String,
  /// Origin for canonical and hreflang links. Empty keeps them relative.
  #[serde(default)]
  pub site_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct I18nSection {
  #[serde(default = "default_locales")]
  pub locales: Vec<String>,
  #[serde(default = "default_locale")]
  pub default: String,
  #[serde(default)]
  pub prefix: PrefixPolicy,
  #[serde(default = "default_messages_dir")]
  pub messages_dir: String,
}

impl Default for I18nSection {
  fn default() -> Self {
    Self {
      locales: default_locales(),
      default: default_locale(),
      prefix: PrefixPolicy::default(),
      messages_dir: default_messages_dir(),
    }
  }
}

impl I18nSection {
  /// Build the locale registry, rejecting an empty list or a default outside it.
  pub fn validate(&self) -> Result<LocaleRegistry> {
    LocaleRegistry::new(self.locales.clone(), self.default.clone(), self.prefix)
      .map_err(|e| anyhow!("invalid [i18n] section: {e}"))
  }
}

fn default_locales() -> Vec<String> {
  vec!["ro".to_string(), "en".to_string()]
}

fn default_locale() -> String {
  "ro".to_string()
}

fn default_messages_dir() -> String {
  "locales".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct BuildSection {
  #[serde(default = "default_templates_dir")]
  pub templates_dir: String,
  #[serde(default = "default_public_dir")]
  pub public_dir: String,
  #[serde(default = "default_out_dir")]
  pub out_dir: String,
}

impl Default for BuildSection {
  fn default() -> Self {
    Self {
      templates_dir: default_templates_dir(),
      public_dir: default_public_dir(),
      out_dir: default_out_dir(),
    }
  }
}

fn default_templates_dir() -> String {
  "templates".to_string()
}

fn default_public_dir() -> String {
  "public".to_string()
}

fn default_out_dir() -> String {
  ".canis/output".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServeSection {
  #[serde(default = "default_port")]
  pub port: u16,
}

impl Default for ServeSection {
  fn default() -> Self {
    Self { port: default_port() }
  }
}

fn default_port() -> u16 {
  3000
}

impl CanisConfig {
  /// Loader options for the site rooted at `base_dir` (the config's directory).
  pub fn site_options(&self, base_dir: &Path) -> Result<SiteOptions> {
    let mut opts = SiteOptions::new(base_dir);
    opts.registry = self.i18n.validate()?;
    opts.messages_dir = self.i18n.messages_dir.clone().into();
    opts.templates_dir = self.build.templates_dir.clone().into();
    opts.site_url.clone_from(&self.project.site_url);
    Ok(opts)
  }
}
