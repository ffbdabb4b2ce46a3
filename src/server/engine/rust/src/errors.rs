/* src/server/engine/rust/src/errors.rs */

use thiserror::Error;

/// Failures of page resolution and catalog access.
///
/// The first three variants form the uniform not-found class: an unknown
/// locale, slug or page path never yields partial content. The rest are
/// content-authoring defects in the catalog and are fatal at build time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SiteError {
  #[error("unsupported locale \"{0}\"")]
  InvalidLocale(String),

  #[error("unknown service slug \"{0}\"")]
  UnknownSlug(String),

  #[error("no page at \"{0}\"")]
  UnknownPage(String),

  #[error("missing translation \"{path}\" for locale \"{locale}\"")]
  MissingTranslation { locale: String, path: String },

  #[error("translation \"{path}\" for locale \"{locale}\" is structured, expected text")]
  NotText { locale: String, path: String },

  #[error("translation \"{path}\" for locale \"{locale}\" is malformed: {reason}")]
  Malformed { locale: String, path: String, reason: String },
}

impl SiteError {
  pub fn missing(locale: &str, path: impl Into<String>) -> Self {
    Self::MissingTranslation { locale: locale.to_string(), path: path.into() }
  }

  /// True for every failure that must surface as a plain not-found page.
  pub fn is_not_found(&self) -> bool {
    matches!(self, Self::InvalidLocale(_) | Self::UnknownSlug(_) | Self::UnknownPage(_))
  }

  pub fn code(&self) -> &'static str {
    match self {
      Self::InvalidLocale(_) => "INVALID_LOCALE",
      Self::UnknownSlug(_) => "UNKNOWN_SLUG",
      Self::UnknownPage(_) => "NOT_FOUND",
      Self::MissingTranslation { .. } => "MISSING_TRANSLATION",
      Self::NotText { .. } | Self::Malformed { .. } => "CONTENT_ERROR",
    }
  }

  pub fn status(&self) -> u16 {
    if self.is_not_found() { 404 } else { 500 }
  }
}
