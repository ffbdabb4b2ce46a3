/* src/server/engine/rust/src/router.rs */

use serde::{Serialize, Serializer};

use crate::errors::SiteError;
use crate::locale::LocaleRegistry;
use crate::slug::Service;

/// Path segment under which service detail pages live, in every locale.
pub const SERVICES_SEGMENT: &str = "servicii";

/// A page independent of locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PageKey {
  Home,
  Service(Service),
}

impl PageKey {
  /// Unprefixed page path: `/` or `/servicii/{slug}`.
  pub fn path(self) -> String {
    match self {
      Self::Home => "/".to_string(),
      Self::Service(s) => format!("/{SERVICES_SEGMENT}/{}", s.slug()),
    }
  }

  /// Every page, home first, then services in registry order.
  pub fn all() -> impl Iterator<Item = Self> {
    std::iter::once(Self::Home).chain(Service::ALL.into_iter().map(Self::Service))
  }
}

impl Serialize for PageKey {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    match self {
      Self::Home => serializer.serialize_str("home"),
      Self::Service(s) => serializer.serialize_str(s.slug()),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
  pub locale: String,
  pub page: PageKey,
}

/// One entry of the language switcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleLink {
  pub locale: String,
  pub label: String,
  pub href: String,
  pub active: bool,
}

/// Maps between URL paths and `(locale, page)` under the registry's prefix policy.
#[derive(Debug, Clone, Copy)]
pub struct LocaleRouter<'r> {
  registry: &'r LocaleRegistry,
}

/// Split `/a/b?q#f` into `("/a/b", "?q#f")`.
fn split_suffix(path: &str) -> (&str, &str) {
  match path.find(['?', '#']) {
    Some(i) => path.split_at(i),
    None => (path, ""),
  }
}

/// Shape of a locale code (`en`, `fr`, `pt-BR`), supported or not.
fn looks_like_locale(segment: &str) -> bool {
  let (lang, region) = match segment.split_once('-') {
    Some((l, r)) => (l, Some(r)),
    None => (segment, None),
  };
  (2..=3).contains(&lang.len())
    && lang.bytes().all(|b| b.is_ascii_lowercase())
    && region.is_none_or(|r| r.len() == 2 && r.bytes().all(|b| b.is_ascii_uppercase()))
}

impl<'r> LocaleRouter<'r> {
  pub fn new(registry: &'r LocaleRegistry) -> Self {
    Self { registry }
  }

  pub fn registry(&self) -> &'r LocaleRegistry {
    self.registry
  }

  /// Remove a leading supported-locale segment. Returns the stripped locale
  /// (if any) and the remaining path, which always starts with `/`.
  pub fn strip_locale<'p>(&self, path: &'p str) -> (Option<&'r str>, &'p str) {
    let Some(rest) = path.strip_prefix('/') else { return (None, path) };
    let (first, tail) = match rest.find('/') {
      Some(i) => (&rest[..i], &rest[i..]),
      None => (rest, "/"),
    };
    match self.registry.locales().iter().find(|l| *l == first) {
      Some(locale) => (Some(locale.as_str()), tail),
      None => (None, path),
    }
  }

  /// Rewrite `base_path` for `target`: drop any locale prefix, then add the
  /// target's prefix when the policy requires one. Query and fragment survive.
  pub fn localized_path(&self, base_path: &str, target: &str) -> String {
    debug_assert!(self.registry.is_supported(target), "unsupported locale {target}");
    let (path, suffix) = split_suffix(base_path);
    let owned;
    let path = if path.starts_with('/') {
      path
    } else {
      owned = format!("/{path}");
      &owned
    };
    let (_, rest) = self.strip_locale(path);
    if !self.registry.needs_prefix(target) {
      return format!("{rest}{suffix}");
    }
    format!("/{target}{rest}{suffix}")
  }

  /// Canonical path of a page in a locale.
  pub fn link(&self, locale: &str, page_path: &str) -> String {
    self.localized_path(page_path, locale)
  }

  pub fn canonical(&self, locale: &str, page: PageKey) -> String {
    self.localized_path(&page.path(), locale)
  }

  /// Derive `(locale, page)` from a request path. Anything that is not the
  /// canonical path of a known page is an error in the not-found class.
  pub fn parse(&self, path: &str) -> Result<Route, SiteError> {
    let (clean, _) = split_suffix(path);
    let unknown = || SiteError::UnknownPage(clean.to_string());
    let trimmed = clean.strip_prefix('/').ok_or_else(unknown)?;
    // Only a single trailing slash is tolerated; empty segments name nothing.
    if trimmed.contains("//") || trimmed.starts_with('/') {
      return Err(unknown());
    }
    let mut segments: Vec<&str> = trimmed.split('/').collect();
    if segments.len() > 1 && segments.last() == Some(&"") {
      segments.pop();
    }

    let first = segments[0];
    let (locale, rest) = if self.registry.is_supported(first) {
      if !self.registry.needs_prefix(first) {
        return Err(unknown());
      }
      (first, &segments[1..])
    } else if looks_like_locale(first) {
      return Err(SiteError::InvalidLocale(first.to_string()));
    } else {
      let default = self.registry.default_locale();
      if self.registry.needs_prefix(default) {
        return Err(unknown());
      }
      (default, &segments[..])
    };

    let page = match rest {
      [] | [""] => PageKey::Home,
      [segment, slug] if *segment == SERVICES_SEGMENT => {
        PageKey::Service(Service::from_slug(slug)?)
      }
      _ => return Err(unknown()),
    };
    Ok(Route { locale: locale.to_string(), page })
  }

  /// One switcher entry per registry locale, each pointing at the current page.
  pub fn switcher_links(&self, current_path: &str, current_locale: &str) -> Vec<LocaleLink> {
    self
      .registry
      .locales()
      .iter()
      .map(|l| LocaleLink {
        locale: l.clone(),
        label: l.to_uppercase(),
        href: self.localized_path(current_path, l),
        active: l == current_locale,
      })
      .collect()
  }
}

/// Client-side location holder: what the language switcher drives.
#[derive(Debug, Clone)]
pub struct Navigator<'r> {
  router: LocaleRouter<'r>,
  location: String,
}

impl<'r> Navigator<'r> {
  pub fn new(router: LocaleRouter<'r>, location: impl Into<String>) -> Self {
    Self { router, location: location.into() }
  }

  pub fn location(&self) -> &str {
    &self.location
  }

  pub fn navigate(&mut self, path: impl Into<String>) {
    self.location = path.into();
  }

  /// Replace the location with the same page in `target`.
  pub fn switch_locale(&mut self, target: &str) -> &str {
    self.location = self.router.localized_path(&self.location, target);
    &self.location
  }
}
