/* src/server/engine/rust/src/model.rs */

//! Page render models. Built fresh per request or build step, never stored.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::contact::Contact;
use crate::router::{LocaleLink, PageKey};
use crate::slug::{Icon, Service};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMeta {
  pub title: String,
  pub description: String,
}

/// `{heading, text}` record of a service's detail section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detail {
  pub heading: String,
  pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceLink {
  pub slug: Service,
  pub icon: Icon,
  pub title: String,
  pub href: String,
}

/// Home grid card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceCard {
  pub slug: Service,
  pub icon: Icon,
  pub href: String,
  pub title: String,
  pub description: String,
  pub items: Vec<String>,
  pub delay_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatCell {
  pub key: &'static str,
  pub label: String,
  /// Final value as rendered without scripts, e.g. `5.000+`.
  pub display: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub end: Option<u32>,
  pub suffix: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImage {
  pub src: &'static str,
  pub alt: String,
  pub delay_ms: u32,
}

/// Parts shared by every page: header, locale switcher, SEO metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Chrome {
  pub locale: String,
  pub path: String,
  pub home_href: String,
  pub services_href: String,
  pub contact_href: String,
  pub alternates: Vec<LocaleLink>,
  pub contact: Contact,
  pub metadata: PageMeta,
  pub nav: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeModel {
  #[serde(flatten)]
  pub chrome: Chrome,
  pub hero_image: &'static str,
  pub hero: Value,
  pub stats: Vec<StatCell>,
  pub services: Value,
  pub service_cards: Vec<ServiceCard>,
  pub gallery: Value,
  pub gallery_images: Vec<GalleryImage>,
  pub about: Value,
  pub cta: Value,
  pub footer: Value,
  pub footer_services: Vec<ServiceLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceContent {
  pub slug: Service,
  pub icon: Icon,
  pub title: String,
  pub subtitle: String,
  pub description: String,
  pub details: Vec<Detail>,
  pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceModel {
  #[serde(flatten)]
  pub chrome: Chrome,
  pub service_page: Value,
  pub service: ServiceContent,
  pub other_services: Vec<ServiceLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotFoundModel {
  #[serde(flatten)]
  pub chrome: Chrome,
  pub not_found: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PageModel {
  Home(HomeModel),
  Service(ServiceModel),
  NotFound(NotFoundModel),
}

impl PageModel {
  pub fn chrome(&self) -> &Chrome {
    match self {
      Self::Home(m) => &m.chrome,
      Self::Service(m) => &m.chrome,
      Self::NotFound(m) => &m.chrome,
    }
  }

  pub fn locale(&self) -> &str {
    &self.chrome().locale
  }

  pub fn path(&self) -> &str {
    &self.chrome().path
  }

  /// `None` for the not-found page, which has no canonical URL.
  pub fn page_key(&self) -> Option<PageKey> {
    match self {
      Self::Home(_) => Some(PageKey::Home),
      Self::Service(m) => Some(PageKey::Service(m.service.slug)),
      Self::NotFound(_) => None,
    }
  }

  /// Payload for the inline data script: just what client effects need.
  pub fn client_data(&self) -> Value {
    let chrome = self.chrome();
    let counters: Vec<Value> = match self {
      Self::Home(m) => m
        .stats
        .iter()
        .filter_map(|s| s.end.map(|end| json!({"key": s.key, "end": end, "suffix": s.suffix})))
        .collect(),
      Self::Service(_) | Self::NotFound(_) => Vec::new(),
    };
    json!({
      "locale": chrome.locale,
      "path": chrome.path,
      "alternates": chrome.alternates,
      "counters": counters,
    })
  }
}

/// Group digits of `n` with the locale's thousands separator.
pub fn format_count(n: u32, locale: &str) -> String {
  let sep = match locale {
    "en" => ',',
    _ => '.',
  };
  let digits = n.to_string();
  let mut out = String::with_capacity(digits.len() + digits.len() / 3);
  for (i, ch) in digits.chars().enumerate() {
    if i > 0 && (digits.len() - i) % 3 == 0 {
      out.push(sep);
    }
    out.push(ch);
  }
  out
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn thousands_grouping_per_locale() {
    assert_eq!(format_count(4, "ro"), "4");
    assert_eq!(format_count(5000, "ro"), "5.000");
    assert_eq!(format_count(5000, "en"), "5,000");
    assert_eq!(format_count(1_234_567, "en"), "1,234,567");
    assert_eq!(format_count(100, "en"), "100");
  }
}
