/* src/server/engine/rust/src/schema.rs */

//! The expected catalog shape, defined once and checked for every locale
//! before anything is rendered.

use std::collections::BTreeSet;
use std::fmt;

use serde_json::Value;
use thiserror::Error;

use crate::catalog::Catalog;
use crate::errors::SiteError;
use crate::locale::LocaleRegistry;
use crate::slug::Service;

/// Scalar keys each chrome namespace must define.
pub const NAMESPACES: &[(&str, &[&str])] = &[
  ("metadata", &["title", "description"]),
  ("nav", &["services", "contact", "book", "subtitle"]),
  (
    "hero",
    &[
      "badge",
      "title",
      "description",
      "cta1",
      "cta2",
      "feat1",
      "feat2",
      "statYears",
      "statDoctors",
      "statEmergency",
    ],
  ),
  ("stats", &["years", "animals", "doctors", "emergency"]),
  ("services", &["label", "title", "description", "details"]),
  ("gallery", &["label", "title", "description", "alt"]),
  (
    "about",
    &[
      "label", "title", "p1", "p2", "box1", "box2", "box3", "box4", "item1", "item2", "item3",
      "item4",
    ],
  ),
  ("cta", &["title", "description", "call", "email"]),
  (
    "footer",
    &[
      "description",
      "facebook",
      "services",
      "contact",
      "location",
      "mapLink",
      "copyright",
      "schedule.label",
    ],
  ),
  (
    "servicePage",
    &[
      "home",
      "services",
      "back",
      "book",
      "details",
      "includes",
      "otherServices",
      "schedule",
      "scheduleWeekdays",
      "scheduleSaturday",
      "scheduleSunday",
    ],
  ),
  ("notFound", &["title", "description", "back"]),
];

/// Namespace holding one entry per service slug.
pub const SERVICES_DATA: &str = "servicesData";

pub const SERVICE_TEXT_KEYS: &[&str] = &["title", "subtitle", "description"];
pub const SERVICE_STRING_LISTS: &[&str] = &["items", "features"];
/// List of `{heading, text}` records.
pub const SERVICE_DETAILS: &str = "details";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
  MissingDocument,
  Missing,
  NotText,
  EmptyText,
  NotList,
  EmptyList,
  BadRecord { index: usize },
  /// Defined by another locale but not by this one.
  Uncovered { defined_in: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
  pub locale: String,
  pub path: String,
  pub kind: ViolationKind,
}

impl fmt::Display for Violation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let (locale, path) = (&self.locale, &self.path);
    match &self.kind {
      ViolationKind::MissingDocument => write!(f, "[{locale}] no catalog document"),
      ViolationKind::Missing => write!(f, "[{locale}] {path}: missing"),
      ViolationKind::NotText => write!(f, "[{locale}] {path}: expected text"),
      ViolationKind::EmptyText => write!(f, "[{locale}] {path}: empty text"),
      ViolationKind::NotList => write!(f, "[{locale}] {path}: expected a list"),
      ViolationKind::EmptyList => write!(f, "[{locale}] {path}: empty list"),
      ViolationKind::BadRecord { index } => {
        write!(f, "[{locale}] {path}[{index}]: expected non-empty text item")
      }
      ViolationKind::Uncovered { defined_in } => {
        write!(f, "[{locale}] {path}: missing (defined in {defined_in})")
      }
    }
  }
}

/// Every violation found in one validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("catalog has {} problem(s):\n{}", .violations.len(), render_list(.violations))]
pub struct SchemaReport {
  pub violations: Vec<Violation>,
}

fn render_list(violations: &[Violation]) -> String {
  violations.iter().map(|v| format!("  {v}")).collect::<Vec<_>>().join("\n")
}

/// Validate that every registry locale has a complete, well-shaped catalog.
pub fn validate(catalog: &Catalog, registry: &LocaleRegistry) -> Result<(), SchemaReport> {
  let mut violations = Vec::new();

  for locale in registry.locales() {
    if catalog.document(locale).is_err() {
      violations.push(Violation {
        locale: locale.clone(),
        path: String::new(),
        kind: ViolationKind::MissingDocument,
      });
      continue;
    }
    let mut check = Checker { catalog, locale, violations: &mut violations };
    for (namespace, keys) in NAMESPACES {
      for key in *keys {
        check.text(namespace, key);
      }
    }
    for service in Service::ALL {
      let slug = service.slug();
      for key in SERVICE_TEXT_KEYS {
        check.text(SERVICES_DATA, &format!("{slug}.{key}"));
      }
      for key in SERVICE_STRING_LISTS {
        check.string_list(SERVICES_DATA, &format!("{slug}.{key}"));
      }
      check.detail_list(SERVICES_DATA, &format!("{slug}.{SERVICE_DETAILS}"));
    }
  }

  check_parallel_coverage(catalog, registry, &mut violations);

  if violations.is_empty() { Ok(()) } else { Err(SchemaReport { violations }) }
}

struct Checker<'a> {
  catalog: &'a Catalog,
  locale: &'a str,
  violations: &'a mut Vec<Violation>,
}

impl Checker<'_> {
  fn push(&mut self, namespace: &str, key: &str, kind: ViolationKind) {
    self.violations.push(Violation {
      locale: self.locale.to_string(),
      path: format!("{namespace}.{key}"),
      kind,
    });
  }

  fn lookup(&mut self, namespace: &str, key: &str) -> Option<Value> {
    match self.catalog.lookup(self.locale, namespace, key) {
      Ok(v) => Some(v.clone()),
      Err(SiteError::MissingTranslation { .. }) => {
        self.push(namespace, key, ViolationKind::Missing);
        None
      }
      Err(_) => None,
    }
  }

  fn text(&mut self, namespace: &str, key: &str) {
    match self.lookup(namespace, key) {
      Some(Value::String(s)) if s.trim().is_empty() => {
        self.push(namespace, key, ViolationKind::EmptyText);
      }
      Some(Value::String(_)) | None => {}
      Some(_) => self.push(namespace, key, ViolationKind::NotText),
    }
  }

  fn list(&mut self, namespace: &str, key: &str) -> Option<Vec<Value>> {
    match self.lookup(namespace, key)? {
      Value::Array(items) if items.is_empty() => {
        self.push(namespace, key, ViolationKind::EmptyList);
        None
      }
      Value::Array(items) => Some(items),
      _ => {
        self.push(namespace, key, ViolationKind::NotList);
        None
      }
    }
  }

  fn string_list(&mut self, namespace: &str, key: &str) {
    let Some(items) = self.list(namespace, key) else { return };
    for (index, item) in items.iter().enumerate() {
      if !item.as_str().is_some_and(|s| !s.trim().is_empty()) {
        self.push(namespace, key, ViolationKind::BadRecord { index });
      }
    }
  }

  fn detail_list(&mut self, namespace: &str, key: &str) {
    let Some(items) = self.list(namespace, key) else { return };
    for (index, item) in items.iter().enumerate() {
      let ok = ["heading", "text"]
        .iter()
        .all(|field| item.get(field).and_then(Value::as_str).is_some_and(|s| !s.trim().is_empty()));
      if !ok {
        self.push(namespace, key, ViolationKind::BadRecord { index });
      }
    }
  }
}

/// Every leaf path defined by one locale must be defined by all of them.
fn check_parallel_coverage(
  catalog: &Catalog,
  registry: &LocaleRegistry,
  violations: &mut Vec<Violation>,
) {
  let leaves: Vec<(&str, BTreeSet<String>)> = registry
    .locales()
    .iter()
    .filter_map(|l| {
      let doc = catalog.document(l).ok()?;
      let mut paths = BTreeSet::new();
      collect_leaves(doc, String::new(), &mut paths);
      Some((l.as_str(), paths))
    })
    .collect();

  for (locale, paths) in &leaves {
    for (other, other_paths) in &leaves {
      if other == locale {
        continue;
      }
      for path in other_paths.difference(paths) {
        // Already reported by the shape checks
        if violations.iter().any(|v| v.locale == *locale && v.path == *path) {
          continue;
        }
        violations.push(Violation {
          locale: (*locale).to_string(),
          path: path.clone(),
          kind: ViolationKind::Uncovered { defined_in: (*other).to_string() },
        });
      }
    }
  }
}

fn collect_leaves(value: &Value, prefix: String, out: &mut BTreeSet<String>) {
  match value {
    Value::Object(map) => {
      for (key, child) in map {
        let path = if prefix.is_empty() { key.clone() } else { format!("{prefix}.{key}") };
        collect_leaves(child, path, out);
      }
    }
    _ => {
      out.insert(prefix);
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_support::{complete_catalog, complete_document};
  use serde_json::json;

  #[test]
  fn complete_catalog_passes() {
    assert_eq!(validate(&complete_catalog(), &LocaleRegistry::canis()), Ok(()));
  }

  #[test]
  fn missing_document_reported() {
    let catalog = Catalog::from_documents([("ro", complete_document("RO"))]);
    let report = validate(&catalog, &LocaleRegistry::canis()).unwrap_err();
    assert_eq!(report.violations.len(), 1);
    assert_eq!(report.violations[0].kind, ViolationKind::MissingDocument);
    assert_eq!(report.violations[0].locale, "en");
  }

  #[test]
  fn missing_key_reported_once() {
    let mut en = complete_document("EN");
    en["hero"].as_object_mut().unwrap().remove("cta2");
    let catalog = Catalog::from_documents([("ro", complete_document("RO")), ("en", en)]);
    let report = validate(&catalog, &LocaleRegistry::canis()).unwrap_err();
    assert_eq!(
      report.violations,
      vec![Violation { locale: "en".into(), path: "hero.cta2".into(), kind: ViolationKind::Missing }]
    );
  }

  #[test]
  fn wrong_shapes_reported() {
    let mut ro = complete_document("RO");
    ro["servicesData"]["laser"]["title"] = json!(["not", "text"]);
    ro["servicesData"]["laser"]["features"] = json!([]);
    ro["servicesData"]["hrana"]["details"] = json!([{"heading": "only heading"}]);
    ro["nav"]["book"] = json!("  ");
    let catalog = Catalog::from_documents([("ro", ro), ("en", complete_document("EN"))]);
    let report = validate(&catalog, &LocaleRegistry::canis()).unwrap_err();
    let kinds: Vec<_> = report.violations.iter().map(|v| (v.path.as_str(), &v.kind)).collect();
    assert!(kinds.contains(&("servicesData.laser.title", &ViolationKind::NotText)));
    assert!(kinds.contains(&("servicesData.laser.features", &ViolationKind::EmptyList)));
    assert!(kinds.contains(&("servicesData.hrana.details", &ViolationKind::BadRecord { index: 0 })));
    assert!(kinds.contains(&("nav.book", &ViolationKind::EmptyText)));
  }

  #[test]
  fn extra_key_in_one_locale_is_uncovered_in_other() {
    let mut ro = complete_document("RO");
    ro["hero"]["extra"] = json!("only in ro");
    let catalog = Catalog::from_documents([("ro", ro), ("en", complete_document("EN"))]);
    let report = validate(&catalog, &LocaleRegistry::canis()).unwrap_err();
    assert_eq!(
      report.violations,
      vec![Violation {
        locale: "en".into(),
        path: "hero.extra".into(),
        kind: ViolationKind::Uncovered { defined_in: "ro".into() },
      }]
    );
  }

  #[test]
  fn report_display_lists_every_problem() {
    let report = SchemaReport {
      violations: vec![
        Violation { locale: "en".into(), path: "cta.call".into(), kind: ViolationKind::Missing },
        Violation { locale: "ro".into(), path: "nav.book".into(), kind: ViolationKind::EmptyText },
      ],
    };
    let text = report.to_string();
    assert!(text.starts_with("catalog has 2 problem(s):"));
    assert!(text.contains("[en] cta.call: missing"));
    assert!(text.contains("[ro] nav.book: empty text"));
  }
}
