/* src/server/core/rust/src/site_loader/loader.rs */

use std::path::Path;

use canis_engine::{Catalog, LocaleRegistry};
use serde_json::Value;

use crate::errors::LoadError;

pub(crate) const HOME_TEMPLATE: &str = "home.html";
pub(crate) const SERVICE_TEMPLATE: &str = "service.html";
pub(crate) const NOT_FOUND_TEMPLATE: &str = "not-found.html";

/// Page templates, one per page kind. Shared by every locale.
#[derive(Debug, Clone)]
pub struct Templates {
  pub home: String,
  pub service: String,
  pub not_found: String,
}

fn read(path: &Path) -> Result<String, LoadError> {
  std::fs::read_to_string(path).map_err(|e| LoadError::io(path, e))
}

/// Read `{locale}.json` for every registry locale. Files for locales outside
/// the registry are ignored.
pub fn load_catalog(messages_dir: &Path, registry: &LocaleRegistry) -> Result<Catalog, LoadError> {
  let mut documents = Vec::with_capacity(registry.locales().len());
  for locale in registry.locales() {
    let path = messages_dir.join(format!("{locale}.json"));
    let content = read(&path)?;
    let doc: Value = serde_json::from_str(&content)
      .map_err(|source| LoadError::Json { path: path.clone(), source })?;
    if !doc.is_object() {
      return Err(LoadError::NotAnObject { path });
    }
    documents.push((locale.clone(), doc));
  }
  Ok(Catalog::from_documents(documents))
}

fn load_template(dir: &Path, name: &str) -> Result<String, LoadError> {
  let path = dir.join(name);
  let template = read(&path)?;
  let diagnostics = canis_injector::check(&template);
  if !diagnostics.is_empty() {
    return Err(LoadError::Template { path, diagnostics });
  }
  Ok(template)
}

/// Read and syntax-check the three page templates.
pub fn load_templates(dir: &Path) -> Result<Templates, LoadError> {
  Ok(Templates {
    home: load_template(dir, HOME_TEMPLATE)?,
    service: load_template(dir, SERVICE_TEMPLATE)?,
    not_found: load_template(dir, NOT_FOUND_TEMPLATE)?,
  })
}
