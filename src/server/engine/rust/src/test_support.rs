/* src/server/engine/rust/src/test_support.rs */

use serde_json::{Value, json};

use crate::catalog::Catalog;
use crate::schema::{NAMESPACES, SERVICES_DATA};
use crate::slug::Service;

/// A catalog document satisfying the schema, with `tag` mixed into text.
pub fn complete_document(tag: &str) -> Value {
  let mut doc = serde_json::Map::new();
  for (namespace, keys) in NAMESPACES {
    let mut ns = json!({});
    for key in *keys {
      let mut node = &mut ns;
      let parts: Vec<_> = key.split('.').collect();
      for part in &parts[..parts.len() - 1] {
        node = node.as_object_mut().unwrap().entry(*part).or_insert_with(|| json!({}));
      }
      node[parts[parts.len() - 1]] = json!(format!("{tag} {namespace}.{key}"));
    }
    doc.insert((*namespace).to_string(), ns);
  }
  let mut data = serde_json::Map::new();
  for service in Service::ALL {
    let slug = service.slug();
    data.insert(
      slug.to_string(),
      json!({
        "title": format!("{tag} {slug} title"),
        "subtitle": format!("{tag} {slug} subtitle"),
        "description": format!("{tag} {slug} description"),
        "items": [format!("{tag} {slug} item")],
        "features": [format!("{tag} {slug} feature 1"), format!("{tag} {slug} feature 2")],
        "details": [{"heading": format!("{tag} {slug} heading"), "text": format!("{tag} {slug} text")}],
      }),
    );
  }
  doc.insert(SERVICES_DATA.to_string(), Value::Object(data));
  Value::Object(doc)
}

pub fn complete_catalog() -> Catalog {
  Catalog::from_documents([("ro", complete_document("RO")), ("en", complete_document("EN"))])
}
