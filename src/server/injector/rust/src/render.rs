/* src/server/injector/rust/src/render.rs */

use serde_json::Value;

use crate::ast::{AstNode, SlotMode};
use crate::helpers::{escape_html, is_html_boolean_attr, is_truthy, resolve, stringify};

pub(crate) struct AttrEntry {
  pub(crate) marker: String,
  pub(crate) attr_name: String,
  pub(crate) value: String,
}

#[derive(Default)]
pub(crate) struct RenderContext {
  pub(crate) attrs: Vec<AttrEntry>,
}

impl RenderContext {
  /// Emit a `\x00CANIS_ATTR_N\x00` placeholder, resolved by `inject_attributes`.
  /// U+0000 never appears in valid HTML and is stripped from input.
  fn defer_attr(&mut self, out: &mut String, attr_name: &str, value: String) {
    let marker = format!("\x00CANIS_ATTR_{}\x00", self.attrs.len());
    out.push_str(&marker);
    self.attrs.push(AttrEntry { marker, attr_name: attr_name.to_string(), value });
  }
}

pub(crate) fn render(nodes: &[AstNode], data: &Value, ctx: &mut RenderContext) -> String {
  let mut out = String::new();

  for node in nodes {
    match node {
      AstNode::Text(value) => out.push_str(value),

      AstNode::Slot { path, mode } => {
        let value = stringify(resolve(path, data).unwrap_or(&Value::Null));
        match mode {
          SlotMode::Html => out.push_str(&value),
          SlotMode::Text => out.push_str(&escape_html(&value)),
        }
      }

      AstNode::Attr { path, attr_name } => {
        let Some(value) = resolve(path, data) else { continue };
        if is_html_boolean_attr(attr_name) {
          if is_truthy(value) {
            ctx.defer_attr(&mut out, attr_name, String::new());
          }
        } else {
          ctx.defer_attr(&mut out, attr_name, escape_html(&stringify(value)));
        }
      }

      AstNode::If { path, then_nodes, else_nodes } => {
        let branch = if resolve(path, data).is_some_and(is_truthy) { then_nodes } else { else_nodes };
        out.push_str(&render(branch, data, ctx));
      }

      AstNode::Each { path, body_nodes } => {
        let Some(Value::Array(items)) = resolve(path, data) else { continue };
        for item in items {
          // `$` is the current item, `$$` the enclosing loop's item
          let scoped = match data {
            Value::Object(map) => {
              let mut scope = map.clone();
              if let Some(outer) = scope.get("$").cloned() {
                scope.insert("$$".to_string(), outer);
              }
              scope.insert("$".to_string(), item.clone());
              Value::Object(scope)
            }
            _ => data.clone(),
          };
          out.push_str(&render(body_nodes, &scoped, ctx));
        }
      }
    }
  }

  out
}

/// Splice deferred attributes into the next opening tag after each marker.
pub(crate) fn inject_attributes(mut html: String, attrs: &[AttrEntry]) -> String {
  // Reverse order keeps earlier marker offsets valid
  for entry in attrs.iter().rev() {
    let Some(pos) = html.find(&entry.marker) else { continue };
    html.replace_range(pos..pos + entry.marker.len(), "");
    let Some(tag_rel) = html[pos..].find('<') else { continue };
    let tag_start = pos + tag_rel;
    let name_end = html[tag_start + 1..]
      .find(|c: char| c == '>' || c == '/' || c.is_ascii_whitespace())
      .map_or(html.len(), |p| tag_start + 1 + p);
    html.insert_str(name_end, &format!(r#" {}="{}""#, entry.attr_name, entry.value));
  }
  html
}
