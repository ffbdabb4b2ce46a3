/* src/server/injector/rust/src/paths.rs */

use serde_json::Value;

use crate::ast::AstNode;
use crate::helpers::resolve;

/// Every root-scoped path the template reads, in first-use order.
/// Loop-relative paths (`$...`) depend on the item and are skipped.
pub(crate) fn collect(nodes: &[AstNode]) -> Vec<String> {
  let mut out = Vec::new();
  walk(nodes, &mut out);
  out
}

fn walk(nodes: &[AstNode], out: &mut Vec<String>) {
  for node in nodes {
    match node {
      AstNode::Text(_) => {}
      AstNode::Slot { path, .. } | AstNode::Attr { path, .. } => push(path, out),
      AstNode::If { path, then_nodes, else_nodes } => {
        push(path, out);
        walk(then_nodes, out);
        walk(else_nodes, out);
      }
      AstNode::Each { path, body_nodes } => {
        push(path, out);
        walk(body_nodes, out);
      }
    }
  }
}

fn push(path: &str, out: &mut Vec<String>) {
  if !path.starts_with('$') && !out.iter().any(|p| p == path) {
    out.push(path.to_string());
  }
}

/// Paths from `collect` that do not resolve against `data`.
pub(crate) fn unresolved(nodes: &[AstNode], data: &Value) -> Vec<String> {
  collect(nodes).into_iter().filter(|path| resolve(path, data).is_none()).collect()
}
