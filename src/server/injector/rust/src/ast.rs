/* src/server/injector/rust/src/ast.rs */

/// Parsed template. Paths are dotted lookups into the page model; inside an
/// `each` body `$` names the current item and `$$` the enclosing loop's item.
#[derive(Debug)]
pub(crate) enum AstNode {
  Text(String),
  Slot { path: String, mode: SlotMode },
  /// Attribute for the next opening tag in the output.
  Attr { path: String, attr_name: String },
  If { path: String, then_nodes: Vec<AstNode>, else_nodes: Vec<AstNode> },
  Each { path: String, body_nodes: Vec<AstNode> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SlotMode {
  /// `<!--canis:path-->`, HTML-escaped.
  Text,
  /// `<!--canis:path:html-->`, inserted verbatim.
  Html,
}
