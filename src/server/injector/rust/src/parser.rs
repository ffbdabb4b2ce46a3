/* src/server/injector/rust/src/parser.rs */

use crate::ast::{AstNode, SlotMode};
use crate::token::Token;

/// Diagnostic emitted for a mismatched block directive or an unresolved path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDiagnostic {
  pub kind: DiagnosticKind,
  pub directive: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
  /// Block-close directive without a matching open (e.g. orphan `endif:x`)
  UnmatchedBlockClose,
  /// Block-open directive that reached EOF without matching close
  UnclosedBlock,
  /// Path that names nothing in the data the template was checked against
  UnresolvedPath,
}

struct Parser<'t> {
  tokens: &'t [Token],
  pos: usize,
  diagnostics: Vec<ParseDiagnostic>,
}

pub(crate) fn parse(tokens: &[Token]) -> (Vec<AstNode>, Vec<ParseDiagnostic>) {
  let mut parser = Parser { tokens, pos: 0, diagnostics: Vec::new() };
  let nodes = parser.parse_until(&|_| false);
  (nodes, parser.diagnostics)
}

fn is_block_close(directive: &str) -> bool {
  directive.starts_with("endif:") || directive == "endeach" || directive == "else"
}

impl Parser<'_> {
  fn peek_marker(&self) -> Option<&str> {
    match self.tokens.get(self.pos) {
      Some(Token::Marker(d)) => Some(d.as_str()),
      _ => None,
    }
  }

  fn unclosed(&mut self, directive: String) {
    self.diagnostics.push(ParseDiagnostic { kind: DiagnosticKind::UnclosedBlock, directive });
  }

  fn parse_until(&mut self, stop: &dyn Fn(&str) -> bool) -> Vec<AstNode> {
    let tokens = self.tokens;
    let mut nodes = Vec::new();

    while let Some(token) = tokens.get(self.pos) {
      let directive = match token {
        Token::Text(value) => {
          nodes.push(AstNode::Text(value.clone()));
          self.pos += 1;
          continue;
        }
        Token::Marker(d) => d.as_str(),
      };
      if stop(directive) {
        return nodes;
      }
      self.pos += 1;

      if let Some(path) = directive.strip_prefix("if:") {
        let path = path.to_string();
        let endif = format!("endif:{path}");
        let then_nodes = self.parse_until(&|d| d == "else" || d == endif);
        let else_nodes = if self.peek_marker() == Some("else") {
          self.pos += 1;
          self.parse_until(&|d| d == endif)
        } else {
          Vec::new()
        };
        if self.peek_marker().is_some_and(|d| d == endif) {
          self.pos += 1;
        } else {
          self.unclosed(format!("if:{path}"));
        }
        nodes.push(AstNode::If { path, then_nodes, else_nodes });
      } else if let Some(path) = directive.strip_prefix("each:") {
        let path = path.to_string();
        let body_nodes = self.parse_until(&|d| d == "endeach");
        if self.peek_marker() == Some("endeach") {
          self.pos += 1;
        } else {
          self.unclosed(format!("each:{path}"));
        }
        nodes.push(AstNode::Each { path, body_nodes });
      } else if let Some((path, attr_name)) = directive.split_once(":attr:") {
        nodes.push(AstNode::Attr { path: path.to_string(), attr_name: attr_name.to_string() });
      } else if let Some(path) = directive.strip_suffix(":html") {
        nodes.push(AstNode::Slot { path: path.to_string(), mode: SlotMode::Html });
      } else if is_block_close(directive) {
        self.diagnostics.push(ParseDiagnostic {
          kind: DiagnosticKind::UnmatchedBlockClose,
          directive: directive.to_string(),
        });
      } else {
        nodes.push(AstNode::Slot { path: directive.to_string(), mode: SlotMode::Text });
      }
    }

    nodes
  }
}
