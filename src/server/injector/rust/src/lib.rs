/* src/server/injector/rust/src/lib.rs */

//! Slot injection for HTML templates.
//!
//! Templates carry `<!--canis:...-->` markers:
//!
//! - `<!--canis:hero.title-->` text slot (HTML-escaped)
//! - `<!--canis:body:html-->` raw slot
//! - `<!--canis:href:attr:href-->` attribute on the next opening tag
//! - `<!--canis:if:path-->` ... `<!--canis:else-->` ... `<!--canis:endif:path-->`
//! - `<!--canis:each:path-->` ... `<!--canis:endeach-->`, item bound to `$`

mod ast;
mod helpers;
mod parser;
mod paths;
mod render;
mod token;

pub use helpers::escape_html;
pub use parser::{DiagnosticKind, ParseDiagnostic};

use std::borrow::Cow;

use serde_json::Value;

use render::{inject_attributes, render, RenderContext};

/// Inject data into a template.
pub fn inject(template: &str, data: &Value) -> String {
  inject_with_diagnostics(template, data).0
}

/// Like `inject` but also returns parse diagnostics for malformed templates
/// (orphan block-close, unclosed block-open).
pub fn inject_with_diagnostics(template: &str, data: &Value) -> (String, Vec<ParseDiagnostic>) {
  // Attribute placeholders are NUL-delimited; strip stray NULs first
  let clean: Cow<'_, str> = if template.contains('\0') {
    Cow::Owned(template.replace('\0', ""))
  } else {
    Cow::Borrowed(template)
  };
  let tokens = token::tokenize(&clean);
  let (ast, diagnostics) = parser::parse(&tokens);
  let mut ctx = RenderContext::default();
  let mut html = render(&ast, data, &mut ctx);
  if !ctx.attrs.is_empty() {
    html = inject_attributes(html, &ctx.attrs);
  }
  (html, diagnostics)
}

/// Parse a template and report diagnostics without rendering it.
pub fn check(template: &str) -> Vec<ParseDiagnostic> {
  parser::parse(&token::tokenize(template)).1
}

/// Root-scoped paths the template reads (`$` paths excluded), in first-use
/// order.
pub fn paths(template: &str) -> Vec<String> {
  paths::collect(&parser::parse(&token::tokenize(template)).0)
}

/// Report every root-scoped path in `template` that `data` lacks. A path
/// whose value is `null` counts as present.
pub fn check_paths(template: &str, data: &Value) -> Vec<ParseDiagnostic> {
  let ast = parser::parse(&token::tokenize(template)).0;
  paths::unresolved(&ast, data)
    .into_iter()
    .map(|directive| ParseDiagnostic { kind: DiagnosticKind::UnresolvedPath, directive })
    .collect()
}
