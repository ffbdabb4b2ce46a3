/* src/server/core/rust/src/errors.rs */

use std::path::PathBuf;

use canis_engine::{SchemaReport, SiteError};
use canis_injector::ParseDiagnostic;
use thiserror::Error;

/// Failures while loading site content from disk.
#[derive(Debug, Error)]
pub enum LoadError {
  #[error("failed to read {}: {source}", .path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("invalid JSON in {}: {source}", .path.display())]
  Json {
    path: PathBuf,
    #[source]
    source: serde_json::Error,
  },

  #[error("{} must contain a JSON object", .path.display())]
  NotAnObject { path: PathBuf },

  #[error("invalid template {}: {}", .path.display(), describe(.diagnostics))]
  Template { path: PathBuf, diagnostics: Vec<ParseDiagnostic> },

  #[error(transparent)]
  Schema(#[from] SchemaReport),

  #[error(transparent)]
  Content(#[from] SiteError),
}

/// Failures of the concurrent full-site render.
#[derive(Debug, Error)]
pub enum RenderError {
  #[error(transparent)]
  Site(#[from] SiteError),

  #[error("render task failed: {0}")]
  Task(#[from] tokio::task::JoinError),
}

fn describe(diagnostics: &[ParseDiagnostic]) -> String {
  diagnostics
    .iter()
    .map(|d| format!("{:?} `{}`", d.kind, d.directive))
    .collect::<Vec<_>>()
    .join(", ")
}

impl LoadError {
  pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
    Self::Io { path: path.into(), source }
  }
}

#[cfg(test)]
mod tests {
  use canis_injector::DiagnosticKind;

  use super::*;

  #[test]
  fn template_error_lists_directives() {
    let err = LoadError::Template {
      path: PathBuf::from("templates/home.html"),
      diagnostics: vec![ParseDiagnostic {
        kind: DiagnosticKind::UnclosedBlock,
        directive: "each:serviceCards".into(),
      }],
    };
    assert_eq!(
      err.to_string(),
      "invalid template templates/home.html: UnclosedBlock `each:serviceCards`"
    );
  }

  #[test]
  fn io_error_names_path() {
    let err = LoadError::io("locales/en.json", std::io::Error::from(std::io::ErrorKind::NotFound));
    assert!(err.to_string().starts_with("failed to read locales/en.json: "));
  }
}
