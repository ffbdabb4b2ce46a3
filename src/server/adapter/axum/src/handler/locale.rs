/* src/server/adapter/axum/src/handler/locale.rs */

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::response::Redirect;
use canis_engine::{LocaleRouter, SiteError};
use serde::Deserialize;

use super::AppState;
use crate::error::AxumError;

#[derive(Deserialize)]
pub(super) struct SwitchQuery {
  path: Option<String>,
}

/// Only same-origin absolute paths are followed; anything else means home.
/// Control characters cannot appear in a `Location` header.
fn local_path(path: Option<&str>) -> &str {
  match path {
    Some(p)
      if p.starts_with('/')
        && !p.starts_with("//")
        && !p.contains('\\')
        && !p.chars().any(char::is_control) =>
    {
      p
    }
    _ => "/",
  }
}

/// `GET /_canis/locale/{target}?path=/current`: 303 to the same page in `target`.
pub(super) async fn handle_switch(
  State(state): State<Arc<AppState>>,
  Path(target): Path<String>,
  Query(query): Query<SwitchQuery>,
) -> Result<Redirect, AxumError> {
  let registry = state.site.registry();
  if !registry.is_supported(&target) {
    return Err(SiteError::InvalidLocale(target).into());
  }
  let router = LocaleRouter::new(registry);
  Ok(Redirect::to(&router.localized_path(local_path(query.path.as_deref()), &target)))
}

#[cfg(test)]
mod tests {
  use super::local_path;

  #[test]
  fn only_local_paths_are_kept() {
    assert_eq!(local_path(Some("/servicii/laser")), "/servicii/laser");
    assert_eq!(local_path(Some("/en/?x=1")), "/en/?x=1");
    assert_eq!(local_path(Some("//evil.example")), "/");
    assert_eq!(local_path(Some("https://evil.example/")), "/");
    assert_eq!(local_path(Some("/\\evil")), "/");
    assert_eq!(local_path(None), "/");
  }

  #[test]
  fn control_characters_fall_back_to_home() {
    assert_eq!(local_path(Some("/x\ny")), "/");
    assert_eq!(local_path(Some("/servicii\r\nSet-Cookie: a=b")), "/");
    assert_eq!(local_path(Some("/x\u{7f}")), "/");
    assert_eq!(local_path(Some("/x\ty")), "/");
    assert_eq!(local_path(Some("/servicii/laser?q=ă")), "/servicii/laser?q=ă");
  }
}
