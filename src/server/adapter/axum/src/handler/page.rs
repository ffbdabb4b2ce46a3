/* src/server/adapter/axum/src/handler/page.rs */

use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderValue, StatusCode, Uri, header};
use axum::response::{Html, IntoResponse, Response};

use super::AppState;
use crate::error::AxumError;

/// Render whatever page `uri` names. Unknown paths get the not-found page
/// with status 404; content errors surface as 500.
pub(super) async fn handle_page(
  State(state): State<Arc<AppState>>,
  uri: Uri,
) -> Result<Response, AxumError> {
  let page = state.site.render(uri.path())?;
  let status = StatusCode::from_u16(page.status).unwrap_or(StatusCode::OK);
  let mut response = (status, Html(page.html)).into_response();
  if let Ok(lang) = HeaderValue::from_str(&page.locale) {
    response.headers_mut().insert(header::CONTENT_LANGUAGE, lang);
  }
  Ok(response)
}
