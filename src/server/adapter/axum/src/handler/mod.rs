/* src/server/adapter/axum/src/handler/mod.rs */

mod locale;
mod page;

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::routing::{MethodRouter, get};
use canis_server::Site;
use tower_http::services::ServeDir;

pub(crate) struct AppState {
  pub site: Arc<Site>,
}

/// Pages and the locale switch endpoint, with static assets from `public_dir`
/// consulted before page routing when given.
pub(crate) fn build_router(site: Arc<Site>, public_dir: Option<&Path>) -> Router {
  let state = Arc::new(AppState { site });

  // GET and HEAD only; other methods get 405
  let pages: MethodRouter = get(page::handle_page).with_state(state.clone());

  let router = Router::new()
    .route("/_canis/locale/{target}", get(locale::handle_switch))
    .with_state(state);

  match public_dir {
    Some(dir) => router.fallback_service(ServeDir::new(dir).fallback(pages)),
    None => router.fallback_service(pages),
  }
}
