/* src/server/adapter/axum/src/lib.rs */

mod error;
mod handler;

use std::path::PathBuf;
use std::sync::Arc;

use canis_server::Site;

/// Re-export canis-server core for convenience
pub use canis_server;

/// Extension trait that converts a loaded site into an Axum router.
pub trait IntoAxumRouter {
  fn into_axum_router(self) -> axum::Router;
}

impl IntoAxumRouter for Arc<Site> {
  fn into_axum_router(self) -> axum::Router {
    handler::build_router(self, None)
  }
}

impl IntoAxumRouter for Site {
  fn into_axum_router(self) -> axum::Router {
    Arc::new(self).into_axum_router()
  }
}

/// A site served together with a directory of static assets (styles,
/// scripts, images). Files win over pages for the paths they exist at.
pub struct SiteWithAssets {
  pub site: Arc<Site>,
  pub public_dir: PathBuf,
}

impl IntoAxumRouter for SiteWithAssets {
  fn into_axum_router(self) -> axum::Router {
    handler::build_router(self.site, Some(&self.public_dir))
  }
}
