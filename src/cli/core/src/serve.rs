/* src/cli/core/src/serve.rs */

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use canis_server_axum::{IntoAxumRouter, SiteWithAssets};

use crate::config::CanisConfig;
use crate::load::load_site;
use crate::ui::{self, DIM, RESET};

async fn shutdown_signal() {
  // An error here means no signal handler could be installed; serve until killed
  if tokio::signal::ctrl_c().await.is_err() {
    std::future::pending::<()>().await;
  }
}

pub async fn run_serve(config: &CanisConfig, base_dir: &Path, port: Option<u16>) -> Result<()> {
  ui::banner("serve", Some(&config.project.name));
  let site = Arc::new(load_site(config, base_dir)?);
  let page_count = site.pages().len();
  let app = SiteWithAssets { site, public_dir: base_dir.join(&config.build.public_dir) }
    .into_axum_router();

  let port = port.unwrap_or(config.serve.port);
  let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
    .await
    .with_context(|| format!("failed to bind port {port}"))?;
  let local = listener.local_addr()?;
  ui::blank();
  ui::ok(&format!("serving {page_count} pages on http://localhost:{}", local.port()));
  ui::detail(&format!("{DIM}press ctrl-c to stop{RESET}"));

  axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await.context("server error")?;
  ui::arrow("stopped");
  Ok(())
}
