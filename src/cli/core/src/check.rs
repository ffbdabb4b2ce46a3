/* src/cli/core/src/check.rs */

use std::path::Path;

use anyhow::Result;
use canis_engine::Service;

use crate::config::CanisConfig;
use crate::load::load_site;
use crate::ui;

pub fn run_check(config: &CanisConfig, base_dir: &Path) -> Result<()> {
  ui::banner("check", Some(&config.project.name));
  ui::step(1, 1, "Validating catalogs and templates");
  let site = load_site(config, base_dir)?;
  ui::blank();
  ui::ok(&format!(
    "{} locales \u{00b7} {} services \u{00b7} {} pages",
    site.registry().locales().len(),
    Service::ALL.len(),
    site.pages().len(),
  ));
  Ok(())
}
