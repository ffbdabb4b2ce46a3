/* src/cli/core/src/load.rs */

use std::path::Path;

use anyhow::{Context, Result, bail};
use canis_server::{LoadError, Site};

use crate::config::CanisConfig;
use crate::ui::{self, DIM, RESET};

/// Load and validate the site, listing every schema violation before failing.
pub fn load_site(config: &CanisConfig, base_dir: &Path) -> Result<Site> {
  let opts = config.site_options(base_dir)?;
  match Site::load(&opts) {
    Ok(site) => {
      for locale in site.registry().locales() {
        ui::detail_ok(&format!("{}/{locale}.json", config.i18n.messages_dir));
      }
      Ok(site)
    }
    Err(LoadError::Schema(report)) => {
      for violation in &report.violations {
        ui::fail(&format!("{violation}"));
      }
      bail!("catalog has {} problem(s)", report.violations.len())
    }
    Err(LoadError::Template { path, diagnostics }) => {
      for d in &diagnostics {
        ui::fail(&format!("{:?} {DIM}{}{RESET}", d.kind, d.directive));
      }
      bail!("invalid template {}", path.display())
    }
    Err(e) => Err(e).with_context(|| format!("failed to load site from {}", base_dir.display())),
  }
}
