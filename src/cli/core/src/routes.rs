/* src/cli/core/src/routes.rs */

use std::path::Path;

use anyhow::Result;
use canis_engine::{PageKey, PageRef};

use crate::config::CanisConfig;
use crate::load::load_site;
use crate::ui;

fn page_label(page: PageKey) -> String {
  match page {
    PageKey::Home => "home".to_string(),
    PageKey::Service(s) => s.to_string(),
  }
}

fn rows(pages: &[PageRef]) -> Vec<Vec<String>> {
  pages.iter().map(|p| vec![p.locale.clone(), page_label(p.page), p.path.clone()]).collect()
}

pub fn run_routes(config: &CanisConfig, base_dir: &Path) -> Result<()> {
  ui::banner("routes", Some(&config.project.name));
  let site = load_site(config, base_dir)?;
  ui::blank();
  let pages = site.pages();
  ui::table(&rows(&pages));
  ui::blank();
  ui::ok(&format!("{} pages", pages.len()));
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use canis_engine::Service;

  #[test]
  fn rows_show_locale_page_and_path() {
    let pages = vec![
      PageRef { locale: "ro".into(), page: PageKey::Home, path: "/".into() },
      PageRef {
        locale: "en".into(),
        page: PageKey::Service(Service::Laser),
        path: "/en/servicii/laser".into(),
      },
    ];
    assert_eq!(rows(&pages), vec![vec!["ro", "home", "/"], vec!["en", "laser", "/en/servicii/laser"]]);
  }
}
