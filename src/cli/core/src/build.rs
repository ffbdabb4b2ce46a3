/* src/cli/core/src/build.rs */

// Static build: validate content, render every page concurrently, then write
// HTML, per-locale 404 pages, the content-hash manifest and public assets.

use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use canis_engine::{LocaleRouter, PageKey};
use canis_server::BuiltPage;
use indicatif::{ProgressBar, ProgressStyle};
use sha2::{Digest, Sha256};

use crate::config::CanisConfig;
use crate::load::load_site;
use crate::ui::{self, DIM, RESET};

pub const PAGES_MANIFEST: &str = "pages.json";

/// `index.html` under the directory a canonical path names.
pub(crate) fn output_file(canonical_path: &str) -> PathBuf {
  let trimmed = canonical_path.trim_matches('/');
  if trimmed.is_empty() { PathBuf::from("index.html") } else { Path::new(trimmed).join("index.html") }
}

/// First 8 bytes of SHA-256, hex-encoded.
pub(crate) fn content_hash(html: &str) -> String {
  let hash = Sha256::digest(html.as_bytes());
  hex::encode(&hash[..8])
}

/// Page path (unprefixed) -> locale -> content hash.
pub(crate) fn pages_manifest(pages: &[BuiltPage]) -> BTreeMap<String, BTreeMap<String, String>> {
  let mut manifest: BTreeMap<String, BTreeMap<String, String>> = BTreeMap::new();
  for built in pages {
    manifest
      .entry(built.page.page.path())
      .or_default()
      .insert(built.page.locale.clone(), content_hash(&built.html));
  }
  manifest
}

fn write_file(path: &Path, content: &str) -> Result<()> {
  if let Some(parent) = path.parent() {
    std::fs::create_dir_all(parent)
      .with_context(|| format!("failed to create {}", parent.display()))?;
  }
  std::fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
}

/// Lexically resolve `.` and `..` so `site/./public` and `site/out/..`
/// compare equal to what they name.
fn normalize(path: &Path) -> PathBuf {
  let mut out = PathBuf::new();
  for component in path.components() {
    match component {
      Component::CurDir => {}
      Component::ParentDir => {
        if !out.pop() {
          out.push(component);
        }
      }
      other => out.push(other),
    }
  }
  out
}

/// Resolve `build.out_dir` and refuse any location whose wipe would take
/// source content with it: the project root, the catalogs, the templates
/// or the public assets, or any directory inside one of them.
fn resolve_out_dir(config: &CanisConfig, base_dir: &Path) -> Result<PathBuf> {
  let out_dir = normalize(&base_dir.join(&config.build.out_dir));
  let sources = [
    ("project root", base_dir.to_path_buf()),
    ("i18n.messages_dir", base_dir.join(&config.i18n.messages_dir)),
    ("build.templates_dir", base_dir.join(&config.build.templates_dir)),
    ("build.public_dir", base_dir.join(&config.build.public_dir)),
  ];
  for (name, source) in sources {
    let source = normalize(&source);
    if source.starts_with(&out_dir) {
      bail!("build.out_dir {} would delete the {name} {}", out_dir.display(), source.display());
    }
    if name != "project root" && out_dir.starts_with(&source) {
      bail!("build.out_dir {} lies inside the {name} {}", out_dir.display(), source.display());
    }
  }
  Ok(out_dir)
}

fn reset_dir(out_dir: &Path) -> Result<()> {
  if out_dir.exists() {
    std::fs::remove_dir_all(out_dir)
      .with_context(|| format!("failed to clear {}", out_dir.display()))?;
  }
  std::fs::create_dir_all(out_dir).with_context(|| format!("failed to create {}", out_dir.display()))
}

pub(crate) fn copy_dir(src: &Path, dst: &Path) -> Result<(usize, u64)> {
  let mut files = 0;
  let mut bytes = 0;
  let entries = std::fs::read_dir(src).with_context(|| format!("failed to read {}", src.display()))?;
  for entry in entries {
    let entry = entry.with_context(|| format!("failed to read {}", src.display()))?;
    let name = entry.file_name();
    if name.to_string_lossy().starts_with('.') {
      continue;
    }
    let from = entry.path();
    let to = dst.join(&name);
    if entry.file_type()?.is_dir() {
      std::fs::create_dir_all(&to).with_context(|| format!("failed to create {}", to.display()))?;
      let (f, b) = copy_dir(&from, &to)?;
      files += f;
      bytes += b;
    } else {
      bytes += std::fs::copy(&from, &to)
        .with_context(|| format!("failed to copy {} to {}", from.display(), to.display()))?;
      files += 1;
    }
  }
  Ok((files, bytes))
}

pub async fn run_build(config: &CanisConfig, base_dir: &Path) -> Result<()> {
  let started = Instant::now();
  ui::banner("build", Some(&config.project.name));
  let out_dir = resolve_out_dir(config, base_dir)?;

  // [1/4] Load and validate content
  ui::step(1, 4, "Validating content");
  let site = Arc::new(load_site(config, base_dir)?);
  ui::blank();

  // [2/4] Render every page
  ui::step(2, 4, "Rendering pages");
  let pages = site.render_all().await.context("failed to render pages")?;
  ui::detail_ok(&format!("{} pages rendered", pages.len()));
  ui::blank();

  // [3/4] Write HTML and manifest
  ui::step(3, 4, "Writing output");
  reset_dir(&out_dir)?;

  let bar = ProgressBar::new(pages.len() as u64);
  bar.set_style(ProgressStyle::with_template("        {bar:30.green} {pos}/{len} {msg}")?);
  let mut total_bytes = 0;
  for built in &pages {
    bar.set_message(built.page.path.clone());
    write_file(&out_dir.join(output_file(&built.page.path)), &built.html)?;
    total_bytes += built.html.len() as u64;
    bar.inc(1);
  }
  bar.finish_and_clear();
  ui::detail_ok(&format!("{} HTML files  {DIM}({}){RESET}", pages.len(), ui::format_size(total_bytes)));

  let router = LocaleRouter::new(site.registry());
  for locale in site.registry().locales() {
    let home = router.canonical(locale, PageKey::Home);
    let not_found = site.render_not_found(&home)?;
    let rel = Path::new(home.trim_matches('/')).join("404.html");
    write_file(&out_dir.join(&rel), &not_found.html)?;
    ui::detail_ok(&rel.display().to_string());
  }

  let manifest = serde_json::to_string_pretty(&pages_manifest(&pages))?;
  write_file(&out_dir.join(PAGES_MANIFEST), &manifest)?;
  ui::detail_ok(PAGES_MANIFEST);
  ui::blank();

  // [4/4] Copy public assets
  ui::step(4, 4, "Copying public assets");
  let public_dir = base_dir.join(&config.build.public_dir);
  let (asset_count, asset_bytes) = if public_dir.is_dir() {
    copy_dir(&public_dir, &out_dir)?
  } else {
    ui::warn(&format!("{} not found, skipping assets", public_dir.display()));
    (0, 0)
  };
  ui::detail_ok(&format!("{asset_count} files  {DIM}({}){RESET}", ui::format_size(asset_bytes)));
  ui::blank();

  let elapsed = started.elapsed().as_secs_f64();
  ui::ok(&format!("build complete in {elapsed:.1}s"));
  ui::detail(&format!(
    "{} pages \u{00b7} {} locales \u{00b7} {asset_count} assets \u{00b7} {}",
    pages.len(),
    site.registry().locales().len(),
    out_dir.display(),
  ));
  Ok(())
}
