/* src/server/engine/rust/src/render.rs */

use crate::escape::script_safe_json;
use crate::model::PageModel;
use crate::page::{ICON_LINKS, head_meta, inject_data_script, inject_head_meta, inject_html_lang};

pub const DATA_ID: &str = "__CANIS_DATA__";

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions<'a> {
  pub data_id: &'a str,
  /// Absolute origin prefixed to canonical and alternate links; may be empty.
  pub site_url: &'a str,
  pub default_locale: &'a str,
}

impl Default for RenderOptions<'_> {
  fn default() -> Self {
    Self { data_id: DATA_ID, site_url: "", default_locale: "ro" }
  }
}

/// Render a page: inject the model into the template, set `<html lang>`,
/// add head metadata and append the client data script.
pub fn render_page(template: &str, model: &PageModel, opts: &RenderOptions<'_>) -> String {
  // Step 1: slots
  let data = serde_json::to_value(model).unwrap_or_default();
  let mut html = canis_injector::inject(template, &data);

  // Step 2: head metadata; the not-found page gets no canonical links
  let meta = match model {
    PageModel::NotFound(m) => format!(
      r#"<title>{}</title><meta name="robots" content="noindex">{}"#,
      canis_injector::escape_html(&m.chrome.metadata.title),
      ICON_LINKS
    ),
    _ => head_meta(model, opts.site_url, opts.default_locale),
  };
  html = inject_head_meta(&html, &meta);

  // Step 3: <html lang>
  html = inject_html_lang(&html, model.locale());

  // Step 4: data script
  let json = serde_json::to_string(&model.client_data()).unwrap_or_default();
  inject_data_script(&html, opts.data_id, &script_safe_json(&json))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::locale::LocaleRegistry;
  use crate::resolve::Resolver;
  use crate::test_support::complete_catalog;

  const TEMPLATE: &str = concat!(
    r#"<!doctype html><html><head><meta charset="utf-8"></head><body>"#,
    "<h1><!--canis:service.title--></h1>",
    "<!--canis:each:alternates-->",
    "<!--canis:$.href:attr:href--><a><!--canis:$.label--></a>",
    "<!--canis:endeach-->",
    "</body></html>"
  );

  fn render(locale: &str, slug: &str, opts: &RenderOptions<'_>) -> String {
    let catalog = complete_catalog();
    let registry = LocaleRegistry::canis();
    let model = Resolver::new(&catalog, &registry).resolve_service(locale, slug).unwrap();
    render_page(TEMPLATE, &PageModel::Service(model), opts)
  }

  #[test]
  fn slots_lang_and_switcher() {
    let html = render("en", "laser", &RenderOptions::default());
    assert!(html.contains(r#"<html lang="en">"#));
    assert!(html.contains("<h1>EN laser title</h1>"));
    assert!(html.contains(r#"<a href="/servicii/laser">RO</a>"#));
    assert!(html.contains(r#"<a href="/en/servicii/laser">EN</a>"#));
  }

  #[test]
  fn head_carries_title_canonical_and_hreflang() {
    let opts = RenderOptions { site_url: "https://example.ro/", ..RenderOptions::default() };
    let html = render("en", "hrana", &opts);
    assert!(
      html.contains(r#"<meta charset="utf-8"><title>EN hrana title | EN metadata.title</title>"#)
    );
    assert!(html.contains(r#"<link rel="canonical" href="https://example.ro/en/servicii/hrana">"#));
    assert!(html.contains(r#"hreflang="ro" href="https://example.ro/servicii/hrana""#));
    assert!(html.contains(r#"hreflang="x-default" href="https://example.ro/servicii/hrana""#));
  }

  #[test]
  fn head_carries_icon_links() {
    let html = render("ro", "laser", &RenderOptions::default());
    let head = &html[..html.find("</head>").unwrap()];
    assert!(head.contains(
      r#"<link rel="icon" href="/icon-light-32x32.png" media="(prefers-color-scheme: light)">"#
    ));
    assert!(head.contains(
      r#"<link rel="icon" href="/icon-dark-32x32.png" media="(prefers-color-scheme: dark)">"#
    ));
    assert!(head.contains(r#"<link rel="icon" href="/icon.svg" type="image/svg+xml">"#));
    assert!(head.contains(r#"<link rel="apple-touch-icon" href="/apple-icon.png">"#));
    let description = head.find(r#"<meta name="description""#).unwrap();
    assert!(head.find("/icon.svg").unwrap() > description);
  }

  #[test]
  fn data_script_is_slim() {
    let html = render("ro", "laser", &RenderOptions::default());
    let start = html.find(r#"<script id="__CANIS_DATA__" type="application/json">"#).unwrap();
    let script = &html[start..];
    assert!(script.contains(r#""path":"/servicii/laser""#));
    assert!(script.contains(r#""counters":[]"#));
    assert!(!script.contains("features"));
  }

  #[test]
  fn not_found_is_noindex() {
    let catalog = complete_catalog();
    let registry = LocaleRegistry::canis();
    let model = Resolver::new(&catalog, &registry).resolve_not_found("ro").unwrap();
    let html = render_page(
      r#"<html><head><meta charset="utf-8"></head><body><!--canis:notFound.title--></body></html>"#,
      &PageModel::NotFound(model),
      &RenderOptions::default(),
    );
    assert!(html.contains(r#"<meta name="robots" content="noindex">"#));
    assert!(!html.contains("canonical"));
    assert!(html.contains(r#"<link rel="apple-touch-icon" href="/apple-icon.png">"#));
    assert!(html.contains("<body>RO notFound.title<script"));
  }
}
