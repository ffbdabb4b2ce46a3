/* src/server/engine/rust/src/page.rs */

use std::fmt::Write;

use canis_injector::escape_html;

use crate::model::PageModel;

/// Inject a `<script>` tag with JSON data before `</body>`.
pub fn inject_data_script(html: &str, data_id: &str, json: &str) -> String {
  let script = format!(r#"<script id="{data_id}" type="application/json">{json}</script>"#);
  match html.rfind("</body>") {
    Some(pos) => {
      let mut result = String::with_capacity(html.len() + script.len());
      result.push_str(&html[..pos]);
      result.push_str(&script);
      result.push_str(&html[pos..]);
      result
    }
    None => format!("{html}{script}"),
  }
}

/// Set `<html lang="...">`, replacing a `lang` the template already carries.
pub fn inject_html_lang(html: &str, locale: &str) -> String {
  let Some(start) = html.find("<html") else { return html.to_string() };
  let tag_end = html[start..].find('>').map_or(html.len(), |i| start + i);
  let tag = &html[start..tag_end];
  if let Some(attr) = tag.find(" lang=\"") {
    let value_start = start + attr + " lang=\"".len();
    if let Some(len) = html[value_start..tag_end].find('"') {
      return format!("{}{locale}{}", &html[..value_start], &html[value_start + len..]);
    }
  }
  html.replacen("<html", &format!("<html lang=\"{locale}\""), 1)
}

/// Inject page-level head metadata after `<meta charset="utf-8">`.
pub fn inject_head_meta(html: &str, meta_html: &str) -> String {
  let charset = r#"<meta charset="utf-8">"#;
  let Some(pos) = html.find(charset) else { return html.to_string() };
  let insert_at = pos + charset.len();
  let mut result = String::with_capacity(html.len() + meta_html.len());
  result.push_str(&html[..insert_at]);
  result.push_str(meta_html);
  result.push_str(&html[insert_at..]);
  result
}

/// Favicons shared by every page, light and dark variants picked by the
/// browser's color scheme.
pub const ICON_LINKS: &str = concat!(
  r#"<link rel="icon" href="/icon-light-32x32.png" media="(prefers-color-scheme: light)">"#,
  r#"<link rel="icon" href="/icon-dark-32x32.png" media="(prefers-color-scheme: dark)">"#,
  r#"<link rel="icon" href="/icon.svg" type="image/svg+xml">"#,
  r#"<link rel="apple-touch-icon" href="/apple-icon.png">"#,
);

/// `<title>`, description, icons, canonical link and one `hreflang`
/// alternate per locale, plus `x-default` pointing at the default locale's URL.
pub fn head_meta(model: &PageModel, site_url: &str, default_locale: &str) -> String {
  let chrome = model.chrome();
  let base = site_url.trim_end_matches('/');
  let mut out = String::new();
  let _ = write!(out, "<title>{}</title>", escape_html(&chrome.metadata.title));
  let _ = write!(
    out,
    r#"<meta name="description" content="{}">"#,
    escape_html(&chrome.metadata.description)
  );
  out.push_str(ICON_LINKS);
  let _ = write!(out, r#"<link rel="canonical" href="{base}{}">"#, escape_html(&chrome.path));
  for alt in &chrome.alternates {
    let _ = write!(
      out,
      r#"<link rel="alternate" hreflang="{}" href="{base}{}">"#,
      alt.locale,
      escape_html(&alt.href)
    );
  }
  if let Some(default) = chrome.alternates.iter().find(|a| a.locale == default_locale) {
    let _ = write!(
      out,
      r#"<link rel="alternate" hreflang="x-default" href="{base}{}">"#,
      escape_html(&default.href)
    );
  }
  out
}
