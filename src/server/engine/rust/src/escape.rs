/* src/server/engine/rust/src/escape.rs */

use std::fmt::Write;

/// Make serialized JSON safe to embed in an inline `<script>` block.
///
/// Inside string literals, non-ASCII characters become `\uXXXX` (surrogate
/// pairs above the BMP) and `<`, `>`, `&` are escaped so catalog text can
/// never close the script tag. Existing escapes are copied untouched.
pub fn script_safe_json(json: &str) -> String {
  let mut out = String::with_capacity(json.len());
  let mut in_string = false;
  let mut chars = json.chars();

  while let Some(ch) = chars.next() {
    if !in_string {
      in_string = ch == '"';
      out.push(ch);
      continue;
    }
    match ch {
      '\\' => {
        out.push(ch);
        if let Some(next) = chars.next() {
          out.push(next);
        }
      }
      '"' => {
        in_string = false;
        out.push(ch);
      }
      '<' | '>' | '&' => push_unit(&mut out, ch as u32),
      c if c.is_ascii() => out.push(c),
      c => {
        let mut units = [0u16; 2];
        for unit in c.encode_utf16(&mut units) {
          push_unit(&mut out, u32::from(*unit));
        }
      }
    }
  }
  out
}

fn push_unit(out: &mut String, unit: u32) {
  let _ = write!(out, "\\u{unit:04x}");
}
