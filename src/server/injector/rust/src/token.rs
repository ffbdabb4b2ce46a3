/* src/server/injector/rust/src/token.rs */

#[derive(Debug)]
pub(crate) enum Token {
  Text(String),
  /// Directive body between `<!--canis:` and `-->`
  Marker(String),
}

pub(crate) const MARKER_OPEN: &str = "<!--canis:";
pub(crate) const MARKER_CLOSE: &str = "-->";

pub(crate) fn tokenize(template: &str) -> Vec<Token> {
  let mut tokens = Vec::new();
  let mut rest = template;

  while !rest.is_empty() {
    let Some(open) = rest.find(MARKER_OPEN) else {
      tokens.push(Token::Text(rest.to_string()));
      break;
    };
    if open > 0 {
      tokens.push(Token::Text(rest[..open].to_string()));
    }
    let body = &rest[open + MARKER_OPEN.len()..];
    match body.find(MARKER_CLOSE) {
      Some(close) => {
        tokens.push(Token::Marker(body[..close].trim().to_string()));
        rest = &body[close + MARKER_CLOSE.len()..];
      }
      None => {
        // Unclosed marker: keep the remainder verbatim
        tokens.push(Token::Text(rest[open..].to_string()));
        break;
      }
    }
  }

  tokens
}
