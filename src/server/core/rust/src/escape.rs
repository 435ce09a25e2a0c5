/// Escape the five HTML-significant characters (`& < > " '`).
/// Also used for XML text and attribute values.
pub fn escape_html(text: &str) -> String {
  let mut out = String::with_capacity(text.len());
  for ch in text.chars() {
    match ch {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#039;"),
      _ => out.push(ch),
    }
  }
  out
}

/// Remove CR and LF so a value cannot start a new header line.
pub fn strip_newlines(text: &str) -> String {
  text.chars().filter(|c| !matches!(c, '\r' | '\n')).collect()
}

/// Percent-encode a query-string value. Unreserved characters and `/` pass through.
pub fn encode_query_value(value: &str) -> String {
  let mut out = String::with_capacity(value.len());
  for b in value.bytes() {
    if b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.' | b'~' | b'/') {
      out.push(b as char);
    } else {
      out.push_str(&format!("%{b:02X}"));
    }
  }
  out
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn passthrough_plain_text() {
    assert_eq!(escape_html("Jan Kowalski"), "Jan Kowalski");
    assert_eq!(escape_html("Żółć"), "Żółć");
  }

  #[test]
  fn escapes_script_tag() {
    assert_eq!(escape_html("<script>"), "&lt;script&gt;");
  }

  #[test]
  fn escapes_all_five() {
    assert_eq!(escape_html(r#"a&b<c>d"e'f"#), "a&amp;b&lt;c&gt;d&quot;e&#039;f");
  }

  #[test]
  fn ampersand_not_double_escaped_in_one_pass() {
    assert_eq!(escape_html("&lt;"), "&amp;lt;");
  }

  #[test]
  fn query_value_encoding() {
    assert_eq!(encode_query_value("/en/portfolio/celtic"), "/en/portfolio/celtic");
    assert_eq!(encode_query_value("/o-nas?x=1&y=2"), "/o-nas%3Fx%3D1%26y%3D2");
    assert_eq!(encode_query_value("ż"), "%C5%BC");
  }

  #[test]
  fn strips_crlf() {
    assert_eq!(strip_newlines("Jan\r\nBcc: evil@example.com"), "JanBcc: evil@example.com");
    assert_eq!(strip_newlines("a\nb\rc"), "abc");
    assert_eq!(strip_newlines("clean"), "clean");
  }
}
