use crate::locale::Locale;

/// Cookie remembering the visitor's last locale.
pub const LOCALE_COOKIE: &str = "SITE_LOCALE";

/// Locale preference for a visitor arriving on an unprefixed path:
/// cookie first, then `Accept-Language`, then the default locale.
pub fn negotiate(cookie_header: Option<&str>, accept_language: Option<&str>) -> Locale {
  cookie_header
    .and_then(|h| from_cookie(h, LOCALE_COOKIE))
    .or_else(|| accept_language.and_then(from_accept_language))
    .unwrap_or(Locale::DEFAULT)
}

/// `Set-Cookie` value persisting `locale`.
pub fn locale_cookie(locale: Locale) -> String {
  format!("{LOCALE_COOKIE}={locale}; Path=/; SameSite=Lax")
}

pub fn from_cookie(header: &str, name: &str) -> Option<Locale> {
  header
    .split(';')
    .filter_map(|pair| pair.trim().split_once('='))
    .filter(|(k, _)| k.trim() == name)
    .find_map(|(_, v)| v.trim().parse().ok())
}

/// Highest-q language tag naming a supported locale. `en-GB` matches `en`;
/// entries with `q=0` are ignored.
pub fn from_accept_language(header: &str) -> Option<Locale> {
  let mut entries: Vec<(&str, f64)> = Vec::new();
  for part in header.split(',') {
    let mut segments = part.split(';');
    let lang = segments.next().unwrap_or("").trim();
    if lang.is_empty() {
      continue;
    }
    let mut q = 1.0_f64;
    for s in segments {
      if let Some(v) = s.trim().strip_prefix("q=").and_then(|v| v.parse::<f64>().ok()) {
        q = v;
      }
    }
    if q > 0.0 {
      entries.push((lang, q));
    }
  }

  // stable: equal q keeps header order
  entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

  entries.iter().find_map(|(lang, _)| {
    let primary = lang.split('-').next().unwrap_or(lang);
    primary.to_ascii_lowercase().parse().ok()
  })
}
