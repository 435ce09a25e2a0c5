use std::collections::HashSet;

use crate::locale::Locale;

use super::types::{
  LocaleSwitch, PathTemplate, RouteEntry, RouteError, RouteMatch, RouteParams, Segment,
};

/// Canonical key, Polish template, English template.
pub const SITE_ROUTES: &[(&str, &str, &str)] = &[
  ("/", "/", "/"),
  ("/uslugi", "/uslugi", "/services"),
  ("/realizacje", "/realizacje", "/portfolio"),
  ("/realizacje/[slug]", "/realizacje/[slug]", "/portfolio/[slug]"),
  ("/o-nas", "/o-nas", "/about"),
  ("/zespol", "/zespol", "/team"),
  ("/kontakt", "/kontakt", "/contact"),
  ("/polityka-prywatnosci", "/polityka-prywatnosci", "/privacy-policy"),
];

/// Static mapping from canonical route keys to per-locale URL templates.
#[derive(Debug, Clone)]
pub struct RouteTable {
  entries: Vec<RouteEntry>,
}

impl RouteTable {
  /// Build and validate a table from `(key, pl, en)` triples.
  pub fn new(defs: &[(&str, &str, &str)]) -> Result<Self, RouteError> {
    let mut seen = HashSet::new();
    let mut entries = Vec::with_capacity(defs.len());

    for (key, pl, en) in defs {
      let entry = RouteEntry {
        key: PathTemplate::parse(key)?,
        pl: PathTemplate::parse(pl)?,
        en: PathTemplate::parse(en)?,
      };
      if !seen.insert(entry.key().to_string()) {
        return Err(RouteError::DuplicateKey(entry.key().to_string()));
      }
      check_params(&entry)?;
      entries.push(entry);
    }

    Ok(Self { entries })
  }

  /// The site's route table.
  pub fn site() -> Result<Self, RouteError> {
    Self::new(SITE_ROUTES)
  }

  pub fn entries(&self) -> &[RouteEntry] {
    &self.entries
  }

  pub fn entry(&self, key: &str) -> Option<&RouteEntry> {
    self.entries.iter().find(|e| e.key() == key)
  }

  /// Forward resolution: canonical key + locale + params -> concrete path.
  pub fn resolve(
    &self,
    key: &str,
    locale: Locale,
    params: &RouteParams,
  ) -> Result<String, RouteError> {
    let entry = self.entry(key).ok_or_else(|| RouteError::UnknownRoute(key.to_string()))?;
    let path = entry
      .template(locale)
      .render(params)
      .map_err(|param| RouteError::MissingParam { key: key.to_string(), param })?;
    Ok(with_prefix(locale, &path))
  }

  /// Forward resolution for routes without dynamic segments.
  pub fn resolve_static(&self, key: &str, locale: Locale) -> Result<String, RouteError> {
    self.resolve(key, locale, &RouteParams::new())
  }

  /// Match an already unprefixed path against one locale's templates.
  /// Static templates are tried before dynamic ones.
  pub fn match_in(&self, path: &str, locale: Locale) -> Option<RouteMatch> {
    let by_static = self.entries.iter().filter(|e| !e.template(locale).is_dynamic());
    let by_dynamic = self.entries.iter().filter(|e| e.template(locale).is_dynamic());
    by_static.chain(by_dynamic).find_map(|entry| {
      entry.template(locale).capture(path).map(|params| RouteMatch {
        key: entry.key().to_string(),
        locale,
        params,
      })
    })
  }

  /// Inverse resolution of a concrete path, detecting the locale from its prefix.
  pub fn match_path(&self, path: &str) -> Option<RouteMatch> {
    let (locale, rest) = Locale::split_prefix(path);
    self.match_in(rest, locale)
  }

  /// Compute the equivalent of `path` in the other locale.
  ///
  /// Paths that match no route degrade to adding or removing the locale
  /// prefix without translating segments. Query and fragment are kept.
  pub fn switch_locale(&self, path: &str, current: Locale) -> LocaleSwitch {
    let target = current.other();
    let split_at = path.find(['?', '#']).unwrap_or(path.len());
    let (path_only, suffix) = path.split_at(split_at);
    let path_only = if path_only.is_empty() { "/" } else { path_only };

    let (_, rest) = Locale::split_prefix(path_only);
    let translated = self
      .match_in(rest, current)
      .and_then(|m| self.resolve(&m.key, target, &m.params).ok());

    let (base, translated) = match translated {
      Some(p) => (p, true),
      None => (naive_switch(path_only, target), false),
    };
    LocaleSwitch { locale: target, path: format!("{base}{suffix}"), translated }
  }

  /// Paths of a matched route in every locale, in `Locale::ALL` order.
  pub fn alternates(&self, m: &RouteMatch) -> Vec<(Locale, String)> {
    Locale::ALL
      .iter()
      .filter_map(|&locale| self.resolve(&m.key, locale, &m.params).ok().map(|p| (locale, p)))
      .collect()
  }
}

/// `path` with empty segments dropped: `/uslugi/` -> `/uslugi`,
/// `/realizacje//celtic` -> `/realizacje/celtic`, `//host` -> `/host`.
pub fn canonical_path(path: &str) -> String {
  let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
  format!("/{}", segments.join("/"))
}

fn with_prefix(locale: Locale, path: &str) -> String {
  let prefix = locale.prefix();
  if prefix.is_empty() {
    path.to_string()
  } else if path == "/" {
    prefix.to_string()
  } else {
    format!("{prefix}{path}")
  }
}

fn naive_switch(path: &str, target: Locale) -> String {
  let (_, rest) = Locale::split_prefix(path);
  with_prefix(target, rest)
}

/// Every dynamic segment of the key appears exactly once in each locale
/// template, and no template introduces one the key does not have.
fn check_params(entry: &RouteEntry) -> Result<(), RouteError> {
  let key_params: Vec<&str> = entry.key.params().collect();
  for locale in Locale::ALL {
    let template = entry.template(locale);
    let mismatch = |param: &str| RouteError::ParamMismatch {
      key: entry.key().to_string(),
      locale,
      param: param.to_string(),
    };
    for param in &key_params {
      let count = template
        .segments()
        .iter()
        .filter(|s| matches!(s, Segment::Dynamic(n) if n == param))
        .count();
      if count != 1 {
        return Err(mismatch(param));
      }
    }
    if let Some(extra) = template.params().find(|p| !key_params.contains(p)) {
      return Err(mismatch(extra));
    }
  }
  Ok(())
}
