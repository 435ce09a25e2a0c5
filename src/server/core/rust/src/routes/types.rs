use std::collections::BTreeMap;
use std::fmt;

use crate::locale::Locale;

/// Dynamic parameter values keyed by segment name (`slug` for `[slug]`).
pub type RouteParams = BTreeMap<String, String>;

/// Build a `RouteParams` map from literal pairs.
pub fn route_params(pairs: &[(&str, &str)]) -> RouteParams {
  pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
  Static(String),
  /// `[name]` placeholder
  Dynamic(String),
}

/// A parsed path pattern such as `/realizacje/[slug]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTemplate {
  raw: String,
  segments: Vec<Segment>,
}

impl PathTemplate {
  pub fn parse(raw: &str) -> Result<Self, RouteError> {
    let invalid =
      |reason: &str| RouteError::InvalidTemplate { template: raw.to_string(), reason: reason.into() };

    if !raw.starts_with('/') {
      return Err(invalid("must start with '/'"));
    }

    let mut segments = Vec::new();
    for part in raw.split('/').filter(|p| !p.is_empty()) {
      if let Some(name) = part.strip_prefix('[').and_then(|p| p.strip_suffix(']')) {
        if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
          return Err(invalid("dynamic segment name must be [A-Za-z0-9_]+"));
        }
        segments.push(Segment::Dynamic(name.to_string()));
      } else if part.contains('[') || part.contains(']') {
        return Err(invalid("brackets are only allowed around a whole segment"));
      } else {
        segments.push(Segment::Static(part.to_string()));
      }
    }

    Ok(Self { raw: raw.to_string(), segments })
  }

  pub fn as_str(&self) -> &str {
    &self.raw
  }

  pub fn segments(&self) -> &[Segment] {
    &self.segments
  }

  /// Names of the dynamic segments, in path order.
  pub fn params(&self) -> impl Iterator<Item = &str> {
    self.segments.iter().filter_map(|s| match s {
      Segment::Dynamic(name) => Some(name.as_str()),
      Segment::Static(_) => None,
    })
  }

  pub fn is_dynamic(&self) -> bool {
    self.params().next().is_some()
  }

  /// Substitute params, returning the unprefixed path or the name of the
  /// first parameter that is missing or unusable in a path segment.
  pub(super) fn render(&self, params: &RouteParams) -> Result<String, String> {
    if self.segments.is_empty() {
      return Ok("/".to_string());
    }
    let mut out = String::new();
    for segment in &self.segments {
      out.push('/');
      match segment {
        Segment::Static(s) => out.push_str(s),
        Segment::Dynamic(name) => match params.get(name) {
          Some(value) if !value.is_empty() && !value.contains('/') => out.push_str(value),
          _ => return Err(name.clone()),
        },
      }
    }
    Ok(out)
  }

  /// Match an unprefixed path against this template. Static segments must be
  /// equal, dynamic segments capture any single non-empty segment.
  pub(super) fn capture(&self, path: &str) -> Option<RouteParams> {
    let parts: Vec<&str> = path.split('/').filter(|p| !p.is_empty()).collect();
    if parts.len() != self.segments.len() {
      return None;
    }
    let mut params = RouteParams::new();
    for (segment, part) in self.segments.iter().zip(parts) {
      match segment {
        Segment::Static(s) if s == part => {}
        Segment::Static(_) => return None,
        Segment::Dynamic(name) => {
          params.insert(name.clone(), part.to_string());
        }
      }
    }
    Some(params)
  }
}

impl fmt::Display for PathTemplate {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.raw)
  }
}

/// One canonical route with its per-locale templates.
#[derive(Debug, Clone)]
pub struct RouteEntry {
  pub(super) key: PathTemplate,
  pub(super) pl: PathTemplate,
  pub(super) en: PathTemplate,
}

impl RouteEntry {
  pub fn key(&self) -> &str {
    self.key.as_str()
  }

  pub fn key_template(&self) -> &PathTemplate {
    &self.key
  }

  pub fn template(&self, locale: Locale) -> &PathTemplate {
    match locale {
      Locale::Pl => &self.pl,
      Locale::En => &self.en,
    }
  }
}

/// Result of inverse resolution: which canonical route a concrete path is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
  pub key: String,
  pub locale: Locale,
  pub params: RouteParams,
}

/// Target of a locale toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleSwitch {
  pub locale: Locale,
  pub path: String,
  /// False when the path matched no route and was only prefixed/stripped.
  pub translated: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
  InvalidTemplate { template: String, reason: String },
  DuplicateKey(String),
  /// A locale template and its canonical key disagree on a dynamic segment.
  ParamMismatch { key: String, locale: Locale, param: String },
  UnknownRoute(String),
  MissingParam { key: String, param: String },
}

impl fmt::Display for RouteError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::InvalidTemplate { template, reason } => {
        write!(f, "invalid route template \"{template}\": {reason}")
      }
      Self::DuplicateKey(key) => write!(f, "duplicate route key \"{key}\""),
      Self::ParamMismatch { key, locale, param } => write!(
        f,
        "route \"{key}\": [{param}] must appear exactly once in the {locale} template and in the key"
      ),
      Self::UnknownRoute(key) => write!(f, "unknown route key \"{key}\""),
      Self::MissingParam { key, param } => {
        write!(f, "route \"{key}\" requires a non-empty \"{param}\" parameter")
      }
    }
  }
}

impl std::error::Error for RouteError {}
