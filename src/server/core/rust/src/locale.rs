use std::fmt;
use std::str::FromStr;

/// The two language variants the site is published in.
/// `Pl` is the default locale and is served without a URL prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Locale {
  Pl,
  En,
}

impl Locale {
  pub const ALL: [Locale; 2] = [Locale::Pl, Locale::En];
  pub const DEFAULT: Locale = Locale::Pl;

  pub fn as_str(self) -> &'static str {
    match self {
      Self::Pl => "pl",
      Self::En => "en",
    }
  }

  /// The other member of the two-element locale set.
  pub fn other(self) -> Self {
    match self {
      Self::Pl => Self::En,
      Self::En => Self::Pl,
    }
  }

  pub fn is_default(self) -> bool {
    self == Self::DEFAULT
  }

  /// URL prefix for this locale: empty for the default locale, `/en` otherwise.
  pub fn prefix(self) -> &'static str {
    match self {
      Self::Pl => "",
      Self::En => "/en",
    }
  }

  /// Open Graph style region tag.
  pub fn og_tag(self) -> &'static str {
    match self {
      Self::Pl => "pl_PL",
      Self::En => "en_US",
    }
  }

  /// Split a locale prefix off a request path.
  /// `/en/about` -> `(En, "/about")`, `/en` -> `(En, "/")`, `/uslugi` -> `(Pl, "/uslugi")`.
  /// The remainder never starts with `//`.
  pub fn split_prefix(path: &str) -> (Locale, &str) {
    for locale in Self::ALL {
      if locale.is_default() {
        continue;
      }
      let prefix = locale.prefix();
      if let Some(rest) = path.strip_prefix(prefix) {
        if rest.is_empty() {
          return (locale, "/");
        }
        if rest.starts_with('/') {
          return (locale, single_leading_slash(rest));
        }
      }
    }
    (Self::DEFAULT, single_leading_slash(path))
  }
}

fn single_leading_slash(path: &str) -> &str {
  let slashes = path.len() - path.trim_start_matches('/').len();
  if slashes > 1 { &path[slashes - 1..] } else { path }
}

impl fmt::Display for Locale {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLocale(pub String);

impl fmt::Display for UnknownLocale {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "unknown locale \"{}\"", self.0)
  }
}

impl std::error::Error for UnknownLocale {}

impl FromStr for Locale {
  type Err = UnknownLocale;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "pl" => Ok(Self::Pl),
      "en" => Ok(Self::En),
      other => Err(UnknownLocale(other.to_string())),
    }
  }
}

impl serde::Serialize for Locale {
  fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(self.as_str())
  }
}

impl<'de> serde::Deserialize<'de> for Locale {
  fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(serde::de::Error::custom)
  }
}
