use std::borrow::Cow;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use serde_json::Value;

use crate::locale::Locale;

use super::types::Dictionary;

const EMBEDDED_PL: &str = include_str!("../../locales/pl.json");
const EMBEDDED_EN: &str = include_str!("../../locales/en.json");

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionarySource {
  /// Locale files compiled into the binary.
  Embedded,
  /// `<dir>/<locale>.json`
  Directory(PathBuf),
}

#[derive(Debug)]
pub enum DictionaryError {
  Io { path: PathBuf, source: std::io::Error },
  Parse { locale: Locale, source: serde_json::Error },
  /// The locale files differ in keys, nesting or array lengths.
  ShapeMismatch { path: String, detail: String },
}

impl fmt::Display for DictionaryError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Io { path, source } => write!(f, "failed to read {}: {source}", path.display()),
      Self::Parse { locale, source } => write!(f, "invalid {locale} dictionary: {source}"),
      Self::ShapeMismatch { path, detail } => {
        write!(f, "dictionaries differ at \"{path}\": {detail}")
      }
    }
  }
}

impl std::error::Error for DictionaryError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Self::Io { source, .. } => Some(source),
      Self::Parse { source, .. } => Some(source),
      Self::ShapeMismatch { .. } => None,
    }
  }
}

/// Lazily loaded, per-locale dictionaries. Each locale is parsed at most once
/// per store; concurrent first loads race harmlessly and the first stored
/// value wins.
#[derive(Debug)]
pub struct DictionaryStore {
  source: DictionarySource,
  pl: OnceLock<Arc<Dictionary>>,
  en: OnceLock<Arc<Dictionary>>,
}

impl DictionaryStore {
  pub fn new(source: DictionarySource) -> Self {
    Self { source, pl: OnceLock::new(), en: OnceLock::new() }
  }

  pub fn embedded() -> Self {
    Self::new(DictionarySource::Embedded)
  }

  pub fn from_dir(dir: impl Into<PathBuf>) -> Self {
    Self::new(DictionarySource::Directory(dir.into()))
  }

  pub fn source(&self) -> &DictionarySource {
    &self.source
  }

  fn slot(&self, locale: Locale) -> &OnceLock<Arc<Dictionary>> {
    match locale {
      Locale::Pl => &self.pl,
      Locale::En => &self.en,
    }
  }

  /// Dictionary for `locale`, loading it on first access.
  pub fn get(&self, locale: Locale) -> Result<Arc<Dictionary>, DictionaryError> {
    let slot = self.slot(locale);
    if let Some(dict) = slot.get() {
      return Ok(Arc::clone(dict));
    }
    let raw = self.read_raw(locale)?;
    let loaded = Arc::new(parse_dictionary(locale, &raw)?);
    Ok(Arc::clone(slot.get_or_init(|| loaded)))
  }

  /// Load every locale and verify the files are structurally identical.
  pub fn preload(&self) -> Result<(), DictionaryError> {
    let mut raws = Vec::with_capacity(Locale::ALL.len());
    for locale in Locale::ALL {
      let raw = self.read_raw(locale)?;
      let value: Value = serde_json::from_str(&raw)
        .map_err(|source| DictionaryError::Parse { locale, source })?;
      raws.push((locale, raw, value));
    }

    if let Some(((_, _, first), rest)) = raws.split_first() {
      for (_, _, other) in rest {
        compare_shape(first, other, "")?;
      }
    }

    for (locale, raw, _) in raws {
      let dict = Arc::new(parse_dictionary(locale, &raw)?);
      let _ = self.slot(locale).set(dict);
    }
    Ok(())
  }

  fn read_raw(&self, locale: Locale) -> Result<Cow<'static, str>, DictionaryError> {
    match &self.source {
      DictionarySource::Embedded => Ok(Cow::Borrowed(match locale {
        Locale::Pl => EMBEDDED_PL,
        Locale::En => EMBEDDED_EN,
      })),
      DictionarySource::Directory(dir) => read_locale_file(dir, locale).map(Cow::Owned),
    }
  }
}

impl Default for DictionaryStore {
  fn default() -> Self {
    Self::embedded()
  }
}

fn read_locale_file(dir: &Path, locale: Locale) -> Result<String, DictionaryError> {
  let path = dir.join(format!("{locale}.json"));
  std::fs::read_to_string(&path).map_err(|source| DictionaryError::Io { path, source })
}

fn parse_dictionary(locale: Locale, raw: &str) -> Result<Dictionary, DictionaryError> {
  serde_json::from_str(raw).map_err(|source| DictionaryError::Parse { locale, source })
}

fn kind(value: &Value) -> &'static str {
  match value {
    Value::Null => "null",
    Value::Bool(_) => "boolean",
    Value::Number(_) => "number",
    Value::String(_) => "string",
    Value::Array(_) => "array",
    Value::Object(_) => "object",
  }
}

fn join(path: &str, key: &str) -> String {
  if path.is_empty() { key.to_string() } else { format!("{path}.{key}") }
}

/// Compare two JSON trees for identical keys, nesting and array lengths.
/// Leaf values are only compared by kind.
pub fn compare_shape(a: &Value, b: &Value, path: &str) -> Result<(), DictionaryError> {
  let mismatch =
    |detail: String| DictionaryError::ShapeMismatch { path: path.to_string(), detail };

  match (a, b) {
    (Value::Object(left), Value::Object(right)) => {
      if let Some(key) = left.keys().find(|k| !right.contains_key(*k)) {
        return Err(DictionaryError::ShapeMismatch {
          path: join(path, key),
          detail: "key missing from second locale".into(),
        });
      }
      if let Some(key) = right.keys().find(|k| !left.contains_key(*k)) {
        return Err(DictionaryError::ShapeMismatch {
          path: join(path, key),
          detail: "key missing from first locale".into(),
        });
      }
      for (key, value) in left {
        compare_shape(value, &right[key], &join(path, key))?;
      }
      Ok(())
    }
    (Value::Array(left), Value::Array(right)) => {
      if left.len() != right.len() {
        return Err(mismatch(format!("array lengths {} and {}", left.len(), right.len())));
      }
      for (i, (l, r)) in left.iter().zip(right).enumerate() {
        compare_shape(l, r, &format!("{path}[{i}]"))?;
      }
      Ok(())
    }
    _ if kind(a) == kind(b) => Ok(()),
    _ => Err(mismatch(format!("{} vs {}", kind(a), kind(b)))),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn embedded_dictionaries_load() {
    let store = DictionaryStore::embedded();
    let pl = store.get(Locale::Pl).unwrap();
    let en = store.get(Locale::En).unwrap();
    assert_eq!(pl.nav.services, "Usługi");
    assert_eq!(en.nav.services, "Services");
  }

  #[test]
  fn embedded_dictionaries_are_isomorphic() {
    DictionaryStore::embedded().preload().unwrap();
  }

  #[test]
  fn get_is_cached() {
    let store = DictionaryStore::embedded();
    let a = store.get(Locale::En).unwrap();
    let b = store.get(Locale::En).unwrap();
    assert!(Arc::ptr_eq(&a, &b));
  }

  #[test]
  fn missing_key_detected() {
    let err = compare_shape(&json!({"nav": {"a": "x", "b": "y"}}), &json!({"nav": {"a": "x"}}), "")
      .unwrap_err();
    match err {
      DictionaryError::ShapeMismatch { path, .. } => assert_eq!(path, "nav.b"),
      other => panic!("unexpected {other}"),
    }
  }

  #[test]
  fn extra_key_detected() {
    let err = compare_shape(&json!({"a": "x"}), &json!({"a": "x", "z": "y"}), "").unwrap_err();
    assert!(err.to_string().contains("\"z\""));
    assert!(err.to_string().contains("first locale"));
  }

  #[test]
  fn array_length_detected() {
    let err =
      compare_shape(&json!({"p": {"points": ["a", "b"]}}), &json!({"p": {"points": ["a"]}}), "")
        .unwrap_err();
    match err {
      DictionaryError::ShapeMismatch { path, detail } => {
        assert_eq!(path, "p.points");
        assert_eq!(detail, "array lengths 2 and 1");
      }
      other => panic!("unexpected {other}"),
    }
  }

  #[test]
  fn nested_array_elements_compared() {
    let err = compare_shape(&json!([{"a": 1}]), &json!([{"b": 1}]), "steps").unwrap_err();
    assert!(err.to_string().contains("steps[0].a"));
  }

  #[test]
  fn leaf_kind_mismatch_detected() {
    assert!(compare_shape(&json!({"a": "x"}), &json!({"a": ["x"]}), "").is_err());
    assert!(compare_shape(&json!({"a": "x"}), &json!({"a": "different text"}), "").is_ok());
  }

  #[test]
  fn directory_source_reads_files() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("pl.json"), EMBEDDED_PL).unwrap();
    std::fs::write(dir.path().join("en.json"), EMBEDDED_EN).unwrap();
    let store = DictionaryStore::from_dir(dir.path());
    store.preload().unwrap();
    assert_eq!(store.get(Locale::Pl).unwrap().contact.title, "Kontakt");
  }

  #[test]
  fn directory_source_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = DictionaryStore::from_dir(dir.path());
    let err = store.get(Locale::En).unwrap_err();
    assert!(matches!(err, DictionaryError::Io { .. }));
    assert!(err.to_string().contains("en.json"));
  }

  #[test]
  fn unknown_key_rejected_by_typed_parse() {
    let mut value: Value = serde_json::from_str(EMBEDDED_EN).unwrap();
    value["nav"]["blog"] = json!("Blog");
    let err = parse_dictionary(Locale::En, &value.to_string()).unwrap_err();
    assert!(err.to_string().contains("invalid en dictionary"));
  }

  #[test]
  fn preload_rejects_drift() {
    let dir = tempfile::tempdir().unwrap();
    let mut en: Value = serde_json::from_str(EMBEDDED_EN).unwrap();
    en["problem"]["points"].as_array_mut().unwrap().pop();
    std::fs::write(dir.path().join("pl.json"), EMBEDDED_PL).unwrap();
    std::fs::write(dir.path().join("en.json"), en.to_string()).unwrap();
    let err = DictionaryStore::from_dir(dir.path()).preload().unwrap_err();
    assert!(err.to_string().contains("problem.points"));
  }
}
