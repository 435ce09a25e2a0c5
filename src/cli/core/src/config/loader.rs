use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use super::SiteConfig;

pub const CONFIG_FILE: &str = "site.toml";

/// Walk upward from `start` to find `site.toml`, like Cargo.toml discovery
pub fn find_site_config(start: &Path) -> Result<PathBuf> {
  let mut dir =
    start.canonicalize().with_context(|| format!("failed to canonicalize {}", start.display()))?;
  loop {
    let candidate = dir.join(CONFIG_FILE);
    if candidate.is_file() {
      return Ok(candidate);
    }
    if !dir.pop() {
      bail!("{CONFIG_FILE} not found (searched upward from {})", start.display());
    }
  }
}

pub fn load_site_config(path: &Path) -> Result<SiteConfig> {
  let content =
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  let config: SiteConfig =
    toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))?;
  config.validate().with_context(|| format!("invalid {}", path.display()))?;
  Ok(config)
}

/// Apply a `PORT` value on top of the file configuration.
pub fn apply_port_override(config: &mut SiteConfig, port: Option<&str>) -> Result<()> {
  if let Some(raw) = port.map(str::trim).filter(|p| !p.is_empty()) {
    config.server.port =
      raw.parse().with_context(|| format!("PORT \"{raw}\" is not a valid port number"))?;
  }
  Ok(())
}

/// Explicit path, else discovered `site.toml`, else built-in defaults.
/// Returns the path actually loaded, if any.
pub fn resolve_config(explicit: Option<&Path>, cwd: &Path) -> Result<(Option<PathBuf>, SiteConfig)> {
  if let Some(path) = explicit {
    return Ok((Some(path.to_path_buf()), load_site_config(path)?));
  }
  match find_site_config(cwd) {
    Ok(path) => {
      let config = load_site_config(&path)?;
      Ok((Some(path), config))
    }
    Err(_) => Ok((None, SiteConfig::default())),
  }
}

/// Resolve `dictionaries_dir` against the directory containing the config file.
pub fn dictionaries_dir(config: &SiteConfig, config_path: Option<&Path>) -> Option<PathBuf> {
  let dir = PathBuf::from(config.i18n.dictionaries_dir.as_ref()?);
  if dir.is_absolute() {
    return Some(dir);
  }
  let base = config_path.and_then(Path::parent).unwrap_or_else(|| Path::new("."));
  Some(base.join(dir))
}
