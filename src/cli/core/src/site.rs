use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use swiftbuild_server::{
  CaseStudies, DictionaryStore, RateLimitConfig, RouteTable, SiteServer,
};

use crate::config::{SiteConfig, dictionaries_dir};
use crate::mail::{build_mailer, mail_settings};

pub fn dictionary_store(config: &SiteConfig, config_path: Option<&Path>) -> DictionaryStore {
  match dictionaries_dir(config, config_path) {
    Some(dir) => DictionaryStore::from_dir(dir),
    None => DictionaryStore::embedded(),
  }
}

/// Assemble a `SiteServer` from configuration. Dictionaries are preloaded so
/// a broken locale file fails at startup instead of on the first request.
pub fn build_site(config: &SiteConfig, config_path: Option<&Path>) -> Result<SiteServer> {
  let routes = RouteTable::site().context("invalid route table")?;
  let studies = CaseStudies::builtin().context("invalid case study data")?;
  let dictionaries = dictionary_store(config, config_path);
  dictionaries.preload().context("failed to load dictionaries")?;
  let mailer = build_mailer(&config.mail)?;

  Ok(
    SiteServer::new()
      .routes(routes)
      .case_studies(studies)
      .dictionaries(dictionaries)
      .rate_limit(RateLimitConfig {
        window: Duration::from_secs(config.contact.window_secs),
        max_requests: config.contact.max_requests,
      })
      .mailer(mailer)
      .mail_settings(mail_settings(&config.mail))
      .log_submissions(config.contact.log_submissions)
      .base_url(config.site.base_url.clone())
      .locale_detection(config.i18n.locale_detection),
  )
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_config_builds() {
    let parts = build_site(&SiteConfig::default(), None).unwrap().into_parts().unwrap();
    assert_eq!(parts.base_url, "https://swiftbuild.services");
    assert!(parts.locale_detection);
    assert_eq!(parts.contact.mailer_name(), "disabled");
  }

  #[test]
  fn missing_dictionary_dir_fails() {
    let tmp = tempfile::tempdir().unwrap();
    let mut config = SiteConfig::default();
    config.i18n.dictionaries_dir = Some(tmp.path().join("nope").display().to_string());
    let err = build_site(&config, None).err().unwrap();
    assert!(format!("{err:#}").contains("dictionaries"));
  }
}
