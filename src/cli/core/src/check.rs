use std::path::Path;

use anyhow::{Result, bail};
use swiftbuild_server::{CaseStudies, DictionarySource, Locale, RouteTable, route_params};

use crate::config::SiteConfig;
use crate::site::dictionary_store;
use crate::ui;

/// Validate routes, case studies, dictionaries and mail settings without serving.
pub fn run_check(config: &SiteConfig, config_path: Option<&Path>) -> Result<()> {
  ui::banner("check");
  let mut failures = 0u32;

  match config_path {
    Some(path) => ui::ok(&format!("config {}", path.display())),
    None => ui::ok("config (built-in defaults)"),
  }

  let routes = match RouteTable::site() {
    Ok(routes) => {
      ui::ok(&format!("{} routes", routes.entries().len()));
      Some(routes)
    }
    Err(e) => {
      ui::fail(&format!("route table: {e}"));
      failures += 1;
      None
    }
  };

  match CaseStudies::builtin() {
    Ok(studies) => {
      ui::ok(&format!("{} case studies", studies.all().len()));
      if let Some(routes) = &routes {
        for slug in studies.slugs() {
          for locale in Locale::ALL {
            let params = route_params(&[("slug", slug)]);
            if let Err(e) = routes.resolve("/realizacje/[slug]", locale, &params) {
              ui::fail(&format!("case study \"{slug}\" ({locale}): {e}"));
              failures += 1;
            }
          }
        }
      }
    }
    Err(e) => {
      ui::fail(&format!("case studies: {e}"));
      failures += 1;
    }
  }

  let store = dictionary_store(config, config_path);
  match store.preload() {
    Ok(()) => match store.source() {
      DictionarySource::Embedded => ui::ok("dictionaries (embedded)"),
      DictionarySource::Directory(dir) => ui::ok(&format!("dictionaries {}", dir.display())),
    },
    Err(e) => {
      ui::fail(&format!("dictionaries: {e}"));
      failures += 1;
    }
  }

  ui::ok(&format!("mail provider: {}", config.mail.provider.as_str()));
  if !config.i18n.locale_detection {
    ui::warn("locale detection disabled");
  }
  if config.contact.log_submissions {
    ui::warn("contact submissions are logged; do not enable in production");
  }

  ui::blank();
  if failures > 0 {
    bail!("{failures} check(s) failed");
  }
  Ok(())
}
