use std::sync::Arc;
use std::time::Duration;

use crate::case_study::CaseStudies;
use crate::clock::{Clock, SystemClock};
use crate::contact::{
  ContactService, DisabledMailer, FixedWindowLimiter, MailSettings, Mailer, RateLimitConfig,
  RateLimiter,
};
use crate::dictionary::DictionaryStore;
use crate::errors::SiteError;
use crate::routes::RouteTable;

pub const DEFAULT_BASE_URL: &str = "https://swiftbuild.services";

/// Framework-agnostic parts extracted from `SiteServer`.
/// Adapter crates consume this to build framework-specific routers.
pub struct SiteParts {
  pub routes: Arc<RouteTable>,
  pub dictionaries: Arc<DictionaryStore>,
  pub case_studies: Arc<CaseStudies>,
  pub contact: Arc<ContactService>,
  pub base_url: String,
  /// Redirect unprefixed visits to `/en` when cookie or `Accept-Language` asks for it.
  pub locale_detection: bool,
  /// How often expired rate-limit records are swept.
  pub sweep_interval: Duration,
}

pub struct SiteServer {
  routes: Option<RouteTable>,
  dictionaries: Option<DictionaryStore>,
  case_studies: Option<CaseStudies>,
  rate_limit: RateLimitConfig,
  clock: Arc<dyn Clock>,
  limiter: Option<Arc<dyn RateLimiter>>,
  mailer: Arc<dyn Mailer>,
  mail: MailSettings,
  log_submissions: bool,
  base_url: String,
  locale_detection: bool,
}

impl SiteServer {
  pub fn new() -> Self {
    Self {
      routes: None,
      dictionaries: None,
      case_studies: None,
      rate_limit: RateLimitConfig::default(),
      clock: Arc::new(SystemClock),
      limiter: None,
      mailer: Arc::new(DisabledMailer),
      mail: MailSettings::default(),
      log_submissions: false,
      base_url: DEFAULT_BASE_URL.to_string(),
      locale_detection: true,
    }
  }

  pub fn routes(mut self, routes: RouteTable) -> Self {
    self.routes = Some(routes);
    self
  }

  pub fn dictionaries(mut self, store: DictionaryStore) -> Self {
    self.dictionaries = Some(store);
    self
  }

  pub fn case_studies(mut self, studies: CaseStudies) -> Self {
    self.case_studies = Some(studies);
    self
  }

  pub fn rate_limit(mut self, config: RateLimitConfig) -> Self {
    self.rate_limit = config;
    self
  }

  pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
    self.clock = clock;
    self
  }

  /// Replace the default fixed-window limiter entirely.
  pub fn limiter(mut self, limiter: Arc<dyn RateLimiter>) -> Self {
    self.limiter = Some(limiter);
    self
  }

  pub fn mailer(mut self, mailer: Arc<dyn Mailer>) -> Self {
    self.mailer = mailer;
    self
  }

  pub fn mail_settings(mut self, settings: MailSettings) -> Self {
    self.mail = settings;
    self
  }

  pub fn log_submissions(mut self, enabled: bool) -> Self {
    self.log_submissions = enabled;
    self
  }

  pub fn base_url(mut self, url: impl Into<String>) -> Self {
    self.base_url = url.into();
    self
  }

  pub fn locale_detection(mut self, enabled: bool) -> Self {
    self.locale_detection = enabled;
    self
  }

  /// Consume the builder, filling unset parts with the site's built-in data.
  pub fn into_parts(self) -> Result<SiteParts, SiteError> {
    if self.rate_limit.window.is_zero() {
      return Err(SiteError::validation("rate limit window must be greater than zero"));
    }
    let routes = match self.routes {
      Some(routes) => routes,
      None => RouteTable::site()?,
    };
    let case_studies = match self.case_studies {
      Some(studies) => studies,
      None => CaseStudies::builtin()?,
    };
    let limiter = self.limiter.unwrap_or_else(|| {
      Arc::new(FixedWindowLimiter::with_clock(self.rate_limit, self.clock.clone()))
    });
    let contact = ContactService::new(limiter, self.mailer, self.mail)
      .log_submissions(self.log_submissions);

    Ok(SiteParts {
      routes: Arc::new(routes),
      dictionaries: Arc::new(self.dictionaries.unwrap_or_default()),
      case_studies: Arc::new(case_studies),
      contact: Arc::new(contact),
      base_url: self.base_url.trim_end_matches('/').to_string(),
      locale_detection: self.locale_detection,
      sweep_interval: self.rate_limit.window,
    })
  }
}

impl Default for SiteServer {
  fn default() -> Self {
    Self::new()
  }
}
