pub mod case_study;
pub mod clock;
pub mod contact;
pub mod dictionary;
pub mod errors;
pub mod escape;
pub mod locale;
pub mod negotiate;
pub mod page;
pub mod routes;
pub mod server;
pub mod sitemap;

// Re-exports for ergonomic use
pub use case_study::{CaseStudies, CaseStudy, CaseStudyError, LocalizedCaseStudy, Neighbors};
pub use clock::{Clock, ManualClock, SystemClock};
pub use contact::{
  ContactEmail, ContactOutcome, ContactRequest, ContactService, DisabledMailer, FieldIssue,
  FixedWindowLimiter, MailError, MailSettings, Mailer, RateDecision, RateLimitConfig, RateLimiter,
  client_key,
};
pub use dictionary::{Dictionary, DictionaryError, DictionarySource, DictionaryStore};
pub use errors::SiteError;
pub use escape::{escape_html, strip_newlines};
pub use locale::{Locale, UnknownLocale};
pub use negotiate::{LOCALE_COOKIE, locale_cookie, negotiate};
pub use page::{PageContext, PageView, render_page};
pub use routes::{
  LocaleSwitch, RouteError, RouteMatch, RouteParams, RouteTable, canonical_path, route_params,
};
pub use server::{DEFAULT_BASE_URL, SiteParts, SiteServer};
pub use sitemap::{SitemapEntry, render_sitemap_xml, robots_txt, sitemap};
