use anyhow::{Result, bail};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteConfig {
  #[serde(default)]
  pub server: ServerSection,
  #[serde(default)]
  pub site: SiteSection,
  #[serde(default)]
  pub i18n: I18nSection,
  #[serde(default)]
  pub contact: ContactSection,
  #[serde(default)]
  pub mail: MailSection,
}

impl SiteConfig {
  pub fn validate(&self) -> Result<()> {
    self.site.validate()?;
    self.contact.validate()?;
    self.mail.validate()?;
    Ok(())
  }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSection {
  #[serde(default = "default_host")]
  pub host: String,
  #[serde(default = "default_port")]
  pub port: u16,
}

impl Default for ServerSection {
  fn default() -> Self {
    Self { host: default_host(), port: default_port() }
  }
}

impl ServerSection {
  pub fn addr(&self) -> String {
    format!("{}:{}", self.host, self.port)
  }
}

fn default_host() -> String {
  "0.0.0.0".to_string()
}

fn default_port() -> u16 {
  3000
}

#[derive(Debug, Clone, Deserialize)]
pub struct SiteSection {
  /// Absolute origin used for canonical links, sitemap and robots.
  #[serde(default = "default_base_url")]
  pub base_url: String,
}

impl Default for SiteSection {
  fn default() -> Self {
    Self { base_url: default_base_url() }
  }
}

impl SiteSection {
  pub fn validate(&self) -> Result<()> {
    let rest = self
      .base_url
      .strip_prefix("https://")
      .or_else(|| self.base_url.strip_prefix("http://"));
    match rest {
      Some(host) if !host.trim_end_matches('/').is_empty() => Ok(()),
      _ => bail!("site.base_url \"{}\" must be an absolute http(s) URL", self.base_url),
    }
  }
}

fn default_base_url() -> String {
  swiftbuild_server::DEFAULT_BASE_URL.to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct I18nSection {
  /// Redirect unprefixed visits to English based on cookie / Accept-Language.
  #[serde(default = "default_true")]
  pub locale_detection: bool,
  /// Directory holding `pl.json` and `en.json`; embedded copies are used when unset.
  pub dictionaries_dir: Option<String>,
}

impl Default for I18nSection {
  fn default() -> Self {
    Self { locale_detection: true, dictionaries_dir: None }
  }
}

fn default_true() -> bool {
  true
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContactSection {
  #[serde(default = "default_window_secs")]
  pub window_secs: u64,
  #[serde(default = "default_max_requests")]
  pub max_requests: u32,
  /// Log a redacted summary of each submission. Development only.
  #[serde(default)]
  pub log_submissions: bool,
}

impl Default for ContactSection {
  fn default() -> Self {
    Self {
      window_secs: default_window_secs(),
      max_requests: default_max_requests(),
      log_submissions: false,
    }
  }
}

impl ContactSection {
  pub fn validate(&self) -> Result<()> {
    if self.window_secs == 0 {
      bail!("contact.window_secs must be greater than 0");
    }
    if self.max_requests == 0 {
      bail!("contact.max_requests must be greater than 0");
    }
    Ok(())
  }
}

fn default_window_secs() -> u64 {
  60
}

fn default_max_requests() -> u32 {
  5
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MailProvider {
  #[default]
  Disabled,
  Resend,
}

impl MailProvider {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Disabled => "disabled",
      Self::Resend => "resend",
    }
  }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MailSection {
  #[serde(default)]
  pub provider: MailProvider,
  #[serde(default = "default_from")]
  pub from: String,
  #[serde(default = "default_to")]
  pub to: Vec<String>,
  /// Name of the environment variable holding the provider API key.
  #[serde(default = "default_api_key_env")]
  pub api_key_env: String,
  #[serde(default = "default_endpoint")]
  pub endpoint: String,
  /// Upper bound for one delivery request.
  #[serde(default = "default_mail_timeout_secs")]
  pub timeout_secs: u64,
}

impl Default for MailSection {
  fn default() -> Self {
    Self {
      provider: MailProvider::default(),
      from: default_from(),
      to: default_to(),
      api_key_env: default_api_key_env(),
      endpoint: default_endpoint(),
      timeout_secs: default_mail_timeout_secs(),
    }
  }
}

impl MailSection {
  pub fn validate(&self) -> Result<()> {
    if self.provider == MailProvider::Disabled {
      return Ok(());
    }
    if self.from.trim().is_empty() {
      bail!("mail.from must not be empty");
    }
    if self.to.is_empty() {
      bail!("mail.to must list at least one recipient");
    }
    if self.timeout_secs == 0 {
      bail!("mail.timeout_secs must be greater than 0");
    }
    if self.api_key_env.trim().is_empty() {
      bail!("mail.api_key_env must name an environment variable");
    }
    Ok(())
  }
}

fn default_from() -> String {
  swiftbuild_server::MailSettings::default().from
}

fn default_to() -> Vec<String> {
  swiftbuild_server::MailSettings::default().to
}

fn default_api_key_env() -> String {
  "RESEND_API_KEY".to_string()
}

fn default_endpoint() -> String {
  "https://api.resend.com/emails".to_string()
}

fn default_mail_timeout_secs() -> u64 {
  10
}
