use std::fmt;

#[derive(Debug)]
pub struct SiteError {
  code: String,
  message: String,
  status: u16,
}

fn default_status(code: &str) -> u16 {
  match code {
    "VALIDATION_ERROR" => 400,
    "NOT_FOUND" => 404,
    "RATE_LIMITED" => 429,
    "INTERNAL_ERROR" => 500,
    _ => 500,
  }
}

impl SiteError {
  pub fn new(code: impl Into<String>, message: impl Into<String>, status: u16) -> Self {
    Self { code: code.into(), message: message.into(), status }
  }

  pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
    let code = code.into();
    let status = default_status(&code);
    Self { code, message: message.into(), status }
  }

  pub fn validation(msg: impl Into<String>) -> Self {
    Self::with_code("VALIDATION_ERROR", msg)
  }

  pub fn not_found(msg: impl Into<String>) -> Self {
    Self::with_code("NOT_FOUND", msg)
  }

  pub fn internal(msg: impl Into<String>) -> Self {
    Self::with_code("INTERNAL_ERROR", msg)
  }

  pub fn rate_limited(msg: impl Into<String>) -> Self {
    Self::with_code("RATE_LIMITED", msg)
  }

  pub fn code(&self) -> &str {
    &self.code
  }

  pub fn message(&self) -> &str {
    &self.message
  }

  pub fn status(&self) -> u16 {
    self.status
  }
}

impl fmt::Display for SiteError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}: {}", self.code, self.message)
  }
}

impl std::error::Error for SiteError {}

impl From<crate::locale::UnknownLocale> for SiteError {
  fn from(err: crate::locale::UnknownLocale) -> Self {
    Self::not_found(err.to_string())
  }
}

impl From<crate::routes::RouteError> for SiteError {
  fn from(err: crate::routes::RouteError) -> Self {
    Self::internal(err.to_string())
  }
}

impl From<crate::case_study::CaseStudyError> for SiteError {
  fn from(err: crate::case_study::CaseStudyError) -> Self {
    Self::internal(err.to_string())
  }
}

impl From<crate::dictionary::DictionaryError> for SiteError {
  fn from(err: crate::dictionary::DictionaryError) -> Self {
    Self::internal(err.to_string())
  }
}
