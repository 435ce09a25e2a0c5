use std::sync::Arc;
use std::time::Duration;

use serde_json::{Value, json};

use super::mail::{Mailer, MailSettings, render_email};
use super::rate_limit::{RateDecision, RateLimiter};
use super::schema::{ContactRequest, FieldIssue, parse_submission};

const EXCERPT_CHARS: usize = 40;

/// Result of one contact submission, ready to be turned into a response.
#[derive(Debug, Clone, PartialEq)]
pub enum ContactOutcome {
  Accepted,
  Invalid(Vec<FieldIssue>),
  RateLimited { retry_after: Duration },
  Failed,
}

impl ContactOutcome {
  pub fn status(&self) -> u16 {
    match self {
      Self::Accepted => 200,
      Self::Invalid(_) => 400,
      Self::RateLimited { .. } => 429,
      Self::Failed => 500,
    }
  }

  pub fn body(&self) -> Value {
    match self {
      Self::Accepted => json!({"success": true, "message": "Message received"}),
      Self::Invalid(issues) => json!({"success": false, "errors": issues}),
      Self::RateLimited { .. } => {
        json!({"success": false, "message": "Too many requests. Please try again later."})
      }
      Self::Failed => json!({"success": false, "message": "Internal server error"}),
    }
  }
}

/// Redacted view of a submission that is safe to log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionSummary {
  pub name: String,
  pub company: String,
  pub email_domain: String,
  pub has_phone: bool,
  pub message_chars: usize,
  pub excerpt: String,
}

impl SubmissionSummary {
  pub fn of(req: &ContactRequest) -> Self {
    Self {
      name: req.name.clone(),
      company: req.company.clone().filter(|c| !c.is_empty()).unwrap_or_else(|| "N/A".to_string()),
      email_domain: req.email.rsplit_once('@').map(|(_, d)| d.to_string()).unwrap_or_default(),
      has_phone: req.phone.as_deref().is_some_and(|p| !p.is_empty()),
      message_chars: req.message.chars().count(),
      excerpt: req.message.chars().take(EXCERPT_CHARS).collect(),
    }
  }
}

/// Rate limit, validate, deliver.
pub struct ContactService {
  limiter: Arc<dyn RateLimiter>,
  mailer: Arc<dyn Mailer>,
  mail: MailSettings,
  log_submissions: bool,
}

impl ContactService {
  pub fn new(limiter: Arc<dyn RateLimiter>, mailer: Arc<dyn Mailer>, mail: MailSettings) -> Self {
    Self { limiter, mailer, mail, log_submissions: false }
  }

  /// Log a redacted summary of every accepted submission.
  pub fn log_submissions(mut self, enabled: bool) -> Self {
    self.log_submissions = enabled;
    self
  }

  pub fn limiter(&self) -> &Arc<dyn RateLimiter> {
    &self.limiter
  }

  pub fn mailer_name(&self) -> &'static str {
    self.mailer.name()
  }

  /// Quota is consumed before the body is looked at, so invalid submissions count too.
  pub async fn submit(&self, client_key: &str, body: &[u8]) -> ContactOutcome {
    if let RateDecision::Limited { retry_after } = self.limiter.check_and_consume(client_key) {
      tracing::warn!(client = %client_key, retry_after_secs = retry_after.as_secs(), "contact rate limit exceeded");
      return ContactOutcome::RateLimited { retry_after };
    }

    let request = match parse_submission(body) {
      Ok(request) => request,
      Err(issues) => {
        tracing::debug!(client = %client_key, issues = issues.len(), "contact submission rejected");
        return ContactOutcome::Invalid(issues);
      }
    };

    if self.log_submissions {
      let s = SubmissionSummary::of(&request);
      tracing::info!(
        name = %s.name,
        company = %s.company,
        email_domain = %s.email_domain,
        has_phone = s.has_phone,
        message_chars = s.message_chars,
        excerpt = %s.excerpt,
        "contact form submission"
      );
    }

    let email = render_email(&request, &self.mail);
    match self.mailer.send(email).await {
      Ok(()) => ContactOutcome::Accepted,
      Err(e) => {
        tracing::error!(mailer = self.mailer.name(), error = %e, "contact email delivery failed");
        ContactOutcome::Failed
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use std::sync::Mutex;

  use super::*;
  use crate::clock::ManualClock;
  use crate::contact::mail::{BoxFuture, ContactEmail, DisabledMailer, MailError};
  use crate::contact::rate_limit::{FixedWindowLimiter, RateLimitConfig};

  const VALID: &[u8] =
    br#"{"name":"Jan Kowalski","email":"jan@firma.pl","message":"This is a valid test message"}"#;
  const NO_NAME: &[u8] = br#"{"email":"jan@firma.pl","message":"This is a valid test message"}"#;

  #[derive(Default)]
  struct RecordingMailer {
    sent: Mutex<Vec<ContactEmail>>,
    fail: bool,
  }

  impl Mailer for RecordingMailer {
    fn name(&self) -> &'static str {
      "recording"
    }

    fn send(&self, email: ContactEmail) -> BoxFuture<Result<(), MailError>> {
      self.sent.lock().unwrap().push(email);
      let fail = self.fail;
      Box::pin(async move { if fail { Err(MailError::new("provider down")) } else { Ok(()) } })
    }
  }

  fn service_with(mailer: Arc<dyn Mailer>) -> ContactService {
    let limiter = FixedWindowLimiter::with_clock(RateLimitConfig::default(), Arc::new(ManualClock::new()));
    ContactService::new(Arc::new(limiter), mailer, MailSettings::default())
  }

  #[tokio::test]
  async fn happy_path() {
    let mailer = Arc::new(RecordingMailer::default());
    let service = service_with(mailer.clone());
    let outcome = service.submit("1.1.1.1", VALID).await;
    assert_eq!(outcome, ContactOutcome::Accepted);
    assert_eq!(outcome.status(), 200);
    assert_eq!(outcome.body(), json!({"success": true, "message": "Message received"}));
    let sent = mailer.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].subject, "Nowe zapytanie od Jan Kowalski");
  }

  #[tokio::test]
  async fn missing_name_is_400() {
    let service = service_with(Arc::new(DisabledMailer));
    let outcome = service.submit("1.1.1.1", NO_NAME).await;
    assert_eq!(outcome.status(), 400);
    let body = outcome.body();
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["errors"][0]["path"], json!(["name"]));
  }

  #[tokio::test]
  async fn malformed_json_is_400() {
    let service = service_with(Arc::new(DisabledMailer));
    let outcome = service.submit("1.1.1.1", b"not json").await;
    assert_eq!(outcome.status(), 400);
    assert_eq!(outcome.body()["errors"][0]["code"], json!("invalid_json"));
  }

  #[tokio::test]
  async fn burst_sixth_limited_regardless_of_validity() {
    let service = service_with(Arc::new(DisabledMailer));
    let bodies = [VALID, NO_NAME, VALID, b"{}".as_slice(), VALID];
    for body in bodies {
      let status = service.submit("9.9.9.9", body).await.status();
      assert!(status == 200 || status == 400);
    }
    let sixth = service.submit("9.9.9.9", VALID).await;
    assert_eq!(sixth.status(), 429);
    assert_eq!(
      sixth.body(),
      json!({"success": false, "message": "Too many requests. Please try again later."})
    );
  }

  #[tokio::test]
  async fn invalid_submissions_consume_quota() {
    let service = service_with(Arc::new(DisabledMailer));
    for _ in 0..5 {
      assert_eq!(service.submit("k", NO_NAME).await.status(), 400);
    }
    assert_eq!(service.submit("k", VALID).await.status(), 429);
  }

  #[tokio::test]
  async fn mailer_failure_is_500() {
    let mailer = Arc::new(RecordingMailer { fail: true, ..Default::default() });
    let service = service_with(mailer);
    let outcome = service.submit("1.1.1.1", VALID).await;
    assert_eq!(outcome, ContactOutcome::Failed);
    assert_eq!(outcome.body(), json!({"success": false, "message": "Internal server error"}));
  }

  #[test]
  fn summary_is_redacted() {
    let req = ContactRequest {
      name: "Jan".into(),
      company: None,
      email: "jan@firma.pl".into(),
      phone: Some("123".into()),
      message: "x".repeat(500),
    };
    let s = SubmissionSummary::of(&req);
    assert_eq!(s.company, "N/A");
    assert_eq!(s.email_domain, "firma.pl");
    assert!(s.has_phone);
    assert_eq!(s.message_chars, 500);
    assert_eq!(s.excerpt.chars().count(), 40);
  }
}
