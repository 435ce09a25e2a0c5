use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use swiftbuild_server::contact::BoxFuture;
use swiftbuild_server::{ContactEmail, DisabledMailer, MailError, MailSettings, Mailer};

use crate::config::{MailProvider, MailSection};

/// Delivers contact emails through the Resend HTTP API.
pub struct ResendMailer {
  client: reqwest::Client,
  endpoint: String,
  api_key: String,
}

impl ResendMailer {
  /// `timeout` bounds each delivery attempt, connect through response body.
  pub fn new(
    endpoint: impl Into<String>,
    api_key: impl Into<String>,
    timeout: Duration,
  ) -> Result<Self> {
    let client =
      reqwest::Client::builder().timeout(timeout).build().context("failed to build mail client")?;
    Ok(Self { client, endpoint: endpoint.into(), api_key: api_key.into() })
  }
}

impl Mailer for ResendMailer {
  fn name(&self) -> &'static str {
    "resend"
  }

  fn send(&self, email: ContactEmail) -> BoxFuture<Result<(), MailError>> {
    let request = self.client.post(&self.endpoint).bearer_auth(&self.api_key).json(&email);
    Box::pin(async move {
      let resp = request.send().await.map_err(|e| MailError::new(format!("request failed: {e}")))?;
      let status = resp.status();
      if status.is_success() {
        return Ok(());
      }
      let body = resp.text().await.unwrap_or_default();
      Err(MailError::new(format!("provider returned {status}: {body}")))
    })
  }
}

pub fn mail_settings(section: &MailSection) -> MailSettings {
  MailSettings { from: section.from.clone(), to: section.to.clone() }
}

/// Build the configured mailer. Resend reads its key from `api_key_env`.
pub fn build_mailer(section: &MailSection) -> Result<Arc<dyn Mailer>> {
  build_mailer_with(section, |name| std::env::var(name).ok())
}

fn build_mailer_with(
  section: &MailSection,
  lookup: impl Fn(&str) -> Option<String>,
) -> Result<Arc<dyn Mailer>> {
  match section.provider {
    MailProvider::Disabled => Ok(Arc::new(DisabledMailer)),
    MailProvider::Resend => {
      let key = lookup(&section.api_key_env)
        .filter(|k| !k.trim().is_empty())
        .with_context(|| format!("mail provider \"resend\" needs ${} to be set", section.api_key_env))?;
      let timeout = Duration::from_secs(section.timeout_secs);
      Ok(Arc::new(ResendMailer::new(section.endpoint.clone(), key, timeout)?))
    }
  }
}

#[cfg(test)]
mod tests {
  use std::sync::Mutex;

  use axum::Json;
  use axum::extract::State;
  use axum::http::{HeaderMap, StatusCode};
  use axum::routing::post;
  use serde_json::Value;

  use super::*;

  fn email() -> ContactEmail {
    ContactEmail {
      from: "SwiftBuild <noreply@swiftbuild.services>".into(),
      to: vec!["kontakt@swiftbuild.services".into()],
      reply_to: "jan@firma.pl".into(),
      subject: "Nowe zapytanie od Jan".into(),
      html: "<p>hi</p>".into(),
    }
  }

  type Seen = Arc<Mutex<Vec<(Option<String>, Value)>>>;

  async fn fake_provider(status: StatusCode, delay: Duration) -> (String, Seen) {
    let seen: Seen = Arc::default();
    let app = axum::Router::new()
      .route(
        "/emails",
        post(move |State(seen): State<Seen>, headers: HeaderMap, Json(body): Json<Value>| async move {
          let auth = headers.get("authorization").and_then(|v| v.to_str().ok()).map(String::from);
          seen.lock().unwrap().push((auth, body));
          tokio::time::sleep(delay).await;
          (status, "{}")
        }),
      )
      .with_state(seen.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
      axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}/emails"), seen)
  }

  #[tokio::test]
  async fn resend_posts_json_with_bearer() {
    let (endpoint, seen) = fake_provider(StatusCode::OK, Duration::ZERO).await;
    let mailer = ResendMailer::new(endpoint, "re_test", Duration::from_secs(5)).unwrap();
    mailer.send(email()).await.unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].0.as_deref(), Some("Bearer re_test"));
    assert_eq!(seen[0].1["reply_to"], "jan@firma.pl");
    assert_eq!(seen[0].1["to"][0], "kontakt@swiftbuild.services");
  }

  #[tokio::test]
  async fn resend_error_status_is_mail_error() {
    let (endpoint, _) = fake_provider(StatusCode::UNPROCESSABLE_ENTITY, Duration::ZERO).await;
    let mailer = ResendMailer::new(endpoint, "re_test", Duration::from_secs(5)).unwrap();
    let err = mailer.send(email()).await.unwrap_err();
    assert!(err.to_string().contains("422"));
  }

  #[tokio::test]
  async fn stalled_provider_times_out() {
    let (endpoint, _) = fake_provider(StatusCode::OK, Duration::from_secs(30)).await;
    let mailer = ResendMailer::new(endpoint, "re_test", Duration::from_millis(200)).unwrap();
    let started = std::time::Instant::now();
    let err = mailer.send(email()).await.unwrap_err();
    assert!(err.to_string().contains("request failed"));
    assert!(started.elapsed() < Duration::from_secs(10));
  }

  #[test]
  fn disabled_provider_needs_no_key() {
    let mailer = build_mailer_with(&MailSection::default(), |_| None).unwrap();
    assert_eq!(mailer.name(), "disabled");
  }

  #[test]
  fn resend_requires_key() {
    let section = MailSection { provider: MailProvider::Resend, ..MailSection::default() };
    let err = build_mailer_with(&section, |_| None).err().unwrap();
    assert!(err.to_string().contains("RESEND_API_KEY"));

    let mailer = build_mailer_with(&section, |_| Some("re_x".into())).unwrap();
    assert_eq!(mailer.name(), "resend");
  }
}
