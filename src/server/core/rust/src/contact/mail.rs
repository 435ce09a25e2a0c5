use std::fmt;
use std::future::Future;
use std::pin::Pin;

use serde::Serialize;

use super::schema::ContactRequest;
use crate::escape::{escape_html, strip_newlines};

pub type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

/// Sender and recipients for contact notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailSettings {
  pub from: String,
  pub to: Vec<String>,
}

impl Default for MailSettings {
  fn default() -> Self {
    Self {
      from: "SwiftBuild <noreply@swiftbuild.services>".to_string(),
      to: vec!["kontakt@swiftbuild.services".to_string()],
    }
  }
}

/// Outgoing notification, serialized as the provider's send-email payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactEmail {
  pub from: String,
  pub to: Vec<String>,
  pub reply_to: String,
  pub subject: String,
  pub html: String,
}

fn present(value: &Option<String>) -> Option<&str> {
  value.as_deref().filter(|v| !v.is_empty())
}

pub fn render_subject(req: &ContactRequest) -> String {
  let mut subject = format!("Nowe zapytanie od {}", req.name);
  if let Some(company) = present(&req.company) {
    subject.push_str(&format!(" ({company})"));
  }
  strip_newlines(&subject)
}

pub fn render_html(req: &ContactRequest) -> String {
  let mut html = String::from("<h2>Nowe zapytanie ze strony</h2>\n");
  html.push_str(&format!("<p><strong>Imię:</strong> {}</p>\n", escape_html(&req.name)));
  if let Some(company) = present(&req.company) {
    html.push_str(&format!("<p><strong>Firma:</strong> {}</p>\n", escape_html(company)));
  }
  html.push_str(&format!("<p><strong>Email:</strong> {}</p>\n", escape_html(&req.email)));
  if let Some(phone) = present(&req.phone) {
    html.push_str(&format!("<p><strong>Telefon:</strong> {}</p>\n", escape_html(phone)));
  }
  html.push_str("<p><strong>Wiadomość:</strong></p>\n");
  let message = escape_html(&req.message).replace("\r\n", "\n").replace('\n', "<br>");
  html.push_str(&format!("<p>{message}</p>\n"));
  html
}

pub fn render_email(req: &ContactRequest, settings: &MailSettings) -> ContactEmail {
  ContactEmail {
    from: settings.from.clone(),
    to: settings.to.clone(),
    reply_to: strip_newlines(&req.email),
    subject: render_subject(req),
    html: render_html(req),
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailError {
  pub message: String,
}

impl MailError {
  pub fn new(message: impl Into<String>) -> Self {
    Self { message: message.into() }
  }
}

impl fmt::Display for MailError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "mail delivery failed: {}", self.message)
  }
}

impl std::error::Error for MailError {}

/// Delivery of contact notifications to a transactional-email provider.
pub trait Mailer: Send + Sync {
  fn name(&self) -> &'static str;

  fn send(&self, email: ContactEmail) -> BoxFuture<Result<(), MailError>>;
}

/// Accepts every email without sending anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledMailer;

impl Mailer for DisabledMailer {
  fn name(&self) -> &'static str {
    "disabled"
  }

  fn send(&self, email: ContactEmail) -> BoxFuture<Result<(), MailError>> {
    tracing::debug!(subject = %email.subject, "mail delivery disabled, dropping contact email");
    Box::pin(async { Ok(()) })
  }
}
