//! Contact form submissions: validation, per-client rate limiting and
//! notification email delivery.

pub mod mail;
pub mod rate_limit;
pub mod schema;
pub mod service;

pub use mail::{
  BoxFuture, ContactEmail, DisabledMailer, MailError, MailSettings, Mailer, render_email,
};
pub use rate_limit::{
  FixedWindowLimiter, LOOPBACK_KEY, RateDecision, RateLimitConfig, RateLimiter, client_key,
};
pub use schema::{ContactRequest, FieldIssue, is_valid_email, parse_submission, validate};
pub use service::{ContactOutcome, ContactService, SubmissionSummary};
