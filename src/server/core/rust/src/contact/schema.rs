use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use serde_json::Value;

pub const NAME_MIN_CHARS: usize = 2;
pub const MESSAGE_MIN_CHARS: usize = 10;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+\-]@([A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$")
    .expect("email regex compiles")
});

/// A contact submission that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactRequest {
  pub name: String,
  pub company: Option<String>,
  pub email: String,
  pub phone: Option<String>,
  pub message: String,
}

/// One field-level validation problem. `path` is empty for problems with the
/// body as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
  pub code: &'static str,
  pub path: Vec<String>,
  pub message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub minimum: Option<usize>,
}

impl FieldIssue {
  fn new(code: &'static str, field: Option<&str>, message: impl Into<String>) -> Self {
    Self {
      code,
      path: field.map(|f| vec![f.to_string()]).unwrap_or_default(),
      message: message.into(),
      minimum: None,
    }
  }

  pub fn field(&self) -> Option<&str> {
    self.path.first().map(String::as_str)
  }
}

fn kind(value: &Value) -> &'static str {
  match value {
    Value::Null => "null",
    Value::Bool(_) => "boolean",
    Value::Number(_) => "number",
    Value::String(_) => "string",
    Value::Array(_) => "array",
    Value::Object(_) => "object",
  }
}

pub fn is_valid_email(email: &str) -> bool {
  !email.starts_with('.') && !email.contains("..") && EMAIL_RE.is_match(email)
}

/// Parse a raw request body. Malformed JSON is reported as a single issue
/// at the root path.
pub fn parse_submission(body: &[u8]) -> Result<ContactRequest, Vec<FieldIssue>> {
  let value: Value = serde_json::from_slice(body).map_err(|e| {
    vec![FieldIssue::new("invalid_json", None, format!("Malformed JSON body: {e}"))]
  })?;
  validate(&value)
}

/// Validate every field and collect all issues rather than stopping at the first.
pub fn validate(value: &Value) -> Result<ContactRequest, Vec<FieldIssue>> {
  let Some(obj) = value.as_object() else {
    return Err(vec![FieldIssue::new(
      "invalid_type",
      None,
      format!("Expected object, received {}", kind(value)),
    )]);
  };

  let mut issues = Vec::new();

  let name = required_string(obj.get("name"), "name", &mut issues);
  let company = optional_string(obj.get("company"), "company", &mut issues);
  let email = required_string(obj.get("email"), "email", &mut issues);
  let phone = optional_string(obj.get("phone"), "phone", &mut issues);
  let message = required_string(obj.get("message"), "message", &mut issues);

  if let Some(ref name) = name {
    min_chars(name, NAME_MIN_CHARS, "name", &mut issues);
  }
  if let Some(ref email) = email {
    if !is_valid_email(email) {
      issues.push(FieldIssue::new("invalid_string", Some("email"), "Invalid email"));
    }
  }
  if let Some(ref message) = message {
    min_chars(message, MESSAGE_MIN_CHARS, "message", &mut issues);
  }

  match (name, email, message) {
    (Some(name), Some(email), Some(message)) if issues.is_empty() => {
      Ok(ContactRequest { name, company, email, phone, message })
    }
    _ => Err(issues),
  }
}

fn required_string(value: Option<&Value>, field: &str, issues: &mut Vec<FieldIssue>) -> Option<String> {
  match value {
    Some(Value::String(s)) => Some(s.clone()),
    None => {
      issues.push(FieldIssue::new("invalid_type", Some(field), "Required"));
      None
    }
    Some(other) => {
      issues.push(FieldIssue::new(
        "invalid_type",
        Some(field),
        format!("Expected string, received {}", kind(other)),
      ));
      None
    }
  }
}

/// Absent and `null` both mean "not provided".
fn optional_string(value: Option<&Value>, field: &str, issues: &mut Vec<FieldIssue>) -> Option<String> {
  match value {
    None | Some(Value::Null) => None,
    Some(Value::String(s)) => Some(s.clone()),
    Some(other) => {
      issues.push(FieldIssue::new(
        "invalid_type",
        Some(field),
        format!("Expected string, received {}", kind(other)),
      ));
      None
    }
  }
}

fn min_chars(value: &str, minimum: usize, field: &str, issues: &mut Vec<FieldIssue>) {
  if value.chars().count() < minimum {
    let mut issue = FieldIssue::new(
      "too_small",
      Some(field),
      format!("String must contain at least {minimum} character(s)"),
    );
    issue.minimum = Some(minimum);
    issues.push(issue);
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  fn fields(issues: &[FieldIssue]) -> Vec<&str> {
    issues.iter().filter_map(FieldIssue::field).collect()
  }

  #[test]
  fn accepts_minimum_lengths() {
    let req = validate(&json!({"name": "Al", "email": "a@b.co", "message": "1234567890"})).unwrap();
    assert_eq!(req.name, "Al");
    assert_eq!(req.company, None);
    assert_eq!(req.phone, None);
  }

  #[test]
  fn rejects_just_below_minimum_with_two_issues() {
    let issues =
      validate(&json!({"name": "A", "email": "a@b.co", "message": "123456789"})).unwrap_err();
    assert_eq!(issues.len(), 2);
    assert_eq!(fields(&issues), vec!["name", "message"]);
    assert!(issues.iter().all(|i| i.code == "too_small"));
    assert_eq!(issues[0].minimum, Some(2));
    assert_eq!(issues[1].minimum, Some(10));
  }

  #[test]
  fn missing_name_reported_as_required() {
    let issues =
      validate(&json!({"email": "jan@firma.pl", "message": "This is a valid test message"}))
        .unwrap_err();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].field(), Some("name"));
    assert_eq!(issues[0].code, "invalid_type");
    assert_eq!(issues[0].message, "Required");
  }

  #[test]
  fn optional_fields_kept() {
    let req = validate(&json!({
      "name": "Jan Kowalski",
      "company": "Firma",
      "email": "jan@firma.pl",
      "phone": "+48 500 600 700",
      "message": "This is a valid test message",
      "extra": true
    }))
    .unwrap();
    assert_eq!(req.company.as_deref(), Some("Firma"));
    assert_eq!(req.phone.as_deref(), Some("+48 500 600 700"));
  }

  #[test]
  fn null_optional_is_absent() {
    let req = validate(&json!({
      "name": "Jan", "company": null, "email": "jan@firma.pl", "message": "0123456789"
    }))
    .unwrap();
    assert_eq!(req.company, None);
  }

  #[test]
  fn wrong_types_reported() {
    let issues =
      validate(&json!({"name": 42, "email": "a@b.co", "message": "0123456789", "phone": 5}))
        .unwrap_err();
    assert_eq!(fields(&issues), vec!["name", "phone"]);
    assert_eq!(issues[0].message, "Expected string, received number");
  }

  #[test]
  fn non_object_body() {
    let issues = validate(&json!(["name"])).unwrap_err();
    assert_eq!(issues.len(), 1);
    assert!(issues[0].path.is_empty());
    assert_eq!(issues[0].message, "Expected object, received array");
  }

  #[test]
  fn length_counts_characters_not_bytes() {
    // two characters, four bytes
    assert!(validate(&json!({"name": "Żó", "email": "a@b.co", "message": "ąęśćżźńółĄ"})).is_ok());
  }

  #[test]
  fn email_syntax() {
    assert!(is_valid_email("jan@firma.pl"));
    assert!(is_valid_email("jan.kowalski+tag@sub.firma.pl"));
    assert!(is_valid_email("a@b.co"));
    assert!(!is_valid_email("jan"));
    assert!(!is_valid_email("jan@firma"));
    assert!(!is_valid_email("jan@firma.p"));
    assert!(!is_valid_email(".jan@firma.pl"));
    assert!(!is_valid_email("jan..k@firma.pl"));
    assert!(!is_valid_email("jan.@firma.pl"));
    assert!(!is_valid_email("jan @firma.pl"));
    assert!(!is_valid_email("@firma.pl"));
  }

  #[test]
  fn invalid_email_issue() {
    let issues =
      validate(&json!({"name": "Jan", "email": "not-an-email", "message": "0123456789"}))
        .unwrap_err();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].code, "invalid_string");
    assert_eq!(issues[0].field(), Some("email"));
  }

  #[test]
  fn malformed_json_is_single_root_issue() {
    let issues = parse_submission(b"{not json").unwrap_err();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].code, "invalid_json");
    assert!(issues[0].path.is_empty());
  }

  #[test]
  fn issue_serialization_shape() {
    let issues = validate(&json!({"name": "A", "email": "a@b.co", "message": "0123456789"}))
      .unwrap_err();
    let value = serde_json::to_value(&issues).unwrap();
    assert_eq!(
      value,
      json!([{
        "code": "too_small",
        "path": ["name"],
        "message": "String must contain at least 2 character(s)",
        "minimum": 2
      }])
    );
  }
}
