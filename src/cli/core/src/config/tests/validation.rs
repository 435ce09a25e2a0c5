use super::*;

fn parse(toml_str: &str) -> SiteConfig {
  toml::from_str(toml_str).unwrap()
}

#[test]
fn base_url_must_be_absolute() {
  let err = parse("[site]\nbase_url = \"swiftbuild.services\"\n").validate().unwrap_err();
  assert!(err.to_string().contains("site.base_url"));
  assert!(parse("[site]\nbase_url = \"https://\"\n").validate().is_err());
  assert!(parse("[site]\nbase_url = \"http://localhost:3000/\"\n").validate().is_ok());
}

#[test]
fn contact_limits_must_be_positive() {
  let err = parse("[contact]\nwindow_secs = 0\n").validate().unwrap_err();
  assert!(err.to_string().contains("window_secs"));
  let err = parse("[contact]\nmax_requests = 0\n").validate().unwrap_err();
  assert!(err.to_string().contains("max_requests"));
}

#[test]
fn resend_requires_recipients() {
  let err = parse("[mail]\nprovider = \"resend\"\nto = []\n").validate().unwrap_err();
  assert!(err.to_string().contains("mail.to"));
}

#[test]
fn resend_timeout_must_be_positive() {
  let err = parse("[mail]\nprovider = \"resend\"\ntimeout_secs = 0\n").validate().unwrap_err();
  assert!(err.to_string().contains("timeout_secs"));
}

#[test]
fn disabled_mail_skips_checks() {
  assert!(parse("[mail]\nto = []\nfrom = \"\"\n").validate().is_ok());
}
