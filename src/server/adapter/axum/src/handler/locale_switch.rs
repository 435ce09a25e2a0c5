use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use swiftbuild_server::{Locale, SiteError, locale_cookie};

use super::AppState;
use crate::error::AxumError;

#[derive(Debug, Deserialize)]
pub(super) struct SwitchQuery {
  path: Option<String>,
  /// Locale the visitor is currently viewing. Derived from `path` when absent.
  locale: Option<String>,
}

/// Replace-style navigation to the same page in the other locale.
pub(super) async fn handle_locale_switch(
  State(state): State<Arc<AppState>>,
  Query(query): Query<SwitchQuery>,
) -> Result<Response, AxumError> {
  let path = query.path.as_deref().unwrap_or("/");
  // only same-site absolute paths; "//host" would leave the site
  if !path.starts_with('/') || path.starts_with("//") || path.contains('\\') {
    return Err(SiteError::validation("path must be an absolute site path").into());
  }
  let current = match query.locale.as_deref() {
    Some(raw) => raw.parse::<Locale>()?,
    None => Locale::split_prefix(path).0,
  };

  let switch = state.routes.switch_locale(path, current);
  tracing::debug!(from = %current, to = %switch.locale, path = %switch.path, translated = switch.translated, "locale switch");
  Ok(
    (
      StatusCode::SEE_OTHER,
      [(header::LOCATION, switch.path), (header::SET_COOKIE, locale_cookie(switch.locale))],
    )
      .into_response(),
  )
}
