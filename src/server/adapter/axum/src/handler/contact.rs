use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use swiftbuild_server::{ContactOutcome, client_key};

use super::AppState;

pub(super) const FORWARDED_FOR: &str = "x-forwarded-for";

pub(super) async fn handle_contact(
  State(state): State<Arc<AppState>>,
  headers: HeaderMap,
  body: Bytes,
) -> Response {
  let forwarded = headers.get(FORWARDED_FOR).and_then(|v| v.to_str().ok());
  let key = client_key(forwarded);
  let outcome = state.contact.submit(&key, &body).await;

  let status = StatusCode::from_u16(outcome.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
  let mut response = (status, axum::Json(outcome.body())).into_response();
  if let ContactOutcome::RateLimited { retry_after } = outcome {
    // whole seconds, rounded up
    let secs = retry_after.as_secs() + u64::from(retry_after.subsec_nanos() > 0);
    response.headers_mut().insert(header::RETRY_AFTER, HeaderValue::from(secs.max(1)));
  }
  response
}
