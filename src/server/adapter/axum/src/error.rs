use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use swiftbuild_server::SiteError;

/// Newtype wrapper to implement `IntoResponse` for `SiteError`.
/// Required because Rust's orphan rule prevents `impl IntoResponse for SiteError`
/// when both types are foreign to this crate.
pub(crate) struct AxumError(pub SiteError);

impl IntoResponse for AxumError {
  fn into_response(self) -> Response {
    let err = self.0;
    let status = StatusCode::from_u16(err.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let message = if status.is_server_error() {
      tracing::error!(code = err.code(), error = err.message(), "request failed");
      "Internal server error"
    } else {
      err.message()
    };
    let body = serde_json::json!({ "success": false, "code": err.code(), "message": message });
    (status, axum::Json(body)).into_response()
  }
}

impl<E: Into<SiteError>> From<E> for AxumError {
  fn from(err: E) -> Self {
    Self(err.into())
  }
}
