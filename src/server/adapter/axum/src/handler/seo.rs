use std::sync::Arc;

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use chrono::Utc;
use swiftbuild_server::{render_sitemap_xml, robots_txt, sitemap};

use super::AppState;
use crate::error::AxumError;

pub(super) async fn handle_sitemap(
  State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AxumError> {
  let entries =
    sitemap(&state.base_url, &state.routes, &state.case_studies, Utc::now().date_naive())?;
  Ok(([(header::CONTENT_TYPE, "application/xml; charset=utf-8")], render_sitemap_xml(&entries)))
}

pub(super) async fn handle_robots(State(state): State<Arc<AppState>>) -> impl IntoResponse {
  ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], robots_txt(&state.base_url))
}
