mod contact;
mod locale_switch;
mod page;
mod seo;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use swiftbuild_server::{CaseStudies, ContactService, DictionaryStore, RouteTable, SiteParts};
use tower_http::trace::TraceLayer;

pub(crate) struct AppState {
  pub routes: Arc<RouteTable>,
  pub dictionaries: Arc<DictionaryStore>,
  pub case_studies: Arc<CaseStudies>,
  pub contact: Arc<ContactService>,
  pub base_url: String,
  pub locale_detection: bool,
}

pub(crate) fn build_router(parts: SiteParts) -> Router {
  let state = Arc::new(AppState {
    routes: parts.routes,
    dictionaries: parts.dictionaries,
    case_studies: parts.case_studies,
    contact: parts.contact,
    base_url: parts.base_url,
    locale_detection: parts.locale_detection,
  });

  Router::new()
    .route("/api/contact", post(contact::handle_contact))
    .route("/api/locale-switch", get(locale_switch::handle_locale_switch))
    .route("/sitemap.xml", get(seo::handle_sitemap))
    .route("/robots.txt", get(seo::handle_robots))
    .route("/healthz", get(|| async { "ok" }))
    // Every other path is a page, subject to locale redirects.
    .fallback(page::handle_page)
    .with_state(state)
    .layer(TraceLayer::new_for_http())
}
