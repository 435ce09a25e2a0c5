use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode, Uri, header};
use axum::response::{Html, IntoResponse, Response};
use swiftbuild_server::{
  Locale, PageContext, PageView, RouteMatch, RouteTable, SiteError, canonical_path, locale_cookie,
  negotiate, render_page,
};

use super::AppState;
use crate::error::AxumError;

/// What the locale middleware decided for a page request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Routing {
  Redirect { status: StatusCode, location: String },
  Render { locale: Locale, route: RouteMatch },
  NotFound { locale: Locale },
}

fn redirect(status: StatusCode, path: String) -> Routing {
  Routing::Redirect { status, location: path }
}

/// Locale middleware for page paths (no query string).
///
/// Empty segments, `/pl` prefixes and paths shaped for the other locale get
/// a permanent redirect to the canonical form. Unprefixed paths may be
/// temporarily redirected to English when negotiation prefers it.
pub(crate) fn route_request(
  routes: &RouteTable,
  path: &str,
  preferred: Option<Locale>,
) -> Result<Routing, SiteError> {
  // some browsers read "/\host" as "//host"
  if path.contains('\\') {
    return Ok(Routing::NotFound { locale: Locale::split_prefix(path).0 });
  }

  let mut canonical = canonical_path(path);
  if canonical == "/pl" {
    canonical = "/".to_string();
  } else if canonical.starts_with("/pl/") {
    canonical.drain(.."/pl".len());
  }
  if canonical != path {
    return Ok(redirect(StatusCode::PERMANENT_REDIRECT, canonical));
  }

  let (locale, rest) = Locale::split_prefix(path);

  if let Some(m) = routes.match_in(rest, locale) {
    if locale.is_default() && preferred.is_some_and(|p| p != locale) {
      let target = locale.other();
      return Ok(redirect(StatusCode::TEMPORARY_REDIRECT, routes.resolve(&m.key, target, &m.params)?));
    }
    return Ok(Routing::Render { locale, route: m });
  }

  if let Some(m) = routes.match_in(rest, locale.other()) {
    return Ok(redirect(StatusCode::PERMANENT_REDIRECT, routes.resolve(&m.key, locale, &m.params)?));
  }

  Ok(Routing::NotFound { locale })
}

fn header_str<'a>(headers: &'a HeaderMap, name: header::HeaderName) -> Option<&'a str> {
  headers.get(name).and_then(|v| v.to_str().ok())
}

pub(super) async fn handle_page(
  State(state): State<Arc<AppState>>,
  method: Method,
  uri: Uri,
  headers: HeaderMap,
) -> Result<Response, AxumError> {
  if method != Method::GET && method != Method::HEAD {
    return Ok(StatusCode::METHOD_NOT_ALLOWED.into_response());
  }

  let preferred = state.locale_detection.then(|| {
    negotiate(header_str(&headers, header::COOKIE), header_str(&headers, header::ACCEPT_LANGUAGE))
  });

  match route_request(&state.routes, uri.path(), preferred)? {
    Routing::Redirect { status, location } => {
      let location = match uri.query() {
        Some(q) => format!("{location}?{q}"),
        None => location,
      };
      tracing::debug!(from = %uri.path(), to = %location, status = status.as_u16(), "locale redirect");
      Ok((status, [(header::LOCATION, location)]).into_response())
    }
    Routing::Render { locale, route } => {
      match PageView::for_route(&route, &state.case_studies) {
        Some(view) => render(&state, locale, Some(&route), &view, StatusCode::OK),
        None => render(&state, locale, None, &PageView::NotFound, StatusCode::NOT_FOUND),
      }
    }
    Routing::NotFound { locale } => {
      render(&state, locale, None, &PageView::NotFound, StatusCode::NOT_FOUND)
    }
  }
}

fn render(
  state: &AppState,
  locale: Locale,
  route: Option<&RouteMatch>,
  view: &PageView,
  status: StatusCode,
) -> Result<Response, AxumError> {
  let dictionary = state.dictionaries.get(locale)?;
  let ctx = PageContext {
    table: &state.routes,
    dictionary: &dictionary,
    locale,
    base_url: &state.base_url,
    route,
  };
  let html = render_page(&ctx, view)?;
  let mut response = (status, Html(html)).into_response();
  let headers = response.headers_mut();
  headers.insert(header::CONTENT_LANGUAGE, HeaderValue::from_static(locale.as_str()));
  if let Ok(cookie) = HeaderValue::from_str(&locale_cookie(locale)) {
    headers.insert(header::SET_COOKIE, cookie);
  }
  Ok(response)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn table() -> RouteTable {
    RouteTable::site().unwrap()
  }

  fn route(path: &str, preferred: Option<Locale>) -> Routing {
    route_request(&table(), path, preferred).unwrap()
  }

  fn location(routing: Routing) -> (StatusCode, String) {
    match routing {
      Routing::Redirect { status, location } => (status, location),
      other => panic!("expected redirect, got {other:?}"),
    }
  }

  #[test]
  fn renders_canonical_paths() {
    assert!(matches!(route("/", None), Routing::Render { locale: Locale::Pl, .. }));
    assert!(matches!(route("/en/services", None), Routing::Render { locale: Locale::En, .. }));
    assert!(matches!(route("/realizacje/celtic", None), Routing::Render { locale: Locale::Pl, .. }));
  }

  #[test]
  fn pl_prefix_is_stripped() {
    assert_eq!(location(route("/pl", None)), (StatusCode::PERMANENT_REDIRECT, "/".into()));
    assert_eq!(
      location(route("/pl/uslugi", None)),
      (StatusCode::PERMANENT_REDIRECT, "/uslugi".into())
    );
  }

  #[test]
  fn redirects_stay_on_site() {
    assert_eq!(
      location(route("/pl//evil.example", None)),
      (StatusCode::PERMANENT_REDIRECT, "/evil.example".into())
    );
    assert_eq!(
      location(route("//evil.example", None)),
      (StatusCode::PERMANENT_REDIRECT, "/evil.example".into())
    );
    assert_eq!(
      location(route("/en//evil.example", None)),
      (StatusCode::PERMANENT_REDIRECT, "/en/evil.example".into())
    );
    assert_eq!(route("/pl/\\evil.example", None), Routing::NotFound { locale: Locale::Pl });
  }

  #[test]
  fn empty_segments_are_canonicalized() {
    assert_eq!(
      location(route("/uslugi/", None)),
      (StatusCode::PERMANENT_REDIRECT, "/uslugi".into())
    );
    assert_eq!(
      location(route("/realizacje//celtic", None)),
      (StatusCode::PERMANENT_REDIRECT, "/realizacje/celtic".into())
    );
    assert_eq!(location(route("/en/", None)), (StatusCode::PERMANENT_REDIRECT, "/en".into()));
    assert_eq!(
      location(route("/pl/uslugi/", None)),
      (StatusCode::PERMANENT_REDIRECT, "/uslugi".into())
    );
  }

  #[test]
  fn wrong_shape_is_corrected() {
    assert_eq!(
      location(route("/en/uslugi", None)),
      (StatusCode::PERMANENT_REDIRECT, "/en/services".into())
    );
    assert_eq!(
      location(route("/portfolio/celtic", None)),
      (StatusCode::PERMANENT_REDIRECT, "/realizacje/celtic".into())
    );
  }

  #[test]
  fn english_preference_redirects_unprefixed() {
    assert_eq!(
      location(route("/o-nas", Some(Locale::En))),
      (StatusCode::TEMPORARY_REDIRECT, "/en/about".into())
    );
    assert_eq!(location(route("/", Some(Locale::En))), (StatusCode::TEMPORARY_REDIRECT, "/en".into()));
    assert!(matches!(route("/o-nas", Some(Locale::Pl)), Routing::Render { .. }));
    // prefixed paths are never renegotiated
    assert!(matches!(route("/en/about", Some(Locale::Pl)), Routing::Render { .. }));
  }

  #[test]
  fn unknown_paths() {
    assert_eq!(route("/nie-ma", None), Routing::NotFound { locale: Locale::Pl });
    assert_eq!(route("/en/missing", None), Routing::NotFound { locale: Locale::En });
    assert_eq!(route("/plany", None), Routing::NotFound { locale: Locale::Pl });
  }
}
