use super::*;
use crate::locale::Locale;

fn site() -> RouteTable {
  RouteTable::site().unwrap()
}

fn slug(s: &str) -> RouteParams {
  route_params(&[("slug", s)])
}

#[test]
fn forward_static_routes() {
  let t = site();
  assert_eq!(t.resolve_static("/", Locale::Pl).unwrap(), "/");
  assert_eq!(t.resolve_static("/", Locale::En).unwrap(), "/en");
  assert_eq!(t.resolve_static("/uslugi", Locale::Pl).unwrap(), "/uslugi");
  assert_eq!(t.resolve_static("/uslugi", Locale::En).unwrap(), "/en/services");
  assert_eq!(t.resolve_static("/zespol", Locale::En).unwrap(), "/en/team");
  assert_eq!(
    t.resolve_static("/polityka-prywatnosci", Locale::En).unwrap(),
    "/en/privacy-policy"
  );
}

#[test]
fn forward_dynamic_route() {
  let t = site();
  assert_eq!(
    t.resolve("/realizacje/[slug]", Locale::Pl, &slug("celtic")).unwrap(),
    "/realizacje/celtic"
  );
  assert_eq!(
    t.resolve("/realizacje/[slug]", Locale::En, &slug("celtic")).unwrap(),
    "/en/portfolio/celtic"
  );
}

#[test]
fn forward_missing_param_is_error() {
  let t = site();
  let err = t.resolve_static("/realizacje/[slug]", Locale::En).unwrap_err();
  assert_eq!(
    err,
    RouteError::MissingParam { key: "/realizacje/[slug]".into(), param: "slug".into() }
  );
  assert!(t.resolve("/realizacje/[slug]", Locale::Pl, &slug("")).is_err());
  assert!(t.resolve("/realizacje/[slug]", Locale::Pl, &slug("a/b")).is_err());
}

#[test]
fn forward_unknown_key_is_error() {
  let err = site().resolve_static("/blog", Locale::Pl).unwrap_err();
  assert_eq!(err, RouteError::UnknownRoute("/blog".into()));
}

#[test]
fn default_locale_never_prefixed() {
  let t = site();
  for entry in t.entries() {
    let params = slug("celtic");
    let path = t.resolve(entry.key(), Locale::Pl, &params).unwrap();
    assert!(path.starts_with('/'), "{path}");
    assert!(!path.starts_with("/pl"), "{path}");
  }
}

#[test]
fn every_output_is_absolute() {
  let t = site();
  for entry in t.entries() {
    for locale in Locale::ALL {
      let path = t.resolve(entry.key(), locale, &slug("x")).unwrap();
      assert!(path.starts_with('/'));
    }
  }
}

#[test]
fn match_path_detects_locale_and_params() {
  let t = site();
  let m = t.match_path("/en/portfolio/celtic").unwrap();
  assert_eq!(m.key, "/realizacje/[slug]");
  assert_eq!(m.locale, Locale::En);
  assert_eq!(m.params, slug("celtic"));

  let m = t.match_path("/o-nas").unwrap();
  assert_eq!(m.key, "/o-nas");
  assert_eq!(m.locale, Locale::Pl);

  let m = t.match_path("/en").unwrap();
  assert_eq!(m.key, "/");
  assert_eq!(m.locale, Locale::En);
}

#[test]
fn match_path_tolerates_trailing_slash() {
  let t = site();
  assert_eq!(t.match_path("/kontakt/").unwrap().key, "/kontakt");
  assert_eq!(t.match_path("/en/contact/").unwrap().key, "/kontakt");
}

#[test]
fn match_path_rejects_wrong_locale_shape() {
  let t = site();
  // English segment without the /en prefix is not a Polish route
  assert!(t.match_path("/services").is_none());
  assert!(t.match_path("/en/uslugi").is_none());
  assert!(t.match_path("/realizacje/celtic/extra").is_none());
}

#[test]
fn switch_locale_translates_known_paths() {
  let t = site();
  let s = t.switch_locale("/realizacje/celtic", Locale::Pl);
  assert_eq!(s, LocaleSwitch { locale: Locale::En, path: "/en/portfolio/celtic".into(), translated: true });
  let back = t.switch_locale(&s.path, Locale::En);
  assert_eq!(back.path, "/realizacje/celtic");
  assert_eq!(back.locale, Locale::Pl);
}

#[test]
fn switch_locale_root() {
  let t = site();
  assert_eq!(t.switch_locale("/", Locale::Pl).path, "/en");
  assert_eq!(t.switch_locale("/en", Locale::En).path, "/");
  assert_eq!(t.switch_locale("/en/", Locale::En).path, "/");
}

#[test]
fn switch_locale_round_trip_every_route() {
  let t = site();
  for entry in t.entries() {
    for from in Locale::ALL {
      let start = t.resolve(entry.key(), from, &slug("palac-zolwin")).unwrap();
      let there = t.switch_locale(&start, from);
      assert!(there.translated, "{start}");
      assert_eq!(there.path, t.resolve(entry.key(), from.other(), &slug("palac-zolwin")).unwrap());
      let back = t.switch_locale(&there.path, there.locale);
      assert_eq!(back.path, start);
      assert_eq!(back.locale, from);
    }
  }
}

#[test]
fn switch_locale_unknown_path_degrades() {
  let t = site();
  let s = t.switch_locale("/promocja", Locale::Pl);
  assert_eq!(s.path, "/en/promocja");
  assert!(!s.translated);
  let s = t.switch_locale("/en/promo", Locale::En);
  assert_eq!(s.path, "/promo");
  assert!(!s.translated);
}

#[test]
fn switch_locale_never_leaves_the_site() {
  let t = site();
  let s = t.switch_locale("/en//evil.example", Locale::En);
  assert_eq!(s.path, "/evil.example");
  assert!(!s.translated);
  assert_eq!(t.switch_locale("/en///evil.example?x=1", Locale::En).path, "/evil.example?x=1");
  assert_eq!(t.switch_locale("//evil.example", Locale::Pl).path, "/en/evil.example");
}

#[test]
fn canonical_path_drops_empty_segments() {
  assert_eq!(canonical_path("/uslugi/"), "/uslugi");
  assert_eq!(canonical_path("/realizacje//celtic"), "/realizacje/celtic");
  assert_eq!(canonical_path("//evil.example"), "/evil.example");
  assert_eq!(canonical_path("/pl//evil.example"), "/pl/evil.example");
  assert_eq!(canonical_path("/"), "/");
  assert_eq!(canonical_path(""), "/");
}

#[test]
fn switch_locale_keeps_query_and_fragment() {
  let t = site();
  assert_eq!(t.switch_locale("/uslugi?ref=ads#faq", Locale::Pl).path, "/en/services?ref=ads#faq");
  assert_eq!(t.switch_locale("/en/contact#form", Locale::En).path, "/kontakt#form");
  assert_eq!(t.switch_locale("?x=1", Locale::Pl).path, "/en?x=1");
}

#[test]
fn alternates_cover_both_locales() {
  let t = site();
  let m = t.match_path("/realizacje/deluxdeco").unwrap();
  assert_eq!(
    t.alternates(&m),
    vec![
      (Locale::Pl, "/realizacje/deluxdeco".to_string()),
      (Locale::En, "/en/portfolio/deluxdeco".to_string()),
    ]
  );
}

#[test]
fn table_rejects_missing_dynamic_segment() {
  let err = RouteTable::new(&[("/a/[slug]", "/a/[slug]", "/b")]).unwrap_err();
  assert_eq!(
    err,
    RouteError::ParamMismatch { key: "/a/[slug]".into(), locale: Locale::En, param: "slug".into() }
  );
}

#[test]
fn table_rejects_repeated_dynamic_segment() {
  assert!(RouteTable::new(&[("/a/[id]", "/a/[id]/[id]", "/b/[id]")]).is_err());
}

#[test]
fn table_rejects_extra_dynamic_segment() {
  let err = RouteTable::new(&[("/a", "/a/[id]", "/b")]).unwrap_err();
  assert!(matches!(err, RouteError::ParamMismatch { ref param, .. } if param == "id"));
}

#[test]
fn table_rejects_duplicates_and_bad_templates() {
  assert_eq!(
    RouteTable::new(&[("/a", "/a", "/b"), ("/a", "/c", "/d")]).unwrap_err(),
    RouteError::DuplicateKey("/a".into())
  );
  assert!(matches!(
    RouteTable::new(&[("a", "/a", "/b")]).unwrap_err(),
    RouteError::InvalidTemplate { .. }
  ));
  assert!(RouteTable::new(&[("/a[x]", "/a", "/b")]).is_err());
  assert!(RouteTable::new(&[("/[]", "/[]", "/[]")]).is_err());
}

#[test]
fn template_parse_segments() {
  let t = PathTemplate::parse("/realizacje/[slug]").unwrap();
  assert_eq!(
    t.segments(),
    &[Segment::Static("realizacje".into()), Segment::Dynamic("slug".into())]
  );
  assert!(t.is_dynamic());
  assert_eq!(t.params().collect::<Vec<_>>(), vec!["slug"]);
  assert!(!PathTemplate::parse("/").unwrap().is_dynamic());
}

#[test]
fn static_routes_win_over_dynamic() {
  let t = RouteTable::new(&[("/p/[slug]", "/p/[slug]", "/q/[slug]"), ("/p/new", "/p/new", "/q/new")])
    .unwrap();
  assert_eq!(t.match_path("/p/new").unwrap().key, "/p/new");
  assert_eq!(t.match_path("/p/other").unwrap().key, "/p/[slug]");
}
