use chrono::NaiveDate;

use crate::case_study::CaseStudies;
use crate::escape::escape_html;
use crate::locale::Locale;
use crate::routes::{RouteError, RouteTable, route_params};

const CASE_STUDY_KEY: &str = "/realizacje/[slug]";

pub const CHANGE_FREQUENCY: &str = "monthly";

#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
  pub url: String,
  pub last_modified: NaiveDate,
  pub change_frequency: &'static str,
  pub priority: f32,
  /// Absolute URL of the same page in every locale.
  pub alternates: Vec<(Locale, String)>,
}

/// Every static page in both locales, then every case study in both locales.
pub fn sitemap(
  base_url: &str,
  table: &RouteTable,
  studies: &CaseStudies,
  last_modified: NaiveDate,
) -> Result<Vec<SitemapEntry>, RouteError> {
  let base = base_url.trim_end_matches('/');
  let mut entries = Vec::new();

  let mut push = |paths: Vec<(Locale, String)>, priority: f32| {
    let alternates: Vec<(Locale, String)> =
      paths.into_iter().map(|(l, p)| (l, absolute(base, &p))).collect();
    for (_, url) in &alternates {
      entries.push(SitemapEntry {
        url: url.clone(),
        last_modified,
        change_frequency: CHANGE_FREQUENCY,
        priority,
        alternates: alternates.clone(),
      });
    }
  };

  for entry in table.entries().iter().filter(|e| !e.key_template().is_dynamic()) {
    let paths = Locale::ALL
      .iter()
      .map(|&l| table.resolve_static(entry.key(), l).map(|p| (l, p)))
      .collect::<Result<Vec<_>, _>>()?;
    push(paths, if entry.key() == "/" { 1.0 } else { 0.8 });
  }

  for slug in studies.slugs() {
    let params = route_params(&[("slug", slug)]);
    let paths = Locale::ALL
      .iter()
      .map(|&l| table.resolve(CASE_STUDY_KEY, l, &params).map(|p| (l, p)))
      .collect::<Result<Vec<_>, _>>()?;
    push(paths, 0.7);
  }

  Ok(entries)
}

fn absolute(base: &str, path: &str) -> String {
  if path == "/" { base.to_string() } else { format!("{base}{path}") }
}

pub fn render_sitemap_xml(entries: &[SitemapEntry]) -> String {
  let mut xml = String::from(
    "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
     <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\" \
     xmlns:xhtml=\"http://www.w3.org/1999/xhtml\">\n",
  );
  for entry in entries {
    xml.push_str("  <url>\n");
    xml.push_str(&format!("    <loc>{}</loc>\n", escape_html(&entry.url)));
    for (locale, href) in &entry.alternates {
      xml.push_str(&format!(
        "    <xhtml:link rel=\"alternate\" hreflang=\"{locale}\" href=\"{}\"/>\n",
        escape_html(href)
      ));
    }
    xml.push_str(&format!("    <lastmod>{}</lastmod>\n", entry.last_modified.format("%Y-%m-%d")));
    xml.push_str(&format!("    <changefreq>{}</changefreq>\n", entry.change_frequency));
    xml.push_str(&format!("    <priority>{:.1}</priority>\n", entry.priority));
    xml.push_str("  </url>\n");
  }
  xml.push_str("</urlset>\n");
  xml
}

pub fn robots_txt(base_url: &str) -> String {
  let base = base_url.trim_end_matches('/');
  format!("User-agent: *\nAllow: /\nDisallow: /api/\n\nSitemap: {base}/sitemap.xml\n")
}
