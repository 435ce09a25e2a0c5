use crate::case_study::{CaseStudies, LocalizedCaseStudy, Neighbors};
use crate::dictionary::Dictionary;
use crate::escape::{encode_query_value, escape_html};
use crate::locale::Locale;
use crate::routes::{RouteError, RouteMatch, RouteTable, route_params};

const CASE_STUDY_KEY: &str = "/realizacje/[slug]";

/// What a page request renders, derived from the matched canonical route.
#[derive(Debug, Clone, PartialEq)]
pub enum PageView {
  Home,
  Services,
  Portfolio { studies: Vec<LocalizedCaseStudy> },
  CaseStudy { study: LocalizedCaseStudy, neighbors: Neighbors },
  About,
  Team,
  Contact,
  Privacy,
  NotFound,
}

impl PageView {
  /// `None` when the route exists but its parameters name nothing (unknown slug).
  pub fn for_route(m: &RouteMatch, studies: &CaseStudies) -> Option<Self> {
    let view = match m.key.as_str() {
      "/" => Self::Home,
      "/uslugi" => Self::Services,
      "/realizacje" => Self::Portfolio {
        studies: studies.all().iter().map(|s| s.localize(m.locale)).collect(),
      },
      CASE_STUDY_KEY => {
        let slug = m.params.get("slug")?;
        Self::CaseStudy {
          study: studies.localized(slug, m.locale)?,
          neighbors: studies.neighbors(slug, m.locale)?,
        }
      }
      "/o-nas" => Self::About,
      "/zespol" => Self::Team,
      "/kontakt" => Self::Contact,
      "/polityka-prywatnosci" => Self::Privacy,
      _ => return None,
    };
    Some(view)
  }
}

pub struct PageContext<'a> {
  pub table: &'a RouteTable,
  pub dictionary: &'a Dictionary,
  pub locale: Locale,
  pub base_url: &'a str,
  /// Matched route; `None` renders without canonical and alternate links.
  pub route: Option<&'a RouteMatch>,
}

struct Heading {
  title: String,
  description: String,
  headline: String,
  subtitle: String,
}

fn heading(dict: &Dictionary, view: &PageView) -> Heading {
  let m = &dict.metadata;
  let sub = |title: &str, description: &str, headline: &str, subtitle: &str| Heading {
    title: format!("{title} | SwiftBuild"),
    description: description.to_string(),
    headline: headline.to_string(),
    subtitle: subtitle.to_string(),
  };
  match view {
    PageView::Home => Heading {
      title: m.title.clone(),
      description: m.description.clone(),
      headline: format!("{} {}", dict.hero.headline_1, dict.hero.headline_2),
      subtitle: dict.hero.subheadline.clone(),
    },
    PageView::Services => {
      sub(&m.services_title, &m.services_description, &dict.services.title, &dict.services.subtitle)
    }
    PageView::Portfolio { .. } => sub(
      &m.portfolio_title,
      &m.portfolio_description,
      &dict.portfolio.title,
      &dict.portfolio.subtitle,
    ),
    PageView::CaseStudy { study, .. } => {
      sub(study.title, study.description, study.title, study.description)
    }
    PageView::About => sub(&m.about_title, &m.about_description, &dict.about.title, &dict.about.intro),
    PageView::Team => sub(&m.team_title, &m.team_description, &dict.team.title, &dict.team.intro),
    PageView::Contact => {
      sub(&m.contact_title, &m.contact_description, &dict.contact.title, &dict.contact.subtitle)
    }
    PageView::Privacy => {
      sub(&m.privacy_title, &m.privacy_description, &dict.privacy.title, &dict.privacy.updated)
    }
    PageView::NotFound => sub(
      &dict.not_found.title,
      &dict.not_found.message,
      &dict.not_found.title,
      &dict.not_found.message,
    ),
  }
}

fn absolute(base: &str, path: &str) -> String {
  let base = base.trim_end_matches('/');
  if path == "/" { base.to_string() } else { format!("{base}{path}") }
}

/// Server-rendered HTML shell for one page. All dictionary and content text is escaped.
pub fn render_page(ctx: &PageContext<'_>, view: &PageView) -> Result<String, RouteError> {
  let dict = ctx.dictionary;
  let locale = ctx.locale;
  let h = heading(dict, view);
  let link = |key: &str| ctx.table.resolve_static(key, locale);
  let study_link = |slug: &str| ctx.table.resolve(CASE_STUDY_KEY, locale, &route_params(&[("slug", slug)]));

  let mut out = String::with_capacity(4096);
  out.push_str("<!doctype html>\n");
  out.push_str(&format!("<html lang=\"{locale}\">\n<head>\n<meta charset=\"utf-8\">\n"));
  out.push_str(&format!("<title>{}</title>\n", escape_html(&h.title)));
  out.push_str(&format!("<meta name=\"description\" content=\"{}\">\n", escape_html(&h.description)));
  out.push_str(&format!("<meta property=\"og:locale\" content=\"{}\">\n", locale.og_tag()));

  let current_path = match ctx.route {
    Some(m) => {
      let alternates = ctx.table.alternates(m);
      let current = ctx.table.resolve(&m.key, locale, &m.params)?;
      out.push_str(&format!(
        "<link rel=\"canonical\" href=\"{}\">\n",
        escape_html(&absolute(ctx.base_url, &current))
      ));
      for (alt_locale, path) in &alternates {
        let href = escape_html(&absolute(ctx.base_url, path));
        out.push_str(&format!("<link rel=\"alternate\" hreflang=\"{alt_locale}\" href=\"{href}\">\n"));
        if alt_locale.is_default() {
          out.push_str(&format!("<link rel=\"alternate\" hreflang=\"x-default\" href=\"{href}\">\n"));
        }
      }
      current
    }
    None => link("/")?,
  };
  out.push_str("</head>\n<body>\n<header>\n");

  out.push_str(&format!("<nav aria-label=\"{}\">\n", escape_html(&dict.footer.menu_label)));
  let nav = [
    ("/", &dict.nav.home),
    ("/uslugi", &dict.nav.services),
    ("/realizacje", &dict.nav.portfolio),
    ("/o-nas", &dict.nav.about),
    ("/zespol", &dict.nav.team),
    ("/kontakt", &dict.nav.contact),
  ];
  for (key, label) in nav {
    out.push_str(&format!("<a href=\"{}\">{}</a>\n", escape_html(&link(key)?), escape_html(label)));
  }
  out.push_str("</nav>\n");

  // goes through the switch endpoint so the locale cookie follows the choice
  let target = locale.other();
  out.push_str(&format!(
    "<a href=\"/api/locale-switch?locale={locale}&amp;path={}\" hreflang=\"{target}\" lang=\"{target}\" aria-label=\"{}\">{}</a>\n",
    encode_query_value(&current_path),
    escape_html(&dict.accessibility.switch_language),
    target.as_str().to_uppercase(),
  ));
  out.push_str("</header>\n<main>\n");

  out.push_str(&format!("<h1>{}</h1>\n", escape_html(&h.headline)));
  out.push_str(&format!("<p>{}</p>\n", escape_html(&h.subtitle)));

  match view {
    PageView::Home => {
      out.push_str(&format!(
        "<a href=\"{}\">{}</a>\n<a href=\"{}\">{}</a>\n",
        escape_html(&link("/kontakt")?),
        escape_html(&dict.hero.cta_primary),
        escape_html(&link("/realizacje")?),
        escape_html(&dict.hero.cta_secondary),
      ));
    }
    PageView::Services => {
      out.push_str("<ul>\n");
      for tier in &dict.services.tiers {
        out.push_str(&format!(
          "<li><h2>{}</h2><p>{}</p></li>\n",
          escape_html(&tier.name),
          escape_html(&tier.description)
        ));
      }
      out.push_str("</ul>\n");
    }
    PageView::Portfolio { studies } => {
      out.push_str("<ul>\n");
      for study in studies {
        out.push_str(&format!(
          "<li><a href=\"{}\">{}</a></li>\n",
          escape_html(&study_link(study.slug)?),
          escape_html(study.title)
        ));
      }
      out.push_str("</ul>\n");
    }
    PageView::CaseStudy { study, neighbors } => {
      let p = &dict.portfolio;
      for (label, text) in
        [(&p.about_project, study.about), (&p.challenge, study.challenge), (&p.solution, study.solution)]
      {
        out.push_str(&format!("<h2>{}</h2>\n<p>{}</p>\n", escape_html(label), escape_html(text)));
      }
      out.push_str(&format!("<h2>{}</h2>\n<ul>\n", escape_html(&p.what_we_did)));
      for task in &study.tasks {
        out.push_str(&format!("<li>{}</li>\n", escape_html(task)));
      }
      out.push_str("</ul>\n");
      out.push_str(&format!(
        "<a href=\"{}\" rel=\"external\">{}</a>\n",
        escape_html(study.url),
        escape_html(&p.visit_site)
      ));
      out.push_str("<nav>\n");
      if let Some(prev) = &neighbors.prev {
        out.push_str(&format!(
          "<a href=\"{}\" rel=\"prev\">{}: {}</a>\n",
          escape_html(&study_link(prev.slug)?),
          escape_html(&p.prev_project),
          escape_html(prev.title)
        ));
      }
      if let Some(next) = &neighbors.next {
        out.push_str(&format!(
          "<a href=\"{}\" rel=\"next\">{}: {}</a>\n",
          escape_html(&study_link(next.slug)?),
          escape_html(&p.next_project),
          escape_html(next.title)
        ));
      }
      out.push_str(&format!(
        "<a href=\"{}\">{}</a>\n</nav>\n",
        escape_html(&link("/realizacje")?),
        escape_html(&p.back)
      ));
    }
    PageView::About => {
      out.push_str(&format!("<p>{}</p>\n", escape_html(&dict.about.description)));
    }
    PageView::Team => {
      out.push_str("<ul>\n");
      for member in &dict.team.members {
        out.push_str(&format!(
          "<li><h2>{}</h2><p>{}</p></li>\n",
          escape_html(&member.name),
          escape_html(&member.role)
        ));
      }
      out.push_str("</ul>\n");
    }
    PageView::Contact => {
      let c = &dict.contact;
      out.push_str(&format!(
        "<a href=\"mailto:{0}\">{0}</a>\n<a href=\"{1}\">{2}</a>\n",
        escape_html(&c.email),
        escape_html(&c.phone_href),
        escape_html(&c.phone_number)
      ));
    }
    PageView::Privacy => {
      for section in &dict.privacy.sections {
        out.push_str(&format!(
          "<h2>{}</h2>\n<p>{}</p>\n",
          escape_html(&section.heading),
          escape_html(&section.body)
        ));
      }
    }
    PageView::NotFound => {
      out.push_str(&format!(
        "<a href=\"{}\">{}</a>\n",
        escape_html(&link("/")?),
        escape_html(&dict.not_found.back_home)
      ));
    }
  }

  out.push_str("</main>\n<footer>\n");
  out.push_str(&format!("<p>{}</p>\n", escape_html(&dict.footer.tagline)));
  out.push_str(&format!(
    "<a href=\"{}\">{}</a>\n",
    escape_html(&link("/polityka-prywatnosci")?),
    escape_html(&dict.footer.privacy)
  ));
  out.push_str(&format!("<p>{}</p>\n", escape_html(&dict.footer.rights)));
  out.push_str("</footer>\n</body>\n</html>\n");
  Ok(out)
}
