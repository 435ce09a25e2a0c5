use serde::Serialize;

use crate::locale::Locale;

/// A string published in both locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Localized {
  pub pl: &'static str,
  pub en: &'static str,
}

impl Localized {
  pub const fn new(pl: &'static str, en: &'static str) -> Self {
    Self { pl, en }
  }

  pub fn get(&self, locale: Locale) -> &'static str {
    match locale {
      Locale::Pl => self.pl,
      Locale::En => self.en,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseStudy {
  pub slug: &'static str,
  pub title: Localized,
  pub description: Localized,
  pub tags: &'static [&'static str],
  pub client: &'static str,
  pub url: &'static str,
  pub featured: bool,
  /// Position in listings and prev/next navigation.
  pub order: u32,
  pub images: Images,
  pub results: Option<Results>,
  pub content: Content,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Images {
  pub cover: &'static str,
  pub gallery: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Results {
  pub metrics: &'static [Metric],
  pub testimonial: Option<Testimonial>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metric {
  pub value: &'static str,
  pub label: Localized,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Testimonial {
  pub quote: Localized,
  pub author: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Content {
  pub about: Localized,
  pub challenge: Localized,
  pub solution: Localized,
  pub tasks: &'static [Localized],
}

/// A case study with every localized field projected to one locale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocalizedCaseStudy {
  pub slug: &'static str,
  pub locale: Locale,
  pub title: &'static str,
  pub description: &'static str,
  pub tags: &'static [&'static str],
  pub client: &'static str,
  pub url: &'static str,
  pub featured: bool,
  pub order: u32,
  pub cover: &'static str,
  pub gallery: &'static [&'static str],
  pub about: &'static str,
  pub challenge: &'static str,
  pub solution: &'static str,
  pub tasks: Vec<&'static str>,
  pub metrics: Vec<LocalizedMetric>,
  pub testimonial: Option<LocalizedTestimonial>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocalizedMetric {
  pub value: &'static str,
  pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocalizedTestimonial {
  pub quote: &'static str,
  pub author: &'static str,
}

impl CaseStudy {
  pub fn localize(&self, locale: Locale) -> LocalizedCaseStudy {
    let (metrics, testimonial) = match &self.results {
      Some(results) => (
        results
          .metrics
          .iter()
          .map(|m| LocalizedMetric { value: m.value, label: m.label.get(locale) })
          .collect(),
        results
          .testimonial
          .as_ref()
          .map(|t| LocalizedTestimonial { quote: t.quote.get(locale), author: t.author }),
      ),
      None => (Vec::new(), None),
    };

    LocalizedCaseStudy {
      slug: self.slug,
      locale,
      title: self.title.get(locale),
      description: self.description.get(locale),
      tags: self.tags,
      client: self.client,
      url: self.url,
      featured: self.featured,
      order: self.order,
      cover: self.images.cover,
      gallery: self.images.gallery,
      about: self.content.about.get(locale),
      challenge: self.content.challenge.get(locale),
      solution: self.content.solution.get(locale),
      tasks: self.content.tasks.iter().map(|t| t.get(locale)).collect(),
      metrics,
      testimonial,
    }
  }
}

/// Slug and title of an adjacent case study, for prev/next links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NeighborLink {
  pub slug: &'static str,
  pub title: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Neighbors {
  pub prev: Option<NeighborLink>,
  pub next: Option<NeighborLink>,
}
