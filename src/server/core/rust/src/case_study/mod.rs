mod data;
mod types;

use std::collections::HashSet;
use std::fmt;

use crate::locale::Locale;

pub use types::{
  CaseStudy, Content, Images, Localized, LocalizedCaseStudy, LocalizedMetric,
  LocalizedTestimonial, Metric, NeighborLink, Neighbors, Results, Testimonial,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseStudyError {
  DuplicateSlug(&'static str),
  DuplicateOrder(u32),
  /// Slugs are used verbatim as URL segments.
  InvalidSlug(&'static str),
}

impl fmt::Display for CaseStudyError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::DuplicateSlug(slug) => write!(f, "duplicate case study slug \"{slug}\""),
      Self::DuplicateOrder(order) => write!(f, "duplicate case study order {order}"),
      Self::InvalidSlug(slug) => {
        write!(f, "case study slug \"{slug}\" must match [a-z0-9-]+")
      }
    }
  }
}

impl std::error::Error for CaseStudyError {}

/// Portfolio entries held in `order` sequence.
#[derive(Debug, Clone)]
pub struct CaseStudies {
  items: Vec<&'static CaseStudy>,
}

impl CaseStudies {
  pub fn new(items: impl IntoIterator<Item = &'static CaseStudy>) -> Result<Self, CaseStudyError> {
    let mut items: Vec<&'static CaseStudy> = items.into_iter().collect();
    let mut slugs = HashSet::new();
    let mut orders = HashSet::new();
    for study in &items {
      if study.slug.is_empty()
        || !study.slug.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
      {
        return Err(CaseStudyError::InvalidSlug(study.slug));
      }
      if !slugs.insert(study.slug) {
        return Err(CaseStudyError::DuplicateSlug(study.slug));
      }
      if !orders.insert(study.order) {
        return Err(CaseStudyError::DuplicateOrder(study.order));
      }
    }
    items.sort_by_key(|s| s.order);
    Ok(Self { items })
  }

  /// The site's published case studies.
  pub fn builtin() -> Result<Self, CaseStudyError> {
    Self::new(data::CASE_STUDIES)
  }

  pub fn get(&self, slug: &str) -> Option<&'static CaseStudy> {
    self.items.iter().copied().find(|s| s.slug == slug)
  }

  /// All case studies sorted by `order`.
  pub fn all(&self) -> &[&'static CaseStudy] {
    &self.items
  }

  pub fn featured(&self) -> impl Iterator<Item = &'static CaseStudy> + '_ {
    self.items.iter().copied().filter(|s| s.featured)
  }

  pub fn slugs(&self) -> impl Iterator<Item = &'static str> + '_ {
    self.items.iter().map(|s| s.slug)
  }

  pub fn localized(&self, slug: &str, locale: Locale) -> Option<LocalizedCaseStudy> {
    self.get(slug).map(|s| s.localize(locale))
  }

  /// Previous and next case study in `order` sequence, or `None` for an unknown slug.
  pub fn neighbors(&self, slug: &str, locale: Locale) -> Option<Neighbors> {
    let idx = self.items.iter().position(|s| s.slug == slug)?;
    let link = |s: &CaseStudy| NeighborLink { slug: s.slug, title: s.title.get(locale) };
    Some(Neighbors {
      prev: idx.checked_sub(1).map(|i| link(self.items[i])),
      next: self.items.get(idx + 1).map(|&s| link(s)),
    })
  }
}
