use serde::{Deserialize, Serialize};

/// Complete localized copy for one locale. Both locale files deserialize into
/// this type, so a key missing from either one fails at load time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Dictionary {
  pub metadata: Metadata,
  pub nav: Nav,
  pub accessibility: Accessibility,
  pub hero: Hero,
  pub problem: Problem,
  pub process: Process,
  pub services: Services,
  pub featured_work: SectionHeading,
  pub portfolio: Portfolio,
  pub about: About,
  pub team: Team,
  pub contact: Contact,
  pub cta: Cta,
  pub footer: Footer,
  pub privacy: Privacy,
  pub not_found: NotFound,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Metadata {
  pub title: String,
  pub description: String,
  pub services_title: String,
  pub services_description: String,
  pub portfolio_title: String,
  pub portfolio_description: String,
  pub about_title: String,
  pub about_description: String,
  pub team_title: String,
  pub team_description: String,
  pub contact_title: String,
  pub contact_description: String,
  pub privacy_title: String,
  pub privacy_description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Nav {
  pub home: String,
  pub services: String,
  pub portfolio: String,
  pub about: String,
  pub team: String,
  pub contact: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Accessibility {
  pub open_menu: String,
  pub close_menu: String,
  pub switch_language: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Hero {
  pub headline_1: String,
  pub headline_2: String,
  pub subheadline: String,
  pub cta_primary: String,
  pub cta_secondary: String,
  pub scroll: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Problem {
  pub title: String,
  pub points: Vec<String>,
  pub solution_title: String,
  pub solution_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Process {
  pub title: String,
  pub subtitle: String,
  pub steps: Vec<TitledText>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TitledText {
  pub title: String,
  pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SectionHeading {
  pub title: String,
  pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Services {
  pub title: String,
  pub subtitle: String,
  pub cta: String,
  pub tiers: Vec<ServiceTier>,
  pub faq: Faq,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceTier {
  pub name: String,
  pub description: String,
  pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Faq {
  pub title: String,
  pub questions: Vec<FaqEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FaqEntry {
  pub question: String,
  pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Portfolio {
  pub title: String,
  pub subtitle: String,
  pub view_project: String,
  pub view_all: String,
  pub visit_site: String,
  pub about_project: String,
  pub challenge: String,
  pub solution: String,
  pub what_we_did: String,
  pub back: String,
  pub prev_project: String,
  pub next_project: String,
  pub featured_badge: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct About {
  pub title: String,
  pub intro: String,
  pub description: String,
  pub why_us: WhyUs,
  pub contact_line: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WhyUs {
  pub title: String,
  pub points: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Team {
  pub title: String,
  pub intro: String,
  pub members: Vec<TeamMember>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TeamMember {
  pub name: String,
  pub role: String,
  pub bio: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Contact {
  pub title: String,
  pub subtitle: String,
  pub email: String,
  pub phone_number: String,
  pub phone_href: String,
  pub form: ContactForm,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactForm {
  pub name: String,
  pub company: String,
  pub email: String,
  pub phone: String,
  pub message: String,
  pub submit: String,
  pub sending: String,
  pub success: String,
  /// Shown when the server rejected the fields
  pub error_validation: String,
  /// Shown on 429
  pub error_rate_limited: String,
  pub error: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Cta {
  pub title: String,
  pub button: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Footer {
  pub tagline: String,
  pub menu_label: String,
  pub privacy: String,
  pub rights: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Privacy {
  pub title: String,
  pub updated: String,
  pub sections: Vec<PrivacySection>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PrivacySection {
  pub heading: String,
  pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NotFound {
  pub title: String,
  pub message: String,
  pub back_home: String,
}
