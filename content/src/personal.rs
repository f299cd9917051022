use anyhow::Result;
use serde::{Deserialize, Serialize};

const BUNDLED_PERSONAL: &str = include_str!("../data/personal.toml");

// personal details shown by the hero, about and contact sections
//
// none of this feeds the gallery or navigation logic, it is display data only
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub full_name: String,
    pub title: String,
    pub location: String,
    pub bio: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub socials: Socials,
    #[serde(default)]
    pub resume_link: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<TechnologyGroup>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub awards: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Socials {
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub facebook: Option<String>,
    pub whatsapp: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TechnologyGroup {
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub year: String,
}

impl PersonalInfo {
    pub fn from_toml(doc: &str) -> Result<Self> {
        Ok(toml::from_str(doc)?)
    }

    pub fn bundled() -> Result<Self> {
        PersonalInfo::from_toml(BUNDLED_PERSONAL)
    }

    // the hero only has room for a handful of skills
    pub fn headline_skills(&self, n: usize) -> &[String] {
        &self.skills[..n.min(self.skills.len())]
    }
}

impl Socials {
    // (label, url) pairs for the links that are set, in display order
    pub fn links(&self) -> Vec<(&'static str, &str)> {
        [
            ("GitHub", &self.github),
            ("LinkedIn", &self.linkedin),
            ("Facebook", &self.facebook),
            ("WhatsApp", &self.whatsapp),
        ]
        .into_iter()
        .filter_map(|(label, url)| url.as_deref().map(|u| (label, u)))
        .collect()
    }
}

// strip the scheme for display, "https://linkedin.com/in/x" -> "linkedin.com/in/x"
pub fn display_url(url: &str) -> &str {
    url.strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url)
}
