use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

// structs and types

pub type ProjectId = String;

// the closed set of project categories
//
// the serialized spelling is the one shown on the gallery tabs, so the data files
// and the rendered labels never drift apart
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Full-Stack")]
    FullStack,
    #[serde(rename = "Front-End")]
    FrontEnd,
    #[serde(rename = "WordPress")]
    WordPress,
    #[serde(rename = "QA")]
    Qa,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::FullStack,
        Category::FrontEnd,
        Category::WordPress,
        Category::Qa,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::FullStack => "Full-Stack",
            Category::FrontEnd => "Front-End",
            Category::WordPress => "WordPress",
            Category::Qa => "QA",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        Category::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| anyhow::Error::msg(format!("unknown project category: {s}")))
    }
}

// gallery tab selection
//
// All is a sentinel that is never stored on a project, which is why it lives
// here rather than as a fifth Category
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub const ALL_LABEL: &'static str = "All";

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => Self::ALL_LABEL,
            CategoryFilter::Only(c) => c.label(),
        }
    }

    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => c == category,
        }
    }

    // every selectable value, All first
    pub fn options() -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(Category::ALL.into_iter().map(CategoryFilter::Only))
            .collect()
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CategoryFilter {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        if s == Self::ALL_LABEL {
            return Ok(CategoryFilter::All);
        }

        Ok(CategoryFilter::Only(s.parse()?))
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

// the core project record
//
// optional display fields use "empty means absent" so the data files can simply
// leave them out; the accessors below hide that convention from the views
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub category: Category,
    #[serde(default)]
    pub tags: Vec<String>,
    pub image: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub challenges: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
}

impl ProjectRecord {
    // the sequence the detail carousel walks over
    //
    // falls back to the primary image, so the result always has at least one entry
    pub fn effective_images(&self) -> Vec<&str> {
        if self.images.is_empty() {
            vec![self.image.as_str()]
        } else {
            self.images.iter().map(String::as_str).collect()
        }
    }

    pub fn image_count(&self) -> usize {
        self.images.len().max(1)
    }

    pub fn image_at(&self, index: usize) -> &str {
        self.images
            .get(index)
            .map(String::as_str)
            .unwrap_or(self.image.as_str())
    }

    // the modal shows the long form when present
    pub fn detail_text(&self) -> &str {
        self.long_description
            .as_deref()
            .unwrap_or(self.description.as_str())
    }

    // empty optional strings are treated as missing
    pub(crate) fn normalize(&mut self) {
        for field in [
            &mut self.long_description,
            &mut self.challenges,
            &mut self.live_url,
            &mut self.github_url,
        ] {
            if field.as_deref().is_some_and(|s| s.trim().is_empty()) {
                *field = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(images: &[&str]) -> ProjectRecord {
        ProjectRecord {
            id: "fs-1".to_owned(),
            title: "Storefront".to_owned(),
            description: "short".to_owned(),
            category: Category::FullStack,
            tags: vec!["Rust".to_owned()],
            image: "/img/cover.jpg".to_owned(),
            images: images.iter().map(|s| s.to_string()).collect(),
            long_description: None,
            features: Vec::new(),
            technologies: Vec::new(),
            challenges: None,
            live_url: None,
            github_url: None,
        }
    }

    #[test]
    fn category_labels_parse_back() {
        for category in Category::ALL {
            assert_eq!(category.label().parse::<Category>().unwrap(), category);
        }
        assert!("Backend".parse::<Category>().is_err());
    }

    #[test]
    fn filter_parses_all_sentinel() {
        assert_eq!("All".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "QA".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(Category::Qa)
        );
        assert!("all".parse::<CategoryFilter>().is_err());
    }

    #[test]
    fn filter_options_start_with_all() {
        let options = CategoryFilter::options();
        assert_eq!(options.len(), 5);
        assert_eq!(options[0], CategoryFilter::All);
        assert!(options[1..].iter().all(|o| *o != CategoryFilter::All));
    }

    #[test]
    fn effective_images_fall_back_to_primary() {
        let p = record(&[]);
        assert_eq!(p.effective_images(), vec!["/img/cover.jpg"]);
        assert_eq!(p.image_count(), 1);
        assert_eq!(p.image_at(3), "/img/cover.jpg");

        let p = record(&["a", "b"]);
        assert_eq!(p.effective_images(), vec!["a", "b"]);
        assert_eq!(p.image_count(), 2);
        assert_eq!(p.image_at(1), "b");
    }

    #[test]
    fn blank_optional_fields_are_dropped() {
        let mut p = record(&[]);
        p.challenges = Some("  ".to_owned());
        p.live_url = Some("https://example.com".to_owned());
        p.normalize();

        assert_eq!(p.challenges, None);
        assert_eq!(p.live_url.as_deref(), Some("https://example.com"));
        assert_eq!(p.detail_text(), "short");
    }

    #[test]
    fn category_uses_display_spelling_in_toml() {
        let doc = r#"
            id = "qa-1"
            title = "Suite"
            description = "tests"
            category = "QA"
            image = "/img/qa.jpg"
        "#;
        let p: ProjectRecord = toml::from_str(doc).unwrap();
        assert_eq!(p.category, Category::Qa);
        assert!(p.tags.is_empty());
        assert!(p.images.is_empty());
    }
}
