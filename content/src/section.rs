use std::fmt;

use serde::{Deserialize, Serialize};

// named page sections, in page order
//
// the anchor is the element id the navbar links to and the tracker measures
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    Hero,
    About,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Hero,
        Section::About,
        Section::Projects,
        Section::Contact,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }

    // navbar label
    pub fn label(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    pub fn first() -> Section {
        Section::ALL[0]
    }
}

impl Default for Section {
    fn default() -> Self {
        Section::first()
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_is_first_and_default() {
        assert_eq!(Section::first(), Section::Hero);
        assert_eq!(Section::default(), Section::Hero);
        assert_eq!(Section::Hero.label(), "Home");
    }

    #[test]
    fn hrefs_point_at_anchors() {
        let hrefs: Vec<String> = Section::ALL.iter().map(|s| s.href()).collect();
        assert_eq!(hrefs, vec!["#hero", "#about", "#projects", "#contact"]);
    }
}
