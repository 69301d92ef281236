//! Core data models for Folio
//!
//! Defines the hand-authored content shown on the page:
//! - `StoryParagraph`, `ExperienceEntry`, `ProjectEntry`, `Testimonial`, `FaqEntry`
//! - `SiteContent`: the full, immutable content set
//! - Supporting enums: `StoryPosition`, `SectionId`, `NavTarget`

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FolioError;

/// Where a story paragraph sits on screen during the about sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum StoryPosition {
    #[default]
    Center,
    LeftTop,
    LeftBottom,
    RightTop,
    RightBottom,
}

impl StoryPosition {
    /// Horizontal offset (px) a paragraph slides in from.
    ///
    /// Left-anchored paragraphs enter from the left, everything else from the right.
    pub fn slide_offset(self) -> f64 {
        match self {
            StoryPosition::LeftTop | StoryPosition::LeftBottom => -50.0,
            _ => 50.0,
        }
    }
}

/// One paragraph of the about-section narrative
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryParagraph {
    pub id: u32,
    pub text: String,
    #[serde(default)]
    pub position: StoryPosition,
    #[serde(default)]
    pub small: bool,
}

/// A role shown as a card in the experience section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub id: u32,
    pub role: String,
    pub company: String,
    pub duration: String,
    pub description: String,
}

/// A project shown as a mock-device card in the projects section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub id: u32,
    pub title: String,
    pub category: String,
    /// Externally hosted; never fetched
    pub laptop_image: String,
    /// Externally hosted; never fetched
    pub mobile_image: String,
    pub background_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub author: String,
    pub role: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub number: String,
    pub question: String,
    pub answer: String,
}

/// The complete content set for the page
///
/// Loaded once; membership never changes at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SiteContent {
    #[serde(default)]
    pub story: Vec<StoryParagraph>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    #[serde(default)]
    pub faq: Vec<FaqEntry>,
}

/// Page sections in document order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Hero,
    About,
    Experience,
    Projects,
    Testimonials,
    Faq,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 7] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Experience,
        SectionId::Projects,
        SectionId::Testimonials,
        SectionId::Faq,
        SectionId::Contact,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Experience => "experience",
            SectionId::Projects => "projects",
            SectionId::Testimonials => "testimonials",
            SectionId::Faq => "faq",
            SectionId::Contact => "contact",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        SectionId::ALL
            .into_iter()
            .find(|id| id.as_str() == wanted)
            .ok_or_else(|| FolioError::UnknownSection {
                name: s.to_string(),
                expected: SectionId::ALL
                    .iter()
                    .map(|id| id.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

/// Navigation entries, one per in-page anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NavTarget {
    #[default]
    Home,
    About,
    Experience,
    Projects,
    Testimonials,
    Faq,
    Contact,
}

impl NavTarget {
    pub const ALL: [NavTarget; 7] = [
        NavTarget::Home,
        NavTarget::About,
        NavTarget::Experience,
        NavTarget::Projects,
        NavTarget::Testimonials,
        NavTarget::Faq,
        NavTarget::Contact,
    ];

    /// Label shown in the navigation bar
    pub fn label(self) -> &'static str {
        match self {
            NavTarget::Home => "Home",
            NavTarget::About => "About",
            NavTarget::Experience => "Journey",
            NavTarget::Projects => "Projects",
            NavTarget::Testimonials => "Testimonials",
            NavTarget::Faq => "FAQ",
            NavTarget::Contact => "Contact",
        }
    }

    /// In-page anchor, e.g. `#projects`
    pub fn href(self) -> &'static str {
        match self {
            NavTarget::Home => "#home",
            NavTarget::About => "#about",
            NavTarget::Experience => "#experience",
            NavTarget::Projects => "#projects",
            NavTarget::Testimonials => "#testimonials",
            NavTarget::Faq => "#faq",
            NavTarget::Contact => "#contact",
        }
    }

    /// Section the anchor lives in
    pub fn section(self) -> SectionId {
        match self {
            NavTarget::Home => SectionId::Hero,
            NavTarget::About => SectionId::About,
            NavTarget::Experience => SectionId::Experience,
            NavTarget::Projects => SectionId::Projects,
            NavTarget::Testimonials => SectionId::Testimonials,
            NavTarget::Faq => SectionId::Faq,
            NavTarget::Contact => SectionId::Contact,
        }
    }

    /// 1-based position in the bar, used for keyboard shortcuts
    pub fn from_index(index: usize) -> Option<NavTarget> {
        index
            .checked_sub(1)
            .and_then(|i| NavTarget::ALL.get(i).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_story_position_serde() {
        let p: StoryPosition = serde_json::from_str("\"left-bottom\"").unwrap();
        assert_eq!(p, StoryPosition::LeftBottom);
        assert_eq!(p.slide_offset(), -50.0);
        assert_eq!(StoryPosition::Center.slide_offset(), 50.0);
    }

    #[test]
    fn test_section_id_from_str() {
        assert_eq!("Projects".parse::<SectionId>().unwrap(), SectionId::Projects);
        assert!("pricing".parse::<SectionId>().is_err());
    }

    #[test]
    fn test_nav_targets_have_seven_anchors() {
        let hrefs: Vec<_> = NavTarget::ALL.iter().map(|t| t.href()).collect();
        assert_eq!(
            hrefs,
            vec![
                "#home",
                "#about",
                "#experience",
                "#projects",
                "#testimonials",
                "#faq",
                "#contact"
            ]
        );
    }

    #[test]
    fn test_nav_from_index_is_one_based() {
        assert_eq!(NavTarget::from_index(1), Some(NavTarget::Home));
        assert_eq!(NavTarget::from_index(4), Some(NavTarget::Projects));
        assert_eq!(NavTarget::from_index(0), None);
        assert_eq!(NavTarget::from_index(8), None);
    }
}
