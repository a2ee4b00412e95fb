//! Display records shown by the portfolio sections

use serde::{Deserialize, Serialize};

/// A service offered, shown as a card in the overview
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceEntry {
    pub title: String,
    pub icon: String,
}

/// A technology badge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechnologyEntry {
    pub name: String,
    pub icon: String,
}

/// A work experience timeline entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company_name: String,
    pub icon: String,
    /// Background colour behind the icon (`#rgb` or `#rrggbb`)
    pub icon_color: String,
    pub date: String,
}

/// A tag on a project card. Tags render left-to-right in declared order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectTag {
    pub name: String,
    pub color_class: String,
}

/// A project card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<ProjectTag>,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
}

impl ProjectEntry {
    /// Links that exist for this project, labelled for display
    pub fn links(&self) -> Vec<(&'static str, &str)> {
        let mut links = Vec::with_capacity(2);
        if let Some(repo) = self.repo_url.as_deref() {
            links.push(("Source", repo));
        }
        if let Some(demo) = self.demo_url.as_deref() {
            links.push(("Live demo", demo));
        }
        links
    }

    /// Description with surrounding whitespace removed
    pub fn summary(&self) -> &str {
        self.description.trim()
    }
}

/// Direct contact channels shown next to the contact form
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactDetails {
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whatsapp_url: Option<String>,
}
