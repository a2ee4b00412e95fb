//! Structural checks over a loaded catalog

use super::Catalog;
use std::collections::HashSet;
use std::fmt;
use url::Url;

/// Catalog section an issue was found in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Services,
    Technologies,
    Experiences,
    Projects,
    ContactDetails,
}

impl Section {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Services => "services",
            Self::Technologies => "technologies",
            Self::Experiences => "experiences",
            Self::Projects => "projects",
            Self::ContactDetails => "contact_details",
        }
    }
}

/// A single structural problem in the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogIssue {
    pub section: Section,
    /// Position of the offending entry within its section
    pub index: usize,
    pub problem: String,
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.section.label(), self.index, self.problem)
    }
}

/// Collects issues for one catalog pass
struct Checker {
    issues: Vec<CatalogIssue>,
}

impl Checker {
    fn push(&mut self, section: Section, index: usize, problem: impl Into<String>) {
        self.issues.push(CatalogIssue {
            section,
            index,
            problem: problem.into(),
        });
    }

    fn require(&mut self, section: Section, index: usize, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.push(section, index, format!("`{field}` is empty"));
        }
    }

    fn require_url(&mut self, section: Section, index: usize, field: &str, value: &str) {
        if let Err(err) = Url::parse(value) {
            self.push(section, index, format!("`{field}` is not a valid URL: {err}"));
        }
    }
}

fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => {
            matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}

/// Run every structural check and return all problems found
pub fn check(catalog: &Catalog) -> Vec<CatalogIssue> {
    let mut checker = Checker { issues: Vec::new() };

    for (idx, service) in catalog.services.iter().enumerate() {
        checker.require(Section::Services, idx, "title", &service.title);
        checker.require(Section::Services, idx, "icon", &service.icon);
    }

    for (idx, tech) in catalog.technologies.iter().enumerate() {
        checker.require(Section::Technologies, idx, "name", &tech.name);
        checker.require(Section::Technologies, idx, "icon", &tech.icon);
    }

    for (idx, exp) in catalog.experiences.iter().enumerate() {
        checker.require(Section::Experiences, idx, "title", &exp.title);
        checker.require(Section::Experiences, idx, "company_name", &exp.company_name);
        checker.require(Section::Experiences, idx, "icon", &exp.icon);
        checker.require(Section::Experiences, idx, "date", &exp.date);
        if !is_hex_color(&exp.icon_color) {
            checker.push(
                Section::Experiences,
                idx,
                format!("`icon_color` {:?} is not a hex colour", exp.icon_color),
            );
        }
    }

    let mut seen_ids = HashSet::new();
    for (idx, project) in catalog.projects.iter().enumerate() {
        checker.require(Section::Projects, idx, "id", &project.id);
        checker.require(Section::Projects, idx, "name", &project.name);
        checker.require(Section::Projects, idx, "description", &project.description);
        checker.require(Section::Projects, idx, "image", &project.image);

        if !project.id.is_empty() && !seen_ids.insert(project.id.as_str()) {
            checker.push(
                Section::Projects,
                idx,
                format!("duplicate id {:?}", project.id),
            );
        }

        for tag in &project.tags {
            if tag.name.trim().is_empty() || tag.color_class.trim().is_empty() {
                checker.push(Section::Projects, idx, "tag with empty name or colour");
            }
        }

        if let Some(repo) = &project.repo_url {
            checker.require_url(Section::Projects, idx, "repo_url", repo);
        }
        if let Some(demo) = &project.demo_url {
            checker.require_url(Section::Projects, idx, "demo_url", demo);
        }
    }

    let details = &catalog.contact_details;
    checker.require(Section::ContactDetails, 0, "email", &details.email);
    if let Some(whatsapp) = &details.whatsapp_url {
        checker.require_url(Section::ContactDetails, 0, "whatsapp_url", whatsapp);
    }

    checker.issues
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_colors() {
        assert!(is_hex_color("#333333"));
        assert!(is_hex_color("#fff"));
        assert!(is_hex_color("#A1b2C3"));
        assert!(!is_hex_color("333333"));
        assert!(!is_hex_color("#33"));
        assert!(!is_hex_color("#gggggg"));
        assert!(!is_hex_color(""));
    }

    #[test]
    fn test_issue_display() {
        let issue = CatalogIssue {
            section: Section::Projects,
            index: 2,
            problem: "`name` is empty".to_string(),
        };
        assert_eq!(issue.to_string(), "projects[2]: `name` is empty");
    }
}
