//! Static portfolio content
//!
//! The catalog is loaded once at startup, validated, and then only read.
//! The built-in payload ships inside the binary; a replacement can be
//! supplied through `catalog_path` in the user configuration.

mod entries;
mod validate;

pub use entries::{
    ContactDetails, ExperienceEntry, ProjectEntry, ProjectTag, ServiceEntry, TechnologyEntry,
};
pub use validate::{CatalogIssue, Section};

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

const BUILTIN_CATALOG: &str = include_str!("../../assets/catalog.json");

/// Errors raised while loading or validating a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("catalog has {} problem(s): {}", issues.len(), join_issues(issues))]
    Invalid { issues: Vec<CatalogIssue> },
}

fn join_issues(issues: &[CatalogIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Ordered, read-only portfolio content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    services: Vec<ServiceEntry>,
    #[serde(default)]
    technologies: Vec<TechnologyEntry>,
    #[serde(default)]
    experiences: Vec<ExperienceEntry>,
    #[serde(default)]
    projects: Vec<ProjectEntry>,
    #[serde(default)]
    contact_details: ContactDetails,
}

impl Catalog {
    /// The catalog compiled into the binary
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Parse a catalog payload
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a catalog payload from disk
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Load from `path` when given, otherwise the built-in catalog, and validate it
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        let catalog = match path {
            Some(path) => {
                tracing::info!("Loading catalog from {}", path.display());
                Self::from_path(path)?
            }
            None => Self::builtin()?,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn services(&self) -> &[ServiceEntry] {
        &self.services
    }

    pub fn technologies(&self) -> &[TechnologyEntry] {
        &self.technologies
    }

    pub fn experiences(&self) -> &[ExperienceEntry] {
        &self.experiences
    }

    pub fn projects(&self) -> &[ProjectEntry] {
        &self.projects
    }

    pub fn contact_details(&self) -> &ContactDetails {
        &self.contact_details
    }

    /// Every structural problem in the catalog
    pub fn issues(&self) -> Vec<CatalogIssue> {
        validate::check(self)
    }

    /// Fail with all problems when the catalog is malformed
    pub fn validate(&self) -> Result<(), CatalogError> {
        let issues = self.issues();
        if issues.is_empty() {
            Ok(())
        } else {
            Err(CatalogError::Invalid { issues })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn builtin() -> Catalog {
        Catalog::builtin().unwrap()
    }

    fn sample_project(id: &str) -> ProjectEntry {
        ProjectEntry {
            id: id.to_string(),
            name: "Sample".to_string(),
            description: "A sample project".to_string(),
            tags: vec![ProjectTag {
                name: "rust".to_string(),
                color_class: "blue-text-gradient".to_string(),
            }],
            image: "sample".to_string(),
            repo_url: None,
            demo_url: None,
        }
    }

    mod builtin_catalog {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_builtin_is_valid() {
            let catalog = builtin();
            assert!(catalog.validate().is_ok(), "{:?}", catalog.issues());
        }

        #[test]
        fn test_section_sizes() {
            let catalog = builtin();
            assert_eq!(catalog.services().len(), 3);
            assert_eq!(catalog.technologies().len(), 14);
            assert_eq!(catalog.experiences().len(), 2);
            assert_eq!(catalog.projects().len(), 4);
        }

        #[test]
        fn test_project_ids_are_unique() {
            let catalog = builtin();
            let distinct: HashSet<_> = catalog.projects().iter().map(|p| &p.id).collect();
            assert_eq!(distinct.len(), catalog.projects().len());
        }

        #[test]
        fn test_technologies_have_name_and_icon() {
            for tech in builtin().technologies() {
                assert!(!tech.name.is_empty());
                assert!(!tech.icon.is_empty());
            }
        }

        #[test]
        fn test_project_link_combinations() {
            let catalog = builtin();
            let movie = catalog
                .projects()
                .iter()
                .find(|p| p.id == "project-4")
                .unwrap();
            assert!(movie.repo_url.is_none());
            assert!(movie.demo_url.is_some());
        }

        #[test]
        fn test_first_project_tags_in_order() {
            let catalog = builtin();
            let tags: Vec<_> = catalog.projects()[0]
                .tags
                .iter()
                .map(|t| t.name.as_str())
                .collect();
            assert_eq!(tags, vec!["react", "mongodb", "tailwind"]);
        }
    }

    mod validation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_duplicate_project_id_reported() {
            let mut catalog = builtin();
            catalog.projects = vec![sample_project("dup"), sample_project("dup")];

            let issues = catalog.issues();
            assert_eq!(issues.len(), 1);
            assert_eq!(issues[0].section, Section::Projects);
            assert_eq!(issues[0].index, 1);
            assert!(issues[0].problem.contains("duplicate id"));
        }

        #[test]
        fn test_empty_technology_name_reported() {
            let mut catalog = builtin();
            catalog.technologies.push(TechnologyEntry {
                name: "   ".to_string(),
                icon: "rust".to_string(),
            });

            let issues = catalog.issues();
            assert_eq!(issues.len(), 1);
            assert_eq!(issues[0].section, Section::Technologies);
            assert_eq!(issues[0].index, 14);
        }

        #[test]
        fn test_bad_url_and_color_both_reported() {
            let mut catalog = builtin();
            let mut project = sample_project("bad-url");
            project.demo_url = Some("not a url".to_string());
            catalog.projects.push(project);
            catalog.experiences[0].icon_color = "grey".to_string();

            let issues = catalog.issues();
            assert_eq!(issues.len(), 2);
            assert!(issues.iter().any(|i| i.section == Section::Experiences));
            assert!(issues.iter().any(|i| i.problem.contains("demo_url")));
        }

        #[test]
        fn test_empty_tag_reported() {
            let mut catalog = builtin();
            let mut project = sample_project("empty-tag");
            project.tags.push(ProjectTag {
                name: String::new(),
                color_class: "pink-text-gradient".to_string(),
            });
            catalog.projects.push(project);

            assert_eq!(catalog.issues().len(), 1);
        }

        #[test]
        fn test_validate_error_lists_issues() {
            let mut catalog = builtin();
            catalog.services[0].title.clear();

            let err = catalog.validate().unwrap_err();
            let message = err.to_string();
            assert!(message.contains("1 problem(s)"));
            assert!(message.contains("services[0]: `title` is empty"));
        }
    }

    mod loading {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_from_json_defaults_missing_sections() {
            let catalog = Catalog::from_json("{}").unwrap();
            assert!(catalog.services().is_empty());
            assert!(catalog.projects().is_empty());
        }

        #[test]
        fn test_from_json_rejects_garbage() {
            let err = Catalog::from_json("not json").unwrap_err();
            assert!(matches!(err, CatalogError::Parse(_)));
        }

        #[test]
        fn test_load_missing_file_is_io_error() {
            let err = Catalog::load(Some(Path::new("/nonexistent/catalog.json"))).unwrap_err();
            assert!(matches!(err, CatalogError::Io(_)));
        }

        #[test]
        fn test_load_without_path_uses_builtin() {
            let catalog = Catalog::load(None).unwrap();
            assert_eq!(catalog, builtin());
        }
    }
}
