use std::collections::HashSet;
use std::rc::Rc;

use serde::Deserialize;
use thiserror::Error;

use crate::config;

const BUILTIN_CATALOG: &str = include_str!("../../content/projects.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("project '{title}' has no images")]
    NoImages { title: String },
    #[error("project title '{title}' appears more than once")]
    DuplicateTitle { title: String },
}

/// File name of an image bundled under the asset root.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn name(&self) -> &str {
        &self.0
    }

    pub fn url(&self) -> String {
        config::asset_url(&self.0)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Project {
    pub title: String,
    pub category: String,
    pub description: String,
    pub images: Vec<ImageRef>,
}

#[derive(Deserialize)]
struct RawCatalog {
    projects: Vec<Project>,
}

/// The read-only table of portfolio projects shown in the grid.
///
/// Built once at startup and shared through context. Every project in a
/// `Catalog` has at least one image and a unique title.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    projects: Vec<Rc<Project>>,
}

impl Catalog {
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog = serde_json::from_str(json)?;
        Self::from_projects(raw.projects)
    }

    pub fn from_projects(projects: Vec<Project>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for project in &projects {
            if project.images.is_empty() {
                return Err(CatalogError::NoImages {
                    title: project.title.clone(),
                });
            }
            if !seen.insert(project.title.as_str()) {
                return Err(CatalogError::DuplicateTitle {
                    title: project.title.clone(),
                });
            }
        }

        Ok(Catalog {
            projects: projects.into_iter().map(Rc::new).collect(),
        })
    }

    pub fn find(&self, title: &str) -> Option<Rc<Project>> {
        self.projects.iter().find(|p| p.title == title).cloned()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rc<Project>> {
        self.projects.iter()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_loads() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.len(), 5);
        assert!(catalog.iter().all(|p| p.images.len() == 3));

        let bistro = catalog.find("Artisan Bistro").unwrap();
        assert_eq!(bistro.category, "Café & Restaurant");
        assert_eq!(bistro.images[0].name(), "portfolio-cafe.jpg");
    }

    #[test]
    fn builtin_catalog_keeps_declared_order() {
        let catalog = Catalog::builtin().unwrap();
        let titles: Vec<&str> = catalog.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(
            titles,
            ["Elite Fitness", "Artisan Bistro", "Nexus Corp", "Maison Noir", "Studio Flux"]
        );
    }

    #[test]
    fn rejects_project_without_images() {
        let json = r#"{"projects": [
            {"title": "Empty", "category": "c", "description": "d", "images": []}
        ]}"#;
        match Catalog::from_json(json) {
            Err(CatalogError::NoImages { title }) => assert_eq!(title, "Empty"),
            other => panic!("expected NoImages, got {:?}", other),
        }
    }

    #[test]
    fn rejects_duplicate_titles() {
        let json = r#"{"projects": [
            {"title": "A", "category": "c", "description": "d", "images": ["a.jpg"]},
            {"title": "A", "category": "c", "description": "d", "images": ["b.jpg"]}
        ]}"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(CatalogError::DuplicateTitle { .. })
        ));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            Catalog::from_json("{\"projects\": ["),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn empty_catalog_is_valid() {
        let catalog = Catalog::from_json(r#"{"projects": []}"#).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.find("anything").is_none());
    }

    #[test]
    fn image_url_uses_asset_root() {
        let catalog = Catalog::builtin().unwrap();
        let image = &catalog.find("Maison Noir").unwrap().images[0];
        assert_eq!(image.url(), config::asset_url("portfolio-fashion.jpg"));
    }
}
