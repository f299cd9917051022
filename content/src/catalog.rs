use std::{collections::HashSet, sync::Arc};

use anyhow::Result;
use serde::Deserialize;
use tracing::debug;

use crate::project::{CategoryFilter, ProjectRecord};

const BUNDLED_PROJECTS: &str = include_str!("../data/projects.toml");

// the project catalog
//
// an ordered, immutable list of project records.  the order is the order of the
// data file, and every derived view (gallery tabs, counts) preserves it.  cloning
// is cheap since the records sit behind an Arc
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    projects: Arc<[ProjectRecord]>,
}

// the data file is a list of [[project]] tables
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    project: Vec<ProjectRecord>,
}

impl Catalog {
    pub fn new(mut projects: Vec<ProjectRecord>) -> Result<Self> {
        let mut seen = HashSet::new();

        for project in projects.iter_mut() {
            if project.id.trim().is_empty() {
                return Err(anyhow::Error::msg(format!(
                    "project \"{}\" has an empty id",
                    project.title
                )));
            }

            if !seen.insert(project.id.clone()) {
                return Err(anyhow::Error::msg(format!(
                    "duplicate project id: {}",
                    project.id
                )));
            }

            if project.image.trim().is_empty() {
                return Err(anyhow::Error::msg(format!(
                    "project {} has no primary image",
                    project.id
                )));
            }

            if project.images.iter().any(|i| i.trim().is_empty()) {
                return Err(anyhow::Error::msg(format!(
                    "project {} has an empty gallery image reference",
                    project.id
                )));
            }

            project.normalize();
        }

        debug!({ count = projects.len() }, "built project catalog");

        Ok(Catalog {
            projects: projects.into(),
        })
    }

    pub fn from_toml(doc: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(doc)?;
        Catalog::new(file.project)
    }

    // the catalog compiled into the binary
    pub fn bundled() -> Result<Self> {
        Catalog::from_toml(BUNDLED_PROJECTS)
    }

    pub fn projects(&self) -> &[ProjectRecord] {
        &self.projects
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProjectRecord> {
        self.projects.iter()
    }

    pub fn get(&self, id: &str) -> Option<&ProjectRecord> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn count(&self, filter: CategoryFilter) -> usize {
        self.projects
            .iter()
            .filter(|p| filter.matches(p.category))
            .count()
    }
}
