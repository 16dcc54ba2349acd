use portfolio_shared::models::{Book, Project};
use std::collections::HashSet;
use std::path::Path;

/// Static site content, read once at start-up.
pub struct Assets {
    pub projects: Vec<Project>,
    pub books: Vec<Book>,
}

impl Assets {
    pub fn load(assets_dir: &Path) -> Result<Self, String> {
        let projects: Vec<Project> = read_json(&assets_dir.join("projects.json"))?;
        let books: Vec<Book> = read_json(&assets_dir.join("books.json"))?;

        let mut ids = HashSet::new();
        if let Some(dup) = projects.iter().find(|p| !ids.insert(p.id.as_str())) {
            return Err(format!("Duplicate project id in projects.json: {}", dup.id));
        }

        tracing::info!(
            projects = projects.len(),
            books = books.len(),
            "Loaded site content"
        );

        Ok(Assets { projects, books })
    }

    pub fn find_project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, String> {
    let data = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    serde_json::from_str(&data).map_err(|e| format!("Failed to parse {}: {}", path.display(), e))
}
