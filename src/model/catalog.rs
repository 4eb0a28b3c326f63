use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::project::ProjectRecord;

/// On-disk shape of a TOML catalog: a list of `[[projects]]` tables
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub projects: Vec<ProjectRecord>,
}

/// The ordered, immutable list of projects shown in the gallery.
///
/// Loaded once at startup and never mutated afterwards, so derived data such
/// as the tag list is recomputed on demand rather than cached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectCatalog {
    projects: Vec<ProjectRecord>,
}

impl ProjectCatalog {
    pub fn new(projects: Vec<ProjectRecord>) -> Self {
        ProjectCatalog { projects }
    }

    /// The catalog shipped with the binary, used when no site directory exists
    pub fn builtin() -> Self {
        ProjectCatalog::new(builtin_records())
    }

    /// Every record, in catalog order
    pub fn all(&self) -> &[ProjectRecord] {
        &self.projects
    }

    /// Every tag used by any record, deduplicated and sorted ascending
    pub fn distinct_tags(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self
            .projects
            .iter()
            .flat_map(|p| p.tags.iter().map(String::as_str))
            .collect();
        set.into_iter().map(str::to_string).collect()
    }

    /// First record with the given id
    pub fn get(&self, id: &str) -> Option<&ProjectRecord> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn to_file(&self) -> CatalogFile {
        CatalogFile {
            projects: self.projects.clone(),
        }
    }
}

impl From<CatalogFile> for ProjectCatalog {
    fn from(file: CatalogFile) -> Self {
        ProjectCatalog::new(file.projects)
    }
}

fn record(
    id: &str,
    title: &str,
    description: &str,
    tags: &[&str],
    year: i32,
    link: &str,
    image: &str,
) -> ProjectRecord {
    ProjectRecord {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        year,
        link: link.to_string(),
        image: image.to_string(),
    }
}

fn builtin_records() -> Vec<ProjectRecord> {
    vec![
        record(
            "unity-arcade-shooter",
            "Unity Arcade Shooter",
            "Fast-paced top-down shooter prototype with enemy waves, power-ups, and screen shake.",
            &["Unity", "C#", "Game Dev"],
            2024,
            "https://micaelolaoye.wixsite.com/gameportfolio",
            "https://images.unsplash.com/photo-1538481199705-c710c4e965fc?q=80&w=1200&auto=format&fit=crop",
        ),
        record(
            "procedural-terrain",
            "Procedural Terrain Generator",
            "Noise-based terrain with LOD and GPU instancing for performant rendering.",
            &["Unity", "Shaders", "Graphics"],
            2024,
            "https://micaelolaoye.wixsite.com/gameportfolio",
            "https://images.unsplash.com/photo-1524553183753-c22bda4e0f71?q=80&w=1200&auto=format&fit=crop",
        ),
        record(
            "pathfinding-visualizer",
            "Pathfinding Visualizer",
            "Interactive A*, Dijkstra, and BFS visualizer with maze generation and step speed control.",
            &["Algorithms", "Visualization", "JavaScript"],
            2023,
            "#",
            "https://images.unsplash.com/photo-1506423915480-11b865d526c1?q=80&w=1200&auto=format&fit=crop",
        ),
        record(
            "portfolio-site",
            "Portfolio Website",
            "This site—clean, accessible, responsive, and easily extensible without frameworks.",
            &["HTML", "CSS", "Vanilla JS"],
            2025,
            "#",
            "https://images.unsplash.com/photo-1527443154391-507e9dc6c5cc?q=80&w=1200&auto=format&fit=crop",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tagged(id: &str, tags: &[&str]) -> ProjectRecord {
        record(id, id, "", tags, 2024, "#", "")
    }

    #[test]
    fn distinct_tags_sorted_and_deduped() {
        let catalog = ProjectCatalog::new(vec![
            tagged("a", &["Unity", "C#"]),
            tagged("b", &["Unity", "Shaders"]),
            tagged("c", &["Algorithms", "Shaders"]),
        ]);
        assert_eq!(
            catalog.distinct_tags(),
            vec!["Algorithms", "C#", "Shaders", "Unity"]
        );
    }

    #[test]
    fn distinct_tags_of_empty_catalog() {
        assert!(ProjectCatalog::default().distinct_tags().is_empty());
    }

    #[test]
    fn builtin_catalog_contents() {
        let catalog = ProjectCatalog::builtin();
        assert_eq!(catalog.len(), 4);
        let ids: Vec<&str> = catalog.all().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "unity-arcade-shooter",
                "procedural-terrain",
                "pathfinding-visualizer",
                "portfolio-site"
            ]
        );
        assert_eq!(catalog.distinct_tags().len(), 11);
    }

    #[test]
    fn get_finds_by_id() {
        let catalog = ProjectCatalog::builtin();
        assert_eq!(
            catalog.get("procedural-terrain").map(|p| p.year),
            Some(2024)
        );
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn catalog_file_round_trips_through_toml() {
        let catalog = ProjectCatalog::builtin();
        let text = toml::to_string_pretty(&catalog.to_file()).unwrap();
        assert!(text.contains("[[projects]]"));
        let parsed: CatalogFile = toml::from_str(&text).unwrap();
        assert_eq!(ProjectCatalog::from(parsed), catalog);
    }
}
