use serde::{Deserialize, Serialize};

/// One portfolio entry, as declared in the catalog file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Unique identifier (uniqueness is checked by `folio check`, not at load)
    pub id: String,
    pub title: String,
    pub description: String,
    /// Tags in declaration order
    #[serde(default)]
    pub tags: Vec<String>,
    pub year: i32,
    /// Project URL, `#` when there is nothing to link to yet
    #[serde(default = "default_link")]
    pub link: String,
    /// Cover image URL
    #[serde(default)]
    pub image: String,
}

fn default_link() -> String {
    "#".to_string()
}

impl ProjectRecord {
    /// Whether `link` points somewhere real
    pub fn has_link(&self) -> bool {
        let link = self.link.trim();
        !link.is_empty() && link != "#"
    }

    /// Whether the record carries `tag` (exact, case-sensitive)
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_defaults_to_placeholder() {
        let record: ProjectRecord = toml::from_str(
            r#"
id = "x"
title = "X"
description = "d"
year = 2024
"#,
        )
        .unwrap();
        assert_eq!(record.link, "#");
        assert!(!record.has_link());
        assert!(record.tags.is_empty());
        assert_eq!(record.image, "");
    }

    #[test]
    fn has_tag_is_case_sensitive() {
        let record = ProjectRecord {
            id: "x".into(),
            title: "X".into(),
            description: String::new(),
            tags: vec!["Unity".into()],
            year: 2024,
            link: "https://example.com".into(),
            image: String::new(),
        };
        assert!(record.has_tag("Unity"));
        assert!(!record.has_tag("unity"));
        assert!(record.has_link());
    }
}
