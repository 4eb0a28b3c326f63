use std::path::PathBuf;

use super::catalog::ProjectCatalog;
use super::config::{SiteConfig, StatConfig};

/// A fully loaded portfolio site
#[derive(Debug, Clone)]
pub struct Site {
    /// Path to the `folio/` directory, None for the builtin site
    pub site_dir: Option<PathBuf>,
    /// Parsed site.toml
    pub config: SiteConfig,
    /// Projects shown in the gallery
    pub catalog: ProjectCatalog,
}

impl Site {
    /// The site served when no `folio/` directory can be found
    pub fn builtin() -> Self {
        Site {
            site_dir: None,
            config: SiteConfig::builtin(),
            catalog: ProjectCatalog::builtin(),
        }
    }

    /// Headline counters. Falls back to project and tag counts when the
    /// config declares none.
    pub fn stats(&self) -> Vec<StatConfig> {
        if !self.config.stats.is_empty() {
            return self.config.stats.clone();
        }
        vec![
            StatConfig {
                label: "Projects".to_string(),
                count_to: self.catalog.len() as u64,
            },
            StatConfig {
                label: "Tags".to_string(),
                count_to: self.catalog.distinct_tags().len() as u64,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_stats_are_derived() {
        let site = Site::builtin();
        let stats = site.stats();
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].label, "Projects");
        assert_eq!(stats[0].count_to, 4);
        assert_eq!(stats[1].count_to, 11);
    }

    #[test]
    fn configured_stats_take_precedence() {
        let mut site = Site::builtin();
        site.config.stats.push(StatConfig {
            label: "Jams".into(),
            count_to: 9,
        });
        assert_eq!(site.stats(), vec![StatConfig {
            label: "Jams".into(),
            count_to: 9,
        }]);
    }
}
