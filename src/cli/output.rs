use serde::Serialize;

use crate::model::config::StatConfig;
use crate::model::preference::ThemePreference;
use crate::model::project::ProjectRecord;
use crate::ops::gallery::{EMPTY_STATE_MESSAGE, GalleryFilterState, GalleryView, ProjectCard};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct ListJson<'a> {
    pub filters: &'a GalleryFilterState,
    pub total: usize,
    #[serde(flatten)]
    pub view: &'a GalleryView,
}

#[derive(Serialize)]
pub struct ThemeJson {
    pub theme: ThemePreference,
    /// Whether the theme came from a saved preference
    pub saved: bool,
}

#[derive(Serialize)]
pub struct StatJson<'a> {
    pub label: &'a str,
    pub count_to: u64,
}

pub fn stats_to_json(stats: &[StatConfig]) -> Vec<StatJson<'_>> {
    stats
        .iter()
        .map(|s| StatJson {
            label: &s.label,
            count_to: s.count_to,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

fn link_or_placeholder(link: &str) -> &str {
    let link = link.trim();
    if link.is_empty() || link == "#" {
        "(none)"
    } else {
        link
    }
}

/// Format one card as a heading line plus indented details
pub fn format_card(card: &ProjectCard) -> Vec<String> {
    let mut lines = vec![format!("{} ({})  [{}]", card.title, card.year, card.id)];
    if !card.description.is_empty() {
        lines.push(format!("  {}", card.description));
    }
    if !card.tags.is_empty() {
        lines.push(format!("  tags: {}", card.tags.join(", ")));
    }
    lines.push(format!("  link: {}", link_or_placeholder(&card.link)));
    lines
}

/// Format a whole gallery rendering: cards separated by blank lines, or the
/// empty-state message
pub fn format_gallery(view: &GalleryView) -> Vec<String> {
    if view.show_empty_state {
        return vec![EMPTY_STATE_MESSAGE.to_string()];
    }
    let mut lines = Vec::new();
    for (i, card) in view.cards.iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        lines.extend(format_card(card));
    }
    lines
}

/// Format detailed project view
pub fn format_project_detail(project: &ProjectRecord) -> Vec<String> {
    let mut lines = vec![
        project.title.clone(),
        format!("id: {}", project.id),
        format!("year: {}", project.year),
    ];
    if !project.tags.is_empty() {
        lines.push(format!("tags: {}", project.tags.join(", ")));
    }
    lines.push(format!("link: {}", link_or_placeholder(&project.link)));
    if !project.image.is_empty() {
        lines.push(format!("image: {}", project.image));
    }
    if !project.description.is_empty() {
        lines.push(String::new());
        lines.push(project.description.clone());
    }
    lines
}

/// Format counters as right-aligned numbers and labels
pub fn format_stats(stats: &[StatConfig]) -> Vec<String> {
    let width = stats
        .iter()
        .map(|s| s.count_to.to_string().len())
        .max()
        .unwrap_or(0);
    stats
        .iter()
        .map(|s| format!("{:>width$}  {}", s.count_to, s.label, width = width))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::catalog::ProjectCatalog;
    use crate::ops::gallery::GalleryController;
    use pretty_assertions::assert_eq;

    #[test]
    fn card_lines() {
        let catalog = ProjectCatalog::builtin();
        let card = ProjectCard::from(catalog.get("portfolio-site").unwrap());
        assert_eq!(
            format_card(&card),
            vec![
                "Portfolio Website (2025)  [portfolio-site]",
                "  This site—clean, accessible, responsive, and easily extensible without frameworks.",
                "  tags: HTML, CSS, Vanilla JS",
                "  link: (none)",
            ]
        );
    }

    #[test]
    fn gallery_separates_cards() {
        let mut gallery = GalleryController::new(ProjectCatalog::builtin());
        gallery.toggle_tag("Unity");
        let lines = format_gallery(gallery.view());
        assert_eq!(lines.iter().filter(|l| l.is_empty()).count(), 1);
        assert!(lines[0].starts_with("Unity Arcade Shooter (2024)"));
        assert!(lines.contains(&"  link: https://micaelolaoye.wixsite.com/gameportfolio".to_string()));
    }

    #[test]
    fn empty_gallery_message() {
        let mut gallery = GalleryController::new(ProjectCatalog::builtin());
        gallery.set_search_query("xyznonexistent");
        assert_eq!(format_gallery(gallery.view()), vec![EMPTY_STATE_MESSAGE]);
    }

    #[test]
    fn detail_includes_image() {
        let catalog = ProjectCatalog::builtin();
        let lines = format_project_detail(catalog.get("procedural-terrain").unwrap());
        assert_eq!(lines[0], "Procedural Terrain Generator");
        assert!(lines.iter().any(|l| l.starts_with("image: https://images.unsplash.com/")));
        assert_eq!(lines.last().unwrap(), "Noise-based terrain with LOD and GPU instancing for performant rendering.");
    }

    #[test]
    fn stats_aligned() {
        let stats = vec![
            StatConfig {
                label: "Projects".into(),
                count_to: 4,
            },
            StatConfig {
                label: "Hours".into(),
                count_to: 1200,
            },
        ];
        assert_eq!(format_stats(&stats), vec!["   4  Projects", "1200  Hours"]);
    }

    #[test]
    fn list_json_shape() {
        let gallery = GalleryController::new(ProjectCatalog::builtin());
        let json = serde_json::to_value(ListJson {
            filters: gallery.filter_state(),
            total: gallery.catalog().len(),
            view: gallery.view(),
        })
        .unwrap();
        assert_eq!(json["total"], 4);
        assert_eq!(json["show_empty_state"], false);
        assert_eq!(json["cards"].as_array().unwrap().len(), 4);
        assert_eq!(json["filters"]["search_query"], "");
        assert!(json["filters"]["active_tags"].as_array().unwrap().is_empty());
    }
}
