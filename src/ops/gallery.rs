use indexmap::IndexSet;
use serde::Serialize;

use crate::model::catalog::ProjectCatalog;
use crate::model::project::ProjectRecord;

/// Text shown in place of the cards when nothing passes the filters
pub const EMPTY_STATE_MESSAGE: &str = "No projects match your filters.";

/// The user's current filters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GalleryFilterState {
    /// Tags a project must all carry to be shown (empty = no constraint)
    pub active_tags: IndexSet<String>,
    /// Raw query text, trimmed and lower-cased only when matching
    pub search_query: String,
}

impl GalleryFilterState {
    /// The query as used for matching: trimmed and lower-cased
    pub fn normalized_query(&self) -> String {
        self.search_query.trim().to_lowercase()
    }

    pub fn is_unfiltered(&self) -> bool {
        self.active_tags.is_empty() && self.search_query.trim().is_empty()
    }
}

/// Everything a surface needs to draw one project
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectCard {
    pub id: String,
    pub title: String,
    pub description: String,
    pub year: i32,
    pub tags: Vec<String>,
    pub link: String,
    pub image: String,
}

impl From<&ProjectRecord> for ProjectCard {
    fn from(p: &ProjectRecord) -> Self {
        ProjectCard {
            id: p.id.clone(),
            title: p.title.clone(),
            description: p.description.clone(),
            year: p.year,
            tags: p.tags.clone(),
            link: p.link.clone(),
            image: p.image.clone(),
        }
    }
}

/// A complete rendering of the gallery region. Each render replaces the
/// previous one wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GalleryView {
    pub cards: Vec<ProjectCard>,
    /// Draw the "no results" placeholder instead of cards
    pub show_empty_state: bool,
}

/// One button in the tag filter bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagFilter {
    pub tag: String,
    pub pressed: bool,
}

/// Text match: passes when the query is blank, otherwise when the
/// lower-cased "title description tags..." haystack contains it.
pub fn matches_query(project: &ProjectRecord, normalized_query: &str) -> bool {
    if normalized_query.is_empty() {
        return true;
    }
    let haystack = format!(
        "{} {} {}",
        project.title,
        project.description,
        project.tags.join(" ")
    )
    .to_lowercase();
    haystack.contains(normalized_query)
}

/// Tag match: every active tag must be on the project
pub fn matches_tags(project: &ProjectRecord, active_tags: &IndexSet<String>) -> bool {
    active_tags.iter().all(|t| project.has_tag(t))
}

/// Filter `projects` by `state` and order them newest first. Projects from
/// the same year keep their catalog order.
pub fn filter_projects<'a>(
    projects: &'a [ProjectRecord],
    state: &GalleryFilterState,
) -> Vec<&'a ProjectRecord> {
    let query = state.normalized_query();
    let mut visible: Vec<&ProjectRecord> = projects
        .iter()
        .filter(|p| matches_query(p, &query) && matches_tags(p, &state.active_tags))
        .collect();
    // sort_by is stable
    visible.sort_by(|a, b| b.year.cmp(&a.year));
    visible
}

/// Owns the gallery's filter state and keeps its rendered view current.
///
/// Every mutation re-renders before returning, so `view()` always reflects
/// the latest filters.
#[derive(Debug, Clone)]
pub struct GalleryController {
    catalog: ProjectCatalog,
    state: GalleryFilterState,
    view: GalleryView,
}

impl GalleryController {
    pub fn new(catalog: ProjectCatalog) -> Self {
        let mut controller = GalleryController {
            catalog,
            state: GalleryFilterState::default(),
            view: GalleryView::default(),
        };
        controller.render();
        controller
    }

    pub fn catalog(&self) -> &ProjectCatalog {
        &self.catalog
    }

    pub fn filter_state(&self) -> &GalleryFilterState {
        &self.state
    }

    /// The most recent rendering
    pub fn view(&self) -> &GalleryView {
        &self.view
    }

    /// Add `tag` to the active set, or remove it if already there. Tags that
    /// no project carries are accepted.
    pub fn toggle_tag(&mut self, tag: &str) -> &GalleryView {
        if !self.state.active_tags.shift_remove(tag) {
            self.state.active_tags.insert(tag.to_string());
        }
        tracing::debug!(tag, active = self.state.active_tags.len(), "toggled tag");
        self.render()
    }

    /// Replace the search query verbatim
    pub fn set_search_query(&mut self, query: &str) -> &GalleryView {
        self.state.search_query = query.to_string();
        self.render()
    }

    /// Drop every tag and the query
    pub fn clear_filters(&mut self) -> &GalleryView {
        self.state = GalleryFilterState::default();
        self.render()
    }

    /// Projects passing the current filters, newest first
    pub fn visible_projects(&self) -> Vec<&ProjectRecord> {
        filter_projects(self.catalog.all(), &self.state)
    }

    /// Rebuild the view from scratch
    pub fn render(&mut self) -> &GalleryView {
        let cards: Vec<ProjectCard> = self
            .visible_projects()
            .into_iter()
            .map(ProjectCard::from)
            .collect();
        let show_empty_state = cards.is_empty();
        tracing::debug!(visible = cards.len(), "rendered gallery");
        self.view = GalleryView {
            cards,
            show_empty_state,
        };
        &self.view
    }

    /// The tag bar: every catalog tag, marked pressed when active
    pub fn tag_filters(&self) -> Vec<TagFilter> {
        self.catalog
            .distinct_tags()
            .into_iter()
            .map(|tag| {
                let pressed = self.state.active_tags.contains(&tag);
                TagFilter { tag, pressed }
            })
            .collect()
    }
}
