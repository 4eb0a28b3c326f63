use std::collections::HashSet;

use indexmap::IndexMap;
use serde::Serialize;

use crate::model::catalog::ProjectCatalog;
use crate::model::project::ProjectRecord;

/// Structured result from `folio check`, suitable for --json output.
#[derive(Debug, Default, Serialize)]
pub struct CheckResult {
    pub valid: bool,
    pub errors: Vec<CheckError>,
    pub warnings: Vec<CheckWarning>,
}

/// A catalog problem that should be fixed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum CheckError {
    /// Several records share an id (positions are 0-based catalog indices)
    #[serde(rename = "duplicate_id")]
    DuplicateId { id: String, positions: Vec<usize> },
    /// A record has an empty or whitespace-only id
    #[serde(rename = "blank_id")]
    BlankId { position: usize, title: String },
    /// A record has nothing to show as its heading
    #[serde(rename = "blank_title")]
    BlankTitle { id: String },
}

/// A non-critical issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum CheckWarning {
    /// The same tag appears twice on one record
    #[serde(rename = "duplicate_tag")]
    DuplicateTag { id: String, tag: String },
    /// A tag contains whitespace, so searching may match across tag boundaries
    #[serde(rename = "tag_with_space")]
    TagWithSpace { id: String, tag: String },
    /// No cover image URL
    #[serde(rename = "missing_image")]
    MissingImage { id: String },
}

// ---------------------------------------------------------------------------
// Main check entry point
// ---------------------------------------------------------------------------

/// Validate a catalog. Read-only; loading never depends on the outcome.
///
/// Checks performed:
/// 1. Ids are non-blank and unique
/// 2. Titles are non-blank
/// 3. Warnings for repeated tags, tags with spaces, missing images
pub fn check_catalog(catalog: &ProjectCatalog) -> CheckResult {
    let mut result = CheckResult::default();

    for (id, positions) in find_duplicate_ids(catalog) {
        result.errors.push(CheckError::DuplicateId { id, positions });
    }

    for (position, project) in catalog.all().iter().enumerate() {
        check_record(project, position, &mut result);
    }

    result.valid = result.errors.is_empty();
    result
}

fn check_record(project: &ProjectRecord, position: usize, result: &mut CheckResult) {
    if project.id.trim().is_empty() {
        result.errors.push(CheckError::BlankId {
            position,
            title: project.title.clone(),
        });
    }

    if project.title.trim().is_empty() {
        result.errors.push(CheckError::BlankTitle {
            id: project.id.clone(),
        });
    }

    let mut seen = HashSet::new();
    for tag in &project.tags {
        if !seen.insert(tag.as_str()) {
            result.warnings.push(CheckWarning::DuplicateTag {
                id: project.id.clone(),
                tag: tag.clone(),
            });
        } else if tag.contains(char::is_whitespace) {
            result.warnings.push(CheckWarning::TagWithSpace {
                id: project.id.clone(),
                tag: tag.clone(),
            });
        }
    }

    if project.image.trim().is_empty() {
        result.warnings.push(CheckWarning::MissingImage {
            id: project.id.clone(),
        });
    }
}

/// Ids that occur more than once, in order of first appearance.
fn find_duplicate_ids(catalog: &ProjectCatalog) -> Vec<(String, Vec<usize>)> {
    let mut positions: IndexMap<&str, Vec<usize>> = IndexMap::new();
    for (i, project) in catalog.all().iter().enumerate() {
        if project.id.trim().is_empty() {
            continue;
        }
        positions.entry(project.id.as_str()).or_default().push(i);
    }
    positions
        .into_iter()
        .filter(|(_, at)| at.len() > 1)
        .map(|(id, at)| (id.to_string(), at))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
