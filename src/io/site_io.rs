use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::model::catalog::{CatalogFile, ProjectCatalog};
use crate::model::config::SiteConfig;
use crate::model::project::ProjectRecord;
use crate::model::site::Site;

/// Name of the directory that marks a folio site
pub const SITE_DIR: &str = "folio";
/// Config file inside the site directory
pub const SITE_CONFIG: &str = "site.toml";

/// Error type for site I/O operations
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("not a folio site: no folio/site.toml found")]
    NotASite,
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse site.toml: {0}")]
    ConfigParseError(#[from] toml::de::Error),
    #[error("could not parse catalog {path}: {source}")]
    CatalogParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("could not parse catalog {path}: {source}")]
    CatalogJsonError {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("unsupported catalog format: {0} (expected .toml or .json)")]
    UnsupportedCatalog(PathBuf),
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Discover the site by walking up from the given directory, looking for a
/// `folio/` subdirectory with a site.toml. Returns the directory containing
/// `folio/`.
pub fn discover_site(start: &Path) -> Result<PathBuf, SiteError> {
    let mut current = start.to_path_buf();
    loop {
        let site_dir = current.join(SITE_DIR);
        if site_dir.is_dir() && site_dir.join(SITE_CONFIG).exists() {
            return Ok(current);
        }
        if !current.pop() {
            return Err(SiteError::NotASite);
        }
    }
}

/// Load a site from the directory containing `folio/`.
pub fn load_site(root: &Path) -> Result<Site, SiteError> {
    let site_dir = root.join(SITE_DIR);
    if !site_dir.is_dir() {
        return Err(SiteError::NotASite);
    }

    let config_path = site_dir.join(SITE_CONFIG);
    let config_text = fs::read_to_string(&config_path).map_err(|e| SiteError::ReadError {
        path: config_path.clone(),
        source: e,
    })?;
    let config: SiteConfig = toml::from_str(&config_text)?;

    let catalog_path = site_dir.join(&config.site.catalog);
    let catalog = load_catalog(&catalog_path)?;
    tracing::info!(
        site = %config.site.name,
        catalog = %catalog_path.display(),
        projects = catalog.len(),
        "loaded site"
    );

    Ok(Site {
        site_dir: Some(site_dir),
        config,
        catalog,
    })
}

/// Find and load the site above `start`, or fall back to the builtin site
/// when there is none. Broken sites are still errors.
pub fn load_site_or_builtin(start: &Path) -> Result<Site, SiteError> {
    match discover_site(start) {
        Ok(root) => load_site(&root),
        Err(SiteError::NotASite) => {
            tracing::debug!(start = %start.display(), "no site found, using builtin catalog");
            Ok(Site::builtin())
        }
        Err(e) => Err(e),
    }
}

/// Read a catalog file. `.toml` files hold `[[projects]]` tables, `.json`
/// files a top-level array of records.
pub fn load_catalog(path: &Path) -> Result<ProjectCatalog, SiteError> {
    let text = fs::read_to_string(path).map_err(|e| SiteError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_catalog(path, &text)
}

fn parse_catalog(path: &Path, text: &str) -> Result<ProjectCatalog, SiteError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => {
            let file: CatalogFile =
                toml::from_str(text).map_err(|e| SiteError::CatalogParseError {
                    path: path.to_path_buf(),
                    source: e,
                })?;
            Ok(file.into())
        }
        Some("json") => {
            let projects: Vec<ProjectRecord> =
                serde_json::from_str(text).map_err(|e| SiteError::CatalogJsonError {
                    path: path.to_path_buf(),
                    source: e,
                })?;
            Ok(ProjectCatalog::new(projects))
        }
        _ => Err(SiteError::UnsupportedCatalog(path.to_path_buf())),
    }
}

/// Write `content` to `path` atomically using a temp file + rename.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
