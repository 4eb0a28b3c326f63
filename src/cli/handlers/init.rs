use std::fs;

use crate::cli::commands::InitArgs;
use crate::io::site_io::{self, SITE_CONFIG, SITE_DIR};
use crate::model::catalog::{CatalogFile, ProjectCatalog};

const SITE_TOML_TEMPLATE: &str = r##"[site]
name = "{name}"
tagline = ""
catalog = "projects.toml"

# --- Counters ---
# Headline numbers that count up when the gallery opens.
# Without any, folio shows the project and tag counts.
#
# [[stats]]
# label = "Years coding"
# count_to = 8

# --- UI Customization ---
# Uncomment and edit to override defaults.

[ui]
# default_theme = "dark"          # "light" or "dark"
#
# [ui.colors]
# background = "#0C001B"
# text = "#A09BFE"
# text_bright = "#FFFFFF"
# highlight = "#FB4196"
# dim = "#5A5580"
# accent = "#44DDFF"
#
# [ui.light_colors]
# background = "#FAFAFC"
# text = "#2A2640"
#
# [ui.tag_colors]
# Unity = "#44FF88"
# Graphics = "#CC66FF"
"##;

/// Infer a site name from a directory name: replace hyphens with spaces, title-case.
fn infer_name(dir_name: &str) -> String {
    dir_name
        .split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => {
                    let upper: String = c.to_uppercase().collect();
                    upper + &chars.collect::<String>()
                }
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_site_toml(name: &str) -> String {
    SITE_TOML_TEMPLATE.replace("{name}", &name.replace('"', "\\\""))
}

fn render_catalog_toml(empty: bool) -> Result<String, toml::ser::Error> {
    let file = if empty {
        CatalogFile::default()
    } else {
        ProjectCatalog::builtin().to_file()
    };
    toml::to_string_pretty(&file)
}

pub fn cmd_init(args: InitArgs) -> Result<(), Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir()?;
    let site_dir = cwd.join(SITE_DIR);

    // Check if already initialized
    if site_dir.join(SITE_CONFIG).exists() && !args.force {
        return Err("folio site already exists in ./folio/ (use --force to overwrite)".into());
    }

    // Check for parent site and warn
    if let Some(parent) = cwd.parent()
        && let Ok(parent_root) = site_io::discover_site(parent)
    {
        eprintln!(
            "Note: parent site found at {}/",
            parent_root.join(SITE_DIR).display()
        );
        eprintln!("Creating new site in ./folio/");
    }

    let name = args.name.unwrap_or_else(|| {
        cwd.file_name()
            .and_then(|n| n.to_str())
            .map(infer_name)
            .unwrap_or_else(|| "Portfolio".to_string())
    });

    fs::create_dir_all(&site_dir)?;
    site_io::atomic_write(&site_dir.join(SITE_CONFIG), render_site_toml(&name).as_bytes())?;
    site_io::atomic_write(
        &site_dir.join("projects.toml"),
        render_catalog_toml(args.empty)?.as_bytes(),
    )?;
    tracing::info!(dir = %site_dir.display(), "initialized site");

    println!("Initialized folio site: {}", name);
    if !args.empty {
        println!("  {} sample projects in folio/projects.toml", ProjectCatalog::builtin().len());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::config::SiteConfig;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_infer_name() {
        assert_eq!(infer_name("my-cool-portfolio"), "My Cool Portfolio");
        assert_eq!(infer_name("folio"), "Folio");
        assert_eq!(infer_name("jane-doe"), "Jane Doe");
    }

    #[test]
    fn site_template_parses() {
        let config: SiteConfig = toml::from_str(&render_site_toml("Jane \"JD\" Doe")).unwrap();
        assert_eq!(config.site.name, "Jane \"JD\" Doe");
        assert_eq!(config.site.catalog, "projects.toml");
        assert!(config.stats.is_empty());
        assert!(config.ui.default_theme.is_none());
    }

    #[test]
    fn sample_catalog_parses_back() {
        let text = render_catalog_toml(false).unwrap();
        let file: CatalogFile = toml::from_str(&text).unwrap();
        let catalog = ProjectCatalog::from(file);
        assert_eq!(catalog, ProjectCatalog::builtin());
    }

    #[test]
    fn empty_catalog_parses_back() {
        let text = render_catalog_toml(true).unwrap();
        let file: CatalogFile = toml::from_str(&text).unwrap();
        assert!(file.projects.is_empty());
    }
}
