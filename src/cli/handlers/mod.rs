mod init;
pub use init::cmd_init;

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::site_io::{self, SiteError};
use crate::io::state;
use crate::model::preference::detect_prefers_dark;
use crate::model::{Site, ThemePreference};
use crate::ops::check::{self, CheckError, CheckWarning};
use crate::ops::gallery::GalleryController;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let start = start_dir(cli.site_dir.as_deref())?;

    match cli.command {
        None => crate::tui::run(cli.site_dir.as_deref()),
        Some(cmd) => match cmd {
            // Init is handled in main.rs before site discovery
            Commands::Init(args) => cmd_init(args),

            Commands::List(args) => cmd_list(&start, args, json),
            Commands::Tags => cmd_tags(&start, json),
            Commands::Show(args) => cmd_show(&start, args, json),
            Commands::Theme(args) => cmd_theme(&start, args, json),
            Commands::Stats => cmd_stats(&start, json),
            Commands::Check => cmd_check(&start, json),
        },
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Directory to start site discovery from: the -C path, else the cwd
fn start_dir(site_dir: Option<&str>) -> Result<PathBuf, Box<dyn std::error::Error>> {
    match site_dir {
        Some(dir) => Ok(std::fs::canonicalize(dir)
            .map_err(|e| format!("cannot resolve -C path '{}': {}", dir, e))?),
        None => Ok(std::env::current_dir()?),
    }
}

fn load_site(start: &Path) -> Result<Site, SiteError> {
    site_io::load_site_or_builtin(start)
}

fn resolved_theme(site: &Site) -> (ThemePreference, bool) {
    let saved = state::saved_theme(site.site_dir.as_deref());
    let theme = ThemePreference::resolve(saved, detect_prefers_dark(), site.config.ui.default_theme);
    (theme, saved.is_some())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

// ---------------------------------------------------------------------------
// Read command handlers
// ---------------------------------------------------------------------------

fn cmd_list(start: &Path, args: ListArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let site = load_site(start)?;
    let known = site.catalog.distinct_tags();
    let mut gallery = GalleryController::new(site.catalog);

    for tag in &args.tags {
        // Repeating a tag on the command line should not toggle it back off
        if gallery.filter_state().active_tags.contains(tag) {
            continue;
        }
        if !known.contains(tag) {
            tracing::warn!(%tag, "tag is not used by any project");
        }
        gallery.toggle_tag(tag);
    }
    if let Some(query) = &args.search {
        gallery.set_search_query(query);
    }

    if json {
        print_json(&ListJson {
            filters: gallery.filter_state(),
            total: gallery.catalog().len(),
            view: gallery.view(),
        })
    } else {
        for line in format_gallery(gallery.view()) {
            println!("{}", line);
        }
        Ok(())
    }
}

fn cmd_tags(start: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let site = load_site(start)?;
    let tags = site.catalog.distinct_tags();

    if json {
        print_json(&tags)
    } else {
        for tag in &tags {
            println!("{}", tag);
        }
        Ok(())
    }
}

fn cmd_show(start: &Path, args: ShowArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let site = load_site(start)?;
    let project = site
        .catalog
        .get(&args.id)
        .ok_or_else(|| format!("project not found: {}", args.id))?;

    if json {
        print_json(project)
    } else {
        for line in format_project_detail(project) {
            println!("{}", line);
        }
        Ok(())
    }
}

fn cmd_stats(start: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let site = load_site(start)?;
    let stats = site.stats();

    if json {
        print_json(&stats_to_json(&stats))
    } else {
        for line in format_stats(&stats) {
            println!("{}", line);
        }
        Ok(())
    }
}

fn cmd_check(start: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let site = load_site(start)?;
    let result = check::check_catalog(&site.catalog);

    if json {
        print_json(&result)?;
    } else {
        if !result.errors.is_empty() {
            println!("Errors:");
            for err in &result.errors {
                match err {
                    CheckError::DuplicateId { id, positions } => {
                        let positions: Vec<String> =
                            positions.iter().map(|p| p.to_string()).collect();
                        println!("  {} is used by records {}", id, positions.join(", "));
                    }
                    CheckError::BlankId { position, title } => {
                        println!("  record {} (\"{}\") has no id", position, title);
                    }
                    CheckError::BlankTitle { id } => {
                        println!("  {} has no title", id);
                    }
                }
            }
        }
        if !result.warnings.is_empty() {
            if !result.errors.is_empty() {
                println!();
            }
            println!("Warnings:");
            for warn in &result.warnings {
                match warn {
                    CheckWarning::DuplicateTag { id, tag } => {
                        println!("  {} lists tag \"{}\" more than once", id, tag);
                    }
                    CheckWarning::TagWithSpace { id, tag } => {
                        println!("  {} tag \"{}\" contains a space", id, tag);
                    }
                    CheckWarning::MissingImage { id } => {
                        println!("  {} has no image", id);
                    }
                }
            }
        }
        if result.valid {
            println!("✓ catalog is valid");
        } else {
            println!("✗ catalog has errors");
        }
    }

    if result.valid {
        Ok(())
    } else {
        Err(format!("{} catalog error(s)", result.errors.len()).into())
    }
}

// ---------------------------------------------------------------------------
// Write command handlers
// ---------------------------------------------------------------------------

fn cmd_theme(start: &Path, args: ThemeArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let site = load_site(start)?;
    let (current, saved) = resolved_theme(&site);

    let Some(value) = args.value else {
        if json {
            return print_json(&ThemeJson {
                theme: current,
                saved,
            });
        }
        println!("{}", current);
        return Ok(());
    };

    let next = match value.as_str() {
        "toggle" => current.toggle(),
        other => other.parse::<ThemePreference>()?,
    };
    let site_dir = site
        .site_dir
        .as_deref()
        .ok_or("no folio site to save the theme in (run `folio init` first)")?;

    let mut ui_state = state::read_ui_state(site_dir).unwrap_or_default();
    ui_state.theme = Some(next);
    state::write_ui_state(site_dir, &ui_state)?;
    tracing::info!(theme = %next, "saved theme preference");

    if json {
        print_json(&ThemeJson {
            theme: next,
            saved: true,
        })
    } else {
        println!("{}", next);
        Ok(())
    }
}
