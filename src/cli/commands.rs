use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "folio", about = concat!("folio v", env!("CARGO_PKG_VERSION"), " - your projects, filtered"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different site directory
    #[arg(short = 'C', long = "site-dir", global = true)]
    pub site_dir: Option<String>,

    /// Log debug detail to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create folio/site.toml and folio/projects.toml in the current directory
    Init(InitArgs),
    /// List projects passing the given filters, newest first
    List(ListArgs),
    /// List every tag used in the catalog
    Tags,
    /// Show one project
    Show(ShowArgs),
    /// Show or change the saved light/dark theme
    Theme(ThemeArgs),
    /// Show the headline counters
    Stats,
    /// Validate the catalog
    Check,
}

// ---------------------------------------------------------------------------
// Init args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct InitArgs {
    /// Site name (default: inferred from directory name)
    #[arg(long)]
    pub name: Option<String>,
    /// Start with an empty catalog instead of the sample projects
    #[arg(long)]
    pub empty: bool,
    /// Overwrite an existing folio/ directory
    #[arg(long)]
    pub force: bool,
}

// ---------------------------------------------------------------------------
// Read command args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct ListArgs {
    /// Require a tag (repeatable; projects must carry every one)
    #[arg(long = "tag", short = 't')]
    pub tags: Vec<String>,
    /// Case-insensitive text to find in title, description or tags
    #[arg(long, short = 's')]
    pub search: Option<String>,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Project ID to show
    pub id: String,
}

#[derive(Args)]
pub struct ThemeArgs {
    /// "light", "dark" or "toggle" (omit to print the current theme)
    pub value: Option<String>,
}
