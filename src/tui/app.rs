use std::io;
use std::path::Path;
use std::time::Duration;

use chrono::Datelike;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use regex::Regex;

use crate::io::site_io::load_site_or_builtin;
use crate::io::state;
use crate::model::{Site, ThemePreference, detect_prefers_dark};
use crate::ops::counter::CountUp;
use crate::ops::gallery::GalleryController;

use super::input;
use super::render;
use super::theme::Theme;

/// Poll interval when nothing is animating
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    Search,
}

/// A headline number and its count-up animation
#[derive(Debug, Clone)]
pub struct StatCounter {
    pub label: String,
    pub counter: CountUp,
}

/// Main application state
pub struct App {
    pub site: Site,
    pub gallery: GalleryController,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme_preference: ThemePreference,
    pub theme: Theme,
    /// Index into the tag bar
    pub tag_cursor: usize,
    /// Index of the first card drawn
    pub scroll: usize,
    /// Whether the tag filter bar is shown
    pub filters_expanded: bool,
    pub stats: Vec<StatCounter>,
    /// Year shown in the footer
    pub footer_year: i32,
    /// Help overlay visible
    pub show_help: bool,
}

impl App {
    pub fn new(site: Site, theme_preference: ThemePreference, footer_year: i32) -> Self {
        let gallery = GalleryController::new(site.catalog.clone());
        let theme = Theme::from_config(&site.config.ui, theme_preference);
        let stats = site
            .stats()
            .into_iter()
            .map(|s| StatCounter {
                label: s.label,
                counter: CountUp::new(s.count_to),
            })
            .collect();

        App {
            site,
            gallery,
            mode: Mode::Navigate,
            should_quit: false,
            theme_preference,
            theme,
            tag_cursor: 0,
            scroll: 0,
            filters_expanded: true,
            stats,
            footer_year,
            show_help: false,
        }
    }

    pub fn site_dir(&self) -> Option<&Path> {
        self.site.site_dir.as_deref()
    }

    /// Flip light/dark, rebuild the palette and persist the choice
    pub fn toggle_theme(&mut self) {
        self.theme_preference = self.theme_preference.toggle();
        self.theme = Theme::from_config(&self.site.config.ui, self.theme_preference);
        state::save_theme(self.site.site_dir.as_deref(), self.theme_preference);
    }

    /// Number of buttons in the tag bar
    pub fn tag_count(&self) -> usize {
        self.gallery.catalog().distinct_tags().len()
    }

    pub fn move_tag_cursor(&mut self, delta: isize) {
        let count = self.tag_count();
        if count == 0 {
            self.tag_cursor = 0;
            return;
        }
        let next = self.tag_cursor as isize + delta;
        self.tag_cursor = next.clamp(0, count as isize - 1) as usize;
    }

    /// Toggle the tag under the cursor
    pub fn toggle_tag_at_cursor(&mut self) {
        let tags = self.gallery.catalog().distinct_tags();
        if let Some(tag) = tags.get(self.tag_cursor) {
            self.gallery.toggle_tag(tag);
            self.scroll = 0;
        }
    }

    /// Replace the search query, filtering as the user types
    pub fn set_search(&mut self, query: String) {
        self.gallery.set_search_query(&query);
        self.scroll = 0;
    }

    pub fn search_query(&self) -> &str {
        &self.gallery.filter_state().search_query
    }

    pub fn clear_filters(&mut self) {
        self.gallery.clear_filters();
        self.scroll = 0;
    }

    pub fn scroll_by(&mut self, delta: isize) {
        let max = self.gallery.view().cards.len().saturating_sub(1) as isize;
        self.scroll = (self.scroll as isize + delta).clamp(0, max.max(0)) as usize;
    }

    /// Case-insensitive literal regex for highlighting the current query
    pub fn active_search_re(&self) -> Option<Regex> {
        let query = self.search_query().trim();
        if query.is_empty() {
            return None;
        }
        Regex::new(&format!("(?i){}", regex::escape(query))).ok()
    }

    pub fn is_animating(&self) -> bool {
        self.stats.iter().any(|s| !s.counter.is_done())
    }

    pub fn tick_counters(&mut self) {
        for stat in &mut self.stats {
            stat.counter.tick();
        }
    }

    /// Skip the count-up animation
    pub fn finish_counters(&mut self) {
        for stat in &mut self.stats {
            stat.counter.finish();
        }
    }
}

/// Run the TUI application
pub fn run(site_dir: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let start = match site_dir {
        Some(dir) => std::fs::canonicalize(dir)
            .map_err(|e| format!("cannot resolve -C path '{}': {}", dir, e))?,
        None => std::env::current_dir()?,
    };
    let site = load_site_or_builtin(&start)?;

    let theme_preference = ThemePreference::resolve(
        state::saved_theme(site.site_dir.as_deref()),
        detect_prefers_dark(),
        site.config.ui.default_theme,
    );
    let year = chrono::Local::now().year();
    let mut app = App::new(site, theme_preference, year);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        let timeout = if app.is_animating() {
            CountUp::PERIOD
        } else {
            IDLE_POLL
        };
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                input::handle_key(app, key);
            }
        } else if app.is_animating() {
            app.tick_counters();
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
