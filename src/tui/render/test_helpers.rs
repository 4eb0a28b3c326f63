use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::model::{ProjectCatalog, ProjectRecord, Site, ThemePreference};
use crate::tui::app::App;
use crate::tui::input;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// App over the builtin site, dark theme, footer year 2026.
pub fn builtin_app() -> App {
    App::new(Site::builtin(), ThemePreference::Dark, 2026)
}

/// App over a builtin-configured site with the given records.
pub fn app_with_catalog(projects: Vec<ProjectRecord>) -> App {
    let mut site = Site::builtin();
    site.catalog = ProjectCatalog::new(projects);
    App::new(site, ThemePreference::Dark, 2026)
}

/// A key press with no modifiers
pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// Feed one key through the top-level handler
pub fn press(app: &mut App, key: KeyEvent) {
    input::handle_key(app, key);
}
