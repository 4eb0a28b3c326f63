use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Mode};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Help overlay intercepts everything until dismissed
    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
            app.show_help = false;
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,

        KeyCode::Char('/') => app.mode = Mode::Search,
        KeyCode::Esc => {
            if !app.search_query().is_empty() {
                app.set_search(String::new());
            }
        }
        KeyCode::Char('c') => app.clear_filters(),

        KeyCode::Char('f') => app.filters_expanded = !app.filters_expanded,
        KeyCode::Char('t') => app.toggle_theme(),

        // Tag bar
        KeyCode::Left | KeyCode::Char('h') if app.filters_expanded => app.move_tag_cursor(-1),
        KeyCode::Right | KeyCode::Char('l') if app.filters_expanded => app.move_tag_cursor(1),
        KeyCode::Home if app.filters_expanded => app.tag_cursor = 0,
        KeyCode::End if app.filters_expanded => {
            app.tag_cursor = app.tag_count().saturating_sub(1)
        }
        KeyCode::Char(' ') | KeyCode::Enter if app.filters_expanded => {
            app.toggle_tag_at_cursor()
        }

        // Gallery scroll
        KeyCode::Down | KeyCode::Char('j') => app.scroll_by(1),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_by(-1),
        KeyCode::PageDown => app.scroll_by(3),
        KeyCode::PageUp => app.scroll_by(-3),
        KeyCode::Char('g') => app.scroll = 0,
        KeyCode::Char('G') => app.scroll_by(isize::MAX / 2),

        _ => {}
    }
}
