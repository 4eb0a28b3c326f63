mod navigate;
mod search;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Mode};

use navigate::handle_navigate;
use search::handle_search;

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    // Ctrl-C quits from anywhere
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    // Any key skips the count-up
    app.finish_counters();

    match app.mode {
        Mode::Navigate => handle_navigate(app, key),
        Mode::Search => handle_search(app, key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::{builtin_app, key, press};

    #[test]
    fn ctrl_c_quits_in_any_mode() {
        let mut app = builtin_app();
        app.mode = Mode::Search;
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn keypress_finishes_counters() {
        let mut app = builtin_app();
        assert!(app.is_animating());
        press(&mut app, key(KeyCode::Char('j')));
        assert!(!app.is_animating());
        assert_eq!(app.stats[0].counter.value(), 4);
    }

    #[test]
    fn typing_filters_live() {
        let mut app = builtin_app();
        press(&mut app, key(KeyCode::Char('/')));
        assert_eq!(app.mode, Mode::Search);
        for c in "shoot".chars() {
            press(&mut app, key(KeyCode::Char(c)));
        }
        assert_eq!(app.search_query(), "shoot");
        assert_eq!(app.gallery.view().cards.len(), 1);

        press(&mut app, key(KeyCode::Enter));
        assert_eq!(app.mode, Mode::Navigate);
        // Query survives leaving the prompt
        assert_eq!(app.gallery.view().cards.len(), 1);
    }

    #[test]
    fn esc_in_search_clears_query() {
        let mut app = builtin_app();
        press(&mut app, key(KeyCode::Char('/')));
        press(&mut app, key(KeyCode::Char('x')));
        press(&mut app, key(KeyCode::Esc));
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.search_query(), "");
        assert_eq!(app.gallery.view().cards.len(), 4);
    }

    #[test]
    fn space_toggles_tag_under_cursor() {
        let mut app = builtin_app();
        press(&mut app, key(KeyCode::Right));
        press(&mut app, key(KeyCode::Char(' ')));
        // Cursor 1 is "C#"
        assert!(app.gallery.filter_state().active_tags.contains("C#"));
        press(&mut app, key(KeyCode::Enter));
        assert!(app.gallery.filter_state().active_tags.is_empty());
    }

    #[test]
    fn f_collapses_filter_bar() {
        let mut app = builtin_app();
        assert!(app.filters_expanded);
        press(&mut app, key(KeyCode::Char('f')));
        assert!(!app.filters_expanded);
        // Tag keys are inert while the bar is hidden
        press(&mut app, key(KeyCode::Char(' ')));
        assert!(app.gallery.filter_state().active_tags.is_empty());
        press(&mut app, key(KeyCode::Char('f')));
        assert!(app.filters_expanded);
    }

    #[test]
    fn c_clears_filters() {
        let mut app = builtin_app();
        press(&mut app, key(KeyCode::Char(' ')));
        app.set_search("path".into());
        press(&mut app, key(KeyCode::Char('c')));
        assert!(app.gallery.filter_state().is_unfiltered());
    }

    #[test]
    fn help_overlay_swallows_keys() {
        let mut app = builtin_app();
        press(&mut app, key(KeyCode::Char('?')));
        assert!(app.show_help);
        press(&mut app, key(KeyCode::Char('q')));
        assert!(!app.should_quit);
        press(&mut app, key(KeyCode::Esc));
        assert!(!app.show_help);
        press(&mut app, key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }
}
