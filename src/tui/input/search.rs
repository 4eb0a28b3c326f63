use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};
use crate::util::unicode::{pop_grapheme, pop_word};

/// Search prompt. Every edit re-filters the gallery immediately.
pub(super) fn handle_search(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Cancel: drop the query
        (_, KeyCode::Esc) => {
            app.set_search(String::new());
            app.mode = Mode::Navigate;
        }

        // Keep the query and go back to browsing
        (_, KeyCode::Enter) => {
            app.mode = Mode::Navigate;
        }

        (_, KeyCode::Backspace) => {
            let mut query = app.search_query().to_string();
            if key.modifiers.contains(KeyModifiers::ALT) {
                pop_word(&mut query);
            } else {
                pop_grapheme(&mut query);
            }
            app.set_search(query);
        }

        (m, KeyCode::Char('w')) if m.contains(KeyModifiers::CONTROL) => {
            let mut query = app.search_query().to_string();
            pop_word(&mut query);
            app.set_search(query);
        }

        (m, KeyCode::Char('u')) if m.contains(KeyModifiers::CONTROL) => {
            app.set_search(String::new());
        }

        (m, KeyCode::Char(c)) if !m.contains(KeyModifiers::CONTROL) => {
            let mut query = app.search_query().to_string();
            query.push(c);
            app.set_search(query);
        }

        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::{builtin_app, key};

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            handle_search(app, key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn backspace_removes_last_char_and_refilters() {
        let mut app = builtin_app();
        app.mode = Mode::Search;
        type_str(&mut app, "htmlx");
        assert!(app.gallery.view().show_empty_state);
        handle_search(&mut app, key(KeyCode::Backspace));
        assert_eq!(app.search_query(), "html");
        assert_eq!(app.gallery.view().cards.len(), 1);
    }

    #[test]
    fn ctrl_w_deletes_word() {
        let mut app = builtin_app();
        app.mode = Mode::Search;
        type_str(&mut app, "unity arcade");
        handle_search(
            &mut app,
            KeyEvent::new(KeyCode::Char('w'), KeyModifiers::CONTROL),
        );
        assert_eq!(app.search_query(), "unity ");
        assert_eq!(app.gallery.view().cards.len(), 2);
    }

    #[test]
    fn ctrl_u_clears() {
        let mut app = builtin_app();
        app.mode = Mode::Search;
        type_str(&mut app, "terrain");
        handle_search(
            &mut app,
            KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL),
        );
        assert_eq!(app.search_query(), "");
        assert_eq!(app.mode, Mode::Search);
    }

    #[test]
    fn uppercase_typed_with_shift() {
        let mut app = builtin_app();
        app.mode = Mode::Search;
        handle_search(
            &mut app,
            KeyEvent::new(KeyCode::Char('S'), KeyModifiers::SHIFT),
        );
        assert_eq!(app.search_query(), "S");
    }
}
