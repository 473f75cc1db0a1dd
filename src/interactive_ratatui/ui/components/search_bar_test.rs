#[cfg(test)]
mod tests {
    use crate::interactive_ratatui::ui::components::search_bar::SearchBar;
    use crate::interactive_ratatui::ui::components::Component;
    use crate::interactive_ratatui::ui::events::Message;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(bar: &mut SearchBar, text: &str) {
        for c in text.chars() {
            bar.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_typing_emits_query_changed() {
        let mut bar = SearchBar::new();

        let msg = bar.handle_key(key(KeyCode::Char('a')));
        assert!(matches!(msg, Some(Message::QueryChanged(q)) if q == "a"));

        type_text(&mut bar, "bc");
        assert_eq!(bar.get_query(), "abc");
    }

    #[test]
    fn test_enter_submits() {
        let mut bar = SearchBar::new();
        type_text(&mut bar, "two sum");

        let msg = bar.handle_key(key(KeyCode::Enter));
        assert!(matches!(msg, Some(Message::SubmitSearch)));
        // Submitting does not clear the query; results stay tied to it.
        assert_eq!(bar.get_query(), "two sum");
    }

    #[test]
    fn test_enter_on_empty_query_still_submits() {
        // The validation notice comes from the lifecycle, not the widget.
        let mut bar = SearchBar::new();
        let msg = bar.handle_key(key(KeyCode::Enter));
        assert!(matches!(msg, Some(Message::SubmitSearch)));
    }

    #[test]
    fn test_backspace_deletes_before_cursor() {
        let mut bar = SearchBar::new();
        type_text(&mut bar, "abc");

        let msg = bar.handle_key(key(KeyCode::Backspace));
        assert!(matches!(msg, Some(Message::QueryChanged(q)) if q == "ab"));

        bar.handle_key(key(KeyCode::Left));
        bar.handle_key(key(KeyCode::Left));
        assert!(bar.handle_key(key(KeyCode::Backspace)).is_none());
    }

    #[test]
    fn test_cursor_movement_and_mid_insert() {
        let mut bar = SearchBar::new();
        type_text(&mut bar, "ac");

        bar.handle_key(key(KeyCode::Left));
        let msg = bar.handle_key(key(KeyCode::Char('b')));
        assert!(matches!(msg, Some(Message::QueryChanged(q)) if q == "abc"));
    }

    #[test]
    fn test_multibyte_editing() {
        let mut bar = SearchBar::new();
        type_text(&mut bar, "héllo");

        let msg = bar.handle_key(key(KeyCode::Backspace));
        assert!(matches!(msg, Some(Message::QueryChanged(q)) if q == "héll"));

        bar.handle_key(key(KeyCode::Home));
        bar.handle_key(key(KeyCode::Right));
        let msg = bar.handle_key(key(KeyCode::Delete));
        assert!(matches!(msg, Some(Message::QueryChanged(q)) if q == "hll"));
    }

    #[test]
    fn test_ctrl_w_deletes_previous_word() {
        let mut bar = SearchBar::new();
        type_text(&mut bar, "binary tree traversal");

        let msg = bar.handle_key(ctrl('w'));
        assert!(matches!(msg, Some(Message::QueryChanged(q)) if q == "binary tree "));
    }

    #[test]
    fn test_ctrl_u_clears_to_start() {
        let mut bar = SearchBar::new();
        type_text(&mut bar, "abc");

        let msg = bar.handle_key(ctrl('u'));
        assert!(matches!(msg, Some(Message::QueryChanged(q)) if q.is_empty()));
    }

    #[test]
    fn test_ctrl_a_and_e_move_cursor_silently() {
        let mut bar = SearchBar::new();
        type_text(&mut bar, "abc");

        assert!(bar.handle_key(ctrl('a')).is_none());
        let msg = bar.handle_key(ctrl('k'));
        assert!(matches!(msg, Some(Message::QueryChanged(q)) if q.is_empty()));

        type_text(&mut bar, "xyz");
        assert!(bar.handle_key(ctrl('e')).is_none());
        assert!(bar.handle_key(ctrl('k')).is_none());
    }

    #[test]
    fn test_set_query_preserves_cursor_on_same_text() {
        let mut bar = SearchBar::new();
        type_text(&mut bar, "abc");
        bar.handle_key(key(KeyCode::Left));

        // Renderer pushes the unchanged state back every frame; the cursor
        // must not jump to the end.
        bar.set_query("abc".to_string());
        let msg = bar.handle_key(key(KeyCode::Char('x')));
        assert!(matches!(msg, Some(Message::QueryChanged(q)) if q == "abxc"));
    }
}
