use crate::interactive_ratatui::ui::components::Component;
use crate::interactive_ratatui::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const PLACEHOLDER: &str = "Describe a problem (e.g. 'binary tree level order traversal')...";

#[derive(Default)]
pub struct SearchBar {
    query: String,
    cursor_position: usize,
    is_loading: bool,
    message: Option<String>,
}

impl SearchBar {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            cursor_position: 0,
            is_loading: false,
            message: None,
        }
    }

    pub fn set_query(&mut self, query: String) {
        if self.query != query {
            self.cursor_position = query.chars().count();
            self.query = query;
        }
    }

    pub fn set_loading(&mut self, is_loading: bool) {
        self.is_loading = is_loading;
    }

    pub fn set_message(&mut self, message: Option<String>) {
        self.message = message;
    }

    #[allow(dead_code)]
    pub fn get_query(&self) -> &str {
        &self.query
    }

    /// Find the previous word boundary from the given position
    fn find_prev_word_boundary(&self, from: usize) -> usize {
        let chars: Vec<char> = self.query.chars().collect();
        let mut pos = from;

        while pos > 0 && chars.get(pos - 1).is_some_and(|c| c.is_whitespace()) {
            pos -= 1;
        }
        while pos > 0 && chars.get(pos - 1).is_some_and(|c| !c.is_whitespace()) {
            pos -= 1;
        }

        pos
    }

    /// Delete from start position to end position and return if query changed
    fn delete_range(&mut self, start: usize, end: usize) -> bool {
        if start >= end || end > self.query.chars().count() {
            return false;
        }

        let byte_start = self
            .query
            .chars()
            .take(start)
            .map(|c| c.len_utf8())
            .sum::<usize>();
        let byte_end = self
            .query
            .chars()
            .take(end)
            .map(|c| c.len_utf8())
            .sum::<usize>();

        self.query.drain(byte_start..byte_end);
        self.cursor_position = start;
        true
    }

    fn delete_char_before_cursor(&mut self) -> bool {
        if self.cursor_position == 0 {
            return false;
        }
        self.delete_range(self.cursor_position - 1, self.cursor_position)
    }

    fn delete_char_at_cursor(&mut self) -> bool {
        self.delete_range(self.cursor_position, self.cursor_position + 1)
    }

    fn insert_char(&mut self, c: char) {
        let byte_pos = self
            .query
            .chars()
            .take(self.cursor_position)
            .map(|ch| ch.len_utf8())
            .sum::<usize>();
        self.query.insert(byte_pos, c);
        self.cursor_position += 1;
    }
}

impl Component for SearchBar {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let input_text = if self.query.is_empty() {
            vec![
                Span::styled(" ", Style::default().bg(Color::White).fg(Color::Black)),
                Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray)),
            ]
        } else if self.cursor_position < self.query.chars().count() {
            let (before, after) = self
                .query
                .chars()
                .enumerate()
                .partition::<Vec<_>, _>(|(i, _)| *i < self.cursor_position);

            let before: String = before.into_iter().map(|(_, c)| c).collect();
            let after: String = after.into_iter().map(|(_, c)| c).collect();

            vec![
                Span::raw(before),
                Span::styled(
                    after.chars().next().unwrap_or(' ').to_string(),
                    Style::default().bg(Color::White).fg(Color::Black),
                ),
                Span::raw(after.chars().skip(1).collect::<String>()),
            ]
        } else {
            vec![
                Span::raw(self.query.clone()),
                Span::styled(" ", Style::default().bg(Color::White).fg(Color::Black)),
            ]
        };

        let mut title = "Search".to_string();
        if self.is_loading {
            title.push_str(" [searching...]");
        }
        if let Some(msg) = &self.message {
            title.push_str(&format!(" - {msg}"));
        }

        let input = Paragraph::new(Line::from(input_text))
            .block(Block::default().title(title).borders(Borders::ALL))
            .style(Style::default().fg(Color::Yellow));

        f.render_widget(input, area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                // Ctrl+A - Move cursor to beginning of line
                KeyCode::Char('a') => {
                    self.cursor_position = 0;
                    return None;
                }
                // Ctrl+E - Move cursor to end of line
                KeyCode::Char('e') => {
                    self.cursor_position = self.query.chars().count();
                    return None;
                }
                // Ctrl+B - Move cursor backward one character
                KeyCode::Char('b') => {
                    if self.cursor_position > 0 {
                        self.cursor_position -= 1;
                    }
                    return None;
                }
                // Ctrl+F - Move cursor forward one character
                KeyCode::Char('f') => {
                    if self.cursor_position < self.query.chars().count() {
                        self.cursor_position += 1;
                    }
                    return None;
                }
                // Ctrl+H - Delete character before cursor
                KeyCode::Char('h') => {
                    if self.delete_char_before_cursor() {
                        return Some(Message::QueryChanged(self.query.clone()));
                    }
                    return None;
                }
                // Ctrl+W - Delete word before cursor
                KeyCode::Char('w') => {
                    if self.cursor_position > 0 {
                        let new_pos = self.find_prev_word_boundary(self.cursor_position);
                        if self.delete_range(new_pos, self.cursor_position) {
                            return Some(Message::QueryChanged(self.query.clone()));
                        }
                    }
                    return None;
                }
                // Ctrl+U - Delete from cursor to beginning of line
                KeyCode::Char('u') => {
                    if self.cursor_position > 0 && self.delete_range(0, self.cursor_position) {
                        return Some(Message::QueryChanged(self.query.clone()));
                    }
                    return None;
                }
                // Ctrl+K - Delete from cursor to end of line
                KeyCode::Char('k') => {
                    let len = self.query.chars().count();
                    if self.cursor_position < len && self.delete_range(self.cursor_position, len) {
                        return Some(Message::QueryChanged(self.query.clone()));
                    }
                    return None;
                }
                _ => {}
            }
        }

        match key.code {
            KeyCode::Enter => Some(Message::SubmitSearch),
            KeyCode::Char(c) => {
                if key.modifiers.contains(KeyModifiers::CONTROL)
                    || key.modifiers.contains(KeyModifiers::ALT)
                {
                    return None;
                }
                self.insert_char(c);
                Some(Message::QueryChanged(self.query.clone()))
            }
            KeyCode::Backspace => {
                if self.delete_char_before_cursor() {
                    Some(Message::QueryChanged(self.query.clone()))
                } else {
                    None
                }
            }
            KeyCode::Delete => {
                if self.delete_char_at_cursor() {
                    Some(Message::QueryChanged(self.query.clone()))
                } else {
                    None
                }
            }
            KeyCode::Left => {
                if self.cursor_position > 0 {
                    self.cursor_position -= 1;
                }
                None
            }
            KeyCode::Right => {
                if self.cursor_position < self.query.chars().count() {
                    self.cursor_position += 1;
                }
                None
            }
            KeyCode::Home => {
                self.cursor_position = 0;
                None
            }
            KeyCode::End => {
                self.cursor_position = self.query.chars().count();
                None
            }
            _ => None,
        }
    }
}
