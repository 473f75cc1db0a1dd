use crate::api::models::{Difficulty, Question};
use crate::interactive_ratatui::constants::PAGE_SIZE;
use crate::interactive_ratatui::ui::components::Component;
use crate::interactive_ratatui::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

const STATUS_TEXT: &str = "Enter: Search | ↑/↓: Select | Tab: Details | Ctrl+O: Open in browser | Ctrl+G: Settings | ?: Help | Ctrl+C twice: Quit";

pub fn difficulty_color(difficulty: Difficulty) -> Color {
    match difficulty {
        Difficulty::Easy => Color::Green,
        Difficulty::Medium => Color::Yellow,
        Difficulty::Hard => Color::Red,
    }
}

#[derive(Default)]
pub struct ResultList {
    questions: Vec<Question>,
    selected_index: usize,
    scroll_offset: usize,
    is_loading: bool,
    has_searched: bool,
    error: Option<String>,
}

impl ResultList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_questions(&mut self, questions: Vec<Question>) {
        if questions.len() != self.questions.len() || questions != self.questions {
            self.scroll_offset = 0;
        }
        self.questions = questions;
        if self.selected_index >= self.questions.len() {
            self.selected_index = 0;
        }
    }

    pub fn set_selected_index(&mut self, index: usize) {
        if index < self.questions.len() {
            self.selected_index = index;
        }
    }

    pub fn set_loading(&mut self, is_loading: bool) {
        self.is_loading = is_loading;
    }

    pub fn set_has_searched(&mut self, has_searched: bool) {
        self.has_searched = has_searched;
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    pub fn selected_question(&self) -> Option<&Question> {
        self.questions.get(self.selected_index)
    }

    fn move_up(&mut self) -> bool {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            true
        } else {
            false
        }
    }

    fn move_down(&mut self) -> bool {
        if self.selected_index + 1 < self.questions.len() {
            self.selected_index += 1;
            true
        } else {
            false
        }
    }

    fn page_up(&mut self) -> bool {
        let new_index = self.selected_index.saturating_sub(PAGE_SIZE);
        let moved = new_index != self.selected_index;
        self.selected_index = new_index;
        moved
    }

    fn page_down(&mut self) -> bool {
        let last = self.questions.len().saturating_sub(1);
        let new_index = (self.selected_index + PAGE_SIZE).min(last);
        let moved = new_index != self.selected_index;
        self.selected_index = new_index;
        moved
    }

    fn move_to_start(&mut self) -> bool {
        if self.selected_index > 0 {
            self.selected_index = 0;
            true
        } else {
            false
        }
    }

    fn move_to_end(&mut self) -> bool {
        let last = self.questions.len().saturating_sub(1);
        if self.selected_index < last {
            self.selected_index = last;
            true
        } else {
            false
        }
    }

    fn adjust_scroll(&mut self, visible_rows: usize) {
        if visible_rows == 0 {
            return;
        }
        if self.selected_index < self.scroll_offset {
            self.scroll_offset = self.selected_index;
        } else if self.selected_index >= self.scroll_offset + visible_rows {
            self.scroll_offset = self.selected_index + 1 - visible_rows;
        }
    }

    fn row_line(&self, question: &Question, max_width: usize) -> Line<'_> {
        let tags = question
            .tags
            .as_deref()
            .filter(|tags| !tags.is_empty())
            .map(|tags| format!("  {}", tags.join(", ")))
            .unwrap_or_default();

        let difficulty = format!("[{}]", question.difficulty);
        let fixed = difficulty.chars().count() + 2;
        let title_budget = max_width.saturating_sub(fixed).max(8);
        let mut title = question.title.clone();
        if title.chars().count() > title_budget {
            title = title.chars().take(title_budget.saturating_sub(3)).collect();
            title.push_str("...");
        }

        Line::from(vec![
            Span::styled(
                format!("{difficulty:8} "),
                Style::default().fg(difficulty_color(question.difficulty)),
            ),
            Span::raw(title),
            Span::styled(tags, Style::default().fg(Color::DarkGray)),
        ])
    }

    fn render_rows(&mut self, f: &mut Frame, area: Rect) {
        let visible_rows = area.height.saturating_sub(2) as usize;
        self.adjust_scroll(visible_rows);

        let max_width = area.width.saturating_sub(2) as usize;
        let end = (self.scroll_offset + visible_rows).min(self.questions.len());

        let items: Vec<ListItem> = self.questions[self.scroll_offset..end]
            .iter()
            .enumerate()
            .map(|(offset, question)| {
                let style = if self.scroll_offset + offset == self.selected_index {
                    Style::default()
                        .bg(Color::DarkGray)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(self.row_line(question, max_width)).style(style)
            })
            .collect();

        let mut title = format!("Results ({})", self.questions.len());
        if self.is_loading {
            title.push_str(" [searching...]");
        }

        let list = List::new(items).block(Block::default().title(title).borders(Borders::ALL));
        f.render_widget(list, area);
    }

    fn render_notice(&self, f: &mut Frame, area: Rect, lines: Vec<Line>, border_color: Color) {
        let notice = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border_color)),
            );
        f.render_widget(notice, area);
    }
}

impl Component for ResultList {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Content
                Constraint::Length(2), // Status
            ])
            .split(area);

        if let Some(error) = &self.error {
            let lines = vec![
                Line::from(""),
                Line::from(Span::styled(
                    "Search failed",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::raw(error.clone())),
            ];
            self.render_notice(f, chunks[0], lines, Color::Red);
        } else if self.questions.is_empty() {
            let text = if self.is_loading {
                "Searching..."
            } else if self.has_searched {
                "No results found. Try adjusting your query or increasing the question count."
            } else {
                "Describe the problem you're looking for and press Enter."
            };
            let lines = vec![
                Line::from(""),
                Line::from(Span::styled(text, Style::default().fg(Color::DarkGray))),
            ];
            self.render_notice(f, chunks[0], lines, Color::DarkGray);
        } else {
            self.render_rows(f, chunks[0]);
        }

        let status_bar = Paragraph::new(STATUS_TEXT)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(status_bar, chunks[1]);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Up => self
                .move_up()
                .then(|| Message::SelectResult(self.selected_index)),
            KeyCode::Down => self
                .move_down()
                .then(|| Message::SelectResult(self.selected_index)),
            KeyCode::PageUp => self
                .page_up()
                .then(|| Message::SelectResult(self.selected_index)),
            KeyCode::PageDown => self
                .page_down()
                .then(|| Message::SelectResult(self.selected_index)),
            KeyCode::Home => self
                .move_to_start()
                .then(|| Message::SelectResult(self.selected_index)),
            KeyCode::End => self
                .move_to_end()
                .then(|| Message::SelectResult(self.selected_index)),
            KeyCode::Tab => {
                if self.questions.is_empty() {
                    None
                } else {
                    Some(Message::EnterResultDetail)
                }
            }
            KeyCode::Char('o') if key.modifiers == KeyModifiers::CONTROL => self
                .selected_question()
                .map(|q| Message::OpenUrl(q.url.clone())),
            _ => None,
        }
    }
}
