use crate::api::models::Question;
use crate::interactive_ratatui::constants::PAGE_SIZE;
use crate::interactive_ratatui::ui::components::result_list::difficulty_color;
use crate::interactive_ratatui::ui::components::{wrap_text, Component};
use crate::interactive_ratatui::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const STATUS_TEXT: &str =
    "↑/↓ or j/k: Scroll | o: Open in browser | Esc: Back | Ctrl+C twice: Quit";

#[derive(Default)]
pub struct ResultDetail {
    question: Option<Question>,
    scroll_offset: usize,
    /// Wrapped line count from the last render, used to clamp scrolling.
    content_lines: usize,
    viewport_height: usize,
}

impl ResultDetail {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_question(&mut self, question: Question) {
        let changed = self
            .question
            .as_ref()
            .map(|current| current.id != question.id)
            .unwrap_or(true);
        if changed {
            self.scroll_offset = 0;
        }
        self.question = Some(question);
    }

    fn max_scroll(&self) -> usize {
        self.content_lines.saturating_sub(self.viewport_height)
    }

    fn scroll_down(&mut self, lines: usize) {
        self.scroll_offset = (self.scroll_offset + lines).min(self.max_scroll());
    }

    fn scroll_up(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }
}

impl Component for ResultDetail {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let Some(question) = &self.question else {
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Header
                Constraint::Min(0),    // Description
                Constraint::Length(2), // Status
            ])
            .split(area);

        let tags = question
            .tags
            .as_deref()
            .filter(|tags| !tags.is_empty())
            .map(|tags| tags.join(", "))
            .unwrap_or_else(|| "-".to_string());

        let header_lines = vec![
            Line::from(vec![
                Span::styled(
                    question.title.clone(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(
                    format!("[{}]", question.difficulty),
                    Style::default()
                        .fg(difficulty_color(question.difficulty))
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled("URL:  ", Style::default().fg(Color::DarkGray)),
                Span::styled(question.url.clone(), Style::default().fg(Color::Blue)),
            ]),
            Line::from(vec![
                Span::styled("Tags: ", Style::default().fg(Color::DarkGray)),
                Span::raw(tags),
            ]),
        ];
        let header = Paragraph::new(header_lines).block(
            Block::default()
                .title(format!("Problem #{}", question.id))
                .borders(Borders::ALL),
        );
        f.render_widget(header, chunks[0]);

        let text_width = chunks[1].width.saturating_sub(2) as usize;
        let wrapped = wrap_text(&question.description, text_width.max(1));
        self.content_lines = wrapped.len();
        self.viewport_height = chunks[1].height.saturating_sub(2) as usize;
        self.scroll_offset = self.scroll_offset.min(self.max_scroll());

        let visible: Vec<Line> = wrapped
            .iter()
            .skip(self.scroll_offset)
            .take(self.viewport_height)
            .map(|line| Line::from(line.clone()))
            .collect();

        let description = Paragraph::new(visible).block(
            Block::default()
                .title("Description")
                .borders(Borders::ALL),
        );
        f.render_widget(description, chunks[1]);

        let status_bar = Paragraph::new(STATUS_TEXT)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        f.render_widget(status_bar, chunks[2]);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace => Some(Message::ExitToSearch),
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll_up(1);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll_down(1);
                None
            }
            KeyCode::PageUp => {
                self.scroll_up(PAGE_SIZE);
                None
            }
            KeyCode::PageDown => {
                self.scroll_down(PAGE_SIZE);
                None
            }
            KeyCode::Home => {
                self.scroll_offset = 0;
                None
            }
            KeyCode::Char('o') => self
                .question
                .as_ref()
                .map(|q| Message::OpenUrl(q.url.clone())),
            _ => None,
        }
    }
}
