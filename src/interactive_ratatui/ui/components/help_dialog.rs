use crate::interactive_ratatui::constants::{HELP_DIALOG_MARGIN, HELP_DIALOG_MAX_WIDTH};
use crate::interactive_ratatui::ui::components::{centered_rect, Component};
use crate::interactive_ratatui::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const BINDINGS: &[(&str, &str)] = &[
    ("Enter", "Submit the search"),
    ("↑/↓, PgUp/PgDn", "Select a result"),
    ("Tab", "View problem details"),
    ("Ctrl+O", "Open the selected problem in the browser"),
    ("Ctrl+G", "Open settings (API key, max questions)"),
    ("?", "Show this help"),
    ("Esc", "Close dialogs / go back"),
    ("Ctrl+C Ctrl+C", "Quit"),
];

#[derive(Default)]
pub struct HelpDialog;

impl HelpDialog {
    pub fn new() -> Self {
        Self
    }
}

impl Component for HelpDialog {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let height = (BINDINGS.len() + 4) as u16;
        let dialog_area = centered_rect(HELP_DIALOG_MAX_WIDTH, height, HELP_DIALOG_MARGIN, area);
        f.render_widget(Clear, dialog_area);

        let mut lines = vec![Line::from("")];
        for (keys, action) in BINDINGS {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {keys:16}"),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(*action),
            ]));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  Press Esc to close",
            Style::default().fg(Color::DarkGray),
        )));

        let dialog = Paragraph::new(lines).block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
        f.render_widget(dialog, dialog_area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('?') => {
                Some(Message::CloseHelp)
            }
            _ => None,
        }
    }
}
