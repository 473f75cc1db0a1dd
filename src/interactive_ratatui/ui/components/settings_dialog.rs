use crate::interactive_ratatui::constants::{SETTINGS_DIALOG_HEIGHT, SETTINGS_DIALOG_WIDTH};
use crate::interactive_ratatui::ui::components::{centered_rect, Component};
use crate::interactive_ratatui::ui::events::Message;
use crate::settings::{UserSettings, MAX_QUESTIONS_LIMIT};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

#[derive(Clone, Copy, PartialEq, Debug)]
enum Field {
    ApiKey,
    MaxQuestions,
}

/// Modal editor for the two stored settings. Edits are local until Enter
/// hands a validated `UserSettings` back to the app.
pub struct SettingsDialog {
    api_key: String,
    max_questions: String,
    focus: Field,
    error: Option<String>,
}

impl Default for SettingsDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsDialog {
    pub fn new() -> Self {
        Self {
            api_key: String::new(),
            max_questions: String::new(),
            focus: Field::ApiKey,
            error: None,
        }
    }

    /// Load current values when the dialog opens.
    pub fn set_settings(&mut self, settings: &UserSettings) {
        self.api_key = settings.api_key.clone();
        self.max_questions = settings.max_questions.to_string();
        self.focus = Field::ApiKey;
        self.error = None;
    }

    fn focused_value_mut(&mut self) -> &mut String {
        match self.focus {
            Field::ApiKey => &mut self.api_key,
            Field::MaxQuestions => &mut self.max_questions,
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Field::ApiKey => Field::MaxQuestions,
            Field::MaxQuestions => Field::ApiKey,
        };
    }

    fn validate(&mut self) -> Option<UserSettings> {
        match self.max_questions.trim().parse::<usize>() {
            Ok(n) if n >= 1 && n <= MAX_QUESTIONS_LIMIT => Some(UserSettings {
                api_key: self.api_key.clone(),
                max_questions: n,
            }),
            _ => {
                self.error = Some(format!(
                    "Maximum questions must be a number between 1 and {MAX_QUESTIONS_LIMIT}"
                ));
                None
            }
        }
    }

    fn field_line(&self, label: &str, field: Field, shown: String) -> Line<'_> {
        let focused = self.focus == field;
        let value_style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::White)
        };
        let mut spans = vec![
            Span::styled(
                format!("{label:18}"),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(shown, value_style),
        ];
        if focused {
            spans.push(Span::styled(
                " ",
                Style::default().bg(Color::White).fg(Color::Black),
            ));
        }
        Line::from(spans)
    }

    fn masked_api_key(&self) -> String {
        if self.focus == Field::ApiKey {
            self.api_key.clone()
        } else {
            "•".repeat(self.api_key.chars().count())
        }
    }
}

impl Component for SettingsDialog {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let dialog_area = centered_rect(SETTINGS_DIALOG_WIDTH, SETTINGS_DIALOG_HEIGHT, 2, area);
        f.render_widget(Clear, dialog_area);

        let mut lines = vec![
            Line::from(""),
            self.field_line("OpenAI API key:", Field::ApiKey, self.masked_api_key()),
            Line::from(""),
            self.field_line(
                "Max questions:",
                Field::MaxQuestions,
                self.max_questions.clone(),
            ),
            Line::from(""),
            Line::from(Span::styled(
                format!("The key should support gpt-4o and embeddings; questions 1-{MAX_QUESTIONS_LIMIT}."),
                Style::default().fg(Color::DarkGray),
            )),
        ];
        if let Some(error) = &self.error {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Tab: Next field | Enter: Save | Esc: Cancel",
            Style::default().fg(Color::DarkGray),
        )));

        let dialog = Paragraph::new(lines).alignment(Alignment::Left).block(
            Block::default()
                .title(" Settings ")
                .borders(Borders::ALL)
                .border_style(Style::default().add_modifier(Modifier::BOLD)),
        );
        f.render_widget(dialog, dialog_area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Esc => Some(Message::CloseSettings),
            KeyCode::Enter => self.validate().map(Message::SaveSettings),
            KeyCode::Tab | KeyCode::Down | KeyCode::Up => {
                self.toggle_focus();
                None
            }
            KeyCode::Backspace => {
                self.focused_value_mut().pop();
                self.error = None;
                None
            }
            KeyCode::Char(c) => {
                if key.modifiers.contains(KeyModifiers::CONTROL)
                    || key.modifiers.contains(KeyModifiers::ALT)
                {
                    return None;
                }
                self.focused_value_mut().push(c);
                self.error = None;
                None
            }
            _ => None,
        }
    }
}

#[cfg(test)]
impl SettingsDialog {
    pub(crate) fn error_text(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
