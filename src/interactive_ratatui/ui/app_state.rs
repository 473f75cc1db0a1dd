use crate::api::models::Question;
use crate::interactive_ratatui::constants::MESSAGE_CLEAR_DELAY_MS;
use crate::interactive_ratatui::ui::commands::Command;
use crate::interactive_ratatui::ui::events::Message;
use crate::search::SearchLifecycle;

// Re-export Mode
pub use crate::interactive_ratatui::domain::models::Mode;

pub struct AppState {
    pub mode: Mode,
    pub search: SearchState,
    pub ui: UiState,
}

pub struct SearchState {
    /// The text currently in the search bar; becomes a SearchQuery on submit.
    pub query: String,
    pub lifecycle: SearchLifecycle,
    pub selected_index: usize,
    pub scroll_offset: usize,
}

pub struct UiState {
    pub message: Option<String>,
    pub selected_question: Option<Question>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            mode: Mode::Search,
            search: SearchState {
                query: String::new(),
                lifecycle: SearchLifecycle::new(),
                selected_index: 0,
                scroll_offset: 0,
            },
            ui: UiState {
                message: None,
                selected_question: None,
            },
        }
    }

    pub fn update(&mut self, msg: Message) -> Command {
        match msg {
            Message::QueryChanged(q) => {
                self.search.query = q;
                Command::None
            }
            Message::SubmitSearch => Command::ExecuteSearch,
            Message::SearchCompleted(response) => {
                // Stale responses (superseded by a newer submit) are dropped
                // inside the lifecycle and must not touch anything here.
                if !self.search.lifecycle.resolve(response) {
                    return Command::None;
                }
                self.search.selected_index = 0;
                self.search.scroll_offset = 0;
                match self.search.lifecycle.error() {
                    Some(message) => {
                        self.ui.message = Some(message.to_string());
                        Command::ScheduleClearMessage(MESSAGE_CLEAR_DELAY_MS)
                    }
                    None => {
                        self.ui.message = None;
                        Command::None
                    }
                }
            }
            Message::SelectResult(index) => {
                if index < self.search.lifecycle.display_results().len() {
                    self.search.selected_index = index;
                }
                Command::None
            }
            Message::EnterResultDetail => {
                if let Some(question) = self
                    .search
                    .lifecycle
                    .display_results()
                    .get(self.search.selected_index)
                    .cloned()
                {
                    self.ui.selected_question = Some(question);
                    self.mode = Mode::ResultDetail;
                }
                Command::None
            }
            Message::ExitToSearch => {
                self.mode = Mode::Search;
                self.ui.selected_question = None;
                Command::None
            }
            Message::ShowHelp => {
                self.mode = Mode::Help;
                Command::None
            }
            Message::CloseHelp => {
                self.mode = Mode::Search;
                Command::None
            }
            Message::ShowSettings => {
                self.mode = Mode::Settings;
                Command::LoadSettings
            }
            Message::CloseSettings => {
                self.mode = Mode::Search;
                Command::None
            }
            Message::SaveSettings(settings) => {
                self.mode = Mode::Search;
                Command::PersistSettings(settings)
            }
            Message::OpenUrl(url) => Command::OpenUrl(url),
            Message::SetStatus(msg) => {
                self.ui.message = Some(msg);
                Command::ScheduleClearMessage(MESSAGE_CLEAR_DELAY_MS)
            }
            Message::ClearStatus => {
                self.ui.message = None;
                Command::None
            }
            Message::Quit => Command::None, // handled in the main loop
        }
    }
}
