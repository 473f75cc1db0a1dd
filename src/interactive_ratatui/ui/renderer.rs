use crate::interactive_ratatui::constants::SEARCH_BAR_HEIGHT;
use crate::interactive_ratatui::ui::app_state::{AppState, Mode};
use crate::interactive_ratatui::ui::components::{
    help_dialog::HelpDialog, result_detail::ResultDetail, result_list::ResultList,
    search_bar::SearchBar, settings_dialog::SettingsDialog, Component,
};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

pub struct Renderer {
    search_bar: SearchBar,
    result_list: ResultList,
    result_detail: ResultDetail,
    settings_dialog: SettingsDialog,
    help_dialog: HelpDialog,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            search_bar: SearchBar::new(),
            result_list: ResultList::new(),
            result_detail: ResultDetail::new(),
            settings_dialog: SettingsDialog::new(),
            help_dialog: HelpDialog::new(),
        }
    }

    pub fn render(&mut self, f: &mut Frame, state: &AppState) {
        match state.mode {
            Mode::Search => self.render_search_mode(f, state),
            Mode::ResultDetail => self.render_detail_mode(f, state),
            Mode::Settings => {
                // Dialog floats over the search screen.
                self.render_search_mode(f, state);
                self.settings_dialog.render(f, f.area());
            }
            Mode::Help => {
                self.render_search_mode(f, state);
                self.help_dialog.render(f, f.area());
            }
        }
    }

    fn render_search_mode(&mut self, f: &mut Frame, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(SEARCH_BAR_HEIGHT), // Search bar
                Constraint::Min(0),                    // Results
            ])
            .split(f.area());

        let lifecycle = &state.search.lifecycle;

        self.search_bar.set_query(state.search.query.clone());
        self.search_bar.set_loading(lifecycle.is_loading());
        self.search_bar.set_message(state.ui.message.clone());

        self.result_list
            .set_questions(lifecycle.display_results().to_vec());
        self.result_list
            .set_selected_index(state.search.selected_index);
        self.result_list.set_loading(lifecycle.is_loading());
        self.result_list.set_has_searched(lifecycle.has_searched());
        self.result_list
            .set_error(lifecycle.error().map(|e| e.to_string()));

        self.search_bar.render(f, chunks[0]);
        self.result_list.render(f, chunks[1]);
    }

    fn render_detail_mode(&mut self, f: &mut Frame, state: &AppState) {
        if let Some(question) = &state.ui.selected_question {
            self.result_detail.set_question(question.clone());
            self.result_detail.render(f, f.area());
        }
    }

    pub fn search_bar_mut(&mut self) -> &mut SearchBar {
        &mut self.search_bar
    }

    pub fn result_list_mut(&mut self) -> &mut ResultList {
        &mut self.result_list
    }

    pub fn result_detail_mut(&mut self) -> &mut ResultDetail {
        &mut self.result_detail
    }

    pub fn settings_dialog_mut(&mut self) -> &mut SettingsDialog {
        &mut self.settings_dialog
    }

    pub fn help_dialog_mut(&mut self) -> &mut HelpDialog {
        &mut self.help_dialog
    }
}
