use anyhow::Result;
use crossterm::{
    event::{self, poll, Event, KeyCode, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use tracing::warn;

use crate::api::QueryClient;
use crate::search::{SearchRequest, SearchResponse};
use crate::settings::SettingsManager;

pub mod constants;
mod domain;
pub mod ui;

use self::constants::*;
use self::domain::models::Mode;
use self::ui::components::Component;
use self::ui::{app_state::AppState, commands::Command, events::Message, renderer::Renderer};

pub struct InteractiveSearch {
    state: AppState,
    renderer: Renderer,
    client: Arc<QueryClient>,
    settings_manager: SettingsManager,
    search_sender: Option<Sender<SearchRequest>>,
    search_receiver: Option<Receiver<SearchResponse>>,
    last_ctrl_c_press: Option<Instant>,
    message_timer: Option<Instant>,
    message_clear_delay: u64,
}

impl InteractiveSearch {
    pub fn new(client: Arc<QueryClient>, settings_manager: SettingsManager) -> Self {
        Self {
            state: AppState::new(),
            renderer: Renderer::new(),
            client,
            settings_manager,
            search_sender: None,
            search_receiver: None,
            last_ctrl_c_press: None,
            message_timer: None,
            message_clear_delay: MESSAGE_CLEAR_DELAY_MS,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = self.setup_terminal()?;

        // Start search worker thread
        let (tx, rx) = self.start_search_worker();
        self.search_sender = Some(tx);
        self.search_receiver = Some(rx);

        let result = self.run_app(&mut terminal);

        self.cleanup_terminal(&mut terminal)?;
        result
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn cleanup_terminal(&self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    fn run_app(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| {
                self.renderer.render(f, &self.state);
            })?;

            // Check for settled searches. Supersession is enforced inside the
            // lifecycle: a response for anything but the latest request is a
            // no-op.
            if let Some(receiver) = &self.search_receiver {
                if let Ok(response) = receiver.try_recv() {
                    self.handle_message(Message::SearchCompleted(response));
                }
            }

            // Check for scheduled message clear
            if let Some(timer) = self.message_timer {
                if timer.elapsed() >= Duration::from_millis(self.message_clear_delay) {
                    self.message_timer = None;
                    self.execute_command(Command::ClearMessage);
                }
            }

            if poll(Duration::from_millis(EVENT_POLL_INTERVAL_MS))? {
                if let Event::Key(key) = event::read()? {
                    let should_quit = self.handle_input(key)?;
                    if should_quit {
                        break;
                    }
                }
            }
        }
        Ok(())
    }

    fn handle_input(&mut self, key: KeyEvent) -> Result<bool> {
        use crossterm::event::KeyModifiers;

        // Global Ctrl+C handling for exit
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            if let Some(last_press) = self.last_ctrl_c_press {
                if last_press.elapsed() < Duration::from_secs(DOUBLE_CTRL_C_TIMEOUT_SECS) {
                    return Ok(true);
                }
            }
            self.last_ctrl_c_press = Some(Instant::now());
            self.state.ui.message = Some("Press Ctrl+C again to exit".to_string());
            return Ok(false);
        }

        // Global keys
        match key.code {
            KeyCode::Char('?') if self.state.mode == Mode::Search => {
                self.handle_message(Message::ShowHelp);
                return Ok(false);
            }
            KeyCode::Char('g')
                if key.modifiers.contains(KeyModifiers::CONTROL)
                    && self.state.mode == Mode::Search =>
            {
                self.handle_message(Message::ShowSettings);
                return Ok(false);
            }
            _ => {}
        }

        // Mode-specific input handling
        let message = match self.state.mode {
            Mode::Search => self.handle_search_mode_input(key),
            Mode::ResultDetail => self.renderer.result_detail_mut().handle_key(key),
            Mode::Settings => self.renderer.settings_dialog_mut().handle_key(key),
            Mode::Help => self.renderer.help_dialog_mut().handle_key(key),
        };

        if let Some(msg) = message {
            self.handle_message(msg);
        }

        Ok(false)
    }

    fn handle_search_mode_input(&mut self, key: KeyEvent) -> Option<Message> {
        use crossterm::event::KeyModifiers;
        match key.code {
            KeyCode::Up
            | KeyCode::Down
            | KeyCode::PageUp
            | KeyCode::PageDown
            | KeyCode::Tab => self.renderer.result_list_mut().handle_key(key),
            KeyCode::Char('o') if key.modifiers == KeyModifiers::CONTROL => {
                self.renderer.result_list_mut().handle_key(key)
            }
            _ => self.renderer.search_bar_mut().handle_key(key),
        }
    }

    fn handle_message(&mut self, message: Message) {
        let command = self.state.update(message);
        self.execute_command(command);
    }

    fn execute_command(&mut self, command: Command) {
        match command {
            Command::None => {}
            Command::ExecuteSearch => {
                self.execute_search();
            }
            Command::LoadSettings => {
                let settings = self.settings_manager.load().unwrap_or_default();
                self.renderer.settings_dialog_mut().set_settings(&settings);
            }
            Command::PersistSettings(settings) => match self.settings_manager.save(&settings) {
                Ok(()) => {
                    self.show_transient_message("Settings saved".to_string());
                }
                Err(e) => {
                    warn!(error = %e, "failed to persist settings");
                    self.show_transient_message(format!("Failed to save settings: {e}"));
                }
            },
            Command::OpenUrl(url) => {
                if let Err(e) = open::that(&url) {
                    self.show_transient_message(format!("Failed to open browser: {e}"));
                }
            }
            Command::ShowMessage(msg) => {
                self.state.ui.message = Some(msg);
            }
            Command::ClearMessage => {
                self.state.ui.message = None;
                self.message_timer = None;
            }
            Command::ScheduleClearMessage(delay) => {
                self.message_timer = Some(Instant::now());
                self.message_clear_delay = delay;
            }
        }
    }

    /// Reads settings fresh (a save between submits affects only the next
    /// search) and hands the accepted request to the worker. Validation
    /// failures become a transient notice without touching search state.
    fn execute_search(&mut self) {
        let settings = match self.settings_manager.load() {
            Ok(settings) => settings,
            Err(e) => {
                warn!(error = %e, "failed to load settings");
                self.show_transient_message(format!("Failed to load settings: {e}"));
                return;
            }
        };

        let query = self.state.search.query.clone();
        let limit = settings.max_questions;
        match self.state.search.lifecycle.submit(&query, &settings, limit) {
            Ok(request) => {
                if let Some(sender) = &self.search_sender {
                    let _ = sender.send(request);
                }
            }
            Err(e) => {
                self.show_transient_message(e.to_string());
            }
        }
    }

    fn show_transient_message(&mut self, message: String) {
        self.state.ui.message = Some(message);
        self.message_timer = Some(Instant::now());
        self.message_clear_delay = MESSAGE_CLEAR_DELAY_MS;
    }

    /// Each request runs on its own thread: an in-flight search is never
    /// aborted when a newer one is issued, so responses can arrive out of
    /// order and only the generation check decides which one lands.
    fn start_search_worker(&self) -> (Sender<SearchRequest>, Receiver<SearchResponse>) {
        let (request_tx, request_rx) = mpsc::channel::<SearchRequest>();
        let (response_tx, response_rx) = mpsc::channel::<SearchResponse>();
        let client = self.client.clone();

        thread::spawn(move || {
            while let Ok(request) = request_rx.recv() {
                let client = client.clone();
                let response_tx = response_tx.clone();
                thread::spawn(move || {
                    let outcome = client
                        .search(&request.query)
                        .map_err(|e| e.user_message());
                    let _ = response_tx.send(SearchResponse {
                        id: request.id,
                        outcome,
                    });
                });
            }
        });

        (request_tx, response_rx)
    }
}
