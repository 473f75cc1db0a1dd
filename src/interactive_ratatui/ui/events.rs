use crate::search::SearchResponse;
use crate::settings::UserSettings;

#[derive(Clone, Debug)]
pub enum Message {
    // Search events
    QueryChanged(String),
    SubmitSearch,
    SearchCompleted(SearchResponse),
    SelectResult(usize),

    // Mode changes
    EnterResultDetail,
    ExitToSearch,
    ShowHelp,
    CloseHelp,
    ShowSettings,
    CloseSettings,

    // Settings dialog
    SaveSettings(UserSettings),

    // Actions
    OpenUrl(String),

    // UI events
    SetStatus(String),
    ClearStatus,

    // Terminal events
    Quit,
}
