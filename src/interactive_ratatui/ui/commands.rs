use crate::settings::UserSettings;

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    None,
    /// Read settings fresh and hand the current query to the lifecycle.
    ExecuteSearch,
    /// Load stored settings into the settings dialog.
    LoadSettings,
    PersistSettings(UserSettings),
    OpenUrl(String),
    ShowMessage(String),
    ClearMessage,
    ScheduleClearMessage(u64), // delay in milliseconds
}
