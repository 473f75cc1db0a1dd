pub mod api;
pub mod auth;
pub mod interactive_ratatui;
pub mod output;
pub mod search;
pub mod settings;
pub mod trace;

pub use api::{ApiError, Difficulty, Question, QueryClient, QueryRequest};
pub use auth::{AuthError, AuthSession, IdentitySession, Provider, UserInfo};
pub use search::{
    LifecycleState, SearchLifecycle, SearchQuery, SearchRequest, SearchResponse, ValidationError,
};
pub use settings::{SettingsManager, UserSettings, DEFAULT_MAX_QUESTIONS, MAX_QUESTIONS_LIMIT};
