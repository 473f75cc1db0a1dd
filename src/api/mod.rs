pub mod client;
pub mod error;
pub mod models;

pub use client::QueryClient;
pub use error::{derive_service_message, ApiError, GENERIC_ERROR_MESSAGE};
pub use models::{Difficulty, Question, QueryRequest};
