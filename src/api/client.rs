use crate::api::error::{derive_service_message, ApiError};
use crate::api::models::{Question, QueryRequest};
use crate::auth::IdentitySession;
use crate::search::SearchQuery;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the remote question-search service. Issues exactly one
/// POST per search; holds no per-search state.
pub struct QueryClient {
    http: reqwest::blocking::Client,
    base_url: String,
    session: Option<Arc<dyn IdentitySession + Send + Sync>>,
}

impl QueryClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();

        Self {
            http,
            base_url: base_url.into(),
            session: None,
        }
    }

    /// Attaches an identity session. The bearer token is fetched fresh from
    /// the session on every request, never cached here.
    pub fn with_session(mut self, session: Arc<dyn IdentitySession + Send + Sync>) -> Self {
        self.session = Some(session);
        self
    }

    pub fn endpoint_url(&self) -> String {
        format!("{}/query", self.base_url.trim_end_matches('/'))
    }

    /// Executes one search. Any non-2xx status, connection failure, or
    /// malformed body is an `ApiError`; the caller decides how to surface it.
    pub fn search(&self, query: &SearchQuery) -> Result<Vec<Question>, ApiError> {
        let body = QueryRequest {
            query: query.text.clone(),
            openai_api_key: query.api_key.clone(),
            number_of_questions: query.limit,
        };

        let mut request = self.http.post(self.endpoint_url()).json(&body);
        if let Some(session) = &self.session {
            if session.current_user().is_some() {
                let token = session.token()?;
                request = request.bearer_auth(token);
            }
        }

        debug!(endpoint = %self.endpoint_url(), limit = query.limit, "dispatching search");

        let response = request.send()?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ApiError::Service {
                status: status.as_u16(),
                message: derive_service_message(status.as_u16(), &body),
            });
        }

        let text = response.text()?;
        let questions: Vec<Question> = serde_json::from_str(&text)?;
        debug!(count = questions.len(), "search resolved");
        Ok(questions)
    }
}
