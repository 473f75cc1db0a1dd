//! Identity session management.
//!
//! The original design kept the identity-provider handle as ambient global
//! state; here the session is an explicitly constructed, explicitly owned
//! object, built once per process and injected into whatever consumes it.
//! Sign-in records a provider-issued token supplied out-of-band; the token
//! is re-read from disk on every request so a refresh performed elsewhere is
//! always picked up. Protocol details stay with the provider.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not signed in")]
    NotSignedIn,
    #[error("failed to access session file: {0}")]
    Io(#[from] std::io::Error),
    #[error("corrupt session file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize session: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("unknown provider '{0}' (expected google, microsoft, or apple)")]
    UnknownProvider(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Google,
    Microsoft,
    Apple,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Google => "google",
            Provider::Microsoft => "microsoft",
            Provider::Apple => "apple",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "google" => Ok(Provider::Google),
            "microsoft" => Ok(Provider::Microsoft),
            "apple" => Ok(Provider::Apple),
            other => Err(AuthError::UnknownProvider(other.to_string())),
        }
    }
}

/// The signed-in user as far as this client cares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInfo {
    pub display_name: String,
    pub email: String,
}

/// What the transport needs from a session: who is signed in, and a fresh
/// bearer token per request.
pub trait IdentitySession {
    fn current_user(&self) -> Option<UserInfo>;
    fn token(&self) -> Result<String, AuthError>;
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
struct StoredSession {
    provider: String,
    display_name: String,
    email: String,
    token: String,
}

/// File-backed identity session. Construct once via [`AuthSession::initialize`]
/// and share; every token read goes back to disk.
pub struct AuthSession {
    session_path: PathBuf,
}

impl AuthSession {
    /// Resolve the session file under the user config directory. Intended to
    /// be called once at startup; the resulting session is injected into
    /// consumers rather than reached through globals.
    pub fn initialize() -> Result<Self, AuthError> {
        let dir = if let Some(config_dir) = dirs::config_dir() {
            config_dir.join("leetquery")
        } else {
            PathBuf::from(".leetquery")
        };
        Ok(Self {
            session_path: dir.join("session.toml"),
        })
    }

    /// Session bound to a custom file (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self { session_path: path }
    }

    pub fn is_signed_in(&self) -> bool {
        self.session_path.exists()
    }

    /// Record a session for the given provider. Overwrites any prior session.
    pub fn sign_in(
        &self,
        provider: Provider,
        token: String,
        display_name: Option<String>,
        email: Option<String>,
    ) -> Result<UserInfo, AuthError> {
        let stored = StoredSession {
            provider: provider.to_string(),
            display_name: display_name.unwrap_or_default(),
            email: email.unwrap_or_default(),
            token,
        };

        if let Some(parent) = self.session_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.session_path, toml::to_string_pretty(&stored)?)?;
        debug!(provider = %provider, "session recorded");

        Ok(UserInfo {
            display_name: stored.display_name,
            email: stored.email,
        })
    }

    /// Drop the stored session. Signing out while signed out is an error the
    /// caller surfaces as a notice.
    pub fn sign_out(&self) -> Result<(), AuthError> {
        if !self.session_path.exists() {
            return Err(AuthError::NotSignedIn);
        }
        fs::remove_file(&self.session_path)?;
        debug!("session removed");
        Ok(())
    }

    fn load(&self) -> Result<StoredSession, AuthError> {
        if !self.session_path.exists() {
            return Err(AuthError::NotSignedIn);
        }
        let contents = fs::read_to_string(&self.session_path)?;
        Ok(toml::from_str(&contents)?)
    }
}

impl IdentitySession for AuthSession {
    fn current_user(&self) -> Option<UserInfo> {
        self.load().ok().map(|s| UserInfo {
            display_name: s.display_name,
            email: s.email,
        })
    }

    fn token(&self) -> Result<String, AuthError> {
        Ok(self.load()?.token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn session_in(dir: &TempDir) -> AuthSession {
        AuthSession::with_path(dir.path().join("session.toml"))
    }

    #[test]
    fn test_signed_out_by_default() {
        let dir = TempDir::new().unwrap();
        let session = session_in(&dir);

        assert!(!session.is_signed_in());
        assert!(session.current_user().is_none());
        assert!(matches!(session.token(), Err(AuthError::NotSignedIn)));
    }

    #[test]
    fn test_sign_in_round_trip() {
        let dir = TempDir::new().unwrap();
        let session = session_in(&dir);

        let user = session
            .sign_in(
                Provider::Google,
                "tok-123".to_string(),
                Some("Ada".to_string()),
                Some("ada@example.com".to_string()),
            )
            .unwrap();
        assert_eq!(user.display_name, "Ada");

        assert!(session.is_signed_in());
        assert_eq!(session.current_user().unwrap().email, "ada@example.com");
        assert_eq!(session.token().unwrap(), "tok-123");
    }

    #[test]
    fn test_sign_out_removes_session() {
        let dir = TempDir::new().unwrap();
        let session = session_in(&dir);

        session
            .sign_in(Provider::Apple, "tok".to_string(), None, None)
            .unwrap();
        session.sign_out().unwrap();

        assert!(!session.is_signed_in());
        assert!(matches!(session.sign_out(), Err(AuthError::NotSignedIn)));
    }

    #[test]
    fn test_token_is_read_fresh_per_request() {
        let dir = TempDir::new().unwrap();
        let session = session_in(&dir);

        session
            .sign_in(Provider::Microsoft, "old-token".to_string(), None, None)
            .unwrap();
        assert_eq!(session.token().unwrap(), "old-token");

        // Another process refreshes the token behind our back.
        session
            .sign_in(Provider::Microsoft, "new-token".to_string(), None, None)
            .unwrap();
        assert_eq!(session.token().unwrap(), "new-token");
    }

    #[test]
    fn test_corrupt_session_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.toml");
        std::fs::write(&path, "not really toml [").unwrap();

        let session = AuthSession::with_path(path);
        assert!(matches!(session.token(), Err(AuthError::Parse(_))));
    }

    #[test]
    fn test_provider_parsing() {
        assert_eq!("google".parse::<Provider>().unwrap(), Provider::Google);
        assert_eq!("Apple".parse::<Provider>().unwrap(), Provider::Apple);
        assert!("github".parse::<Provider>().is_err());
    }
}
