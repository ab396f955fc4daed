//! # acad-client
//!
//! HTTP client for the dashboard backend's course catalog and
//! instructor-course join resource:
//!
//! - `GET /courses`
//! - `GET /instructor-courses` (unfiltered)
//! - `POST /instructor-courses`
//! - `PATCH /instructor-courses/{id}`
//! - `DELETE /instructor-courses/{id}`
//!
//! Every request carries the bearer [`Credential`] handed to the constructor;
//! the client never reads tokens from ambient state.

mod backend;
mod courses;
mod error;
mod http;
mod instructor_courses;

pub use backend::CourseBackend;
pub use error::ApiError;

use std::fmt;
use std::time::Duration;

/// Bearer credential for the backend. `Debug` never prints the token.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    token: String,
}

impl Credential {
    #[must_use]
    pub fn bearer(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    pub(crate) fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential").field("token", &"<redacted>").finish()
    }
}

/// Transport knobs. Defaults match the `[api]` config defaults.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            user_agent: "acad/0.1".to_string(),
        }
    }
}

/// HTTP client bound to one backend and one credential.
#[derive(Debug, Clone)]
pub struct AcadClient {
    http: reqwest::Client,
    base_url: String,
    credential: Credential,
}

impl AcadClient {
    /// Create a client for `base_url` (e.g. `https://host/api`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidBaseUrl`] for a URL without an http(s)
    /// scheme and [`ApiError::Http`] if the underlying client fails to build.
    pub fn new(
        base_url: &str,
        credential: Credential,
        options: &ClientOptions,
    ) -> Result<Self, ApiError> {
        let base_url = base_url.trim().trim_end_matches('/');
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ApiError::InvalidBaseUrl(base_url.to_string()));
        }
        let http = reqwest::Client::builder()
            .user_agent(options.user_agent.clone())
            .timeout(options.timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.to_string(),
            credential,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        self.http
            .request(method, self.url(path))
            .bearer_auth(self.credential.token())
    }
}
