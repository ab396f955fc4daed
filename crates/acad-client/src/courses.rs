//! Course catalog endpoint.

use acad_core::Course;
use reqwest::Method;

use crate::{AcadClient, error::ApiError, http};

impl AcadClient {
    /// Fetch every course known to the backend.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the backend returns a
    /// non-success status, or the body cannot be parsed.
    pub async fn list_courses(&self) -> Result<Vec<Course>, ApiError> {
        tracing::debug!(base_url = %self.base_url, "GET /courses");
        let resp = http::check_response(self.request(Method::GET, "/courses").send().await?).await?;
        http::decode(resp, "courses").await
    }
}
