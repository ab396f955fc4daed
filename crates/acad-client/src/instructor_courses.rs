//! Instructor-course join resource.

use acad_core::{AssignmentPatch, InstructorCourseAssignment, NewAssignment};
use reqwest::Method;

use crate::{AcadClient, error::ApiError, http};

const RESOURCE: &str = "/instructor-courses";

fn record_path(id: i64) -> String {
    format!("{RESOURCE}/{id}")
}

impl AcadClient {
    /// Fetch the unfiltered join collection. Filtering by instructor is the
    /// caller's job.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, error status, or bad body.
    pub async fn list_instructor_courses(&self) -> Result<Vec<InstructorCourseAssignment>, ApiError> {
        tracing::debug!("GET {RESOURCE}");
        let resp = http::check_response(self.request(Method::GET, RESOURCE).send().await?).await?;
        http::decode(resp, "instructor courses").await
    }

    /// Create a join record.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Conflict`] when the backend rejects a duplicate pair,
    /// otherwise as [`AcadClient::list_instructor_courses`].
    pub async fn create_instructor_course(
        &self,
        body: NewAssignment,
    ) -> Result<InstructorCourseAssignment, ApiError> {
        tracing::debug!(
            instructor_id = body.instructor_id,
            course_id = body.course_id,
            "POST {RESOURCE}"
        );
        let resp = self.request(Method::POST, RESOURCE).json(&body).send().await?;
        let resp = http::check_response(resp).await?;
        http::decode(resp, "created instructor course").await
    }

    /// Point an existing join record at a different course.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if `id` does not exist, otherwise as
    /// [`AcadClient::create_instructor_course`].
    pub async fn update_instructor_course(
        &self,
        id: i64,
        body: AssignmentPatch,
    ) -> Result<InstructorCourseAssignment, ApiError> {
        let path = record_path(id);
        tracing::debug!(course_id = body.course_id, "PATCH {path}");
        let resp = self.request(Method::PATCH, &path).json(&body).send().await?;
        let resp = http::check_response(resp).await?;
        http::decode(resp, "updated instructor course").await
    }

    /// Delete a join record. The response body is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if `id` does not exist.
    pub async fn delete_instructor_course(&self, id: i64) -> Result<(), ApiError> {
        let path = record_path(id);
        tracing::debug!("DELETE {path}");
        http::check_response(self.request(Method::DELETE, &path).send().await?).await?;
        Ok(())
    }
}
