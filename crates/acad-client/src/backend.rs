//! The seam between the reconciler and the transport.
//!
//! [`AcadClient`] is the production implementation; tests substitute an
//! in-memory backend that records every call.

use std::future::Future;

use acad_core::{AssignmentPatch, Course, InstructorCourseAssignment, NewAssignment};

use crate::{AcadClient, ApiError};

/// Request/response contract of the backend resources the reconciler consumes.
pub trait CourseBackend: Send + Sync {
    /// `GET /courses`
    fn list_courses(&self) -> impl Future<Output = Result<Vec<Course>, ApiError>> + Send;

    /// `GET /instructor-courses`
    fn list_instructor_courses(
        &self,
    ) -> impl Future<Output = Result<Vec<InstructorCourseAssignment>, ApiError>> + Send;

    /// `POST /instructor-courses`
    fn create_instructor_course(
        &self,
        body: NewAssignment,
    ) -> impl Future<Output = Result<InstructorCourseAssignment, ApiError>> + Send;

    /// `PATCH /instructor-courses/{id}`
    fn update_instructor_course(
        &self,
        id: i64,
        body: AssignmentPatch,
    ) -> impl Future<Output = Result<InstructorCourseAssignment, ApiError>> + Send;

    /// `DELETE /instructor-courses/{id}`
    fn delete_instructor_course(&self, id: i64)
    -> impl Future<Output = Result<(), ApiError>> + Send;
}

impl CourseBackend for AcadClient {
    async fn list_courses(&self) -> Result<Vec<Course>, ApiError> {
        Self::list_courses(self).await
    }

    async fn list_instructor_courses(&self) -> Result<Vec<InstructorCourseAssignment>, ApiError> {
        Self::list_instructor_courses(self).await
    }

    async fn create_instructor_course(
        &self,
        body: NewAssignment,
    ) -> Result<InstructorCourseAssignment, ApiError> {
        Self::create_instructor_course(self, body).await
    }

    async fn update_instructor_course(
        &self,
        id: i64,
        body: AssignmentPatch,
    ) -> Result<InstructorCourseAssignment, ApiError> {
        Self::update_instructor_course(self, id, body).await
    }

    async fn delete_instructor_course(&self, id: i64) -> Result<(), ApiError> {
        Self::delete_instructor_course(self, id).await
    }
}
