//! Course catalog access.

use std::sync::Arc;

use acad_client::CourseBackend;
use acad_core::Course;

use crate::error::{Operation, SyncError};

/// Loads the full course catalog. No caching, no retry.
#[derive(Debug)]
pub struct CatalogLoader<B> {
    backend: Arc<B>,
}

impl<B> Clone for CatalogLoader<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
        }
    }
}

impl<B: CourseBackend> CatalogLoader<B> {
    #[must_use]
    pub const fn new(backend: Arc<B>) -> Self {
        Self { backend }
    }

    /// Fetch every course, fully materialized.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Transport`] (or [`SyncError::Auth`]) when the
    /// backend call fails.
    pub async fn list_courses(&self) -> Result<Vec<Course>, SyncError> {
        let courses = self
            .backend
            .list_courses()
            .await
            .map_err(|e| SyncError::from_api(Operation::ListCourses, None, e))?;
        tracing::debug!(count = courses.len(), "course catalog loaded");
        Ok(courses)
    }
}
