use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::course::EmbeddedCourse;

/// A many-to-many link between an instructor and a course.
///
/// Identified by its own `instructor_course_id`; the `(instructor_id, course_id)`
/// pair is mutable through a reassign and is never used as a key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InstructorCourseAssignment {
    pub instructor_course_id: i64,
    pub instructor_id: i64,
    pub course_id: i64,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_date: Option<DateTime<Utc>>,
    /// Course object embedded by backends that join on the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course: Option<EmbeddedCourse>,
    /// Display name already attached upstream.
    #[serde(
        default,
        rename = "courseName",
        skip_serializing_if = "Option::is_none"
    )]
    pub attached_name: Option<String>,
}

/// A join record with its resolved, human-readable course name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnrichedAssignment {
    #[serde(flatten)]
    pub assignment: InstructorCourseAssignment,
    pub course_name: String,
}

impl EnrichedAssignment {
    #[must_use]
    pub const fn id(&self) -> i64 {
        self.assignment.instructor_course_id
    }

    #[must_use]
    pub const fn instructor_id(&self) -> i64 {
        self.assignment.instructor_id
    }

    #[must_use]
    pub const fn course_id(&self) -> i64 {
        self.assignment.course_id
    }
}

/// Body of `POST /instructor-courses`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewAssignment {
    pub instructor_id: i64,
    pub course_id: i64,
}

/// Body of `PATCH /instructor-courses/{id}`. Only the course may change.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssignmentPatch {
    pub course_id: i64,
}
