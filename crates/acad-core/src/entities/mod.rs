//! Entity structs for the course catalog and the instructor-course join resource.
//!
//! Field names follow the backend's JSON (`snake_case` ids, `created_at`
//! timestamps) so records deserialize without per-field renames.

mod assignment;
mod course;

pub use assignment::{
    AssignmentPatch, EnrichedAssignment, InstructorCourseAssignment, NewAssignment,
};
pub use course::{Course, EmbeddedCourse};
