//! # acad-core
//!
//! Core types and derivation helpers for the instructor/course assignment view.
//!
//! This crate provides the foundational types shared across all `acad` crates:
//! - Entity structs for courses and instructor-course join records
//! - Request bodies for the join resource
//! - Response envelope tolerance (`[...]` vs `{ "data": [...] }`)
//! - Course-name resolution, enrichment, and the "available courses" complement
//! - Cross-cutting error types

pub mod enrich;
pub mod entities;
pub mod errors;
pub mod payload;

pub use enrich::{
    CatalogIndex, ViewOrder, available_courses, enrich, fallback_label, resolve_course_name,
    sort_enriched, teaching_load,
};
pub use entities::{
    AssignmentPatch, Course, EmbeddedCourse, EnrichedAssignment, InstructorCourseAssignment,
    NewAssignment,
};
pub use errors::CoreError;
pub use payload::Payload;
