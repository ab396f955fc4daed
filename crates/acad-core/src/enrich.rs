//! Display enrichment and derived views over the catalog.
//!
//! Course names resolve through an ordered chain so the same logical record
//! renders identically regardless of which response shape the backend chose:
//!
//! 1. a display name already attached to the record (`courseName`)
//! 2. an embedded `course` object
//! 3. a catalog lookup by `course_id`
//! 4. the synthetic label `"Course #<id>"`

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use crate::entities::{Course, EnrichedAssignment, InstructorCourseAssignment};

/// Catalog keyed by `course_id`, built once per enrichment pass.
#[derive(Debug, Clone, Default)]
pub struct CatalogIndex<'a> {
    by_id: HashMap<i64, &'a Course>,
}

impl<'a> CatalogIndex<'a> {
    #[must_use]
    pub fn new(catalog: &'a [Course]) -> Self {
        Self {
            by_id: catalog.iter().map(|c| (c.course_id, c)).collect(),
        }
    }

    #[must_use]
    pub fn get(&self, course_id: i64) -> Option<&'a Course> {
        self.by_id.get(&course_id).copied()
    }

    #[must_use]
    pub fn contains(&self, course_id: i64) -> bool {
        self.by_id.contains_key(&course_id)
    }
}

type NameResolver = fn(&InstructorCourseAssignment, &CatalogIndex<'_>) -> Option<String>;

/// Resolution order. Earlier entries win.
const NAME_RESOLVERS: [NameResolver; 3] = [attached_name, embedded_name, catalog_name];

fn non_blank(name: &str) -> Option<String> {
    let trimmed = name.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn attached_name(record: &InstructorCourseAssignment, _: &CatalogIndex<'_>) -> Option<String> {
    record.attached_name.as_deref().and_then(non_blank)
}

fn embedded_name(record: &InstructorCourseAssignment, _: &CatalogIndex<'_>) -> Option<String> {
    record
        .course
        .as_ref()
        .and_then(|course| course.course_name.as_deref())
        .and_then(non_blank)
}

fn catalog_name(record: &InstructorCourseAssignment, catalog: &CatalogIndex<'_>) -> Option<String> {
    catalog
        .get(record.course_id)
        .and_then(|course| non_blank(&course.course_name))
}

/// Label used when no resolver produces a name (stale or deleted course).
#[must_use]
pub fn fallback_label(course_id: i64) -> String {
    format!("Course #{course_id}")
}

/// Resolve the display name of a record against a prepared index.
#[must_use]
pub fn resolve_with_index(record: &InstructorCourseAssignment, catalog: &CatalogIndex<'_>) -> String {
    NAME_RESOLVERS
        .iter()
        .find_map(|resolve| resolve(record, catalog))
        .unwrap_or_else(|| fallback_label(record.course_id))
}

/// Resolve the display name of a record against the catalog.
#[must_use]
pub fn resolve_course_name(record: &InstructorCourseAssignment, catalog: &[Course]) -> String {
    resolve_with_index(record, &CatalogIndex::new(catalog))
}

/// Attach a resolved course name to each record.
#[must_use]
pub fn enrich(records: Vec<InstructorCourseAssignment>, catalog: &[Course]) -> Vec<EnrichedAssignment> {
    let index = CatalogIndex::new(catalog);
    records
        .into_iter()
        .map(|assignment| {
            let course_name = resolve_with_index(&assignment, &index);
            EnrichedAssignment {
                assignment,
                course_name,
            }
        })
        .collect()
}

/// Catalog entries not yet assigned, for the assignment picker.
///
/// Catalog order is preserved. Never cached: callers recompute from current state.
#[must_use]
pub fn available_courses(catalog: &[Course], assignments: &[EnrichedAssignment]) -> Vec<Course> {
    let taken: HashSet<i64> = assignments.iter().map(EnrichedAssignment::course_id).collect();
    catalog
        .iter()
        .filter(|course| !taken.contains(&course.course_id))
        .cloned()
        .collect()
}

/// Total credit units across an instructor's assignments.
///
/// Catalog `sks` wins over an embedded value; unresolved courses count as zero.
#[must_use]
pub fn teaching_load(assignments: &[EnrichedAssignment], catalog: &[Course]) -> i64 {
    let index = CatalogIndex::new(catalog);
    assignments
        .iter()
        .map(|a| {
            index.get(a.course_id()).map_or_else(
                || {
                    a.assignment
                        .course
                        .as_ref()
                        .and_then(|c| c.sks)
                        .unwrap_or(0)
                },
                |course| course.sks,
            )
        })
        .sum()
}

/// Ordering of a published assignment view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewOrder {
    /// Case-insensitive course name, ties broken by assignment id.
    #[default]
    ByCourseName,
    /// Server-assigned `instructor_course_id`.
    ById,
}

/// Sort a view in place.
pub fn sort_enriched(assignments: &mut [EnrichedAssignment], order: ViewOrder) {
    match order {
        ViewOrder::ById => assignments.sort_by_key(EnrichedAssignment::id),
        ViewOrder::ByCourseName => assignments.sort_by(|a, b| {
            match a.course_name.to_lowercase().cmp(&b.course_name.to_lowercase()) {
                Ordering::Equal => a.id().cmp(&b.id()),
                other => other,
            }
        }),
    }
}
