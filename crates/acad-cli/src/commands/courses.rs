use acad_core::Course;

use crate::bootstrap::Reconciler;
use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `acad courses`.
pub async fn handle(
    search: Option<&str>,
    reconciler: &Reconciler,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let courses = reconciler.catalog_loader().list_courses().await?;
    output(&filter_by_name(courses, search), flags.format)
}

fn filter_by_name(mut courses: Vec<Course>, search: Option<&str>) -> Vec<Course> {
    if let Some(needle) = search.map(str::to_lowercase).filter(|s| !s.is_empty()) {
        courses.retain(|course| course.course_name.to_lowercase().contains(&needle));
    }
    courses
}
