use anyhow::Context;
use serde::Serialize;

use acad_core::EnrichedAssignment;

use crate::bootstrap::Reconciler;
use crate::cli::{AssignmentCommands, GlobalFlags};
use crate::output::output;

/// Summary printed by `acad assignments list` in json/raw mode.
#[derive(Debug, Serialize)]
struct AssignmentView {
    instructor_id: i64,
    teaching_load_sks: i64,
    assignments: Vec<EnrichedAssignment>,
}

/// Handle `acad assignments`.
///
/// Every subcommand loads the instructor's view first so client-side
/// preconditions (duplicate course, unknown assignment id) are checked
/// against current server state.
pub async fn handle(
    action: &AssignmentCommands,
    reconciler: &Reconciler,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AssignmentCommands::List { instructor } => {
            let assignments = load(reconciler, *instructor).await?;
            if flags.format == crate::cli::OutputFormat::Table {
                return output(&assignments, flags.format);
            }
            let view = AssignmentView {
                instructor_id: *instructor,
                teaching_load_sks: reconciler.teaching_load(),
                assignments,
            };
            output(&view, flags.format)
        }
        AssignmentCommands::Available { instructor } => {
            load(reconciler, *instructor).await?;
            output(&reconciler.available(), flags.format)
        }
        AssignmentCommands::Assign { instructor, course } => {
            load(reconciler, *instructor).await?;
            let created = reconciler.assign(*instructor, *course).await?;
            note(
                flags,
                &format!(
                    "assigned {} to instructor {instructor} (assignment {})",
                    created.course_name,
                    created.id()
                ),
            );
            output(&created, flags.format)
        }
        AssignmentCommands::Reassign {
            instructor,
            assignment,
            course,
        } => {
            load(reconciler, *instructor).await?;
            let moved = reconciler.reassign(*assignment, *course).await?;
            note(
                flags,
                &format!("assignment {assignment} now points at {}", moved.course_name),
            );
            output(&moved, flags.format)
        }
        AssignmentCommands::Unassign {
            instructor,
            assignment,
        } => {
            let assignments = load(reconciler, *instructor).await?;
            ensure_listed(&assignments, *instructor, *assignment)?;
            reconciler.unassign(*assignment).await?;
            note(flags, &format!("removed assignment {assignment}"));
            output(&reconciler.assignments(), flags.format)
        }
    }
}

async fn load(reconciler: &Reconciler, instructor_id: i64) -> anyhow::Result<Vec<EnrichedAssignment>> {
    reconciler
        .load_for(instructor_id)
        .await
        .with_context(|| format!("failed to load assignments for instructor {instructor_id}"))
}

/// The delete endpoint addresses records by id alone, so an id belonging to
/// another instructor would be removed without this check.
fn ensure_listed(
    assignments: &[EnrichedAssignment],
    instructor_id: i64,
    assignment_id: i64,
) -> anyhow::Result<()> {
    if assignments.iter().any(|a| a.id() == assignment_id) {
        return Ok(());
    }
    anyhow::bail!("assignment {assignment_id} is not one of instructor {instructor_id}'s assignments")
}

fn note(flags: &GlobalFlags, message: &str) {
    if !flags.quiet {
        eprintln!("{message}");
    }
}
