use clap::Subcommand;

/// Instructor-course assignment commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AssignmentCommands {
    /// Show an instructor's assignments with resolved course names.
    List {
        #[arg(long)]
        instructor: i64,
    },
    /// Courses the instructor is not assigned yet.
    Available {
        #[arg(long)]
        instructor: i64,
    },
    /// Assign a course to an instructor.
    Assign {
        #[arg(long)]
        instructor: i64,
        #[arg(long)]
        course: i64,
    },
    /// Move an existing assignment to a different course.
    Reassign {
        #[arg(long)]
        instructor: i64,
        /// `instructor_course_id` of the assignment to move.
        #[arg(long)]
        assignment: i64,
        #[arg(long)]
        course: i64,
    },
    /// Remove an assignment. Refused unless it is listed under `--instructor`.
    Unassign {
        #[arg(long)]
        instructor: i64,
        /// `instructor_course_id` of the assignment to remove.
        #[arg(long)]
        assignment: i64,
    },
}
