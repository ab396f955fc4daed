use crate::bootstrap::Reconciler;
use crate::cli::{Commands, GlobalFlags};

pub mod assignments;
pub mod courses;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    reconciler: &Reconciler,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Courses { search } => courses::handle(search.as_deref(), reconciler, flags).await,
        Commands::Assignments { action } => assignments::handle(&action, reconciler, flags).await,
    }
}
