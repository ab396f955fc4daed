//! # acad-sync
//!
//! Keeps a human-readable, instructor-scoped view of course assignments in
//! step with the backend.
//!
//! - [`CatalogLoader`] fetches the full course catalog.
//! - [`AssignmentReconciler`] loads one instructor's join records, enriches
//!   them with course names, and runs assign/reassign/unassign. Every write is
//!   followed by a full reload (refetch-after-write); nothing is patched
//!   locally.
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use acad_client::{AcadClient, ClientOptions, Credential};
//! use acad_sync::AssignmentReconciler;
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let client = AcadClient::new(
//!     "https://siakad.example.ac.id/api",
//!     Credential::bearer("token"),
//!     &ClientOptions::default(),
//! )?;
//! let reconciler = AssignmentReconciler::new(Arc::new(client));
//! reconciler.load_for(7).await?;
//! let picker = reconciler.available();
//! if let Some(course) = picker.first() {
//!     reconciler.assign(7, course.course_id).await?;
//! }
//! # Ok(())
//! # }
//! ```

mod catalog;
mod error;
mod guard;
mod reconciler;

pub use catalog::CatalogLoader;
pub use error::{MutationFailure, Operation, SyncError};
pub use reconciler::AssignmentReconciler;
