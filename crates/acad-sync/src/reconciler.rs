//! Instructor-scoped view of the instructor-course join resource.
//!
//! The reconciler holds one instructor's enriched assignments plus the catalog
//! they were enriched against. Every mutation is followed by a full reload
//! from the backend; the returned records are never spliced into the view.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use acad_client::CourseBackend;
use acad_core::errors::require_id;
use acad_core::{
    AssignmentPatch, Course, EnrichedAssignment, InstructorCourseAssignment, NewAssignment,
    ViewOrder, available_courses, enrich, resolve_course_name, sort_enriched, teaching_load,
};

use crate::catalog::CatalogLoader;
use crate::error::{MutationFailure, Operation, SyncError};
use crate::guard::InFlightGuard;

#[derive(Debug, Clone, Default)]
struct ViewState {
    instructor_id: Option<i64>,
    assignments: Vec<EnrichedAssignment>,
    catalog: Vec<Course>,
}

/// Loads, enriches and mutates one instructor's course assignments.
#[derive(Debug)]
pub struct AssignmentReconciler<B> {
    backend: Arc<B>,
    catalog_loader: CatalogLoader<B>,
    order: ViewOrder,
    view: Mutex<ViewState>,
    in_flight: AtomicBool,
    /// Bumped by every `load_for`; only the newest load may publish.
    generation: AtomicU64,
}

fn validated(op: Operation, field: &'static str, value: i64) -> Result<i64, SyncError> {
    require_id(field, value).map_err(|e| SyncError::invalid_id(op, &e))
}

impl<B> AssignmentReconciler<B> {
    fn view(&self) -> MutexGuard<'_, ViewState> {
        self.view.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Instructor whose assignments are currently loaded.
    #[must_use]
    pub fn instructor_id(&self) -> Option<i64> {
        self.view().instructor_id
    }

    /// Snapshot of the published assignment view.
    #[must_use]
    pub fn assignments(&self) -> Vec<EnrichedAssignment> {
        self.view().assignments.clone()
    }

    /// Snapshot of the catalog the view was enriched against.
    #[must_use]
    pub fn catalog(&self) -> Vec<Course> {
        self.view().catalog.clone()
    }

    /// Courses the loaded instructor does not teach yet, recomputed per call.
    #[must_use]
    pub fn available(&self) -> Vec<Course> {
        let view = self.view();
        available_courses(&view.catalog, &view.assignments)
    }

    /// Total credit units of the loaded view.
    #[must_use]
    pub fn teaching_load(&self) -> i64 {
        let view = self.view();
        teaching_load(&view.assignments, &view.catalog)
    }

    /// Whether a mutation is in flight; front ends disable submit while true.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// The loader `load_for` reads the catalog through.
    #[must_use]
    pub const fn catalog_loader(&self) -> &CatalogLoader<B> {
        &self.catalog_loader
    }

    /// Drop the loaded view entirely.
    pub fn discard(&self) {
        *self.view() = ViewState::default();
    }

    fn loaded_owner(&self, assignment_id: i64) -> Option<i64> {
        self.view()
            .assignments
            .iter()
            .find(|a| a.id() == assignment_id)
            .map(EnrichedAssignment::instructor_id)
    }

    /// Client-side mirror of the server's uniqueness rule. Only checked when
    /// the instructor's view is loaded; `except` skips the record being moved.
    fn ensure_unassigned(
        &self,
        op: Operation,
        instructor_id: i64,
        course_id: i64,
        except: Option<i64>,
    ) -> Result<(), SyncError> {
        let view = self.view();
        if view.instructor_id != Some(instructor_id) {
            tracing::debug!(%op, instructor_id, "instructor not loaded; skipping duplicate pre-check");
            return Ok(());
        }
        let taken = view
            .assignments
            .iter()
            .any(|a| a.course_id() == course_id && Some(a.id()) != except);
        if taken {
            return Err(SyncError::DuplicateAssignment {
                op,
                instructor_id,
                course_id,
            });
        }
        Ok(())
    }
}

impl<B: CourseBackend> AssignmentReconciler<B> {
    #[must_use]
    pub fn new(backend: Arc<B>) -> Self {
        Self {
            catalog_loader: CatalogLoader::new(Arc::clone(&backend)),
            backend,
            order: ViewOrder::default(),
            view: Mutex::new(ViewState::default()),
            in_flight: AtomicBool::new(false),
            generation: AtomicU64::new(0),
        }
    }

    #[must_use]
    pub fn with_order(mut self, order: ViewOrder) -> Self {
        self.order = order;
        self
    }

    /// Load `instructor_id`'s assignments, enriched against a fresh catalog.
    ///
    /// The join collection is fetched unfiltered and narrowed here. Catalog and
    /// assignments load concurrently; the view is replaced only once both have
    /// arrived. Switching instructors clears the previous view first. A load
    /// overtaken by a later `load_for` returns its result without publishing it.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Validation`] for a non-positive id (no request is
    /// sent), otherwise whatever the catalog or join listing fails with.
    pub async fn load_for(&self, instructor_id: i64) -> Result<Vec<EnrichedAssignment>, SyncError> {
        let op = Operation::LoadFor;
        let instructor_id = validated(op, "instructor_id", instructor_id)?;
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;

        {
            let mut view = self.view();
            if view.instructor_id != Some(instructor_id) {
                tracing::debug!(previous = ?view.instructor_id, instructor_id, "switching instructor view");
                *view = ViewState::default();
            }
        }

        let (assignments, catalog) = self.fetch_view(instructor_id).await?;

        let mut view = self.view();
        if self.generation.load(Ordering::Acquire) != generation {
            tracing::debug!(instructor_id, "newer load started meanwhile; not publishing");
            return Ok(assignments);
        }
        *view = ViewState {
            instructor_id: Some(instructor_id),
            assignments: assignments.clone(),
            catalog,
        };
        drop(view);
        Ok(assignments)
    }

    /// Fetch and enrich `instructor_id`'s assignments without touching the view.
    async fn fetch_view(
        &self,
        instructor_id: i64,
    ) -> Result<(Vec<EnrichedAssignment>, Vec<Course>), SyncError> {
        let records = async {
            self.backend
                .list_instructor_courses()
                .await
                .map_err(|e| SyncError::from_api(Operation::LoadFor, None, e))
        };
        let (catalog, records) = tokio::try_join!(self.catalog_loader.list_courses(), records)?;

        let total = records.len();
        let mine: Vec<InstructorCourseAssignment> = records
            .into_iter()
            .filter(|r| r.instructor_id == instructor_id)
            .collect();
        let mut assignments = enrich(mine, &catalog);
        sort_enriched(&mut assignments, self.order);
        tracing::debug!(
            instructor_id,
            total,
            loaded = assignments.len(),
            courses = catalog.len(),
            "assignment view fetched"
        );
        Ok((assignments, catalog))
    }

    /// Reload after a write. The view is only republished while it still
    /// belongs to `instructor_id`; otherwise the fetch still happens but the
    /// newer view is left alone.
    async fn reload_after_write(
        &self,
        instructor_id: i64,
    ) -> Result<Vec<EnrichedAssignment>, SyncError> {
        if self.instructor_id() == Some(instructor_id) {
            return self.load_for(instructor_id).await;
        }
        tracing::debug!(instructor_id, "view moved to another instructor; reloading without publishing");
        self.fetch_view(instructor_id).await.map(|(assignments, _)| assignments)
    }

    /// Assign `course_id` to `instructor_id`, then reload the view.
    ///
    /// # Errors
    ///
    /// Local, no request sent: [`SyncError::Validation`],
    /// [`SyncError::InFlight`], and [`SyncError::DuplicateAssignment`] when the
    /// loaded view already holds the course. Remote: [`SyncError::Conflict`]
    /// when the backend detects the duplicate, or any transport/auth failure,
    /// each followed by one reload attempt reported in
    /// [`MutationFailure::refresh`].
    pub async fn assign(
        &self,
        instructor_id: i64,
        course_id: i64,
    ) -> Result<EnrichedAssignment, MutationFailure> {
        let op = Operation::Assign;
        let instructor_id = validated(op, "instructor_id", instructor_id)?;
        let course_id = validated(op, "course_id", course_id)?;
        let _guard = InFlightGuard::acquire(&self.in_flight, op)?;
        self.ensure_unassigned(op, instructor_id, course_id, None)?;

        let body = NewAssignment {
            instructor_id,
            course_id,
        };
        match self.backend.create_instructor_course(body).await {
            Ok(created) => {
                tracing::info!(
                    instructor_id,
                    course_id,
                    assignment_id = created.instructor_course_id,
                    "course assigned"
                );
                self.settle(op, instructor_id, created).await
            }
            Err(e) => {
                let error = SyncError::from_api(op, Some(course_id), e);
                Err(self.resync_after_failure(op, instructor_id, error).await)
            }
        }
    }

    /// Point a loaded assignment at `new_course_id`, then reload the view.
    ///
    /// The record is addressed by its own id, never by the mutable
    /// instructor/course pair.
    ///
    /// # Errors
    ///
    /// Local, no request sent: [`SyncError::NotFound`] when `assignment_id` is
    /// not in the loaded view, [`SyncError::DuplicateAssignment`] when another
    /// loaded assignment already holds `new_course_id`, plus validation and
    /// in-flight errors. Remote failures as for [`Self::assign`].
    pub async fn reassign(
        &self,
        assignment_id: i64,
        new_course_id: i64,
    ) -> Result<EnrichedAssignment, MutationFailure> {
        let op = Operation::Reassign;
        let assignment_id = validated(op, "assignment_id", assignment_id)?;
        let new_course_id = validated(op, "course_id", new_course_id)?;
        let _guard = InFlightGuard::acquire(&self.in_flight, op)?;

        let instructor_id = self
            .loaded_owner(assignment_id)
            .ok_or(SyncError::NotFound {
                op,
                entity: op.target_entity(),
                id: assignment_id,
            })?;
        self.ensure_unassigned(op, instructor_id, new_course_id, Some(assignment_id))?;

        let patch = AssignmentPatch {
            course_id: new_course_id,
        };
        match self.backend.update_instructor_course(assignment_id, patch).await {
            Ok(updated) => {
                tracing::info!(
                    instructor_id,
                    assignment_id,
                    course_id = new_course_id,
                    "assignment moved to new course"
                );
                self.settle(op, instructor_id, updated).await
            }
            Err(e) => {
                let error = SyncError::from_api(op, Some(assignment_id), e);
                Err(self.resync_after_failure(op, instructor_id, error).await)
            }
        }
    }

    /// Delete an assignment of the loaded instructor, then reload the view.
    ///
    /// The record disappears from the view while the request runs. If the
    /// backend refuses, the view is reloaded rather than trusting that filter;
    /// if the reload fails too, the pre-delete view is put back.
    ///
    /// # Errors
    ///
    /// [`SyncError::Validation`] when no instructor is loaded. A backend
    /// [`SyncError::NotFound`] is reported, not swallowed.
    pub async fn unassign(&self, assignment_id: i64) -> Result<(), MutationFailure> {
        let op = Operation::Unassign;
        let assignment_id = validated(op, "assignment_id", assignment_id)?;
        let instructor_id = self.instructor_id().ok_or_else(|| SyncError::Validation {
            op,
            reason: "no instructor view is loaded".to_string(),
        })?;
        let _guard = InFlightGuard::acquire(&self.in_flight, op)?;

        let before = {
            let mut view = self.view();
            let before = view.assignments.clone();
            view.assignments.retain(|a| a.id() != assignment_id);
            before
        };

        match self.backend.delete_instructor_course(assignment_id).await {
            Ok(()) => {
                tracing::info!(instructor_id, assignment_id, "assignment removed");
                self.reload_after_write(instructor_id).await.map_err(|error| {
                    tracing::warn!(%op, instructor_id, %error, "removal committed but view reload failed");
                    MutationFailure::reload_failed(error)
                })?;
                Ok(())
            }
            Err(e) => {
                let error = SyncError::from_api(op, Some(assignment_id), e);
                let failure = self.resync_after_failure(op, instructor_id, error).await;
                if failure.refresh.is_some() {
                    let mut view = self.view();
                    if view.instructor_id == Some(instructor_id) {
                        view.assignments = before;
                    }
                }
                Err(failure)
            }
        }
    }

    /// Reload after a committed write and hand back the written record as the
    /// reloaded view shows it.
    async fn settle(
        &self,
        op: Operation,
        instructor_id: i64,
        written: InstructorCourseAssignment,
    ) -> Result<EnrichedAssignment, MutationFailure> {
        let written_id = written.instructor_course_id;
        let reloaded = self.reload_after_write(instructor_id).await.map_err(|error| {
            tracing::warn!(%op, instructor_id, %error, "write committed but view reload failed");
            MutationFailure::reload_failed(error)
        })?;

        if let Some(found) = reloaded.into_iter().find(|a| a.id() == written_id) {
            return Ok(found);
        }

        tracing::warn!(%op, instructor_id, assignment_id = written_id, "written record absent from reloaded view");
        let catalog = self.catalog();
        let course_name = resolve_course_name(&written, &catalog);
        Ok(EnrichedAssignment {
            assignment: written,
            course_name,
        })
    }

    /// One reload attempt after a rejected write. The reload's own failure is
    /// attached, never substituted.
    async fn resync_after_failure(
        &self,
        op: Operation,
        instructor_id: i64,
        error: SyncError,
    ) -> MutationFailure {
        tracing::warn!(%op, instructor_id, %error, "assignment change rejected; reloading view");
        let refresh = match self.reload_after_write(instructor_id).await {
            Ok(_) => None,
            Err(refresh) => {
                tracing::warn!(%op, instructor_id, error = %refresh, "view reload after rejected change failed");
                Some(refresh)
            }
        };
        MutationFailure::rejected(error, refresh)
    }
}
