//! In-memory backend that behaves like the dashboard API and records every
//! call, so tests can assert what did (and did not) go over the wire.

#![allow(dead_code)]

use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use acad_client::{ApiError, CourseBackend};
use acad_core::{AssignmentPatch, Course, InstructorCourseAssignment, NewAssignment};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    ListCourses,
    ListInstructorCourses,
    Create(NewAssignment),
    Update(i64, AssignmentPatch),
    Delete(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallKind {
    ListCourses,
    ListInstructorCourses,
    Create,
    Update,
    Delete,
}

impl Call {
    const fn kind(self) -> CallKind {
        match self {
            Self::ListCourses => CallKind::ListCourses,
            Self::ListInstructorCourses => CallKind::ListInstructorCourses,
            Self::Create(_) => CallKind::Create,
            Self::Update(..) => CallKind::Update,
            Self::Delete(_) => CallKind::Delete,
        }
    }
}

#[derive(Default)]
struct State {
    courses: Vec<Course>,
    records: Vec<InstructorCourseAssignment>,
    next_id: i64,
    calls: Vec<Call>,
    failures: Vec<(CallKind, ApiError)>,
    delays: Vec<(CallKind, Duration)>,
}

#[derive(Default)]
pub struct FakeBackend {
    state: Mutex<State>,
}

pub fn ts() -> DateTime<Utc> {
    DateTime::from_timestamp(1_704_067_200, 0).expect("valid timestamp")
}

pub fn course(id: i64, name: &str, sks: i64) -> Course {
    Course {
        course_id: id,
        course_name: name.to_string(),
        sks,
        created_at: ts(),
    }
}

pub fn record(id: i64, instructor_id: i64, course_id: i64) -> InstructorCourseAssignment {
    InstructorCourseAssignment {
        instructor_course_id: id,
        instructor_id,
        course_id,
        created_at: ts(),
        assigned_date: None,
        course: None,
        attached_name: None,
    }
}

/// Catalog used throughout: `[{1, "Algorithms"}, {2, "Databases"}]`.
pub fn two_course_catalog() -> Vec<Course> {
    vec![course(1, "Algorithms", 3), course(2, "Databases", 4)]
}

impl FakeBackend {
    pub fn new(courses: Vec<Course>, records: Vec<InstructorCourseAssignment>) -> Self {
        let next_id = records
            .iter()
            .map(|r| r.instructor_course_id)
            .max()
            .unwrap_or(0)
            + 1;
        Self {
            state: Mutex::new(State {
                courses,
                records,
                next_id,
                ..State::default()
            }),
        }
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().expect("fake backend lock")
    }

    /// Make the next call of `kind` fail with `error`.
    pub fn fail_next(&self, kind: CallKind, error: ApiError) {
        self.state().failures.push((kind, error));
    }

    /// Make the next call of `kind` take `delay` before it touches state.
    pub fn delay_next(&self, kind: CallKind, delay: Duration) {
        self.state().delays.push((kind, delay));
    }

    async fn pause(&self, kind: CallKind) {
        let delay = {
            let mut state = self.state();
            let pos = state.delays.iter().position(|(k, _)| *k == kind);
            pos.map(|pos| state.delays.remove(pos).1)
        };
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state().calls.clone()
    }

    pub fn count(&self, kind: CallKind) -> usize {
        self.state().calls.iter().filter(|c| c.kind() == kind).count()
    }

    pub fn mutation_count(&self) -> usize {
        self.state()
            .calls
            .iter()
            .filter(|c| matches!(c.kind(), CallKind::Create | CallKind::Update | CallKind::Delete))
            .count()
    }

    pub fn records(&self) -> Vec<InstructorCourseAssignment> {
        self.state().records.clone()
    }

    /// Change server state behind the client's back.
    pub fn insert_record(&self, record: InstructorCourseAssignment) {
        let mut state = self.state();
        state.next_id = state.next_id.max(record.instructor_course_id + 1);
        state.records.push(record);
    }

    pub fn remove_record(&self, id: i64) {
        self.state().records.retain(|r| r.instructor_course_id != id);
    }

    fn begin(&self, call: Call) -> Result<MutexGuard<'_, State>, ApiError> {
        let mut state = self.state();
        state.calls.push(call);
        let kind = call.kind();
        if let Some(pos) = state.failures.iter().position(|(k, _)| *k == kind) {
            let (_, error) = state.failures.remove(pos);
            return Err(error);
        }
        Ok(state)
    }
}

fn conflict() -> ApiError {
    ApiError::Conflict {
        status: 409,
        message: "course already assigned to instructor".to_string(),
    }
}

fn missing(id: i64) -> ApiError {
    ApiError::NotFound {
        message: format!("instructor course {id} not found"),
    }
}

impl CourseBackend for FakeBackend {
    async fn list_courses(&self) -> Result<Vec<Course>, ApiError> {
        self.pause(CallKind::ListCourses).await;
        let state = self.begin(Call::ListCourses)?;
        Ok(state.courses.clone())
    }

    async fn list_instructor_courses(&self) -> Result<Vec<InstructorCourseAssignment>, ApiError> {
        self.pause(CallKind::ListInstructorCourses).await;
        let state = self.begin(Call::ListInstructorCourses)?;
        Ok(state.records.clone())
    }

    async fn create_instructor_course(
        &self,
        body: NewAssignment,
    ) -> Result<InstructorCourseAssignment, ApiError> {
        // Yield once so concurrent submissions overlap.
        tokio::task::yield_now().await;
        self.pause(CallKind::Create).await;
        let mut state = self.begin(Call::Create(body))?;
        if state
            .records
            .iter()
            .any(|r| r.instructor_id == body.instructor_id && r.course_id == body.course_id)
        {
            return Err(conflict());
        }
        let created = InstructorCourseAssignment {
            assigned_date: Some(ts()),
            ..record(state.next_id, body.instructor_id, body.course_id)
        };
        state.next_id += 1;
        state.records.push(created.clone());
        Ok(created)
    }

    async fn update_instructor_course(
        &self,
        id: i64,
        body: AssignmentPatch,
    ) -> Result<InstructorCourseAssignment, ApiError> {
        tokio::task::yield_now().await;
        let mut state = self.begin(Call::Update(id, body))?;
        let Some(pos) = state.records.iter().position(|r| r.instructor_course_id == id) else {
            return Err(missing(id));
        };
        let instructor_id = state.records[pos].instructor_id;
        if state.records.iter().any(|r| {
            r.instructor_course_id != id
                && r.instructor_id == instructor_id
                && r.course_id == body.course_id
        }) {
            return Err(conflict());
        }
        state.records[pos].course_id = body.course_id;
        Ok(state.records[pos].clone())
    }

    async fn delete_instructor_course(&self, id: i64) -> Result<(), ApiError> {
        tokio::task::yield_now().await;
        let mut state = self.begin(Call::Delete(id))?;
        let before = state.records.len();
        state.records.retain(|r| r.instructor_course_id != id);
        if state.records.len() == before {
            return Err(missing(id));
        }
        Ok(())
    }
}
