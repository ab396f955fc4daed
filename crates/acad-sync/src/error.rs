//! Reconciliation error taxonomy.
//!
//! Nothing here is retried. Every variant names the operation and, where one
//! exists, the target id so a front end can render a message without more
//! context.

use std::fmt;

use acad_client::ApiError;
use acad_core::CoreError;
use thiserror::Error;

/// The reconciler operation an error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ListCourses,
    LoadFor,
    Assign,
    Reassign,
    Unassign,
}

impl Operation {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ListCourses => "list_courses",
            Self::LoadFor => "load_for",
            Self::Assign => "assign",
            Self::Reassign => "reassign",
            Self::Unassign => "unassign",
        }
    }

    /// What a `target` id refers to for this operation.
    #[must_use]
    pub const fn target_entity(self) -> &'static str {
        match self {
            Self::ListCourses | Self::Assign => "course",
            Self::LoadFor => "instructor",
            Self::Reassign | Self::Unassign => "instructor course",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum SyncError {
    /// Bad local input. Never reaches the network.
    #[error("{op}: {reason}")]
    Validation { op: Operation, reason: String },

    /// Client-side uniqueness pre-check failed. Never reaches the network.
    #[error("{op}: course {course_id} is already assigned to instructor {instructor_id}")]
    DuplicateAssignment {
        op: Operation,
        instructor_id: i64,
        course_id: i64,
    },

    /// The target record is gone, or was never in the loaded view.
    #[error("{op}: {entity} {id} not found")]
    NotFound {
        op: Operation,
        entity: &'static str,
        id: i64,
    },

    /// The backend rejected a write as a uniqueness violation.
    #[error("{op}: conflict on {target}: {message}")]
    Conflict {
        op: Operation,
        target: i64,
        message: String,
    },

    /// The credential was rejected (401/403).
    #[error("{op}: credential rejected ({status})")]
    Auth { op: Operation, status: u16 },

    /// Network failure or an unexpected status/body.
    #[error("{op}: request failed: {source}")]
    Transport {
        op: Operation,
        target: Option<i64>,
        #[source]
        source: ApiError,
    },

    /// Another mutation on this view has not finished yet.
    #[error("{op}: another assignment change is still in flight")]
    InFlight { op: Operation },
}

impl SyncError {
    /// Classify a backend error for `op` against `target`.
    #[must_use]
    pub fn from_api(op: Operation, target: Option<i64>, error: ApiError) -> Self {
        match (error, target) {
            (ApiError::NotFound { .. }, Some(id)) => Self::NotFound {
                op,
                entity: op.target_entity(),
                id,
            },
            (ApiError::Conflict { message, .. }, Some(target)) => Self::Conflict {
                op,
                target,
                message,
            },
            (ApiError::Unauthorized { status }, _) => Self::Auth { op, status },
            (source, target) => Self::Transport { op, target, source },
        }
    }

    pub(crate) fn invalid_id(op: Operation, error: &CoreError) -> Self {
        Self::Validation {
            op,
            reason: error.to_string(),
        }
    }

    #[must_use]
    pub const fn operation(&self) -> Operation {
        match self {
            Self::Validation { op, .. }
            | Self::DuplicateAssignment { op, .. }
            | Self::NotFound { op, .. }
            | Self::Conflict { op, .. }
            | Self::Auth { op, .. }
            | Self::Transport { op, .. }
            | Self::InFlight { op } => *op,
        }
    }

    /// Whether the error was raised locally, before any request was sent.
    #[must_use]
    pub const fn is_local(&self) -> bool {
        matches!(
            self,
            Self::Validation { .. } | Self::DuplicateAssignment { .. } | Self::InFlight { .. }
        )
    }
}

/// A failed `assign`/`reassign`/`unassign`.
///
/// `error` is what the caller should report. `refresh` holds the failure of
/// the follow-up reload, if that failed too; it never replaces `error`.
#[derive(Debug, Error)]
#[error("{error}{}", .refresh.as_ref().map(|r| format!(" (view refresh also failed: {r})")).unwrap_or_default())]
pub struct MutationFailure {
    #[source]
    pub error: SyncError,
    pub refresh: Option<SyncError>,
    /// The backend accepted the mutation; only the reload afterwards failed.
    pub committed: bool,
}

impl MutationFailure {
    #[must_use]
    pub const fn rejected(error: SyncError, refresh: Option<SyncError>) -> Self {
        Self {
            error,
            refresh,
            committed: false,
        }
    }

    #[must_use]
    pub const fn reload_failed(error: SyncError) -> Self {
        Self {
            error,
            refresh: None,
            committed: true,
        }
    }
}

impl From<SyncError> for MutationFailure {
    fn from(error: SyncError) -> Self {
        Self::rejected(error, None)
    }
}
