use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A course from the catalog. Read-only from the assignment view's perspective.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Course {
    pub course_id: i64,
    pub course_name: String,
    /// Credit units (satuan kredit semester).
    pub sks: i64,
    pub created_at: DateTime<Utc>,
}

/// A partial course object some backend responses embed inside a join record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmbeddedCourse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sks: Option<i64>,
}
