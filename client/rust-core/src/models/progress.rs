use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProgressStatus {
    NotStarted,
    InProgress,
    Completed,
}

/// Per-user, per-lesson progress record. Created on first attempt, mutated on
/// each submission; once `completed_at` is set the record is final by
/// convention.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProgress {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(alias = "userId")]
    pub user_id: String,
    #[serde(alias = "lessonId")]
    pub lesson_id: String,
    pub status: ProgressStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<i32>,
    #[serde(default = "default_attempts")]
    pub attempts: u32,
    #[serde(default, alias = "completedAt", skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(
        default,
        alias = "timeSpentSeconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub time_spent_seconds: Option<i32>,
}

fn default_attempts() -> u32 {
    1
}

/// Caller-supplied details for a progress submission. Anything left `None`
/// gets the documented default (`attempts` -> 1) or is omitted from the
/// remote payload.
#[derive(Debug, Clone, Default)]
pub struct ProgressUpdate {
    pub score: Option<i32>,
    pub attempts: Option<u32>,
    pub time_spent_seconds: Option<i32>,
}
