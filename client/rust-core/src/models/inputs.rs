//! Payload types for the create/update operations. Serialization here *is*
//! the adapter to the backend's column names: each entity has exactly one
//! mapping covering every field once, instead of ad hoc per-call key lookups.

use super::content::LessonContent;
use super::{CourseLanguage, Difficulty};
use serde::Serialize;
use validator::{Validate, ValidationError, ValidationErrors};

#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreateCourse {
    #[validate(length(min = 1, message = "Course title must not be empty"))]
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    #[validate(length(min = 1, message = "Course language must not be empty"))]
    pub language: String,
    #[validate(length(min = 1, message = "Course color must not be empty"))]
    pub color: String,
    pub order_index: i32,
    pub is_published: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_hours: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

/// Partial update for a course; only the set fields reach the backend.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CourseChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_index: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_published: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_hours: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreateModule {
    #[validate(length(min = 1, message = "Module must reference a course"))]
    pub course_id: String,
    #[validate(length(min = 1, message = "Module title must not be empty"))]
    pub title: String,
    pub description: String,
    pub order_index: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_emoji: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ModuleChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_index: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_emoji: Option<String>,
}

#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreateLesson {
    #[validate(length(min = 1, message = "Lesson must reference a module"))]
    pub module_id: String,
    #[validate(length(min = 1, message = "Lesson title must not be empty"))]
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub content: LessonContent,
    pub language: CourseLanguage,
    pub xp_reward: u32,
    pub order_index: i32,
    pub is_locked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_minutes: Option<i32>,
}

impl CreateLesson {
    /// Field-level checks plus the quiz invariant the derive cannot see:
    /// exactly one option marked correct.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        <Self as Validate>::validate(self)?;

        if !self.content.well_formed() {
            let mut errors = ValidationErrors::new();
            let mut error = ValidationError::new("quiz_options");
            error.message = Some("A quiz must mark exactly one option as correct".into());
            errors.add("content".into(), error);
            return Err(errors);
        }

        Ok(())
    }

    /// Full wire payload. The backend stores a `lesson_type` column next to
    /// the content; it is derived from the content tag here so the two can
    /// never disagree.
    pub fn remote_payload(&self) -> serde_json::Value {
        let mut payload =
            serde_json::to_value(self).expect("lesson payload serialization is infallible");
        payload["lesson_type"] = serde_json::to_value(self.content.kind())
            .expect("lesson kind serialization is infallible");
        payload
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct LessonChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<LessonContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<CourseLanguage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xp_reward: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_index: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_locked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_minutes: Option<i32>,
}

impl LessonChanges {
    /// Wire payload; when the content changes, the stored `lesson_type`
    /// column follows its tag.
    pub fn remote_payload(&self) -> serde_json::Value {
        let mut payload =
            serde_json::to_value(self).expect("lesson changes serialization is infallible");
        if let Some(content) = &self.content {
            payload["lesson_type"] = serde_json::to_value(content.kind())
                .expect("lesson kind serialization is infallible");
        }
        payload
    }
}
