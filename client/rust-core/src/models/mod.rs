use serde::{Deserialize, Serialize};

pub mod content;
pub mod inputs;
pub mod progress;
pub mod user;

pub use content::{BlockKind, ContentBlock, LessonContent, QuizOption, TestCase};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// Programming languages a lesson can teach. Courses carry a free-form
/// language tag; lessons are restricted to this set because the validation
/// flow needs to know how to check them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CourseLanguage {
    Python,
    Javascript,
    Typescript,
    Html,
    Css,
}

impl CourseLanguage {
    pub fn as_str(&self) -> &'static str {
        match self {
            CourseLanguage::Python => "python",
            CourseLanguage::Javascript => "javascript",
            CourseLanguage::Typescript => "typescript",
            CourseLanguage::Html => "html",
            CourseLanguage::Css => "css",
        }
    }

    /// Markup languages are validated by containment, not by running code.
    pub fn is_markup(&self) -> bool {
        matches!(self, CourseLanguage::Html | CourseLanguage::Css)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LessonKind {
    Theory,
    Exercise,
    Quiz,
    Project,
}

/// Top-level learning unit. The `modules` ordering is significant: it is the
/// course table-of-contents order.
///
/// Serde accepts both the backend's snake_case column names and the legacy
/// camelCase aliases, normalizing every remote spelling into this one shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub language: String,
    #[serde(default)]
    pub modules: Vec<Module>,
    pub color: String,
    #[serde(default, alias = "orderIndex")]
    pub order_index: i32,
    #[serde(default, alias = "isPublished")]
    pub is_published: bool,
    #[serde(default, alias = "estimatedHours", skip_serializing_if = "Option::is_none")]
    pub estimated_hours: Option<i32>,
    #[serde(default, alias = "iconUrl", skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

impl Course {
    /// Modules in display order (ascending `order_index`).
    pub fn modules_in_order(&self) -> Vec<&Module> {
        let mut modules: Vec<&Module> = self.modules.iter().collect();
        modules.sort_by_key(|m| m.order_index);
        modules
    }

    pub fn find_lesson(&self, lesson_id: &str) -> Option<&Lesson> {
        self.modules
            .iter()
            .flat_map(|module| module.lessons.iter())
            .find(|lesson| lesson.id == lesson_id)
    }

    /// The lesson that follows `lesson_id` in table-of-contents order, across
    /// module boundaries. `None` if `lesson_id` is last or unknown.
    pub fn next_lesson(&self, lesson_id: &str) -> Option<&Lesson> {
        let mut found = false;
        for module in self.modules_in_order() {
            for lesson in module.lessons_in_order() {
                if found {
                    return Some(lesson);
                }
                if lesson.id == lesson_id {
                    found = true;
                }
            }
        }
        None
    }
}

/// Named grouping of lessons within a course. The course back-reference is
/// by convention, not ownership.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Module {
    pub id: String,
    #[serde(default, alias = "courseId")]
    pub course_id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub lessons: Vec<Lesson>,
    #[serde(default, alias = "orderIndex")]
    pub order_index: i32,
    #[serde(default, alias = "iconEmoji", skip_serializing_if = "Option::is_none")]
    pub icon_emoji: Option<String>,
}

impl Module {
    /// Lessons in display order (ascending `order_index`).
    pub fn lessons_in_order(&self) -> Vec<&Lesson> {
        let mut lessons: Vec<&Lesson> = self.lessons.iter().collect();
        lessons.sort_by_key(|l| l.order_index);
        lessons
    }
}

/// Single learning unit. The content payload is a tagged union, so the kind
/// of a lesson is structurally whatever its content says it is; the separate
/// `lesson_type` column the backend stores is kept for wire fidelity and
/// cross-checked with `tag_agrees`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Lesson {
    pub id: String,
    #[serde(default, alias = "moduleId")]
    pub module_id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(alias = "lessonType")]
    pub lesson_type: LessonKind,
    pub content: LessonContent,
    pub language: CourseLanguage,
    #[serde(default, alias = "xpReward")]
    pub xp_reward: u32,
    #[serde(default, alias = "orderIndex")]
    pub order_index: i32,
    #[serde(default, alias = "isLocked")]
    pub is_locked: bool,
    #[serde(default, alias = "estimatedMinutes", skip_serializing_if = "Option::is_none")]
    pub estimated_minutes: Option<i32>,
}

impl Lesson {
    /// The lesson kind as determined by the content payload itself.
    pub fn kind(&self) -> LessonKind {
        self.content.kind()
    }

    /// True iff the stored `lesson_type` column agrees with the content tag.
    pub fn tag_agrees(&self) -> bool {
        self.lesson_type == self.content.kind()
    }
}

/// One hit from the `search_lessons` operation. The backend speaks camelCase
/// here (`courseName`, `moduleName`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResult {
    #[serde(rename = "type")]
    pub result_type: SearchResultType,
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, rename = "courseName", skip_serializing_if = "Option::is_none")]
    pub course_name: Option<String>,
    #[serde(default, rename = "moduleName", skip_serializing_if = "Option::is_none")]
    pub module_name: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SearchResultType {
    Course,
    Lesson,
}
