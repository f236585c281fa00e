use crate::catalog;
use crate::credentials::CredentialStore;
use crate::error::Result;
use crate::gateway::{ops, CommandGateway};
use crate::models::inputs::{
    CourseChanges, CreateCourse, CreateLesson, CreateModule, LessonChanges, ModuleChanges,
};
use crate::models::{Course, Lesson, Module, SearchResult};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use validator::Validate;

/// Single source of truth for reading and mutating course content. Hides
/// whether data came from the backend or the built-in catalog.
///
/// Failure policy: reads fall back (missing token or remote failure degrade
/// to cached/built-in data, never an error), writes propagate (missing token
/// and remote failures are surfaced to the caller). Every successful
/// mutation clears the whole cache; the next read refetches.
pub struct CourseService {
    gateway: Arc<dyn CommandGateway>,
    credentials: CredentialStore,
    cache: Mutex<HashMap<String, Course>>,
}

impl CourseService {
    pub fn new(gateway: Arc<dyn CommandGateway>, credentials: CredentialStore) -> Self {
        Self {
            gateway,
            credentials,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// All published courses. Serves the cache when it is warm (unless
    /// `force_refresh`), otherwise fetches from the backend and repopulates
    /// it wholesale.
    ///
    /// Concurrent cold-cache callers each issue their own fetch; the last
    /// writer wins. There is no request deduplication.
    pub async fn get_courses(&self, force_refresh: bool) -> Vec<Course> {
        if !force_refresh {
            let cache = self.cache.lock().unwrap();
            if !cache.is_empty() {
                let mut courses: Vec<Course> = cache.values().cloned().collect();
                courses.sort_by(|a, b| {
                    a.order_index
                        .cmp(&b.order_index)
                        .then_with(|| a.id.cmp(&b.id))
                });
                return courses;
            }
        }

        let Some(token) = self.credentials.access_token() else {
            tracing::warn!("No access token, serving built-in catalog");
            return catalog::builtin_courses().to_vec();
        };

        match self.fetch_courses(&token).await {
            Ok(courses) => {
                let mut cache = self.cache.lock().unwrap();
                cache.clear();
                for course in &courses {
                    cache.insert(course.id.clone(), course.clone());
                }
                courses
            }
            Err(err) => {
                // Absorbed: the cache keeps its previous contents and the
                // caller gets the built-in catalog instead of an error.
                tracing::warn!(
                    "Failed to fetch courses ({}), falling back to built-in catalog",
                    err
                );
                catalog::builtin_courses().to_vec()
            }
        }
    }

    async fn fetch_courses(&self, token: &str) -> Result<Vec<Course>> {
        let courses: Vec<Course> = self
            .invoke_decoded(ops::GET_ALL_COURSES, json!({ "accessToken": token }))
            .await?;

        for course in &courses {
            for module in &course.modules {
                for lesson in &module.lessons {
                    if !lesson.tag_agrees() {
                        tracing::warn!(
                            "Lesson {} has lesson_type {:?} but {:?} content",
                            lesson.id,
                            lesson.lesson_type,
                            lesson.kind()
                        );
                    }
                }
            }
        }

        Ok(courses)
    }

    /// One lesson by id. With a session, asks the backend; on failure (or
    /// without a session) searches the cache, then the built-in catalog.
    /// `None` means the lesson exists nowhere - that is a normal result,
    /// not an error.
    pub async fn get_lesson(&self, lesson_id: &str) -> Option<Lesson> {
        if let Some(token) = self.credentials.access_token() {
            let args = json!({ "lessonId": lesson_id, "accessToken": token });
            match self
                .invoke_decoded::<Lesson>(ops::GET_LESSON_BY_ID, args)
                .await
            {
                Ok(lesson) => return Some(lesson),
                Err(err) => {
                    tracing::warn!(
                        "Failed to fetch lesson {} ({}), searching locally",
                        lesson_id,
                        err
                    );
                }
            }
        }

        self.find_lesson_locally(lesson_id)
    }

    fn find_lesson_locally(&self, lesson_id: &str) -> Option<Lesson> {
        // Cache first: it holds fresher data than the built-in catalog
        {
            let cache = self.cache.lock().unwrap();
            for course in cache.values() {
                if let Some(lesson) = course.find_lesson(lesson_id) {
                    return Some(lesson.clone());
                }
            }
        }

        catalog::find_lesson(lesson_id).cloned()
    }

    /// Full-text search over courses and lessons. Requires a session; without
    /// one the result is simply empty, like every other read path.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
        let Some(token) = self.credentials.access_token() else {
            tracing::warn!("No access token for search");
            return Ok(Vec::new());
        };

        self.invoke_decoded(
            ops::SEARCH_LESSONS,
            json!({ "query": query.trim(), "accessToken": token }),
        )
        .await
    }

    pub async fn create_course(&self, input: CreateCourse) -> Result<Course> {
        input.validate()?;
        let token = self.credentials.require_access_token()?;

        let course = self
            .invoke_decoded(
                ops::CREATE_COURSE,
                json!({ "course": input, "accessToken": token }),
            )
            .await?;

        self.clear_cache();
        Ok(course)
    }

    pub async fn create_module(&self, input: CreateModule) -> Result<Module> {
        input.validate()?;
        let token = self.credentials.require_access_token()?;

        let module = self
            .invoke_decoded(
                ops::CREATE_MODULE,
                json!({ "module": input, "accessToken": token }),
            )
            .await?;

        self.clear_cache();
        Ok(module)
    }

    pub async fn create_lesson(&self, input: CreateLesson) -> Result<Lesson> {
        input.validate()?;
        let token = self.credentials.require_access_token()?;

        let lesson = self
            .invoke_decoded(
                ops::CREATE_LESSON,
                json!({ "lesson": input.remote_payload(), "accessToken": token }),
            )
            .await?;

        self.clear_cache();
        Ok(lesson)
    }

    pub async fn update_course(&self, course_id: &str, changes: CourseChanges) -> Result<Course> {
        let token = self.credentials.require_access_token()?;

        let course = self
            .invoke_decoded(
                ops::UPDATE_COURSE,
                json!({ "courseId": course_id, "updates": changes, "accessToken": token }),
            )
            .await?;

        self.clear_cache();
        Ok(course)
    }

    pub async fn update_module(&self, module_id: &str, changes: ModuleChanges) -> Result<Module> {
        let token = self.credentials.require_access_token()?;

        let module = self
            .invoke_decoded(
                ops::UPDATE_MODULE,
                json!({ "moduleId": module_id, "updates": changes, "accessToken": token }),
            )
            .await?;

        self.clear_cache();
        Ok(module)
    }

    pub async fn update_lesson(&self, lesson_id: &str, changes: LessonChanges) -> Result<Lesson> {
        let token = self.credentials.require_access_token()?;

        let lesson = self
            .invoke_decoded(
                ops::UPDATE_LESSON,
                json!({ "lessonId": lesson_id, "updates": changes.remote_payload(), "accessToken": token }),
            )
            .await?;

        self.clear_cache();
        Ok(lesson)
    }

    pub async fn delete_course(&self, course_id: &str) -> Result<()> {
        let token = self.credentials.require_access_token()?;

        self.invoke(
            ops::DELETE_COURSE,
            json!({ "courseId": course_id, "accessToken": token }),
        )
        .await?;

        self.clear_cache();
        Ok(())
    }

    pub async fn delete_module(&self, module_id: &str) -> Result<()> {
        let token = self.credentials.require_access_token()?;

        self.invoke(
            ops::DELETE_MODULE,
            json!({ "moduleId": module_id, "accessToken": token }),
        )
        .await?;

        self.clear_cache();
        Ok(())
    }

    pub async fn delete_lesson(&self, lesson_id: &str) -> Result<()> {
        let token = self.credentials.require_access_token()?;

        self.invoke(
            ops::DELETE_LESSON,
            json!({ "lessonId": lesson_id, "accessToken": token }),
        )
        .await?;

        self.clear_cache();
        Ok(())
    }

    /// True iff a session token is stored. Pure query, no side effect.
    pub fn is_authenticated(&self) -> bool {
        self.credentials.is_authenticated()
    }

    /// Evict everything; the next `get_courses` refetches. For callers that
    /// changed data out of band.
    pub fn clear_cache(&self) {
        self.cache.lock().unwrap().clear();
    }

    async fn invoke(&self, operation: &'static str, args: Value) -> Result<Value> {
        super::invoke_raw(self.gateway.as_ref(), operation, args).await
    }

    async fn invoke_decoded<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        args: Value,
    ) -> Result<T> {
        super::invoke_decoded(self.gateway.as_ref(), operation, args).await
    }
}
