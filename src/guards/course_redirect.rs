use std::sync::Arc;

use crate::{errors::AppResult, repositories::LessonRepository, routes};

/// Turns a bare course URL into the first lesson of the course.
pub struct CourseRedirectResolver {
    lessons: Arc<dyn LessonRepository>,
}

impl CourseRedirectResolver {
    pub fn new(lessons: Arc<dyn LessonRepository>) -> Self {
        Self { lessons }
    }

    /// Read-only: the same store contents always give the same target.
    pub async fn resolve(&self, course_id: &str) -> AppResult<String> {
        let target = match self.lessons.find_first_by_course(course_id).await? {
            Some(lesson) => routes::lesson_detail(course_id, &lesson.id),
            None => routes::course_landing(course_id),
        };
        Ok(target)
    }
}
