use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{lesson::sort_by_order, Lesson},
        dto::{
            request::CreateLessonRequest,
            response::{AdminLessonEntry, LessonDetailResponse, LessonSummary},
        },
    },
    repositories::{CourseRepository, LessonRepository},
    routes,
};

pub struct LessonService {
    courses: Arc<dyn CourseRepository>,
    lessons: Arc<dyn LessonRepository>,
}

impl LessonService {
    pub fn new(courses: Arc<dyn CourseRepository>, lessons: Arc<dyn LessonRepository>) -> Self {
        Self { courses, lessons }
    }

    /// `None` when the lesson is not part of the course.
    pub async fn detail(
        &self,
        course_id: &str,
        lesson_id: &str,
    ) -> AppResult<Option<LessonDetailResponse>> {
        let mut lessons = self.lessons.find_by_course(course_id).await?;
        sort_by_order(&mut lessons);

        let Some(position) = lessons.iter().position(|l| l.id == lesson_id) else {
            return Ok(None);
        };

        let previous_lesson_path = position
            .checked_sub(1)
            .map(|i| routes::lesson_detail(course_id, &lessons[i].id));
        let next_lesson_path = lessons
            .get(position + 1)
            .map(|l| routes::lesson_detail(course_id, &l.id));

        Ok(Some(LessonDetailResponse {
            course_id: course_id.to_string(),
            lesson: lessons.swap_remove(position),
            previous_lesson_path,
            next_lesson_path,
            exam_path: routes::exam(course_id),
        }))
    }

    pub async fn admin_list(&self, course_id: Option<&str>) -> AppResult<Vec<AdminLessonEntry>> {
        let lessons = match course_id {
            Some(course_id) => {
                let mut lessons = self.lessons.find_by_course(course_id).await?;
                sort_by_order(&mut lessons);
                lessons
            }
            None => self.lessons.find_all().await?,
        };

        Ok(lessons
            .iter()
            .map(|lesson| AdminLessonEntry {
                course_id: lesson.course_id.clone(),
                lesson: LessonSummary::from(lesson),
            })
            .collect())
    }

    pub async fn create(&self, request: CreateLessonRequest) -> AppResult<Lesson> {
        if self.courses.find_by_id(&request.course_id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Course with id '{}' not found",
                request.course_id
            )));
        }

        let lesson = self.lessons.create(Lesson::from(request)).await?;
        log::info!("Created lesson {} in course {}", lesson.id, lesson.course_id);
        Ok(lesson)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::domain::Course,
        repositories::{
            course_repository::MockCourseRepository, lesson_repository::MockLessonRepository,
        },
    };

    fn lesson(id: &str, order_index: i32) -> Lesson {
        let mut lesson = Lesson::new("c-1", id, "", order_index);
        lesson.id = id.to_string();
        lesson
    }

    fn service_with_lessons(lessons: Vec<Lesson>) -> LessonService {
        let mut repo = MockLessonRepository::new();
        repo.expect_find_by_course()
            .returning(move |_| Ok(lessons.clone()));
        LessonService::new(Arc::new(MockCourseRepository::new()), Arc::new(repo))
    }

    #[actix_web::test]
    async fn test_detail_links_neighbours_in_order() {
        let service =
            service_with_lessons(vec![lesson("l-3", 3), lesson("l-1", 1), lesson("l-2", 2)]);

        let detail = service.detail("c-1", "l-2").await.unwrap().unwrap();
        assert_eq!(detail.lesson.id, "l-2");
        assert_eq!(
            detail.previous_lesson_path.as_deref(),
            Some("/courses/c-1/lessons/l-1")
        );
        assert_eq!(
            detail.next_lesson_path.as_deref(),
            Some("/courses/c-1/lessons/l-3")
        );
    }

    #[actix_web::test]
    async fn test_detail_of_first_and_last_lessons() {
        let service = service_with_lessons(vec![lesson("l-1", 1), lesson("l-2", 2)]);

        let first = service.detail("c-1", "l-1").await.unwrap().unwrap();
        assert!(first.previous_lesson_path.is_none());

        let last = service.detail("c-1", "l-2").await.unwrap().unwrap();
        assert!(last.next_lesson_path.is_none());
        assert_eq!(last.exam_path, "/courses/c-1/exam");
    }

    #[actix_web::test]
    async fn test_detail_of_foreign_lesson_is_none() {
        let service = service_with_lessons(vec![lesson("l-1", 1)]);
        assert!(service.detail("c-1", "l-404").await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_create_requires_existing_course() {
        let mut courses = MockCourseRepository::new();
        courses.expect_find_by_id().returning(|_| Ok(None));
        let mut lessons = MockLessonRepository::new();
        lessons.expect_create().never();

        let service = LessonService::new(Arc::new(courses), Arc::new(lessons));
        let request = CreateLessonRequest {
            course_id: "missing".to_string(),
            title: "Ownership".to_string(),
            content: String::new(),
            order_index: 1,
        };

        assert!(matches!(
            service.create(request).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[actix_web::test]
    async fn test_create_stores_lesson() {
        let mut courses = MockCourseRepository::new();
        courses
            .expect_find_by_id()
            .returning(|_| Ok(Some(Course::new("Rust 101", None))));
        let mut lessons = MockLessonRepository::new();
        lessons.expect_create().times(1).returning(Ok);

        let service = LessonService::new(Arc::new(courses), Arc::new(lessons));
        let request = CreateLessonRequest {
            course_id: "c-1".to_string(),
            title: "Ownership".to_string(),
            content: "Moves and borrows".to_string(),
            order_index: 4,
        };

        let lesson = service.create(request).await.unwrap();
        assert_eq!(lesson.order_index, 4);
        assert_eq!(lesson.course_id, "c-1");
    }
}
