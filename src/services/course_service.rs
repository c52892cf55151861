use std::{collections::HashMap, sync::Arc};

use crate::{
    auth::Session,
    errors::{AppError, AppResult},
    models::{
        domain::{Course, Enrollment},
        dto::response::{CourseLandingResponse, CourseSummary, DashboardEntry, DashboardResponse},
    },
    repositories::{CourseRepository, EnrollmentRepository, ExamRepository, LessonRepository},
    routes,
};

pub struct CourseService {
    courses: Arc<dyn CourseRepository>,
    lessons: Arc<dyn LessonRepository>,
    enrollments: Arc<dyn EnrollmentRepository>,
    exams: Arc<dyn ExamRepository>,
}

impl CourseService {
    pub fn new(
        courses: Arc<dyn CourseRepository>,
        lessons: Arc<dyn LessonRepository>,
        enrollments: Arc<dyn EnrollmentRepository>,
        exams: Arc<dyn ExamRepository>,
    ) -> Self {
        Self {
            courses,
            lessons,
            enrollments,
            exams,
        }
    }

    async fn get_course(&self, course_id: &str) -> AppResult<Course> {
        self.courses
            .find_by_id(course_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Course with id '{}' not found", course_id)))
    }

    pub async fn catalog(&self) -> AppResult<Vec<CourseSummary>> {
        let courses = self.courses.find_all().await?;
        Ok(courses.into_iter().map(CourseSummary::from).collect())
    }

    pub async fn landing(&self, course_id: &str, session: &Session) -> AppResult<CourseLandingResponse> {
        let course = self.get_course(course_id).await?;
        let lesson_count = self.lessons.find_by_course(course_id).await?.len();
        let has_exam = self.exams.find_by_course(course_id).await?.is_some();
        let enrolled = self.enrollments.exists(&session.user_id, course_id).await?;

        Ok(CourseLandingResponse {
            course: course.into(),
            lesson_count,
            has_exam,
            enrolled,
        })
    }

    /// Enrolling twice is a no-op.
    pub async fn enroll(&self, course_id: &str, session: &Session) -> AppResult<()> {
        self.get_course(course_id).await?;

        if self.enrollments.exists(&session.user_id, course_id).await? {
            return Ok(());
        }

        let enrollment = Enrollment::new(&session.user_id, course_id);
        match self.enrollments.create(enrollment).await {
            Ok(_) => {
                log::info!("User {} enrolled in course {}", session.user_id, course_id);
                Ok(())
            }
            // A concurrent enroll for the same user and course won the insert.
            Err(AppError::AlreadyExists(_)) => Ok(()),
            Err(err) => Err(err),
        }
    }

    pub async fn dashboard(&self, session: &Session) -> AppResult<DashboardResponse> {
        let enrollments = self.enrollments.find_by_user(&session.user_id).await?;
        let courses: HashMap<String, Course> = self
            .courses
            .find_all()
            .await?
            .into_iter()
            .map(|course| (course.id.clone(), course))
            .collect();

        let entries = enrollments
            .into_iter()
            .filter_map(|enrollment| {
                // Enrollments of deleted courses are skipped.
                let course = courses.get(&enrollment.course_id)?.clone();
                Some(DashboardEntry {
                    continue_path: routes::course_entry(&course.id),
                    course: course.into(),
                    enrolled_at: enrollment.enrolled_at,
                })
            })
            .collect();

        Ok(DashboardResponse {
            user_id: session.user_id.clone(),
            enrollments: entries,
        })
    }
}
