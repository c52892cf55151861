#![allow(dead_code)]

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use secrecy::SecretString;
use tokio::sync::RwLock;

use lectern_server::{
    app_state::AppState,
    config::Config,
    errors::{AppError, AppResult},
    models::domain::{
        lesson::sort_by_order, Course, Enrollment, Exam, ExamAttempt, Lesson, Profile,
    },
    repositories::{
        CourseRepository, EnrollmentRepository, ExamAttemptRepository, ExamRepository,
        LessonRepository, ProfileRepository, Repositories,
    },
};

pub const ADMIN_EMAIL: &str = "root@lectern.test";

#[derive(Clone, Default)]
pub struct InMemoryProfileRepository {
    profiles: Arc<RwLock<HashMap<String, Profile>>>,
}

impl InMemoryProfileRepository {
    pub async fn insert(&self, profile: Profile) {
        self.profiles
            .write()
            .await
            .insert(profile.id.clone(), profile);
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn find_by_id(&self, user_id: &str) -> AppResult<Option<Profile>> {
        Ok(self.profiles.read().await.get(user_id).cloned())
    }
}

#[derive(Clone, Default)]
pub struct InMemoryCourseRepository {
    courses: Arc<RwLock<HashMap<String, Course>>>,
}

impl InMemoryCourseRepository {
    pub async fn insert(&self, course: Course) {
        self.courses.write().await.insert(course.id.clone(), course);
    }
}

#[async_trait]
impl CourseRepository for InMemoryCourseRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Course>> {
        Ok(self.courses.read().await.get(id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Course>> {
        let mut courses: Vec<_> = self.courses.read().await.values().cloned().collect();
        courses.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(courses)
    }
}

/// Keeps insertion order, like a collection scan without a sort.
#[derive(Clone, Default)]
pub struct InMemoryLessonRepository {
    lessons: Arc<RwLock<Vec<Lesson>>>,
}

#[async_trait]
impl LessonRepository for InMemoryLessonRepository {
    async fn find_first_by_course(&self, course_id: &str) -> AppResult<Option<Lesson>> {
        let mut lessons = self.find_by_course(course_id).await?;
        sort_by_order(&mut lessons);
        Ok(lessons.into_iter().next())
    }

    async fn find_by_course(&self, course_id: &str) -> AppResult<Vec<Lesson>> {
        Ok(self
            .lessons
            .read()
            .await
            .iter()
            .filter(|l| l.course_id == course_id)
            .cloned()
            .collect())
    }

    async fn find_all(&self) -> AppResult<Vec<Lesson>> {
        Ok(self.lessons.read().await.clone())
    }

    async fn create(&self, lesson: Lesson) -> AppResult<Lesson> {
        let mut lessons = self.lessons.write().await;
        if lessons.iter().any(|l| l.id == lesson.id) {
            return Err(AppError::AlreadyExists(format!(
                "duplicate lesson id '{}'",
                lesson.id
            )));
        }
        lessons.push(lesson.clone());
        Ok(lesson)
    }
}

#[derive(Clone, Default)]
pub struct InMemoryEnrollmentRepository {
    enrollments: Arc<RwLock<Vec<Enrollment>>>,
}

#[async_trait]
impl EnrollmentRepository for InMemoryEnrollmentRepository {
    async fn exists(&self, user_id: &str, course_id: &str) -> AppResult<bool> {
        Ok(self
            .enrollments
            .read()
            .await
            .iter()
            .any(|e| e.user_id == user_id && e.course_id == course_id))
    }

    async fn find_by_user(&self, user_id: &str) -> AppResult<Vec<Enrollment>> {
        Ok(self
            .enrollments
            .read()
            .await
            .iter()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn create(&self, enrollment: Enrollment) -> AppResult<Enrollment> {
        let mut enrollments = self.enrollments.write().await;
        if enrollments
            .iter()
            .any(|e| e.user_id == enrollment.user_id && e.course_id == enrollment.course_id)
        {
            return Err(AppError::AlreadyExists(
                "duplicate key on user_course_unique".to_string(),
            ));
        }
        enrollments.push(enrollment.clone());
        Ok(enrollment)
    }
}

#[derive(Clone, Default)]
pub struct InMemoryExamRepository {
    exams: Arc<RwLock<HashMap<String, Exam>>>,
}

impl InMemoryExamRepository {
    pub async fn insert(&self, exam: Exam) {
        self.exams.write().await.insert(exam.course_id.clone(), exam);
    }
}

#[async_trait]
impl ExamRepository for InMemoryExamRepository {
    async fn find_by_course(&self, course_id: &str) -> AppResult<Option<Exam>> {
        Ok(self.exams.read().await.get(course_id).cloned())
    }
}

#[derive(Clone, Default)]
pub struct InMemoryExamAttemptRepository {
    attempts: Arc<RwLock<Vec<ExamAttempt>>>,
}

#[async_trait]
impl ExamAttemptRepository for InMemoryExamAttemptRepository {
    async fn create(&self, attempt: ExamAttempt) -> AppResult<ExamAttempt> {
        self.attempts.write().await.push(attempt.clone());
        Ok(attempt)
    }

    async fn count_for(&self, user_id: &str, course_id: &str) -> AppResult<u32> {
        let count = self
            .attempts
            .read()
            .await
            .iter()
            .filter(|a| a.user_id == user_id && a.course_id == course_id)
            .count();
        Ok(count as u32)
    }

    async fn find_latest_passed(
        &self,
        user_id: &str,
        course_id: &str,
    ) -> AppResult<Option<ExamAttempt>> {
        Ok(self
            .attempts
            .read()
            .await
            .iter()
            .filter(|a| a.user_id == user_id && a.course_id == course_id && a.passed)
            .max_by_key(|a| a.attempt_number)
            .cloned())
    }
}

/// Handles onto every in-memory collection, for seeding and inspection.
#[derive(Clone, Default)]
pub struct Store {
    pub profiles: InMemoryProfileRepository,
    pub courses: InMemoryCourseRepository,
    pub lessons: InMemoryLessonRepository,
    pub enrollments: InMemoryEnrollmentRepository,
    pub exams: InMemoryExamRepository,
    pub exam_attempts: InMemoryExamAttemptRepository,
}

impl Store {
    pub fn repositories(&self) -> Repositories {
        Repositories {
            profiles: Arc::new(self.profiles.clone()),
            courses: Arc::new(self.courses.clone()),
            lessons: Arc::new(self.lessons.clone()),
            enrollments: Arc::new(self.enrollments.clone()),
            exams: Arc::new(self.exams.clone()),
            exam_attempts: Arc::new(self.exam_attempts.clone()),
        }
    }

    pub fn state(&self) -> AppState {
        AppState::from_repositories(config(), self.repositories())
    }
}

pub fn config() -> Config {
    Config {
        mongo_conn_string: "mongodb://localhost:27017".to_string(),
        mongo_db_name: "lectern-test".to_string(),
        web_server_host: "127.0.0.1".to_string(),
        web_server_port: 8080,
        jwt_secret: SecretString::from("integration_test_secret_key_0123456789".to_string()),
        jwt_audience: None,
        jwt_expiration_hours: 1,
        session_cookie_name: "session".to_string(),
        admin_email: Some(ADMIN_EMAIL.to_string()),
        cors_allowed_origin: "http://localhost:5173".to_string(),
    }
}

pub fn course(id: &str, title: &str) -> Course {
    let mut course = Course::new(title, None);
    course.id = id.to_string();
    course
}

pub fn lesson(course_id: &str, id: &str, order_index: i32) -> Lesson {
    let mut lesson = Lesson::new(course_id, &format!("Lesson {}", id), "Body", order_index);
    lesson.id = id.to_string();
    lesson
}
