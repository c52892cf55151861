pub mod course_repository;
pub mod enrollment_repository;
pub mod exam_attempt_repository;
pub mod exam_repository;
pub mod lesson_repository;
pub mod profile_repository;

use std::sync::Arc;

pub use course_repository::{CourseRepository, MongoCourseRepository};
pub use enrollment_repository::{EnrollmentRepository, MongoEnrollmentRepository};
pub use exam_attempt_repository::{ExamAttemptRepository, MongoExamAttemptRepository};
pub use exam_repository::{ExamRepository, MongoExamRepository};
pub use lesson_repository::{LessonRepository, MongoLessonRepository};
pub use profile_repository::{MongoProfileRepository, ProfileRepository};

use crate::db::Database;

/// Every collection the application reads or writes.
#[derive(Clone)]
pub struct Repositories {
    pub profiles: Arc<dyn ProfileRepository>,
    pub courses: Arc<dyn CourseRepository>,
    pub lessons: Arc<dyn LessonRepository>,
    pub enrollments: Arc<dyn EnrollmentRepository>,
    pub exams: Arc<dyn ExamRepository>,
    pub exam_attempts: Arc<dyn ExamAttemptRepository>,
}

impl Repositories {
    /// Mongo-backed repositories. Indexes are created by `Database::ensure_indexes`.
    pub fn mongo(db: &Database) -> Self {
        Self {
            profiles: Arc::new(MongoProfileRepository::new(db)),
            courses: Arc::new(MongoCourseRepository::new(db)),
            lessons: Arc::new(MongoLessonRepository::new(db)),
            enrollments: Arc::new(MongoEnrollmentRepository::new(db)),
            exams: Arc::new(MongoExamRepository::new(db)),
            exam_attempts: Arc::new(MongoExamAttemptRepository::new(db)),
        }
    }
}
