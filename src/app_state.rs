use std::sync::Arc;

use crate::{
    auth::JwtService,
    config::Config,
    db::Database,
    errors::AppResult,
    guards::{AdminGuard, CourseRedirectResolver, EnrollmentGuard},
    repositories::Repositories,
    services::{CourseService, ExamService, LessonService, PercentageScorer},
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub jwt_service: Arc<JwtService>,
    pub enrollment_guard: Arc<EnrollmentGuard>,
    pub admin_guard: Arc<AdminGuard>,
    pub course_redirect: Arc<CourseRedirectResolver>,
    pub course_service: Arc<CourseService>,
    pub lesson_service: Arc<LessonService>,
    pub exam_service: Arc<ExamService>,
    pub db: Option<Database>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;
        db.ensure_indexes().await?;
        let repositories = Repositories::mongo(&db);

        let mut state = Self::from_repositories(config, repositories);
        state.db = Some(db);
        Ok(state)
    }

    /// Wires guards and services over any set of repositories.
    pub fn from_repositories(config: Config, repos: Repositories) -> Self {
        let jwt_service = Arc::new(JwtService::new(
            &config.jwt_secret,
            config.jwt_audience.as_deref(),
            config.jwt_expiration_hours,
        ));

        let enrollment_guard = Arc::new(EnrollmentGuard::new(repos.enrollments.clone()));
        let admin_guard = Arc::new(AdminGuard::new(
            config.admin_email.clone(),
            repos.profiles.clone(),
        ));
        let course_redirect = Arc::new(CourseRedirectResolver::new(repos.lessons.clone()));

        let course_service = Arc::new(CourseService::new(
            repos.courses.clone(),
            repos.lessons.clone(),
            repos.enrollments.clone(),
            repos.exams.clone(),
        ));
        let lesson_service = Arc::new(LessonService::new(
            repos.courses.clone(),
            repos.lessons.clone(),
        ));
        let exam_service = Arc::new(ExamService::new(
            repos.courses,
            repos.exams,
            repos.exam_attempts,
            Arc::new(PercentageScorer),
        ));

        Self {
            config: Arc::new(config),
            jwt_service,
            enrollment_guard,
            admin_guard,
            course_redirect,
            course_service,
            lesson_service,
            exam_service,
            db: None,
        }
    }
}
