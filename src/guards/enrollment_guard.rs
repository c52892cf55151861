use std::sync::Arc;

use once_cell::sync::Lazy;
use percent_encoding::percent_decode_str;
use regex::Regex;

use crate::{
    auth::Session,
    errors::AppResult,
    guards::{session_guard, Navigation},
    repositories::EnrollmentRepository,
    routes,
};

static LESSON_PATH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^/courses/([^/?#]+)/lessons/([^/?#]+)/?(?:[?#].*)?$")
        .expect("LESSON_PATH is a valid regex pattern")
});

fn decode_segment(raw: &str) -> String {
    percent_decode_str(raw).decode_utf8_lossy().into_owned()
}

/// Decoded `(course_id, lesson_id)` of a lesson detail path, the same ids
/// the router hands to the lesson handler.
pub fn parse_lesson_path(path: &str) -> Option<(String, String)> {
    let captures = LESSON_PATH.captures(path)?;
    Some((decode_segment(&captures[1]), decode_segment(&captures[2])))
}

pub fn parse_course_id(path: &str) -> Option<String> {
    parse_lesson_path(path).map(|(course_id, _)| course_id)
}

/// Lets a lesson through only when the caller is enrolled in its course.
/// Never creates enrollments.
pub struct EnrollmentGuard {
    enrollments: Arc<dyn EnrollmentRepository>,
}

impl EnrollmentGuard {
    pub fn new(enrollments: Arc<dyn EnrollmentRepository>) -> Self {
        Self { enrollments }
    }

    pub async fn check(&self, path: &str, session: Option<&Session>) -> AppResult<Navigation> {
        let Some(course_id) = parse_course_id(path) else {
            return Ok(Navigation::Proceed);
        };

        self.require_enrollment(&course_id, path, session).await
    }

    /// Same decision for any page scoped to `course_id`. `original_path` is
    /// where login should return to.
    pub async fn require_enrollment(
        &self,
        course_id: &str,
        original_path: &str,
        session: Option<&Session>,
    ) -> AppResult<Navigation> {
        let Some(session) = session else {
            return Ok(Navigation::Redirect(session_guard::login_redirect(
                original_path,
            )));
        };

        if self.enrollments.exists(&session.user_id, course_id).await? {
            return Ok(Navigation::Proceed);
        }

        log::debug!(
            "User {} is not enrolled in course {}",
            session.user_id,
            course_id
        );
        Ok(Navigation::Redirect(routes::course_landing(course_id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{errors::AppError, repositories::enrollment_repository::MockEnrollmentRepository};
    use chrono::Utc;

    fn session() -> Session {
        Session::new("user-1", "ada@example.com", Utc::now())
    }

    fn guard_with(exists: AppResult<bool>) -> EnrollmentGuard {
        let mut repo = MockEnrollmentRepository::new();
        repo.expect_exists()
            .withf(|user_id, course_id| user_id == "user-1" && course_id == "c-1")
            .times(1)
            .return_once(move |_, _| exists);
        EnrollmentGuard::new(Arc::new(repo))
    }

    #[test]
    fn test_parse_lesson_path() {
        assert_eq!(
            parse_lesson_path("/courses/c-1/lessons/l-9"),
            Some(("c-1".to_string(), "l-9".to_string()))
        );
        assert_eq!(
            parse_course_id("/courses/c-1/lessons/l-9/?from=dashboard"),
            Some("c-1".to_string())
        );
        assert_eq!(parse_course_id("/courses/c-1"), None);
        assert_eq!(parse_course_id("/courses/c-1/exam"), None);
        assert_eq!(parse_course_id("/courses/c-1/lessons"), None);
        assert_eq!(parse_course_id("/courses/c-1/lessons/l-1/extra"), None);
    }

    #[test]
    fn test_parse_lesson_path_decodes_segments() {
        assert_eq!(
            parse_lesson_path("/courses/c%2D1/lessons/l%201"),
            Some(("c-1".to_string(), "l 1".to_string()))
        );
    }

    #[actix_web::test]
    async fn test_encoded_course_id_is_checked_decoded() {
        let guard = guard_with(Ok(true));
        let navigation = guard
            .check("/courses/c%2D1/lessons/l-1", Some(&session()))
            .await
            .unwrap();
        assert_eq!(navigation, Navigation::Proceed);
    }

    #[actix_web::test]
    async fn test_non_lesson_path_is_not_applicable() {
        let mut repo = MockEnrollmentRepository::new();
        repo.expect_exists().never();
        let guard = EnrollmentGuard::new(Arc::new(repo));

        let navigation = guard.check("/courses/c-1", Some(&session())).await.unwrap();
        assert_eq!(navigation, Navigation::Proceed);
    }

    #[actix_web::test]
    async fn test_missing_session_defers_to_login_without_lookup() {
        let mut repo = MockEnrollmentRepository::new();
        repo.expect_exists().never();
        let guard = EnrollmentGuard::new(Arc::new(repo));

        let navigation = guard.check("/courses/c-1/lessons/l-1", None).await.unwrap();
        assert_eq!(
            navigation.location(),
            Some("/login?redirect=%2Fcourses%2Fc-1%2Flessons%2Fl-1")
        );
    }

    #[actix_web::test]
    async fn test_enrolled_user_proceeds() {
        let guard = guard_with(Ok(true));
        let navigation = guard
            .check("/courses/c-1/lessons/l-1", Some(&session()))
            .await
            .unwrap();
        assert_eq!(navigation, Navigation::Proceed);
    }

    #[actix_web::test]
    async fn test_unenrolled_user_goes_to_course_landing() {
        let guard = guard_with(Ok(false));
        let navigation = guard
            .check("/courses/c-1/lessons/l-1", Some(&session()))
            .await
            .unwrap();
        assert_eq!(navigation, Navigation::Redirect("/courses/c-1".to_string()));
    }

    #[actix_web::test]
    async fn test_store_failure_is_surfaced() {
        let guard = guard_with(Err(AppError::DatabaseError("timeout".to_string())));
        let result = guard
            .check("/courses/c-1/lessons/l-1", Some(&session()))
            .await;
        assert!(matches!(result, Err(AppError::DatabaseError(_))));
    }
}
