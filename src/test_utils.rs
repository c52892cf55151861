#[cfg(test)]
pub mod fixtures {
    use chrono::{Duration, Utc};

    use crate::{
        auth::Session,
        models::domain::{Course, Exam, ExamOption, ExamQuestion, Lesson},
    };

    pub fn session(user_id: &str) -> Session {
        Session::new(
            user_id,
            &format!("{}@example.com", user_id),
            Utc::now() + Duration::hours(1),
        )
    }

    pub fn course(id: &str, title: &str) -> Course {
        let mut course = Course::new(title, Some("A course"));
        course.id = id.to_string();
        course
    }

    pub fn lesson(course_id: &str, id: &str, order_index: i32) -> Lesson {
        let mut lesson = Lesson::new(course_id, &format!("Lesson {}", id), "Body", order_index);
        lesson.id = id.to_string();
        lesson
    }

    /// Single question exam whose correct option is `"right"`.
    pub fn exam(course_id: &str, pass_score: u8) -> Exam {
        Exam::new(
            course_id,
            "Final exam",
            pass_score,
            vec![ExamQuestion {
                id: "q-1".to_string(),
                prompt: "Which one?".to_string(),
                order_index: 1,
                options: vec![
                    ExamOption {
                        id: "right".to_string(),
                        text: "Right".to_string(),
                        correct: true,
                    },
                    ExamOption {
                        id: "wrong".to_string(),
                        text: "Wrong".to_string(),
                        correct: false,
                    },
                ],
            }],
        )
    }
}

#[cfg(test)]
pub mod mocks {
    use std::sync::Arc;

    use crate::{
        app_state::AppState,
        config::Config,
        repositories::{
            course_repository::MockCourseRepository,
            enrollment_repository::MockEnrollmentRepository,
            exam_attempt_repository::MockExamAttemptRepository,
            exam_repository::MockExamRepository, lesson_repository::MockLessonRepository,
            profile_repository::MockProfileRepository, Repositories,
        },
    };

    /// One mock per collection. Set expectations, then build an `AppState`.
    #[derive(Default)]
    pub struct MockRepositories {
        pub profiles: MockProfileRepository,
        pub courses: MockCourseRepository,
        pub lessons: MockLessonRepository,
        pub enrollments: MockEnrollmentRepository,
        pub exams: MockExamRepository,
        pub exam_attempts: MockExamAttemptRepository,
    }

    impl MockRepositories {
        pub fn into_state(self) -> AppState {
            AppState::from_repositories(
                Config::test_config(),
                Repositories {
                    profiles: Arc::new(self.profiles),
                    courses: Arc::new(self.courses),
                    lessons: Arc::new(self.lessons),
                    enrollments: Arc::new(self.enrollments),
                    exams: Arc::new(self.exams),
                    exam_attempts: Arc::new(self.exam_attempts),
                },
            )
        }
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::{
        dev::ServiceResponse,
        http::{header::LOCATION, StatusCode},
    };

    use crate::app_state::AppState;

    pub fn bearer(state: &AppState, user_id: &str) -> (String, String) {
        let token = state
            .jwt_service
            .issue_token(user_id, &format!("{}@example.com", user_id))
            .expect("token should be issued");
        ("Authorization".to_string(), format!("Bearer {}", token))
    }

    /// Asserts a redirect status and returns the `Location` header.
    pub fn assert_redirect<B>(resp: &ServiceResponse<B>, status: StatusCode) -> String {
        assert_eq!(resp.status(), status, "unexpected status");
        resp.headers()
            .get(LOCATION)
            .expect("redirect should carry a Location header")
            .to_str()
            .expect("Location should be ASCII")
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_session() {
        let session = session("ada");
        assert_eq!(session.user_id, "ada");
        assert_eq!(session.email, "ada@example.com");
    }

    #[test]
    fn test_fixtures_exam_has_one_correct_option() {
        let exam = exam("c-1", 70);
        assert_eq!(exam.questions.len(), 1);
        assert_eq!(exam.questions[0].correct_option_ids(), vec!["right"]);
    }
}
