use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::{Course, Exam, ExamQuestion, Lesson, Role};

#[derive(Debug, Clone, Serialize)]
pub struct CourseSummary {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
}

impl From<Course> for CourseSummary {
    fn from(course: Course) -> Self {
        CourseSummary {
            id: course.id,
            title: course.title,
            description: course.description,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CourseLandingResponse {
    pub course: CourseSummary,
    pub lesson_count: usize,
    pub has_exam: bool,
    pub enrolled: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct LessonSummary {
    pub id: String,
    pub title: String,
    pub order_index: i32,
}

impl From<&Lesson> for LessonSummary {
    fn from(lesson: &Lesson) -> Self {
        LessonSummary {
            id: lesson.id.clone(),
            title: lesson.title.clone(),
            order_index: lesson.order_index,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LessonDetailResponse {
    pub course_id: String,
    pub lesson: Lesson,
    pub previous_lesson_path: Option<String>,
    pub next_lesson_path: Option<String>,
    /// Where to go after the last lesson.
    pub exam_path: String,
}

/// Exam as presented to a student: correct flags are never serialized.
#[derive(Debug, Clone, Serialize)]
pub struct ExamForTaking {
    pub id: String,
    pub course_id: String,
    pub title: String,
    pub pass_score: u8,
    pub questions: Vec<QuestionForTaking>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionForTaking {
    pub id: String,
    pub prompt: String,
    pub options: Vec<OptionForTaking>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OptionForTaking {
    pub id: String,
    pub text: String,
}

impl From<&ExamQuestion> for QuestionForTaking {
    fn from(question: &ExamQuestion) -> Self {
        QuestionForTaking {
            id: question.id.clone(),
            prompt: question.prompt.clone(),
            options: question
                .options
                .iter()
                .map(|opt| OptionForTaking {
                    id: opt.id.clone(),
                    text: opt.text.clone(),
                })
                .collect(),
        }
    }
}

impl ExamForTaking {
    pub fn from_exam(exam: &Exam) -> Self {
        let mut questions: Vec<&ExamQuestion> = exam.questions.iter().collect();
        questions.sort_by_key(|q| q.order_index);

        ExamForTaking {
            id: exam.id.clone(),
            course_id: exam.course_id.clone(),
            title: exam.title.clone(),
            pass_score: exam.pass_score,
            questions: questions.into_iter().map(QuestionForTaking::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ExamFailedResponse {
    pub state: &'static str,
    pub score: u8,
    pub pass_score: u8,
    pub attempt_number: u32,
    pub retry_path: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CertificateResponse {
    pub course_id: String,
    pub course_title: String,
    pub user_id: String,
    pub email: String,
    pub score: Option<u8>,
    pub issued_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardEntry {
    pub course: CourseSummary,
    pub enrolled_at: DateTime<Utc>,
    pub continue_path: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardResponse {
    pub user_id: String,
    pub enrollments: Vec<DashboardEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MeResponse {
    pub user_id: String,
    pub email: String,
    pub role: Option<Role>,
    pub is_admin: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginViewResponse {
    pub login_required: bool,
    pub redirect: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdminLessonEntry {
    pub course_id: String,
    pub lesson: LessonSummary,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub message: String,
}
