use serde::Deserialize;
use validator::Validate;

use crate::models::domain::Lesson;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginQuery {
    pub redirect: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdminLessonsQuery {
    pub course_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateLessonRequest {
    #[validate(length(min = 1, max = 100))]
    pub course_id: String,

    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[serde(default)]
    pub content: String,

    #[validate(range(min = 0))]
    pub order_index: i32,
}

impl From<CreateLessonRequest> for Lesson {
    fn from(request: CreateLessonRequest) -> Self {
        Lesson::new(
            &request.course_id,
            &request.title,
            &request.content,
            request.order_index,
        )
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ExamAnswer {
    #[validate(length(min = 1))]
    pub question_id: String,
    pub selected_option_ids: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitExamRequest {
    #[validate(nested)]
    pub answers: Vec<ExamAnswer>,
}
