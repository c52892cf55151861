use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExamAttempt {
    pub id: String,
    pub user_id: String,
    pub course_id: String,
    pub exam_id: String,
    pub score: u8,
    pub pass_score: u8,
    pub passed: bool,
    pub attempt_number: u32,
    pub submitted_at: DateTime<Utc>,
}

impl ExamAttempt {
    pub fn new(
        user_id: &str,
        course_id: &str,
        exam_id: &str,
        score: u8,
        pass_score: u8,
        attempt_number: u32,
    ) -> Self {
        ExamAttempt {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            course_id: course_id.to_string(),
            exam_id: exam_id.to_string(),
            score,
            pass_score,
            passed: is_passing(score, pass_score),
            attempt_number,
            submitted_at: Utc::now(),
        }
    }
}

/// The threshold itself passes.
pub fn is_passing(score: u8, pass_score: u8) -> bool {
    score >= pass_score
}
