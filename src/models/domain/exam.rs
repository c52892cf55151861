use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_PASS_SCORE: u8 = 70;

fn default_pass_score() -> u8 {
    DEFAULT_PASS_SCORE
}

/// Final exam of a course. A course has at most one.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Exam {
    pub id: String,
    pub course_id: String,
    pub title: String,
    /// Minimum percentage needed to pass, inclusive.
    #[serde(default = "default_pass_score")]
    pub pass_score: u8,
    #[serde(default)]
    pub questions: Vec<ExamQuestion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExamQuestion {
    pub id: String,
    pub prompt: String,
    pub order_index: i32,
    pub options: Vec<ExamOption>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExamOption {
    pub id: String,
    pub text: String,
    pub correct: bool,
}

impl Exam {
    pub fn new(course_id: &str, title: &str, pass_score: u8, questions: Vec<ExamQuestion>) -> Self {
        Exam {
            id: Uuid::new_v4().to_string(),
            course_id: course_id.to_string(),
            title: title.to_string(),
            pass_score,
            questions,
            created_at: Some(Utc::now()),
        }
    }
}

impl ExamQuestion {
    pub fn correct_option_ids(&self) -> Vec<&str> {
        self.options
            .iter()
            .filter(|opt| opt.correct)
            .map(|opt| opt.id.as_str())
            .collect()
    }
}
