use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Lesson {
    pub id: String,
    pub course_id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    /// Navigation order inside the course, ascending.
    pub order_index: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Lesson {
    pub fn new(course_id: &str, title: &str, content: &str, order_index: i32) -> Self {
        Lesson {
            id: Uuid::new_v4().to_string(),
            course_id: course_id.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            order_index,
            created_at: Some(Utc::now()),
        }
    }
}

/// Sorts lessons into navigation order. Stable, so equal indexes keep the
/// order the store returned them in.
pub fn sort_by_order(lessons: &mut [Lesson]) {
    lessons.sort_by_key(|lesson| lesson.order_index);
}
