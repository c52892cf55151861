use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use mongodb::{bson::doc, Collection};

use crate::{db::Database, errors::AppResult, models::domain::ExamAttempt};

pub const EXAM_ATTEMPTS_COLLECTION: &str = "exam_attempts";

#[cfg_attr(test, automock)]
#[async_trait]
pub trait ExamAttemptRepository: Send + Sync {
    async fn create(&self, attempt: ExamAttempt) -> AppResult<ExamAttempt>;
    async fn count_for(&self, user_id: &str, course_id: &str) -> AppResult<u32>;
    async fn find_latest_passed(
        &self,
        user_id: &str,
        course_id: &str,
    ) -> AppResult<Option<ExamAttempt>>;
}

/// Attempt numbers are `u32`; a count beyond that saturates.
fn saturating_count(count: u64) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}

pub struct MongoExamAttemptRepository {
    collection: Collection<ExamAttempt>,
}

impl MongoExamAttemptRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection(EXAM_ATTEMPTS_COLLECTION);
        Self { collection }
    }
}

#[async_trait]
impl ExamAttemptRepository for MongoExamAttemptRepository {
    async fn create(&self, attempt: ExamAttempt) -> AppResult<ExamAttempt> {
        self.collection.insert_one(&attempt).await?;
        Ok(attempt)
    }

    async fn count_for(&self, user_id: &str, course_id: &str) -> AppResult<u32> {
        let count = self
            .collection
            .count_documents(doc! {
                "user_id": user_id,
                "course_id": course_id
            })
            .await?;
        Ok(saturating_count(count))
    }

    async fn find_latest_passed(
        &self,
        user_id: &str,
        course_id: &str,
    ) -> AppResult<Option<ExamAttempt>> {
        let attempt = self
            .collection
            .find_one(doc! {
                "user_id": user_id,
                "course_id": course_id,
                "passed": true
            })
            .sort(doc! { "submitted_at": -1 })
            .await?;
        Ok(attempt)
    }
}
