use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use mongodb::{bson::doc, Collection};

use crate::{db::Database, errors::AppResult, models::domain::Exam};

pub const EXAMS_COLLECTION: &str = "exams";

#[cfg_attr(test, automock)]
#[async_trait]
pub trait ExamRepository: Send + Sync {
    async fn find_by_course(&self, course_id: &str) -> AppResult<Option<Exam>>;
}

pub struct MongoExamRepository {
    collection: Collection<Exam>,
}

impl MongoExamRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection(EXAMS_COLLECTION);
        Self { collection }
    }
}

#[async_trait]
impl ExamRepository for MongoExamRepository {
    async fn find_by_course(&self, course_id: &str) -> AppResult<Option<Exam>> {
        let exam = self
            .collection
            .find_one(doc! { "course_id": course_id })
            .await?;
        Ok(exam)
    }
}
