use async_trait::async_trait;
use futures::TryStreamExt;
#[cfg(test)]
use mockall::automock;
use mongodb::{bson::doc, Collection};

use crate::{db::Database, errors::AppResult, models::domain::Lesson};

pub const LESSONS_COLLECTION: &str = "lessons";

#[cfg_attr(test, automock)]
#[async_trait]
pub trait LessonRepository: Send + Sync {
    /// Lowest `order_index` lesson of the course.
    async fn find_first_by_course(&self, course_id: &str) -> AppResult<Option<Lesson>>;
    /// All lessons of the course in ascending `order_index`.
    async fn find_by_course(&self, course_id: &str) -> AppResult<Vec<Lesson>>;
    async fn find_all(&self) -> AppResult<Vec<Lesson>>;
    async fn create(&self, lesson: Lesson) -> AppResult<Lesson>;
}

pub struct MongoLessonRepository {
    collection: Collection<Lesson>,
}

impl MongoLessonRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection(LESSONS_COLLECTION);
        Self { collection }
    }
}

#[async_trait]
impl LessonRepository for MongoLessonRepository {
    async fn find_first_by_course(&self, course_id: &str) -> AppResult<Option<Lesson>> {
        let lesson = self
            .collection
            .find_one(doc! { "course_id": course_id })
            .sort(doc! { "order_index": 1 })
            .await?;
        Ok(lesson)
    }

    async fn find_by_course(&self, course_id: &str) -> AppResult<Vec<Lesson>> {
        let lessons = self
            .collection
            .find(doc! { "course_id": course_id })
            .sort(doc! { "order_index": 1 })
            .await?
            .try_collect()
            .await?;
        Ok(lessons)
    }

    async fn find_all(&self) -> AppResult<Vec<Lesson>> {
        let lessons = self
            .collection
            .find(doc! {})
            .sort(doc! { "course_id": 1, "order_index": 1 })
            .await?
            .try_collect()
            .await?;
        Ok(lessons)
    }

    async fn create(&self, lesson: Lesson) -> AppResult<Lesson> {
        self.collection.insert_one(&lesson).await?;
        Ok(lesson)
    }
}
