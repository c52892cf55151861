use async_trait::async_trait;
use futures::TryStreamExt;
#[cfg(test)]
use mockall::automock;
use mongodb::{bson::doc, Collection};

use crate::{db::Database, errors::AppResult, models::domain::Course};

pub const COURSES_COLLECTION: &str = "courses";

#[cfg_attr(test, automock)]
#[async_trait]
pub trait CourseRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Course>>;
    async fn find_all(&self) -> AppResult<Vec<Course>>;
}

pub struct MongoCourseRepository {
    collection: Collection<Course>,
}

impl MongoCourseRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection(COURSES_COLLECTION);
        Self { collection }
    }
}

#[async_trait]
impl CourseRepository for MongoCourseRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Course>> {
        let course = self.collection.find_one(doc! { "id": id }).await?;
        Ok(course)
    }

    async fn find_all(&self) -> AppResult<Vec<Course>> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "title": 1 })
            .await?;
        let courses: Vec<Course> = cursor.try_collect().await?;
        Ok(courses)
    }
}
