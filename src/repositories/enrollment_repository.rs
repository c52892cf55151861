use async_trait::async_trait;
use futures::TryStreamExt;
#[cfg(test)]
use mockall::automock;
use mongodb::{bson::doc, Collection};

use crate::{db::Database, errors::AppResult, models::domain::Enrollment};

pub const ENROLLMENTS_COLLECTION: &str = "enrollments";

#[cfg_attr(test, automock)]
#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    async fn exists(&self, user_id: &str, course_id: &str) -> AppResult<bool>;
    async fn find_by_user(&self, user_id: &str) -> AppResult<Vec<Enrollment>>;
    /// `AlreadyExists` when the user is already enrolled in the course.
    async fn create(&self, enrollment: Enrollment) -> AppResult<Enrollment>;
}

pub struct MongoEnrollmentRepository {
    collection: Collection<Enrollment>,
}

impl MongoEnrollmentRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection(ENROLLMENTS_COLLECTION);
        Self { collection }
    }
}

#[async_trait]
impl EnrollmentRepository for MongoEnrollmentRepository {
    async fn exists(&self, user_id: &str, course_id: &str) -> AppResult<bool> {
        let enrollment = self
            .collection
            .find_one(doc! {
                "user_id": user_id,
                "course_id": course_id
            })
            .await?;
        Ok(enrollment.is_some())
    }

    async fn find_by_user(&self, user_id: &str) -> AppResult<Vec<Enrollment>> {
        let enrollments = self
            .collection
            .find(doc! { "user_id": user_id })
            .sort(doc! { "enrolled_at": -1 })
            .await?
            .try_collect()
            .await?;
        Ok(enrollments)
    }

    async fn create(&self, enrollment: Enrollment) -> AppResult<Enrollment> {
        self.collection.insert_one(&enrollment).await?;
        Ok(enrollment)
    }
}
