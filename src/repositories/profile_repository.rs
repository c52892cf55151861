use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use mongodb::{bson::doc, Collection};

use crate::{db::Database, errors::AppResult, models::domain::Profile};

pub const PROFILES_COLLECTION: &str = "profiles";

#[cfg_attr(test, automock)]
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn find_by_id(&self, user_id: &str) -> AppResult<Option<Profile>>;
}

/// Profiles are written by the auth provider; this side never creates them.
pub struct MongoProfileRepository {
    collection: Collection<Profile>,
}

impl MongoProfileRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection(PROFILES_COLLECTION);
        Self { collection }
    }
}

#[async_trait]
impl ProfileRepository for MongoProfileRepository {
    async fn find_by_id(&self, user_id: &str) -> AppResult<Option<Profile>> {
        let profile = self.collection.find_one(doc! { "id": user_id }).await?;
        Ok(profile)
    }
}
