use super::IUserRepo;
use crate::repos::shared::mongo_repo::{self, MongoDocument};
use crate::repos::shared::query_structs::UserPatch;
use crate::repos::shared::repo::InsertError;
use alarmbot_domain::{User, ID};
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    Collection, Database,
};
use serde::{Deserialize, Serialize};

pub struct MongoUserRepo {
    collection: Collection<Document>,
}

impl MongoUserRepo {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("users"),
        }
    }
}

fn patch_to_set(patch: &UserPatch) -> Document {
    let mut set = Document::new();
    if let Some(username) = &patch.username {
        set.insert("username", username.clone());
    }
    if let Some(first_name) = &patch.first_name {
        set.insert("first_name", first_name.clone());
    }
    if let Some(last_name) = &patch.last_name {
        set.insert("last_name", last_name.clone());
    }
    set
}

#[async_trait::async_trait]
impl IUserRepo for MongoUserRepo {
    async fn insert(&self, user: &User) -> Result<(), InsertError> {
        mongo_repo::insert::<_, UserMongo>(&self.collection, user).await
    }

    async fn find(&self, user_id: &ID) -> Option<User> {
        mongo_repo::find::<_, UserMongo>(&self.collection, user_id.inner_ref()).await
    }

    async fn update_fields(&self, user_id: &ID, patch: &UserPatch) -> anyhow::Result<i64> {
        let set = patch_to_set(patch);
        if set.is_empty() {
            return Ok(self.find(user_id).await.map(|_| 1).unwrap_or(0));
        }
        let filter = doc! { "_id": *user_id.inner_ref() };
        mongo_repo::update_one_set(&self.collection, filter, set).await
    }

    async fn delete(&self, user_id: &ID) -> Option<User> {
        mongo_repo::delete::<_, UserMongo>(&self.collection, user_id.inner_ref()).await
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct UserMongo {
    pub _id: ObjectId,
    pub username: String,
    pub lang_code: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl MongoDocument<User> for UserMongo {
    fn to_domain(self) -> User {
        User {
            id: ID::from(self._id),
            username: self.username,
            lang_code: self.lang_code,
            first_name: self.first_name,
            last_name: self.last_name,
        }
    }

    fn from_domain(user: &User) -> Self {
        Self {
            _id: *user.id.inner_ref(),
            username: user.username.clone(),
            lang_code: user.lang_code.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
        }
    }

    fn get_id_filter(&self) -> Document {
        doc! {
            "_id": self._id
        }
    }
}
