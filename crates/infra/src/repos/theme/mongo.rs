use super::IThemeRepo;
use crate::repos::shared::mongo_repo::{self, MongoDocument};
use crate::repos::shared::query_structs::ThemePatch;
use crate::repos::shared::repo::InsertError;
use alarmbot_domain::{Theme, ID};
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    Collection, Database,
};
use serde::{Deserialize, Serialize};

pub struct MongoThemeRepo {
    collection: Collection<Document>,
}

impl MongoThemeRepo {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("themes"),
        }
    }
}

fn patch_to_set(patch: &ThemePatch) -> Document {
    let mut set = Document::new();
    if let Some(name) = &patch.name {
        set.insert("name", name.clone());
    }
    if let Some(description) = &patch.description {
        set.insert("description", description.clone());
    }
    set
}

#[async_trait::async_trait]
impl IThemeRepo for MongoThemeRepo {
    async fn insert(&self, theme: &Theme) -> Result<(), InsertError> {
        mongo_repo::insert::<_, ThemeMongo>(&self.collection, theme).await
    }

    async fn find(&self, theme_id: &ID) -> Option<Theme> {
        mongo_repo::find::<_, ThemeMongo>(&self.collection, theme_id.inner_ref()).await
    }

    async fn find_by_user(&self, user_id: &ID) -> anyhow::Result<Vec<Theme>> {
        let filter = doc! { "user_id": *user_id.inner_ref() };
        mongo_repo::find_many_by::<_, ThemeMongo>(&self.collection, filter, None).await
    }

    async fn update_fields(&self, theme_id: &ID, patch: &ThemePatch) -> anyhow::Result<i64> {
        let set = patch_to_set(patch);
        if set.is_empty() {
            return Ok(self.find(theme_id).await.map(|_| 1).unwrap_or(0));
        }
        let filter = doc! { "_id": *theme_id.inner_ref() };
        mongo_repo::update_one_set(&self.collection, filter, set).await
    }

    async fn delete(&self, theme_id: &ID) -> Option<Theme> {
        mongo_repo::delete::<_, ThemeMongo>(&self.collection, theme_id.inner_ref()).await
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ThemeMongo {
    pub _id: ObjectId,
    pub name: String,
    pub description: Option<String>,
    pub user_id: ObjectId,
}

impl MongoDocument<Theme> for ThemeMongo {
    fn to_domain(self) -> Theme {
        Theme {
            id: ID::from(self._id),
            name: self.name,
            description: self.description,
            user_id: ID::from(self.user_id),
        }
    }

    fn from_domain(theme: &Theme) -> Self {
        Self {
            _id: *theme.id.inner_ref(),
            name: theme.name.clone(),
            description: theme.description.clone(),
            user_id: *theme.user_id.inner_ref(),
        }
    }

    fn get_id_filter(&self) -> Document {
        doc! {
            "_id": self._id
        }
    }
}
