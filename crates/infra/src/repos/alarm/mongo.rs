use super::IAlarmRepo;
use crate::repos::shared::mongo_repo::{self, MongoDocument};
use crate::repos::shared::query_structs::{AlarmPatch, AlarmQuery};
use crate::repos::shared::repo::{DeleteResult, InsertError};
use alarmbot_domain::{Alarm, AlarmLinks, AlarmStatus, AlarmTimes, ID};
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    Collection, Database,
};
use serde::{Deserialize, Serialize};

pub struct MongoAlarmRepo {
    collection: Collection<Document>,
}

impl MongoAlarmRepo {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("alarms"),
        }
    }
}

fn query_to_filter(query: &AlarmQuery) -> Document {
    let mut filter = Document::new();
    if let Some(status) = &query.status {
        filter.insert("status", status.to_string());
    }
    if let Some(user_id) = &query.user_id {
        filter.insert("links.user_id", *user_id.inner_ref());
    }
    if let Some(parent_id) = &query.parent_id {
        filter.insert("links.parent_id", *parent_id.inner_ref());
    }
    filter
}

fn patch_to_set(patch: &AlarmPatch) -> Document {
    let mut set = Document::new();
    if let Some(name) = &patch.name {
        set.insert("name", name.clone());
    }
    if let Some(description) = &patch.description {
        set.insert("description", description.clone());
    }
    if let Some(status) = &patch.status {
        set.insert("status", status.to_string());
    }
    if let Some(next_notion_time) = patch.next_notion_time {
        set.insert("times.next_notion_time", next_notion_time);
    }
    if let Some(end_time) = patch.end_time {
        set.insert("times.end_time", end_time);
    }
    set
}

#[async_trait::async_trait]
impl IAlarmRepo for MongoAlarmRepo {
    async fn insert(&self, alarm: &Alarm) -> Result<(), InsertError> {
        mongo_repo::insert::<_, AlarmMongo>(&self.collection, alarm).await
    }

    async fn find(&self, alarm_id: &ID) -> Option<Alarm> {
        mongo_repo::find::<_, AlarmMongo>(&self.collection, alarm_id.inner_ref()).await
    }

    async fn find_by(&self, query: &AlarmQuery) -> anyhow::Result<Vec<Alarm>> {
        let filter = query_to_filter(query);
        mongo_repo::find_many_by::<_, AlarmMongo>(&self.collection, filter, query.limit).await
    }

    async fn update_fields(&self, alarm_id: &ID, patch: &AlarmPatch) -> anyhow::Result<i64> {
        let set = patch_to_set(patch);
        if set.is_empty() {
            return Ok(self.find(alarm_id).await.map(|_| 1).unwrap_or(0));
        }
        let filter = doc! { "_id": *alarm_id.inner_ref() };
        mongo_repo::update_one_set(&self.collection, filter, set).await
    }

    async fn delete(&self, alarm_id: &ID) -> Option<Alarm> {
        mongo_repo::delete::<_, AlarmMongo>(&self.collection, alarm_id.inner_ref()).await
    }

    async fn delete_by(&self, query: &AlarmQuery) -> anyhow::Result<DeleteResult> {
        let filter = query_to_filter(query);
        mongo_repo::delete_many_by(&self.collection, filter).await
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct AlarmLinksMongo {
    pub user_id: ObjectId,
    pub parent_id: ObjectId,
}

#[derive(Debug, Serialize, Deserialize)]
struct AlarmTimesMongo {
    pub creation_time: i64,
    pub next_notion_time: Option<i64>,
    pub end_time: Option<i64>,
    pub repeat_interval: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize)]
struct AlarmMongo {
    pub _id: ObjectId,
    pub name: String,
    pub description: Option<String>,
    pub is_repeatable: bool,
    pub status: AlarmStatus,
    pub links: AlarmLinksMongo,
    pub times: AlarmTimesMongo,
}

impl MongoDocument<Alarm> for AlarmMongo {
    fn to_domain(self) -> Alarm {
        Alarm {
            id: ID::from(self._id),
            name: self.name,
            description: self.description,
            is_repeatable: self.is_repeatable,
            status: self.status,
            links: AlarmLinks {
                user_id: ID::from(self.links.user_id),
                parent_id: ID::from(self.links.parent_id),
            },
            times: AlarmTimes {
                creation_time: self.times.creation_time,
                next_notion_time: self.times.next_notion_time,
                end_time: self.times.end_time,
                repeat_interval: self.times.repeat_interval,
            },
        }
    }

    fn from_domain(alarm: &Alarm) -> Self {
        Self {
            _id: *alarm.id.inner_ref(),
            name: alarm.name.clone(),
            description: alarm.description.clone(),
            is_repeatable: alarm.is_repeatable,
            status: alarm.status,
            links: AlarmLinksMongo {
                user_id: *alarm.links.user_id.inner_ref(),
                parent_id: *alarm.links.parent_id.inner_ref(),
            },
            times: AlarmTimesMongo {
                creation_time: alarm.times.creation_time,
                next_notion_time: alarm.times.next_notion_time,
                end_time: alarm.times.end_time,
                repeat_interval: alarm.times.repeat_interval,
            },
        }
    }

    fn get_id_filter(&self) -> Document {
        doc! {
            "_id": self._id
        }
    }
}
