use super::INoteRepo;
use crate::repos::shared::mongo_repo::{self, MongoDocument};
use crate::repos::shared::query_structs::{NotePatch, NoteQuery};
use crate::repos::shared::repo::{DeleteResult, InsertError};
use alarmbot_domain::{CheckPoint, Note, NoteData, NoteLinks, NoteTimes, ID};
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    Collection, Database,
};
use serde::{Deserialize, Serialize};

pub struct MongoNoteRepo {
    collection: Collection<Document>,
}

impl MongoNoteRepo {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("notes"),
        }
    }
}

fn query_to_filter(query: &NoteQuery) -> Document {
    let mut filter = Document::new();
    if let Some(user_id) = &query.user_id {
        filter.insert("links.user_id", *user_id.inner_ref());
    }
    if let Some(theme_id) = &query.theme_id {
        filter.insert("links.theme_id", *theme_id.inner_ref());
    }
    filter
}

fn patch_to_set(patch: &NotePatch) -> Document {
    let mut set = Document::new();
    if let Some(name) = &patch.name {
        set.insert("name", name.clone());
    }
    if let Some(text) = &patch.text {
        set.insert("data.text", text.clone());
    }
    if let Some(end_time) = patch.end_time {
        set.insert("times.end_time", end_time);
    }
    set
}

#[async_trait::async_trait]
impl INoteRepo for MongoNoteRepo {
    async fn insert(&self, note: &Note) -> Result<(), InsertError> {
        mongo_repo::insert::<_, NoteMongo>(&self.collection, note).await
    }

    async fn find(&self, note_id: &ID) -> Option<Note> {
        mongo_repo::find::<_, NoteMongo>(&self.collection, note_id.inner_ref()).await
    }

    async fn find_by(&self, query: &NoteQuery) -> anyhow::Result<Vec<Note>> {
        let filter = query_to_filter(query);
        mongo_repo::find_many_by::<_, NoteMongo>(&self.collection, filter, None).await
    }

    async fn update_fields(&self, note_id: &ID, patch: &NotePatch) -> anyhow::Result<i64> {
        let set = patch_to_set(patch);
        if set.is_empty() {
            return Ok(self.find(note_id).await.map(|_| 1).unwrap_or(0));
        }
        let filter = doc! { "_id": *note_id.inner_ref() };
        mongo_repo::update_one_set(&self.collection, filter, set).await
    }

    async fn delete(&self, note_id: &ID) -> Option<Note> {
        mongo_repo::delete::<_, NoteMongo>(&self.collection, note_id.inner_ref()).await
    }

    async fn delete_by(&self, query: &NoteQuery) -> anyhow::Result<DeleteResult> {
        let filter = query_to_filter(query);
        mongo_repo::delete_many_by(&self.collection, filter).await
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct NoteLinksMongo {
    pub user_id: ObjectId,
    pub theme_id: ObjectId,
}

#[derive(Debug, Serialize, Deserialize)]
struct NoteDataMongo {
    pub text: String,
    pub attachments: Vec<String>,
    pub check_points: Vec<CheckPoint>,
}

#[derive(Debug, Serialize, Deserialize)]
struct NoteTimesMongo {
    pub creation_time: i64,
    pub end_time: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize)]
struct NoteMongo {
    pub _id: ObjectId,
    pub name: String,
    pub links: NoteLinksMongo,
    pub data: NoteDataMongo,
    pub times: NoteTimesMongo,
}

impl MongoDocument<Note> for NoteMongo {
    fn to_domain(self) -> Note {
        Note {
            id: ID::from(self._id),
            name: self.name,
            links: NoteLinks {
                user_id: ID::from(self.links.user_id),
                theme_id: ID::from(self.links.theme_id),
            },
            data: NoteData {
                text: self.data.text,
                attachments: self.data.attachments,
                check_points: self.data.check_points,
            },
            times: NoteTimes {
                creation_time: self.times.creation_time,
                end_time: self.times.end_time,
            },
        }
    }

    fn from_domain(note: &Note) -> Self {
        Self {
            _id: *note.id.inner_ref(),
            name: note.name.clone(),
            links: NoteLinksMongo {
                user_id: *note.links.user_id.inner_ref(),
                theme_id: *note.links.theme_id.inner_ref(),
            },
            data: NoteDataMongo {
                text: note.data.text.clone(),
                attachments: note.data.attachments.clone(),
                check_points: note.data.check_points.clone(),
            },
            times: NoteTimesMongo {
                creation_time: note.times.creation_time,
                end_time: note.times.end_time,
            },
        }
    }

    fn get_id_filter(&self) -> Document {
        doc! {
            "_id": self._id
        }
    }
}
