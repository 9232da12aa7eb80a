mod alarm;
mod note;
mod shared;
mod theme;
mod user;

pub use alarm::{IAlarmRepo, InMemoryAlarmRepo, MongoAlarmRepo};
use mongodb::{bson::doc, bson::Document, options::ClientOptions, Client};
pub use note::{INoteRepo, InMemoryNoteRepo, MongoNoteRepo};
use std::sync::Arc;
pub use theme::{IThemeRepo, InMemoryThemeRepo, MongoThemeRepo};
use tracing::info;
pub use user::{IUserRepo, InMemoryUserRepo, MongoUserRepo};

pub use shared::query_structs::*;
pub use shared::repo::{DeleteResult, InsertError};

#[derive(Clone)]
pub struct Repos {
    pub alarms: Arc<dyn IAlarmRepo>,
    pub notes: Arc<dyn INoteRepo>,
    pub themes: Arc<dyn IThemeRepo>,
    pub users: Arc<dyn IUserRepo>,
}

impl Repos {
    pub async fn create_mongodb(
        connection_string: &str,
        db_name: &str,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let client_options = ClientOptions::parse(connection_string).await?;
        let client = Client::with_options(client_options)?;
        let db = client.database(db_name);

        // This is needed to make sure that db is ready when opening server
        info!("DB CHECKING CONNECTION ...");
        db.collection::<Document>("server-start")
            .insert_one(
                doc! {
                "server-start": 1
                },
                None,
            )
            .await?;
        info!("DB CHECKING CONNECTION ... [done]");
        Ok(Self {
            alarms: Arc::new(MongoAlarmRepo::new(&db)),
            notes: Arc::new(MongoNoteRepo::new(&db)),
            themes: Arc::new(MongoThemeRepo::new(&db)),
            users: Arc::new(MongoUserRepo::new(&db)),
        })
    }

    pub fn create_inmemory() -> Self {
        Self {
            alarms: Arc::new(InMemoryAlarmRepo::new()),
            notes: Arc::new(InMemoryNoteRepo::new()),
            themes: Arc::new(InMemoryThemeRepo::new()),
            users: Arc::new(InMemoryUserRepo::new()),
        }
    }
}
