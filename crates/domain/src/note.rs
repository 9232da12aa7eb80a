use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckPoint {
    pub text: String,
    pub is_finish: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteData {
    pub text: String,
    #[serde(default)]
    pub attachments: Vec<String>,
    #[serde(default)]
    pub check_points: Vec<CheckPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteLinks {
    pub user_id: ID,
    pub theme_id: ID,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteTimes {
    pub creation_time: i64,
    pub end_time: Option<i64>,
}

/// A note inside a `Theme`
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    pub id: ID,
    pub name: String,
    pub links: NoteLinks,
    pub data: NoteData,
    pub times: NoteTimes,
}

impl Entity for Note {
    fn id(&self) -> ID {
        self.id.clone()
    }
}
