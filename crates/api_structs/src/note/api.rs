use serde::{Deserialize, Serialize};

use crate::dtos::{NoteDTO, NoteDataDTO, NoteLinksDTO};
use alarmbot_domain::{Note, ID};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteResponse {
    pub note: NoteDTO,
}

impl NoteResponse {
    pub fn new(note: Note) -> Self {
        Self {
            note: NoteDTO::new(note),
        }
    }
}

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotesResponse {
    pub notes: Vec<NoteDTO>,
}

impl NotesResponse {
    pub fn new(notes: Vec<Note>) -> Self {
        Self {
            notes: notes.into_iter().map(NoteDTO::new).collect(),
        }
    }
}

pub mod create_note {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub name: String,
        pub links: NoteLinksDTO,
        pub data: NoteDataDTO,
    }

    pub type APIResponse = NoteResponse;
}

pub mod get_note {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub note_id: ID,
    }

    pub type APIResponse = NoteResponse;
}

pub mod get_notes_by_theme {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub theme_id: ID,
    }

    pub type APIResponse = NotesResponse;
}

pub mod update_note {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub note_id: ID,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        #[serde(default)]
        pub name: Option<String>,
        #[serde(default)]
        pub text: Option<String>,
        #[serde(default)]
        pub end_time: Option<i64>,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub update_count: i64,
    }
}

pub mod delete_note {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub note_id: ID,
    }

    pub type APIResponse = NoteResponse;
}

pub mod delete_notes_by_theme {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub theme_id: ID,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub deleted_count: i64,
    }
}
