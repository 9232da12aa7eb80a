use alarmbot_domain::{CheckPoint, Note, NoteData, NoteLinks, NoteTimes, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NoteDTO {
    pub id: ID,
    pub name: String,
    pub links: NoteLinksDTO,
    pub data: NoteDataDTO,
    pub times: NoteTimesDTO,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NoteLinksDTO {
    pub user_id: ID,
    pub theme_id: ID,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CheckPointDTO {
    pub text: String,
    pub is_finish: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NoteDataDTO {
    pub text: String,
    #[serde(default)]
    pub attachments: Vec<String>,
    #[serde(default)]
    pub check_points: Vec<CheckPointDTO>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NoteTimesDTO {
    pub creation_time: i64,
    pub end_time: Option<i64>,
}

impl NoteDTO {
    pub fn new(note: Note) -> Self {
        Self {
            id: note.id,
            name: note.name,
            links: NoteLinksDTO::new(note.links),
            data: NoteDataDTO::new(note.data),
            times: NoteTimesDTO::new(note.times),
        }
    }
}

impl NoteLinksDTO {
    pub fn new(links: NoteLinks) -> Self {
        Self {
            user_id: links.user_id,
            theme_id: links.theme_id,
        }
    }
}

impl NoteDataDTO {
    pub fn new(data: NoteData) -> Self {
        Self {
            text: data.text,
            attachments: data.attachments,
            check_points: data
                .check_points
                .into_iter()
                .map(|cp| CheckPointDTO {
                    text: cp.text,
                    is_finish: cp.is_finish,
                })
                .collect(),
        }
    }

    pub fn into_domain(self) -> NoteData {
        NoteData {
            text: self.text,
            attachments: self.attachments,
            check_points: self
                .check_points
                .into_iter()
                .map(|cp| CheckPoint {
                    text: cp.text,
                    is_finish: cp.is_finish,
                })
                .collect(),
        }
    }
}

impl NoteTimesDTO {
    pub fn new(times: NoteTimes) -> Self {
        Self {
            creation_time: times.creation_time,
            end_time: times.end_time,
        }
    }
}
