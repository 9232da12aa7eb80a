use super::INoteRepo;
use crate::repos::shared::inmemory_repo::*;
use crate::repos::shared::query_structs::{NotePatch, NoteQuery};
use crate::repos::shared::repo::{DeleteResult, InsertError};
use alarmbot_domain::{Note, ID};

pub struct InMemoryNoteRepo {
    notes: std::sync::Mutex<Vec<Note>>,
}

impl InMemoryNoteRepo {
    pub fn new() -> Self {
        Self {
            notes: std::sync::Mutex::new(Vec::new()),
        }
    }
}

impl Default for InMemoryNoteRepo {
    fn default() -> Self {
        Self::new()
    }
}

fn matches_query(note: &Note, query: &NoteQuery) -> bool {
    if let Some(user_id) = &query.user_id {
        if note.links.user_id != *user_id {
            return false;
        }
    }
    if let Some(theme_id) = &query.theme_id {
        if note.links.theme_id != *theme_id {
            return false;
        }
    }
    true
}

#[async_trait::async_trait]
impl INoteRepo for InMemoryNoteRepo {
    async fn insert(&self, note: &Note) -> Result<(), InsertError> {
        insert(note, &self.notes)
    }

    async fn find(&self, note_id: &ID) -> Option<Note> {
        find(note_id, &self.notes)
    }

    async fn find_by(&self, query: &NoteQuery) -> anyhow::Result<Vec<Note>> {
        Ok(find_by(&self.notes, |note| matches_query(note, query)))
    }

    async fn update_fields(&self, note_id: &ID, patch: &NotePatch) -> anyhow::Result<i64> {
        let patch = patch.clone();
        Ok(update_one(note_id, &self.notes, move |note| {
            if let Some(name) = patch.name {
                note.name = name;
            }
            if let Some(text) = patch.text {
                note.data.text = text;
            }
            if let Some(end_time) = patch.end_time {
                note.times.end_time = Some(end_time);
            }
        }))
    }

    async fn delete(&self, note_id: &ID) -> Option<Note> {
        delete(note_id, &self.notes)
    }

    async fn delete_by(&self, query: &NoteQuery) -> anyhow::Result<DeleteResult> {
        Ok(delete_by(&self.notes, |note| matches_query(note, query)))
    }
}
