mod inmemory;
mod mongo;

use crate::repos::shared::query_structs::{NotePatch, NoteQuery};
use crate::repos::shared::repo::{DeleteResult, InsertError};
use alarmbot_domain::{Note, ID};
pub use inmemory::InMemoryNoteRepo;
pub use mongo::MongoNoteRepo;

#[async_trait::async_trait]
pub trait INoteRepo: Send + Sync {
    async fn insert(&self, note: &Note) -> Result<(), InsertError>;
    async fn find(&self, note_id: &ID) -> Option<Note>;
    async fn find_by(&self, query: &NoteQuery) -> anyhow::Result<Vec<Note>>;
    async fn update_fields(&self, note_id: &ID, patch: &NotePatch) -> anyhow::Result<i64>;
    async fn delete(&self, note_id: &ID) -> Option<Note>;
    async fn delete_by(&self, query: &NoteQuery) -> anyhow::Result<DeleteResult>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use alarmbot_domain::{CheckPoint, Entity, NoteData, NoteLinks, NoteTimes};

    fn generate_note(theme_id: &ID) -> Note {
        Note {
            id: Default::default(),
            name: "Test note".into(),
            links: NoteLinks {
                user_id: Default::default(),
                theme_id: theme_id.clone(),
            },
            data: NoteData {
                text: "test note text".into(),
                attachments: Vec::new(),
                check_points: vec![CheckPoint {
                    text: "test checkpoint".into(),
                    is_finish: false,
                }],
            },
            times: NoteTimes {
                creation_time: 100,
                end_time: None,
            },
        }
    }

    #[tokio::test]
    async fn crud_roundtrip() {
        let repo = InMemoryNoteRepo::new();
        let theme_id: ID = Default::default();
        let note = generate_note(&theme_id);

        assert!(repo.insert(&note).await.is_ok());
        assert!(Entity::eq(&repo.find(&note.id).await.expect("To find note"), &note));

        let patch = NotePatch {
            text: Some("updated".into()),
            ..Default::default()
        };
        assert_eq!(repo.update_fields(&note.id, &patch).await.unwrap(), 1);
        assert_eq!(repo.find(&note.id).await.unwrap().data.text, "updated");

        assert!(repo.delete(&note.id).await.is_some());
        assert!(repo.find(&note.id).await.is_none());
    }

    #[tokio::test]
    async fn deletes_all_notes_of_a_theme() {
        let repo = InMemoryNoteRepo::new();
        let theme_id: ID = Default::default();
        for _ in 0..2 {
            repo.insert(&generate_note(&theme_id)).await.unwrap();
        }
        let other = generate_note(&Default::default());
        repo.insert(&other).await.unwrap();

        let query = NoteQuery {
            theme_id: Some(theme_id),
            ..Default::default()
        };
        assert_eq!(repo.find_by(&query).await.unwrap().len(), 2);
        assert_eq!(repo.delete_by(&query).await.unwrap().deleted_count, 2);
        assert_eq!(repo.delete_by(&query).await.unwrap().deleted_count, 0);
        assert!(repo.find(&other.id).await.is_some());
    }
}
