mod inmemory;
mod mongo;

use crate::repos::shared::query_structs::{AlarmPatch, AlarmQuery};
use crate::repos::shared::repo::{DeleteResult, InsertError};
use alarmbot_domain::{Alarm, ID};
pub use inmemory::InMemoryAlarmRepo;
pub use mongo::MongoAlarmRepo;

#[async_trait::async_trait]
pub trait IAlarmRepo: Send + Sync {
    async fn insert(&self, alarm: &Alarm) -> Result<(), InsertError>;
    async fn find(&self, alarm_id: &ID) -> Option<Alarm>;
    /// Empty result is a normal empty `Vec`, callers decide whether that
    /// is an error for them
    async fn find_by(&self, query: &AlarmQuery) -> anyhow::Result<Vec<Alarm>>;
    /// Returns how many alarms matched the id (0 or 1)
    async fn update_fields(&self, alarm_id: &ID, patch: &AlarmPatch) -> anyhow::Result<i64>;
    async fn delete(&self, alarm_id: &ID) -> Option<Alarm>;
    async fn delete_by(&self, query: &AlarmQuery) -> anyhow::Result<DeleteResult>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use alarmbot_domain::{AlarmLinks, AlarmStatus, AlarmTimes, Entity};

    fn generate_default_alarm() -> Alarm {
        Alarm {
            id: Default::default(),
            name: "Wake up".into(),
            description: None,
            is_repeatable: false,
            status: AlarmStatus::Queue,
            links: AlarmLinks {
                user_id: Default::default(),
                parent_id: Default::default(),
            },
            times: AlarmTimes {
                creation_time: 100,
                next_notion_time: Some(200),
                end_time: None,
                repeat_interval: None,
            },
        }
    }

    #[tokio::test]
    async fn create_and_delete() {
        let repo = InMemoryAlarmRepo::new();
        let alarm = generate_default_alarm();

        assert!(repo.insert(&alarm).await.is_ok());

        let found = repo.find(&alarm.id).await.expect("To find alarm");
        assert!(Entity::eq(&found, &alarm));

        let deleted = repo.delete(&alarm.id).await.expect("To delete alarm");
        assert!(Entity::eq(&deleted, &alarm));
        assert!(repo.find(&alarm.id).await.is_none());
    }

    #[tokio::test]
    async fn rejects_duplicate_id() {
        let repo = InMemoryAlarmRepo::new();
        let alarm = generate_default_alarm();

        assert!(repo.insert(&alarm).await.is_ok());
        match repo.insert(&alarm).await {
            Err(InsertError::DuplicateKey) => {}
            other => panic!("Expected duplicate key error, got: {:?}", other.err()),
        }
    }

    #[tokio::test]
    async fn finds_by_status_and_links() {
        let repo = InMemoryAlarmRepo::new();
        let mut queued = generate_default_alarm();
        queued.status = AlarmStatus::Queue;
        let mut ready = generate_default_alarm();
        ready.status = AlarmStatus::Ready;
        repo.insert(&queued).await.unwrap();
        repo.insert(&ready).await.unwrap();

        let query = AlarmQuery {
            status: Some(AlarmStatus::Queue),
            ..Default::default()
        };
        let found = repo.find_by(&query).await.unwrap();
        assert_eq!(found.len(), 1);
        assert!(Entity::eq(&found[0], &queued));

        let query = AlarmQuery {
            user_id: Some(queued.links.user_id.clone()),
            ..Default::default()
        };
        let found = repo.find_by(&query).await.unwrap();
        assert_eq!(found.len(), 1);

        // No matches is an empty list, not an error
        let query = AlarmQuery {
            parent_id: Some(Default::default()),
            ..Default::default()
        };
        assert!(repo.find_by(&query).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn respects_query_limit() {
        let repo = InMemoryAlarmRepo::new();
        for _ in 0..5 {
            repo.insert(&generate_default_alarm()).await.unwrap();
        }

        let query = AlarmQuery {
            limit: Some(3),
            ..Default::default()
        };
        assert_eq!(repo.find_by(&query).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn updates_only_patched_fields() {
        let repo = InMemoryAlarmRepo::new();
        let alarm = generate_default_alarm();
        repo.insert(&alarm).await.unwrap();

        let patch = AlarmPatch {
            status: Some(AlarmStatus::Ready),
            ..Default::default()
        };
        let matched = repo.update_fields(&alarm.id, &patch).await.unwrap();
        assert_eq!(matched, 1);

        let updated = repo.find(&alarm.id).await.unwrap();
        assert_eq!(updated.status, AlarmStatus::Ready);
        assert_eq!(updated.name, alarm.name);
        assert_eq!(updated.times, alarm.times);

        let patch = AlarmPatch {
            next_notion_time: Some(500),
            ..Default::default()
        };
        repo.update_fields(&alarm.id, &patch).await.unwrap();
        let updated = repo.find(&alarm.id).await.unwrap();
        assert_eq!(updated.times.next_notion_time, Some(500));
        assert_eq!(updated.status, AlarmStatus::Ready);
    }

    #[tokio::test]
    async fn update_of_absent_alarm_matches_nothing() {
        let repo = InMemoryAlarmRepo::new();
        let patch = AlarmPatch {
            status: Some(AlarmStatus::Stopped),
            ..Default::default()
        };
        let matched = repo.update_fields(&Default::default(), &patch).await.unwrap();
        assert_eq!(matched, 0);
    }

    #[tokio::test]
    async fn deletes_all_alarms_of_a_parent() {
        let repo = InMemoryAlarmRepo::new();
        let parent_id: ID = Default::default();
        for _ in 0..3 {
            let mut alarm = generate_default_alarm();
            alarm.links.parent_id = parent_id.clone();
            repo.insert(&alarm).await.unwrap();
        }
        let other = generate_default_alarm();
        repo.insert(&other).await.unwrap();

        let query = AlarmQuery {
            parent_id: Some(parent_id),
            ..Default::default()
        };
        let res = repo.delete_by(&query).await.unwrap();
        assert_eq!(res.deleted_count, 3);

        let res = repo.delete_by(&query).await.unwrap();
        assert_eq!(res.deleted_count, 0);

        assert!(repo.find(&other.id).await.is_some());
    }
}
