use super::IAlarmRepo;
use crate::repos::shared::inmemory_repo::*;
use crate::repos::shared::query_structs::{AlarmPatch, AlarmQuery};
use crate::repos::shared::repo::{DeleteResult, InsertError};
use alarmbot_domain::{Alarm, ID};

pub struct InMemoryAlarmRepo {
    alarms: std::sync::Mutex<Vec<Alarm>>,
}

impl InMemoryAlarmRepo {
    pub fn new() -> Self {
        Self {
            alarms: std::sync::Mutex::new(Vec::new()),
        }
    }
}

impl Default for InMemoryAlarmRepo {
    fn default() -> Self {
        Self::new()
    }
}

fn matches_query(alarm: &Alarm, query: &AlarmQuery) -> bool {
    if let Some(status) = query.status {
        if alarm.status != status {
            return false;
        }
    }
    if let Some(user_id) = &query.user_id {
        if alarm.links.user_id != *user_id {
            return false;
        }
    }
    if let Some(parent_id) = &query.parent_id {
        if alarm.links.parent_id != *parent_id {
            return false;
        }
    }
    true
}

#[async_trait::async_trait]
impl IAlarmRepo for InMemoryAlarmRepo {
    async fn insert(&self, alarm: &Alarm) -> Result<(), InsertError> {
        insert(alarm, &self.alarms)
    }

    async fn find(&self, alarm_id: &ID) -> Option<Alarm> {
        find(alarm_id, &self.alarms)
    }

    async fn find_by(&self, query: &AlarmQuery) -> anyhow::Result<Vec<Alarm>> {
        let mut alarms = find_by(&self.alarms, |alarm| matches_query(alarm, query));
        if let Some(limit) = query.limit {
            alarms.truncate(limit as usize);
        }
        Ok(alarms)
    }

    async fn update_fields(&self, alarm_id: &ID, patch: &AlarmPatch) -> anyhow::Result<i64> {
        let patch = patch.clone();
        Ok(update_one(alarm_id, &self.alarms, move |alarm| {
            if let Some(name) = patch.name {
                alarm.name = name;
            }
            if let Some(description) = patch.description {
                alarm.description = Some(description);
            }
            if let Some(status) = patch.status {
                alarm.status = status;
            }
            if let Some(next_notion_time) = patch.next_notion_time {
                alarm.times.next_notion_time = Some(next_notion_time);
            }
            if let Some(end_time) = patch.end_time {
                alarm.times.end_time = Some(end_time);
            }
        }))
    }

    async fn delete(&self, alarm_id: &ID) -> Option<Alarm> {
        delete(alarm_id, &self.alarms)
    }

    async fn delete_by(&self, query: &AlarmQuery) -> anyhow::Result<DeleteResult> {
        Ok(delete_by(&self.alarms, |alarm| matches_query(alarm, query)))
    }
}
