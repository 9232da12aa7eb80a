use alarmbot_domain::{Alarm, AlarmLinks, AlarmStatus, AlarmTimes, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AlarmDTO {
    pub id: ID,
    pub name: String,
    pub description: Option<String>,
    pub is_repeatable: bool,
    pub status: AlarmStatus,
    pub links: AlarmLinksDTO,
    pub times: AlarmTimesDTO,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AlarmLinksDTO {
    pub user_id: ID,
    pub parent_id: ID,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AlarmTimesDTO {
    pub creation_time: i64,
    pub next_notion_time: Option<i64>,
    pub end_time: Option<i64>,
    pub repeat_interval: Option<i64>,
}

impl AlarmDTO {
    pub fn new(alarm: Alarm) -> Self {
        Self {
            id: alarm.id,
            name: alarm.name,
            description: alarm.description,
            is_repeatable: alarm.is_repeatable,
            status: alarm.status,
            links: AlarmLinksDTO::new(alarm.links),
            times: AlarmTimesDTO::new(alarm.times),
        }
    }
}

impl AlarmLinksDTO {
    pub fn new(links: AlarmLinks) -> Self {
        Self {
            user_id: links.user_id,
            parent_id: links.parent_id,
        }
    }
}

impl AlarmTimesDTO {
    pub fn new(times: AlarmTimes) -> Self {
        Self {
            creation_time: times.creation_time,
            next_notion_time: times.next_notion_time,
            end_time: times.end_time,
            repeat_interval: times.repeat_interval,
        }
    }
}
