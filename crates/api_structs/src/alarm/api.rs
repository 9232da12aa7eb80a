use serde::{Deserialize, Serialize};

use crate::dtos::{AlarmDTO, AlarmLinksDTO};
use alarmbot_domain::{Alarm, AlarmStatus, ID};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlarmResponse {
    pub alarm: AlarmDTO,
}

impl AlarmResponse {
    pub fn new(alarm: Alarm) -> Self {
        Self {
            alarm: AlarmDTO::new(alarm),
        }
    }
}

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlarmsResponse {
    pub alarms: Vec<AlarmDTO>,
}

impl AlarmsResponse {
    pub fn new(alarms: Vec<Alarm>) -> Self {
        Self {
            alarms: alarms.into_iter().map(AlarmDTO::new).collect(),
        }
    }
}

pub mod create_alarm {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub name: String,
        #[serde(default)]
        pub description: Option<String>,
        pub is_repeatable: bool,
        pub links: AlarmLinksDTO,
        pub next_notion_time: i64,
        #[serde(default)]
        pub repeat_interval: Option<i64>,
    }

    pub type APIResponse = AlarmResponse;
}

pub mod get_alarm {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub alarm_id: ID,
    }

    pub type APIResponse = AlarmResponse;
}

pub mod get_alarms_by_user {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub user_id: ID,
    }

    pub type APIResponse = AlarmsResponse;
}

pub mod get_alarms_by_parent {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub parent_id: ID,
    }

    pub type APIResponse = AlarmsResponse;
}

pub mod update_alarm {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub alarm_id: ID,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        #[serde(default)]
        pub name: Option<String>,
        #[serde(default)]
        pub description: Option<String>,
        #[serde(default)]
        pub status: Option<AlarmStatus>,
        #[serde(default)]
        pub next_notion_time: Option<i64>,
        #[serde(default)]
        pub end_time: Option<i64>,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub update_count: i64,
    }
}

pub mod postpone_alarm {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub alarm_id: ID,
    }

    pub type APIResponse = AlarmResponse;
}

pub mod delete_alarm {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub alarm_id: ID,
    }

    pub type APIResponse = AlarmResponse;
}

pub mod delete_alarms_by_parent {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub parent_id: ID,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub deleted_count: i64,
    }
}
