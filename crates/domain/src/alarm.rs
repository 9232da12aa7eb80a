use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};

/// Status of an `Alarm`.
///
/// `Queue` alarms are waiting for their due time, the status check job
/// promotes them to `Ready` once `times.next_notion_time` has passed.
/// `Stopped` and `Deleted` are only ever set through an explicit update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlarmStatus {
    #[serde(rename = "QUEUE")]
    Queue,
    #[serde(rename = "READY")]
    Ready,
    #[serde(rename = "STOPPED")]
    Stopped,
    #[serde(rename = "DELETED")]
    Deleted,
}

impl std::fmt::Display for AlarmStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Queue => "QUEUE",
            Self::Ready => "READY",
            Self::Stopped => "STOPPED",
            Self::Deleted => "DELETED",
        };
        write!(f, "{}", s)
    }
}

/// Links an `Alarm` to its owning `User` and to the parent entity that
/// spawned it. Alarms created for the same parent form a group that can
/// be deleted in one call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlarmLinks {
    pub user_id: ID,
    pub parent_id: ID,
}

/// All timestamps are unix epoch millis, `repeat_interval` is minutes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlarmTimes {
    pub creation_time: i64,
    /// The due time. `None` means this alarm will never again be promoted
    /// to `Ready` by the status check job.
    pub next_notion_time: Option<i64>,
    pub end_time: Option<i64>,
    /// Present only when the alarm `is_repeatable`
    pub repeat_interval: Option<i64>,
}

/// A scheduled reminder owned by a `User`
#[derive(Debug, Clone, PartialEq)]
pub struct Alarm {
    pub id: ID,
    pub name: String,
    pub description: Option<String>,
    pub is_repeatable: bool,
    pub status: AlarmStatus,
    pub links: AlarmLinks,
    pub times: AlarmTimes,
}

impl Alarm {
    /// Whether the status check job should promote this alarm to `Ready`
    pub fn is_due(&self, now: i64) -> bool {
        match self.times.next_notion_time {
            Some(next_notion_time) => {
                self.status == AlarmStatus::Queue && next_notion_time < now
            }
            None => false,
        }
    }
}

impl Entity for Alarm {
    fn id(&self) -> ID {
        self.id.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alarm_with_due_time(next_notion_time: Option<i64>) -> Alarm {
        Alarm {
            id: Default::default(),
            name: "Test alarm".into(),
            description: None,
            is_repeatable: false,
            status: AlarmStatus::Queue,
            links: AlarmLinks {
                user_id: Default::default(),
                parent_id: Default::default(),
            },
            times: AlarmTimes {
                creation_time: 0,
                next_notion_time,
                end_time: None,
                repeat_interval: None,
            },
        }
    }

    #[test]
    fn queued_alarm_with_passed_due_time_is_due() {
        let alarm = alarm_with_due_time(Some(100));
        assert!(alarm.is_due(101));
    }

    #[test]
    fn future_or_equal_due_time_is_not_due() {
        let alarm = alarm_with_due_time(Some(100));
        assert!(!alarm.is_due(100));
        assert!(!alarm.is_due(99));
    }

    #[test]
    fn alarm_without_due_time_is_never_due() {
        let alarm = alarm_with_due_time(None);
        assert!(!alarm.is_due(i64::MAX));
    }

    #[test]
    fn non_queued_alarm_is_not_due() {
        for status in &[
            AlarmStatus::Ready,
            AlarmStatus::Stopped,
            AlarmStatus::Deleted,
        ] {
            let mut alarm = alarm_with_due_time(Some(100));
            alarm.status = *status;
            assert!(!alarm.is_due(101));
        }
    }

    #[test]
    fn status_serializes_to_wire_names() {
        assert_eq!(
            serde_json::to_string(&AlarmStatus::Queue).unwrap(),
            "\"QUEUE\""
        );
        assert_eq!(
            serde_json::from_str::<AlarmStatus>("\"READY\"").unwrap(),
            AlarmStatus::Ready
        );
    }
}
