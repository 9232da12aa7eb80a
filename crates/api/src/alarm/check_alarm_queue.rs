use crate::shared::usecase::UseCase;
use alarmbot_domain::AlarmStatus;
use alarmbot_infra::{AlarmPatch, AlarmQuery, Context};
use tracing::{error, info};

/// A single tick of the alarm status job. Scans the queued alarms and
/// promotes the due ones to `Ready`, where clients can pick them up.
#[derive(Debug)]
pub struct CheckAlarmQueueUseCase;

#[derive(Debug)]
pub enum UseCaseErrors {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for CheckAlarmQueueUseCase {
    type Response = usize;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Errors> {
        let query = AlarmQuery {
            status: Some(AlarmStatus::Queue),
            limit: Some(ctx.config.alarm_queue_scan_limit),
            ..Default::default()
        };
        let queued_alarms = ctx
            .repos
            .alarms
            .find_by(&query)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;

        let now = ctx.sys.get_timestamp_millis();
        let mut promoted = 0;

        for alarm in queued_alarms {
            if !alarm.is_due(now) {
                continue;
            }

            let patch = AlarmPatch {
                status: Some(AlarmStatus::Ready),
                ..Default::default()
            };
            // One failing alarm must not block the rest of the batch
            match ctx.repos.alarms.update_fields(&alarm.id, &patch).await {
                Ok(_) => promoted += 1,
                Err(e) => error!("Unable to promote due alarm with id: {}. Error: {:?}", alarm.id, e),
            }
        }

        if promoted > 0 {
            info!("Promoted {} due alarm(s) to ready", promoted);
        }

        Ok(promoted)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::alarm::postpone_alarm::PostponeAlarmUseCase;
    use crate::shared::usecase::execute;
    use alarmbot_domain::{Alarm, AlarmLinks, AlarmTimes, ID};
    use alarmbot_infra::{DeleteResult, IAlarmRepo, ISys, InsertError};
    use std::sync::Arc;

    struct TestSys(i64);
    impl ISys for TestSys {
        fn get_timestamp_millis(&self) -> i64 {
            self.0
        }
    }

    /// Delegates to a real repo but fails every update for one alarm id
    struct FailingUpdateAlarmRepo {
        inner: Arc<dyn IAlarmRepo>,
        failing_id: ID,
    }

    #[async_trait::async_trait]
    impl IAlarmRepo for FailingUpdateAlarmRepo {
        async fn insert(&self, alarm: &Alarm) -> Result<(), InsertError> {
            self.inner.insert(alarm).await
        }

        async fn find(&self, alarm_id: &ID) -> Option<Alarm> {
            self.inner.find(alarm_id).await
        }

        async fn find_by(&self, query: &AlarmQuery) -> anyhow::Result<Vec<Alarm>> {
            self.inner.find_by(query).await
        }

        async fn update_fields(&self, alarm_id: &ID, patch: &AlarmPatch) -> anyhow::Result<i64> {
            if *alarm_id == self.failing_id {
                anyhow::bail!("Lost connection to the store");
            }
            self.inner.update_fields(alarm_id, patch).await
        }

        async fn delete(&self, alarm_id: &ID) -> Option<Alarm> {
            self.inner.delete(alarm_id).await
        }

        async fn delete_by(&self, query: &AlarmQuery) -> anyhow::Result<DeleteResult> {
            self.inner.delete_by(query).await
        }
    }

    fn queued_alarm(next_notion_time: Option<i64>) -> Alarm {
        Alarm {
            id: Default::default(),
            name: "Stand up".into(),
            description: None,
            is_repeatable: false,
            status: AlarmStatus::Queue,
            links: AlarmLinks {
                user_id: Default::default(),
                parent_id: Default::default(),
            },
            times: AlarmTimes {
                creation_time: 100,
                next_notion_time,
                end_time: None,
                repeat_interval: None,
            },
        }
    }

    #[tokio::test]
    async fn promotes_only_due_alarms() {
        let mut ctx = Context::create_inmemory();
        ctx.sys = Arc::new(TestSys(1_000_000));

        let due = queued_alarm(Some(999_999));
        let future = queued_alarm(Some(1_000_001));
        let never = queued_alarm(None);
        for alarm in &[&due, &future, &never] {
            ctx.repos.alarms.insert(alarm).await.expect("To insert");
        }

        let promoted = execute(CheckAlarmQueueUseCase, &ctx)
            .await
            .expect("To run status check");
        assert_eq!(promoted, 1);

        let stored = ctx.repos.alarms.find(&due.id).await.expect("To find");
        assert_eq!(stored.status, AlarmStatus::Ready);
        // Only the status changes on promotion
        assert_eq!(stored.times, due.times);
        assert_eq!(stored.name, due.name);

        let stored = ctx.repos.alarms.find(&future.id).await.expect("To find");
        assert_eq!(stored.status, AlarmStatus::Queue);
        let stored = ctx.repos.alarms.find(&never.id).await.expect("To find");
        assert_eq!(stored.status, AlarmStatus::Queue);
    }

    #[tokio::test]
    async fn one_failing_promotion_does_not_abort_the_tick() {
        let mut ctx = Context::create_inmemory();
        ctx.sys = Arc::new(TestSys(1_000_000));

        let failing = queued_alarm(Some(500_000));
        let healthy = queued_alarm(Some(500_000));
        ctx.repos.alarms.insert(&failing).await.expect("To insert");
        ctx.repos.alarms.insert(&healthy).await.expect("To insert");

        ctx.repos.alarms = Arc::new(FailingUpdateAlarmRepo {
            inner: ctx.repos.alarms.clone(),
            failing_id: failing.id.clone(),
        });

        let promoted = execute(CheckAlarmQueueUseCase, &ctx)
            .await
            .expect("To run status check");
        assert_eq!(promoted, 1);

        let stored = ctx.repos.alarms.find(&healthy.id).await.expect("To find");
        assert_eq!(stored.status, AlarmStatus::Ready);
        let stored = ctx.repos.alarms.find(&failing.id).await.expect("To find");
        assert_eq!(stored.status, AlarmStatus::Queue);
    }

    #[tokio::test]
    async fn second_tick_has_nothing_to_promote() {
        let mut ctx = Context::create_inmemory();
        ctx.sys = Arc::new(TestSys(1_000_000));

        let due = queued_alarm(Some(500_000));
        ctx.repos.alarms.insert(&due).await.expect("To insert");

        let promoted = execute(CheckAlarmQueueUseCase, &ctx)
            .await
            .expect("To run status check");
        assert_eq!(promoted, 1);

        let promoted = execute(CheckAlarmQueueUseCase, &ctx)
            .await
            .expect("To run status check");
        assert_eq!(promoted, 0);
    }

    #[tokio::test]
    async fn empty_queue_is_a_quiet_tick() {
        let ctx = Context::create_inmemory();

        let promoted = execute(CheckAlarmQueueUseCase, &ctx)
            .await
            .expect("To run status check");
        assert_eq!(promoted, 0);
    }

    #[tokio::test]
    async fn repeatable_alarm_cycles_between_ready_and_queue() {
        let mut ctx = Context::create_inmemory();
        let now = 10_000_000;
        ctx.sys = Arc::new(TestSys(now));

        let mut alarm = queued_alarm(Some(now - 60 * 1000));
        alarm.is_repeatable = true;
        alarm.times.repeat_interval = Some(600);
        ctx.repos.alarms.insert(&alarm).await.expect("To insert");

        let promoted = execute(CheckAlarmQueueUseCase, &ctx)
            .await
            .expect("To run status check");
        assert_eq!(promoted, 1);
        let stored = ctx.repos.alarms.find(&alarm.id).await.expect("To find");
        assert_eq!(stored.status, AlarmStatus::Ready);

        let usecase = PostponeAlarmUseCase {
            alarm_id: alarm.id.clone(),
        };
        let postponed = execute(usecase, &ctx).await.expect("To postpone alarm");
        assert_eq!(postponed.status, AlarmStatus::Queue);
        assert_eq!(
            postponed.times.next_notion_time,
            Some(now + 600 * 60 * 1000)
        );

        // Not due anymore, the next tick leaves it queued
        let promoted = execute(CheckAlarmQueueUseCase, &ctx)
            .await
            .expect("To run status check");
        assert_eq!(promoted, 0);
    }
}
