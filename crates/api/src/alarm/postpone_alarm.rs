use crate::error::ApiError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use alarmbot_api_structs::postpone_alarm::{APIResponse, PathParams};
use alarmbot_domain::{Alarm, AlarmStatus, AlarmTimes, ID};
use alarmbot_infra::{AlarmPatch, Context};

fn handle_error(e: UseCaseErrors) -> ApiError {
    match e {
        UseCaseErrors::NotFound(alarm_id) => {
            ApiError::NotFound(format!("The alarm with id: {} was not found", alarm_id))
        }
        UseCaseErrors::NotRepeatable(alarm_id) => ApiError::BadClientData(format!(
            "The alarm with id: {} is not repeatable and cannot be postponed",
            alarm_id
        )),
        UseCaseErrors::StorageError => ApiError::InternalError,
    }
}

pub async fn postpone_alarm_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, ApiError> {
    protect_route(&http_req, &ctx)?;

    let usecase = PostponeAlarmUseCase {
        alarm_id: path_params.alarm_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|alarm| HttpResponse::Ok().json(APIResponse::new(alarm)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct PostponeAlarmUseCase {
    pub alarm_id: ID,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    NotFound(ID),
    NotRepeatable(ID),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for PostponeAlarmUseCase {
    type Response = Alarm;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Errors> {
        let alarm = match ctx.repos.alarms.find(&self.alarm_id).await {
            Some(alarm) => alarm,
            None => return Err(UseCaseErrors::NotFound(self.alarm_id.clone())),
        };

        // Applies to any status, a stopped repeatable alarm can still be
        // requeued this way.
        if !alarm.is_repeatable {
            return Err(UseCaseErrors::NotRepeatable(alarm.id));
        }

        // A repeatable alarm always carries an interval, its absence means
        // the stored document is corrupt.
        let repeat_interval = match alarm.times.repeat_interval {
            Some(repeat_interval) => repeat_interval,
            None => return Err(UseCaseErrors::StorageError),
        };

        // Saturate instead of overflowing on absurd stored intervals
        let next_notion_time = ctx
            .sys
            .get_timestamp_millis()
            .saturating_add(repeat_interval.saturating_mul(60 * 1000));

        let patch = AlarmPatch {
            status: Some(AlarmStatus::Queue),
            next_notion_time: Some(next_notion_time),
            ..Default::default()
        };
        match ctx.repos.alarms.update_fields(&alarm.id, &patch).await {
            Ok(0) | Err(_) => Err(UseCaseErrors::StorageError),
            Ok(_) => Ok(Alarm {
                status: AlarmStatus::Queue,
                times: AlarmTimes {
                    next_notion_time: Some(next_notion_time),
                    ..alarm.times
                },
                ..alarm
            }),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use alarmbot_domain::AlarmLinks;
    use alarmbot_infra::ISys;
    use std::sync::Arc;

    struct TestSys(i64);
    impl ISys for TestSys {
        fn get_timestamp_millis(&self) -> i64 {
            self.0
        }
    }

    fn repeatable_alarm(repeat_interval: i64) -> Alarm {
        Alarm {
            id: Default::default(),
            name: "Drink water".into(),
            description: None,
            is_repeatable: true,
            status: AlarmStatus::Ready,
            links: AlarmLinks {
                user_id: Default::default(),
                parent_id: Default::default(),
            },
            times: AlarmTimes {
                creation_time: 100,
                next_notion_time: Some(200),
                end_time: None,
                repeat_interval: Some(repeat_interval),
            },
        }
    }

    #[tokio::test]
    async fn postpones_repeatable_alarm() {
        let mut ctx = Context::create_inmemory();
        ctx.sys = Arc::new(TestSys(1_000_000));

        let alarm = repeatable_alarm(10);
        ctx.repos.alarms.insert(&alarm).await.expect("To insert");

        let usecase = PostponeAlarmUseCase {
            alarm_id: alarm.id.clone(),
        };
        let postponed = execute(usecase, &ctx).await.expect("To postpone alarm");

        assert_eq!(postponed.status, AlarmStatus::Queue);
        assert_eq!(
            postponed.times.next_notion_time,
            Some(1_000_000 + 10 * 60 * 1000)
        );

        let stored = ctx.repos.alarms.find(&alarm.id).await.expect("To find");
        assert_eq!(stored.status, AlarmStatus::Queue);
        assert_eq!(stored.times.next_notion_time, Some(1_000_000 + 10 * 60 * 1000));
    }

    #[tokio::test]
    async fn consecutive_postpones_move_due_time_forward() {
        let mut ctx = Context::create_inmemory();

        let alarm = repeatable_alarm(10);
        ctx.repos.alarms.insert(&alarm).await.expect("To insert");

        ctx.sys = Arc::new(TestSys(1_000_000));
        let usecase = PostponeAlarmUseCase {
            alarm_id: alarm.id.clone(),
        };
        let first = execute(usecase, &ctx).await.expect("To postpone alarm");

        ctx.sys = Arc::new(TestSys(2_000_000));
        let usecase = PostponeAlarmUseCase {
            alarm_id: alarm.id.clone(),
        };
        let second = execute(usecase, &ctx).await.expect("To postpone alarm");

        assert!(second.times.next_notion_time > first.times.next_notion_time);
    }

    #[tokio::test]
    async fn huge_interval_saturates_at_the_timestamp_ceiling() {
        let mut ctx = Context::create_inmemory();
        ctx.sys = Arc::new(TestSys(1_000_000));

        let alarm = repeatable_alarm(i64::MAX);
        ctx.repos.alarms.insert(&alarm).await.expect("To insert");

        let usecase = PostponeAlarmUseCase {
            alarm_id: alarm.id.clone(),
        };
        let postponed = execute(usecase, &ctx).await.expect("To postpone alarm");
        assert_eq!(postponed.times.next_notion_time, Some(i64::MAX));
    }

    #[tokio::test]
    async fn rejects_one_shot_alarm_in_any_status() {
        let ctx = Context::create_inmemory();

        for status in &[
            AlarmStatus::Queue,
            AlarmStatus::Ready,
            AlarmStatus::Stopped,
            AlarmStatus::Deleted,
        ] {
            let mut alarm = repeatable_alarm(10);
            alarm.is_repeatable = false;
            alarm.times.repeat_interval = None;
            alarm.status = *status;
            ctx.repos.alarms.insert(&alarm).await.expect("To insert");

            let usecase = PostponeAlarmUseCase {
                alarm_id: alarm.id.clone(),
            };
            let res = execute(usecase, &ctx).await;
            assert!(matches!(res, Err(UseCaseErrors::NotRepeatable(_))));
        }
    }

    #[tokio::test]
    async fn postpone_of_unknown_alarm_is_not_found() {
        let ctx = Context::create_inmemory();

        let usecase = PostponeAlarmUseCase {
            alarm_id: Default::default(),
        };
        let res = execute(usecase, &ctx).await;
        assert!(matches!(res, Err(UseCaseErrors::NotFound(_))));
    }
}
