use crate::error::ApiError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use alarmbot_api_structs::create_alarm::{APIResponse, RequestBody};
use alarmbot_domain::{Alarm, AlarmLinks, AlarmStatus, AlarmTimes, ID};
use alarmbot_infra::{Context, InsertError};

fn handle_error(e: UseCaseErrors) -> ApiError {
    match e {
        UseCaseErrors::RepeatIntervalMissing => ApiError::BadClientData(
            "A repeatable alarm must provide a repeatInterval".into(),
        ),
        UseCaseErrors::InvalidRepeatInterval(interval) => ApiError::BadClientData(format!(
            "The repeatInterval: {} is not a positive number of minutes",
            interval
        )),
        UseCaseErrors::Duplicate(alarm_id) => ApiError::Conflict(format!(
            "An alarm with id: {} already exists",
            alarm_id
        )),
        UseCaseErrors::StorageError => ApiError::InternalError,
    }
}

pub async fn create_alarm_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, ApiError> {
    protect_route(&http_req, &ctx)?;

    let body = body.into_inner();
    let usecase = CreateAlarmUseCase {
        name: body.name,
        description: body.description,
        is_repeatable: body.is_repeatable,
        user_id: body.links.user_id,
        parent_id: body.links.parent_id,
        next_notion_time: body.next_notion_time,
        repeat_interval: body.repeat_interval,
    };

    execute(usecase, &ctx)
        .await
        .map(|alarm| HttpResponse::Created().json(APIResponse::new(alarm)))
        .map_err(handle_error)
}

#[derive(Debug)]
struct CreateAlarmUseCase {
    pub name: String,
    pub description: Option<String>,
    pub is_repeatable: bool,
    pub user_id: ID,
    pub parent_id: ID,
    pub next_notion_time: i64,
    pub repeat_interval: Option<i64>,
}

#[derive(Debug)]
enum UseCaseErrors {
    RepeatIntervalMissing,
    InvalidRepeatInterval(i64),
    Duplicate(ID),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateAlarmUseCase {
    type Response = Alarm;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Errors> {
        if self.is_repeatable {
            match self.repeat_interval {
                None => return Err(UseCaseErrors::RepeatIntervalMissing),
                Some(interval) if interval <= 0 => {
                    return Err(UseCaseErrors::InvalidRepeatInterval(interval))
                }
                Some(_) => {}
            }
        }

        let alarm = Alarm {
            id: Default::default(),
            name: self.name.clone(),
            description: self.description.clone(),
            is_repeatable: self.is_repeatable,
            status: AlarmStatus::Queue,
            links: AlarmLinks {
                user_id: self.user_id.clone(),
                parent_id: self.parent_id.clone(),
            },
            times: AlarmTimes {
                creation_time: ctx.sys.get_timestamp_millis(),
                next_notion_time: Some(self.next_notion_time),
                end_time: None,
                repeat_interval: if self.is_repeatable {
                    self.repeat_interval
                } else {
                    None
                },
            },
        };

        match ctx.repos.alarms.insert(&alarm).await {
            Ok(_) => Ok(alarm),
            Err(InsertError::DuplicateKey) => Err(UseCaseErrors::Duplicate(alarm.id)),
            Err(_) => Err(UseCaseErrors::StorageError),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use alarmbot_infra::ISys;
    use std::sync::Arc;

    struct TestSys(i64);
    impl ISys for TestSys {
        fn get_timestamp_millis(&self) -> i64 {
            self.0
        }
    }

    fn new_usecase() -> CreateAlarmUseCase {
        CreateAlarmUseCase {
            name: "Water the plants".into(),
            description: Some("The ones on the balcony".into()),
            is_repeatable: false,
            user_id: Default::default(),
            parent_id: Default::default(),
            next_notion_time: 2_000_000,
            repeat_interval: None,
        }
    }

    #[tokio::test]
    async fn creates_alarm_in_queue() {
        let mut ctx = Context::create_inmemory();
        ctx.sys = Arc::new(TestSys(1_000_000));

        let usecase = new_usecase();
        let alarm = execute(usecase, &ctx).await.expect("To create alarm");

        assert_eq!(alarm.status, AlarmStatus::Queue);
        assert_eq!(alarm.times.creation_time, 1_000_000);
        assert_eq!(alarm.times.next_notion_time, Some(2_000_000));
        assert_eq!(alarm.times.end_time, None);

        let stored = ctx.repos.alarms.find(&alarm.id).await.expect("To be stored");
        assert_eq!(stored.status, AlarmStatus::Queue);
    }

    #[tokio::test]
    async fn rejects_repeatable_alarm_without_interval() {
        let ctx = Context::create_inmemory();

        let mut usecase = new_usecase();
        usecase.is_repeatable = true;

        let res = execute(usecase, &ctx).await;
        assert!(matches!(res, Err(UseCaseErrors::RepeatIntervalMissing)));
    }

    #[tokio::test]
    async fn rejects_non_positive_repeat_interval() {
        let ctx = Context::create_inmemory();

        for interval in &[0, -5] {
            let mut usecase = new_usecase();
            usecase.is_repeatable = true;
            usecase.repeat_interval = Some(*interval);

            let res = execute(usecase, &ctx).await;
            assert!(matches!(res, Err(UseCaseErrors::InvalidRepeatInterval(_))));
        }
    }

    #[tokio::test]
    async fn ignores_interval_on_one_shot_alarm() {
        let ctx = Context::create_inmemory();

        let mut usecase = new_usecase();
        usecase.repeat_interval = Some(30);

        let alarm = execute(usecase, &ctx).await.expect("To create alarm");
        assert_eq!(alarm.times.repeat_interval, None);
    }
}
