use crate::error::ApiError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use alarmbot_api_structs::update_alarm::{APIResponse, PathParams, RequestBody};
use alarmbot_domain::ID;
use alarmbot_infra::{AlarmPatch, Context};

fn handle_error(e: UseCaseErrors) -> ApiError {
    match e {
        UseCaseErrors::NotFound(alarm_id) => {
            ApiError::NotFound(format!("The alarm with id: {} was not found", alarm_id))
        }
        UseCaseErrors::StorageError => ApiError::InternalError,
    }
}

pub async fn update_alarm_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, ApiError> {
    protect_route(&http_req, &ctx)?;

    let body = body.into_inner();
    let usecase = UpdateAlarmUseCase {
        alarm_id: path_params.alarm_id.clone(),
        patch: AlarmPatch {
            name: body.name,
            description: body.description,
            status: body.status,
            next_notion_time: body.next_notion_time,
            end_time: body.end_time,
        },
    };

    execute(usecase, &ctx)
        .await
        .map(|update_count| HttpResponse::Ok().json(APIResponse { update_count }))
        .map_err(handle_error)
}

#[derive(Debug)]
struct UpdateAlarmUseCase {
    pub alarm_id: ID,
    pub patch: AlarmPatch,
}

#[derive(Debug)]
enum UseCaseErrors {
    NotFound(ID),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateAlarmUseCase {
    type Response = i64;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Errors> {
        let update_count = ctx
            .repos
            .alarms
            .update_fields(&self.alarm_id, &self.patch)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;

        if update_count == 0 {
            return Err(UseCaseErrors::NotFound(self.alarm_id.clone()));
        }

        Ok(update_count)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use alarmbot_domain::{Alarm, AlarmLinks, AlarmStatus, AlarmTimes};

    fn queued_alarm() -> Alarm {
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
    async fn updates_existing_alarm() {
        let ctx = Context::create_inmemory();
        let alarm = queued_alarm();
        ctx.repos.alarms.insert(&alarm).await.expect("To insert");

        let usecase = UpdateAlarmUseCase {
            alarm_id: alarm.id.clone(),
            patch: AlarmPatch {
                status: Some(AlarmStatus::Stopped),
                ..Default::default()
            },
        };

        let update_count = execute(usecase, &ctx).await.expect("To update alarm");
        assert_eq!(update_count, 1);

        let stored = ctx.repos.alarms.find(&alarm.id).await.expect("To find");
        assert_eq!(stored.status, AlarmStatus::Stopped);
        assert_eq!(stored.name, alarm.name);
    }

    #[tokio::test]
    async fn update_of_unknown_alarm_is_not_found() {
        let ctx = Context::create_inmemory();

        let usecase = UpdateAlarmUseCase {
            alarm_id: Default::default(),
            patch: AlarmPatch {
                name: Some("New name".into()),
                ..Default::default()
            },
        };

        let res = execute(usecase, &ctx).await;
        assert!(matches!(res, Err(UseCaseErrors::NotFound(_))));
    }
}
