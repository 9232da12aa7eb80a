use crate::error::ApiError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use alarmbot_api_structs::delete_alarms_by_parent::{APIResponse, PathParams};
use alarmbot_domain::ID;
use alarmbot_infra::{AlarmQuery, Context};

fn handle_error(e: UseCaseErrors) -> ApiError {
    match e {
        UseCaseErrors::NotFound(parent_id) => ApiError::NotFound(format!(
            "No alarms were found for the parent with id: {}",
            parent_id
        )),
        UseCaseErrors::StorageError => ApiError::InternalError,
    }
}

pub async fn delete_alarms_by_parent_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, ApiError> {
    protect_route(&http_req, &ctx)?;

    let usecase = DeleteAlarmsByParentUseCase {
        parent_id: path_params.parent_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|deleted_count| HttpResponse::Ok().json(APIResponse { deleted_count }))
        .map_err(handle_error)
}

#[derive(Debug)]
struct DeleteAlarmsByParentUseCase {
    pub parent_id: ID,
}

#[derive(Debug)]
enum UseCaseErrors {
    NotFound(ID),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteAlarmsByParentUseCase {
    type Response = i64;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Errors> {
        let query = AlarmQuery {
            parent_id: Some(self.parent_id.clone()),
            ..Default::default()
        };

        let res = ctx
            .repos
            .alarms
            .delete_by(&query)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;

        if res.deleted_count == 0 {
            return Err(UseCaseErrors::NotFound(self.parent_id.clone()));
        }

        Ok(res.deleted_count)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use alarmbot_domain::{Alarm, AlarmLinks, AlarmStatus, AlarmTimes};

    fn alarm_with_parent(parent_id: &ID) -> Alarm {
        Alarm {
            id: Default::default(),
            name: "Take medicine".into(),
            description: None,
            is_repeatable: false,
            status: AlarmStatus::Queue,
            links: AlarmLinks {
                user_id: Default::default(),
                parent_id: parent_id.clone(),
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
    async fn deletes_all_alarms_of_parent_then_reports_not_found() {
        let ctx = Context::create_inmemory();
        let parent_id = ID::new();

        for _ in 0..3 {
            let alarm = alarm_with_parent(&parent_id);
            ctx.repos.alarms.insert(&alarm).await.expect("To insert");
        }
        let other = alarm_with_parent(&ID::new());
        ctx.repos.alarms.insert(&other).await.expect("To insert");

        let usecase = DeleteAlarmsByParentUseCase {
            parent_id: parent_id.clone(),
        };
        let deleted_count = execute(usecase, &ctx).await.expect("To delete alarms");
        assert_eq!(deleted_count, 3);

        // The unrelated alarm is untouched
        assert!(ctx.repos.alarms.find(&other.id).await.is_some());

        // A second call has nothing left to delete
        let usecase = DeleteAlarmsByParentUseCase { parent_id };
        let res = execute(usecase, &ctx).await;
        assert!(matches!(res, Err(UseCaseErrors::NotFound(_))));
    }
}
