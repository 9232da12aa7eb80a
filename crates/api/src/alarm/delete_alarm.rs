use crate::error::ApiError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use alarmbot_api_structs::delete_alarm::{APIResponse, PathParams};
use alarmbot_domain::{Alarm, ID};
use alarmbot_infra::Context;

fn handle_error(e: UseCaseErrors) -> ApiError {
    match e {
        UseCaseErrors::NotFound(alarm_id) => {
            ApiError::NotFound(format!("The alarm with id: {} was not found", alarm_id))
        }
    }
}

pub async fn delete_alarm_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, ApiError> {
    protect_route(&http_req, &ctx)?;

    let usecase = DeleteAlarmUseCase {
        alarm_id: path_params.alarm_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|alarm| HttpResponse::Ok().json(APIResponse::new(alarm)))
        .map_err(handle_error)
}

#[derive(Debug)]
struct DeleteAlarmUseCase {
    pub alarm_id: ID,
}

#[derive(Debug)]
enum UseCaseErrors {
    NotFound(ID),
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteAlarmUseCase {
    type Response = Alarm;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Errors> {
        ctx.repos
            .alarms
            .delete(&self.alarm_id)
            .await
            .ok_or_else(|| UseCaseErrors::NotFound(self.alarm_id.clone()))
    }
}
