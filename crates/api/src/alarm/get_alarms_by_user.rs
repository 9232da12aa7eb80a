use crate::error::ApiError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use alarmbot_api_structs::get_alarms_by_user::{APIResponse, PathParams};
use alarmbot_domain::{Alarm, ID};
use alarmbot_infra::{AlarmQuery, Context};

fn handle_error(e: UseCaseErrors) -> ApiError {
    match e {
        UseCaseErrors::NotFound(user_id) => ApiError::NotFound(format!(
            "No alarms were found for the user with id: {}",
            user_id
        )),
        UseCaseErrors::StorageError => ApiError::InternalError,
    }
}

pub async fn get_alarms_by_user_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, ApiError> {
    protect_route(&http_req, &ctx)?;

    let usecase = GetAlarmsByUserUseCase {
        user_id: path_params.user_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|alarms| HttpResponse::Ok().json(APIResponse::new(alarms)))
        .map_err(handle_error)
}

#[derive(Debug)]
struct GetAlarmsByUserUseCase {
    pub user_id: ID,
}

#[derive(Debug)]
enum UseCaseErrors {
    NotFound(ID),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetAlarmsByUserUseCase {
    type Response = Vec<Alarm>;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Errors> {
        let query = AlarmQuery {
            user_id: Some(self.user_id.clone()),
            ..Default::default()
        };

        let alarms = ctx
            .repos
            .alarms
            .find_by(&query)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;

        if alarms.is_empty() {
            return Err(UseCaseErrors::NotFound(self.user_id.clone()));
        }

        Ok(alarms)
    }
}
