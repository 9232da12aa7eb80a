use crate::error::ApiError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use alarmbot_api_structs::update_user::{APIResponse, PathParams, RequestBody};
use alarmbot_domain::ID;
use alarmbot_infra::{Context, UserPatch};

fn handle_error(e: UseCaseErrors) -> ApiError {
    match e {
        UseCaseErrors::NotFound(user_id) => {
            ApiError::NotFound(format!("The user with id: {} was not found", user_id))
        }
        UseCaseErrors::StorageError => ApiError::InternalError,
    }
}

pub async fn update_user_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, ApiError> {
    protect_route(&http_req, &ctx)?;

    let body = body.into_inner();
    let usecase = UpdateUserUseCase {
        user_id: path_params.user_id.clone(),
        patch: UserPatch {
            username: body.username,
            first_name: body.first_name,
            last_name: body.last_name,
        },
    };

    execute(usecase, &ctx)
        .await
        .map(|update_count| HttpResponse::Ok().json(APIResponse { update_count }))
        .map_err(handle_error)
}

#[derive(Debug)]
struct UpdateUserUseCase {
    pub user_id: ID,
    pub patch: UserPatch,
}

#[derive(Debug)]
enum UseCaseErrors {
    NotFound(ID),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateUserUseCase {
    type Response = i64;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Errors> {
        let update_count = ctx
            .repos
            .users
            .update_fields(&self.user_id, &self.patch)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;

        if update_count == 0 {
            return Err(UseCaseErrors::NotFound(self.user_id.clone()));
        }

        Ok(update_count)
    }
}
