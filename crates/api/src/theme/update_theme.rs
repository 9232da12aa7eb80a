use crate::error::ApiError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use alarmbot_api_structs::update_theme::{APIResponse, PathParams, RequestBody};
use alarmbot_domain::ID;
use alarmbot_infra::{Context, ThemePatch};

fn handle_error(e: UseCaseErrors) -> ApiError {
    match e {
        UseCaseErrors::NotFound(theme_id) => {
            ApiError::NotFound(format!("The theme with id: {} was not found", theme_id))
        }
        UseCaseErrors::StorageError => ApiError::InternalError,
    }
}

pub async fn update_theme_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, ApiError> {
    protect_route(&http_req, &ctx)?;

    let body = body.into_inner();
    let usecase = UpdateThemeUseCase {
        theme_id: path_params.theme_id.clone(),
        patch: ThemePatch {
            name: body.name,
            description: body.description,
        },
    };

    execute(usecase, &ctx)
        .await
        .map(|update_count| HttpResponse::Ok().json(APIResponse { update_count }))
        .map_err(handle_error)
}

#[derive(Debug)]
struct UpdateThemeUseCase {
    pub theme_id: ID,
    pub patch: ThemePatch,
}

#[derive(Debug)]
enum UseCaseErrors {
    NotFound(ID),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateThemeUseCase {
    type Response = i64;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Errors> {
        let update_count = ctx
            .repos
            .themes
            .update_fields(&self.theme_id, &self.patch)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;

        if update_count == 0 {
            return Err(UseCaseErrors::NotFound(self.theme_id.clone()));
        }

        Ok(update_count)
    }
}
