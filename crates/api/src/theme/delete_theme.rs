use crate::error::ApiError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use alarmbot_api_structs::delete_theme::{APIResponse, PathParams};
use alarmbot_domain::{Theme, ID};
use alarmbot_infra::Context;

fn handle_error(e: UseCaseErrors) -> ApiError {
    match e {
        UseCaseErrors::NotFound(theme_id) => {
            ApiError::NotFound(format!("The theme with id: {} was not found", theme_id))
        }
    }
}

pub async fn delete_theme_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, ApiError> {
    protect_route(&http_req, &ctx)?;

    let usecase = DeleteThemeUseCase {
        theme_id: path_params.theme_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|theme| HttpResponse::Ok().json(APIResponse::new(theme)))
        .map_err(handle_error)
}

#[derive(Debug)]
struct DeleteThemeUseCase {
    pub theme_id: ID,
}

#[derive(Debug)]
enum UseCaseErrors {
    NotFound(ID),
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteThemeUseCase {
    type Response = Theme;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Errors> {
        ctx.repos
            .themes
            .delete(&self.theme_id)
            .await
            .ok_or_else(|| UseCaseErrors::NotFound(self.theme_id.clone()))
    }
}
