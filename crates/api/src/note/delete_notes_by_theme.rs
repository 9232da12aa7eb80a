use crate::error::ApiError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use alarmbot_api_structs::delete_notes_by_theme::{APIResponse, PathParams};
use alarmbot_domain::ID;
use alarmbot_infra::{Context, NoteQuery};

fn handle_error(e: UseCaseErrors) -> ApiError {
    match e {
        UseCaseErrors::NotFound(theme_id) => ApiError::NotFound(format!(
            "No notes were found for the theme with id: {}",
            theme_id
        )),
        UseCaseErrors::StorageError => ApiError::InternalError,
    }
}

pub async fn delete_notes_by_theme_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, ApiError> {
    protect_route(&http_req, &ctx)?;

    let usecase = DeleteNotesByThemeUseCase {
        theme_id: path_params.theme_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|deleted_count| HttpResponse::Ok().json(APIResponse { deleted_count }))
        .map_err(handle_error)
}

#[derive(Debug)]
struct DeleteNotesByThemeUseCase {
    pub theme_id: ID,
}

#[derive(Debug)]
enum UseCaseErrors {
    NotFound(ID),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteNotesByThemeUseCase {
    type Response = i64;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Errors> {
        let query = NoteQuery {
            theme_id: Some(self.theme_id.clone()),
            ..Default::default()
        };

        let res = ctx
            .repos
            .notes
            .delete_by(&query)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;

        if res.deleted_count == 0 {
            return Err(UseCaseErrors::NotFound(self.theme_id.clone()));
        }

        Ok(res.deleted_count)
    }
}
