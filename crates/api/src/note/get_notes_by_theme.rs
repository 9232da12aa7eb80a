use crate::error::ApiError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use alarmbot_api_structs::get_notes_by_theme::{APIResponse, PathParams};
use alarmbot_domain::{Note, ID};
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

pub async fn get_notes_by_theme_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, ApiError> {
    protect_route(&http_req, &ctx)?;

    let usecase = GetNotesByThemeUseCase {
        theme_id: path_params.theme_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|notes| HttpResponse::Ok().json(APIResponse::new(notes)))
        .map_err(handle_error)
}

#[derive(Debug)]
struct GetNotesByThemeUseCase {
    pub theme_id: ID,
}

#[derive(Debug)]
enum UseCaseErrors {
    NotFound(ID),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetNotesByThemeUseCase {
    type Response = Vec<Note>;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Errors> {
        let query = NoteQuery {
            theme_id: Some(self.theme_id.clone()),
            ..Default::default()
        };

        let notes = ctx
            .repos
            .notes
            .find_by(&query)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;

        if notes.is_empty() {
            return Err(UseCaseErrors::NotFound(self.theme_id.clone()));
        }

        Ok(notes)
    }
}
