use crate::error::ApiError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use alarmbot_api_structs::delete_note::{APIResponse, PathParams};
use alarmbot_domain::{Note, ID};
use alarmbot_infra::Context;

fn handle_error(e: UseCaseErrors) -> ApiError {
    match e {
        UseCaseErrors::NotFound(note_id) => {
            ApiError::NotFound(format!("The note with id: {} was not found", note_id))
        }
    }
}

pub async fn delete_note_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, ApiError> {
    protect_route(&http_req, &ctx)?;

    let usecase = DeleteNoteUseCase {
        note_id: path_params.note_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|note| HttpResponse::Ok().json(APIResponse::new(note)))
        .map_err(handle_error)
}

#[derive(Debug)]
struct DeleteNoteUseCase {
    pub note_id: ID,
}

#[derive(Debug)]
enum UseCaseErrors {
    NotFound(ID),
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteNoteUseCase {
    type Response = Note;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Errors> {
        ctx.repos
            .notes
            .delete(&self.note_id)
            .await
            .ok_or_else(|| UseCaseErrors::NotFound(self.note_id.clone()))
    }
}
