use crate::error::ApiError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use alarmbot_api_structs::update_note::{APIResponse, PathParams, RequestBody};
use alarmbot_domain::ID;
use alarmbot_infra::{Context, NotePatch};

fn handle_error(e: UseCaseErrors) -> ApiError {
    match e {
        UseCaseErrors::NotFound(note_id) => {
            ApiError::NotFound(format!("The note with id: {} was not found", note_id))
        }
        UseCaseErrors::StorageError => ApiError::InternalError,
    }
}

pub async fn update_note_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, ApiError> {
    protect_route(&http_req, &ctx)?;

    let body = body.into_inner();
    let usecase = UpdateNoteUseCase {
        note_id: path_params.note_id.clone(),
        patch: NotePatch {
            name: body.name,
            text: body.text,
            end_time: body.end_time,
        },
    };

    execute(usecase, &ctx)
        .await
        .map(|update_count| HttpResponse::Ok().json(APIResponse { update_count }))
        .map_err(handle_error)
}

#[derive(Debug)]
struct UpdateNoteUseCase {
    pub note_id: ID,
    pub patch: NotePatch,
}

#[derive(Debug)]
enum UseCaseErrors {
    NotFound(ID),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateNoteUseCase {
    type Response = i64;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Errors> {
        let update_count = ctx
            .repos
            .notes
            .update_fields(&self.note_id, &self.patch)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;

        if update_count == 0 {
            return Err(UseCaseErrors::NotFound(self.note_id.clone()));
        }

        Ok(update_count)
    }
}
