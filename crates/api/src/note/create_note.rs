use crate::error::ApiError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use alarmbot_api_structs::create_note::{APIResponse, RequestBody};
use alarmbot_domain::{Note, NoteData, NoteLinks, NoteTimes, ID};
use alarmbot_infra::{Context, InsertError};

fn handle_error(e: UseCaseErrors) -> ApiError {
    match e {
        UseCaseErrors::Duplicate(note_id) => ApiError::Conflict(format!(
            "A note with id: {} already exists",
            note_id
        )),
        UseCaseErrors::StorageError => ApiError::InternalError,
    }
}

pub async fn create_note_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, ApiError> {
    protect_route(&http_req, &ctx)?;

    let body = body.into_inner();
    let usecase = CreateNoteUseCase {
        name: body.name,
        user_id: body.links.user_id,
        theme_id: body.links.theme_id,
        data: body.data.into_domain(),
    };

    execute(usecase, &ctx)
        .await
        .map(|note| HttpResponse::Created().json(APIResponse::new(note)))
        .map_err(handle_error)
}

#[derive(Debug)]
struct CreateNoteUseCase {
    pub name: String,
    pub user_id: ID,
    pub theme_id: ID,
    pub data: NoteData,
}

#[derive(Debug)]
enum UseCaseErrors {
    Duplicate(ID),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateNoteUseCase {
    type Response = Note;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Errors> {
        let note = Note {
            id: Default::default(),
            name: self.name.clone(),
            links: NoteLinks {
                user_id: self.user_id.clone(),
                theme_id: self.theme_id.clone(),
            },
            data: self.data.clone(),
            times: NoteTimes {
                creation_time: ctx.sys.get_timestamp_millis(),
                end_time: None,
            },
        };

        match ctx.repos.notes.insert(&note).await {
            Ok(_) => Ok(note),
            Err(InsertError::DuplicateKey) => Err(UseCaseErrors::Duplicate(note.id)),
            Err(_) => Err(UseCaseErrors::StorageError),
        }
    }
}
