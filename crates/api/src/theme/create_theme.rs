use crate::error::ApiError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use alarmbot_api_structs::create_theme::{APIResponse, RequestBody};
use alarmbot_domain::{Theme, ID};
use alarmbot_infra::{Context, InsertError};

fn handle_error(e: UseCaseErrors) -> ApiError {
    match e {
        UseCaseErrors::Duplicate(theme_id) => ApiError::Conflict(format!(
            "A theme with id: {} already exists",
            theme_id
        )),
        UseCaseErrors::StorageError => ApiError::InternalError,
    }
}

pub async fn create_theme_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, ApiError> {
    protect_route(&http_req, &ctx)?;

    let body = body.into_inner();
    let usecase = CreateThemeUseCase {
        name: body.name,
        description: body.description,
        user_id: body.user_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|theme| HttpResponse::Created().json(APIResponse::new(theme)))
        .map_err(handle_error)
}

#[derive(Debug)]
struct CreateThemeUseCase {
    pub name: String,
    pub description: Option<String>,
    pub user_id: ID,
}

#[derive(Debug)]
enum UseCaseErrors {
    Duplicate(ID),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateThemeUseCase {
    type Response = Theme;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Errors> {
        let mut theme = Theme::new(self.name.clone(), self.user_id.clone());
        theme.description = self.description.clone();

        match ctx.repos.themes.insert(&theme).await {
            Ok(_) => Ok(theme),
            Err(InsertError::DuplicateKey) => Err(UseCaseErrors::Duplicate(theme.id)),
            Err(_) => Err(UseCaseErrors::StorageError),
        }
    }
}
