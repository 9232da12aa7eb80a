use crate::error::ApiError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use alarmbot_api_structs::create_user::{APIResponse, RequestBody};
use alarmbot_domain::{User, ID};
use alarmbot_infra::{Context, InsertError};

fn handle_error(e: UseCaseErrors) -> ApiError {
    match e {
        UseCaseErrors::Duplicate(user_id) => ApiError::Conflict(format!(
            "A user with id: {} already exists",
            user_id
        )),
        UseCaseErrors::StorageError => ApiError::InternalError,
    }
}

pub async fn create_user_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, ApiError> {
    protect_route(&http_req, &ctx)?;

    let body = body.into_inner();
    let usecase = CreateUserUseCase {
        username: body.username,
        lang_code: body.lang_code,
        first_name: body.first_name,
        last_name: body.last_name,
    };

    execute(usecase, &ctx)
        .await
        .map(|user| HttpResponse::Created().json(APIResponse::new(user)))
        .map_err(handle_error)
}

#[derive(Debug)]
struct CreateUserUseCase {
    pub username: String,
    pub lang_code: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[derive(Debug)]
enum UseCaseErrors {
    Duplicate(ID),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateUserUseCase {
    type Response = User;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Errors> {
        let mut user = User::new(self.username.clone(), self.lang_code.clone());
        user.first_name = self.first_name.clone();
        user.last_name = self.last_name.clone();

        match ctx.repos.users.insert(&user).await {
            Ok(_) => Ok(user),
            Err(InsertError::DuplicateKey) => Err(UseCaseErrors::Duplicate(user.id)),
            Err(_) => Err(UseCaseErrors::StorageError),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[tokio::test]
    async fn creates_user() {
        let ctx = Context::create_inmemory();

        let usecase = CreateUserUseCase {
            username: "alice42".into(),
            lang_code: "en".into(),
            first_name: Some("Alice".into()),
            last_name: None,
        };

        let user = execute(usecase, &ctx).await.expect("To create user");
        assert_eq!(user.username, "alice42");

        let stored = ctx.repos.users.find(&user.id).await.expect("To be stored");
        assert_eq!(stored, user);
    }
}
