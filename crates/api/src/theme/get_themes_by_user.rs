use crate::error::ApiError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use alarmbot_api_structs::get_themes_by_user::{APIResponse, PathParams};
use alarmbot_domain::{Theme, ID};
use alarmbot_infra::Context;

fn handle_error(e: UseCaseErrors) -> ApiError {
    match e {
        UseCaseErrors::NotFound(user_id) => ApiError::NotFound(format!(
            "No themes were found for the user with id: {}",
            user_id
        )),
        UseCaseErrors::StorageError => ApiError::InternalError,
    }
}

pub async fn get_themes_by_user_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, ApiError> {
    protect_route(&http_req, &ctx)?;

    let usecase = GetThemesByUserUseCase {
        user_id: path_params.user_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|themes| HttpResponse::Ok().json(APIResponse::new(themes)))
        .map_err(handle_error)
}

#[derive(Debug)]
struct GetThemesByUserUseCase {
    pub user_id: ID,
}

#[derive(Debug)]
enum UseCaseErrors {
    NotFound(ID),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetThemesByUserUseCase {
    type Response = Vec<Theme>;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Errors> {
        let themes = ctx
            .repos
            .themes
            .find_by_user(&self.user_id)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;

        if themes.is_empty() {
            return Err(UseCaseErrors::NotFound(self.user_id.clone()));
        }

        Ok(themes)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[tokio::test]
    async fn user_without_themes_is_not_found() {
        let ctx = Context::create_inmemory();
        let user_id = ID::new();

        let usecase = GetThemesByUserUseCase {
            user_id: user_id.clone(),
        };
        let res = execute(usecase, &ctx).await;
        assert!(matches!(res, Err(UseCaseErrors::NotFound(_))));

        let theme = Theme::new("Groceries".into(), user_id.clone());
        ctx.repos.themes.insert(&theme).await.expect("To insert");

        let usecase = GetThemesByUserUseCase { user_id };
        let themes = execute(usecase, &ctx).await.expect("To find themes");
        assert_eq!(themes.len(), 1);
    }
}
