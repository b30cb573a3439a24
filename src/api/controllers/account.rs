use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::api::middlewares::validate::Json;
use crate::domain::error::AppError;
use crate::domain::services::account::AccountService;

use crate::api::dto::account::{CreateUserDTO, DeleteUserDTO, StatusDTO, UserDTO};

use actix_web::{HttpResponse, delete, post, web::Data as State};

use utoipa_actix_web::service_config::ServiceConfig;

pub fn routes(cfg: &mut ServiceConfig) {
    cfg.service(create_user).service(delete_user);
}

/// Create an account with the identity provider.
///
/// Every provider rejection (duplicate email, password policy, provider
/// unavailable) is reported as 400 with the provider's message.
#[utoipa::path(
    responses(
        (status = 200, body = UserDTO, description = "Account Created"),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
    ),
    request_body = CreateUserDTO,
    tag = "Account",
)]
#[post("/create-user")]
pub async fn create_user(
    payload: Json<CreateUserDTO>,
    account_service: State<Arc<dyn AccountService>>,
) -> ApiResult {
    let create_user_dto = payload.into_inner();

    let created_account = account_service
        .create_account(create_user_dto.into())
        .await?;

    Ok(HttpResponse::Ok().json(UserDTO::from(created_account)))
}

/// Delete an account from the identity provider.
#[utoipa::path(
    responses(
        (status = 200, body = StatusDTO, description = "Account Deleted"),
        (status = 400, body = AppError, example = json!(AppError::example_400_missing_uid())),
    ),
    request_body = DeleteUserDTO,
    tag = "Account"
)]
#[delete("/delete-user")]
pub async fn delete_user(
    payload: Json<DeleteUserDTO>,
    account_service: State<Arc<dyn AccountService>>,
) -> ApiResult {
    let uid = payload.into_inner().into_uid();

    account_service.delete_account(uid).await?;

    Ok(HttpResponse::Ok().json(StatusDTO::success()))
}
