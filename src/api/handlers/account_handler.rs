//! Account handlers.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Json},
    routing::{get, post, put},
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::{ValidatedJson, ValidatedPath};
use crate::api::AppState;
use crate::config::ACCOUNT_API_PREFIX;
use crate::domain::AccountResponse;
use crate::errors::AppResult;
use crate::services::AccountUpdate;
use crate::types::MessageResponse;

/// Account registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateAccountRequest {
    /// National taxpayer registry number
    #[validate(length(min = 1, message = "CPF is required"))]
    #[schema(example = "12345678909")]
    pub cpf: String,
    /// Account email address
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "maria@example.com")]
    pub email: String,
    /// At least 4 characters, no spaces
    #[schema(example = "s3nh4", min_length = 4)]
    pub password: String,
}

/// Full account replacement request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateAccountRequest {
    /// Account to overwrite
    #[schema(example = 1)]
    pub id: i32,
    #[validate(length(min = 1, message = "CPF is required"))]
    #[schema(example = "12345678909")]
    pub cpf: String,
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "maria@example.com")]
    pub email: String,
    #[schema(example = "s3nh4", min_length = 4)]
    pub password: String,
    #[serde(default = "default_active")]
    #[schema(example = true)]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

/// Password change request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "s3nh4")]
    pub old_password: String,
    #[schema(example = "n0va-s3nh4")]
    pub new_password: String,
}

/// Login request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "maria@example.com")]
    pub email: String,
    #[schema(example = "s3nh4")]
    pub password: String,
}

/// Create account routes
pub fn account_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list_accounts).post(create_account).put(update_account),
        )
        .route("/:id", get(get_account).delete(delete_account))
        .route("/cpf/:cpf", get(get_account_by_cpf))
        .route("/email/:email", get(get_account_by_email))
        .route("/desativar/:id", get(deactivate_account))
        .route("/senha", put(change_password))
        .route("/login", post(login))
}

/// List all accounts
#[utoipa::path(
    get,
    path = "/api/usuario",
    tag = "Accounts",
    responses(
        (status = 200, description = "All accounts", body = Vec<AccountResponse>)
    )
)]
pub async fn list_accounts(State(state): State<AppState>) -> AppResult<Json<Vec<AccountResponse>>> {
    let accounts = state.account_service.list().await?;
    Ok(Json(accounts.into_iter().map(AccountResponse::from).collect()))
}

/// Get account by ID
#[utoipa::path(
    get,
    path = "/api/usuario/{id}",
    tag = "Accounts",
    params(("id" = i32, Path, description = "Account ID")),
    responses(
        (status = 200, description = "Account", body = AccountResponse),
        (status = 400, description = "Malformed ID"),
        (status = 404, description = "Account not found")
    )
)]
pub async fn get_account(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i32>,
) -> AppResult<Json<AccountResponse>> {
    let account = state.account_service.get_by_id(id).await?;
    Ok(Json(account.into()))
}

/// Get account by CPF
#[utoipa::path(
    get,
    path = "/api/usuario/cpf/{cpf}",
    tag = "Accounts",
    params(("cpf" = String, Path, description = "Account CPF")),
    responses(
        (status = 200, description = "Account", body = AccountResponse),
        (status = 404, description = "Account not found")
    )
)]
pub async fn get_account_by_cpf(
    State(state): State<AppState>,
    ValidatedPath(cpf): ValidatedPath<String>,
) -> AppResult<Json<AccountResponse>> {
    let account = state.account_service.get_by_cpf(&cpf).await?;
    Ok(Json(account.into()))
}

/// Get account by email
#[utoipa::path(
    get,
    path = "/api/usuario/email/{email}",
    tag = "Accounts",
    params(("email" = String, Path, description = "Account email")),
    responses(
        (status = 200, description = "Account", body = AccountResponse),
        (status = 404, description = "Account not found")
    )
)]
pub async fn get_account_by_email(
    State(state): State<AppState>,
    ValidatedPath(email): ValidatedPath<String>,
) -> AppResult<Json<AccountResponse>> {
    let account = state.account_service.get_by_email(&email).await?;
    Ok(Json(account.into()))
}

/// Register a new account
#[utoipa::path(
    post,
    path = "/api/usuario",
    tag = "Accounts",
    request_body = CreateAccountRequest,
    responses(
        (status = 201, description = "Account created", body = AccountResponse),
        (status = 400, description = "Validation error"),
        (status = 403, description = "CPF or email already registered")
    )
)]
pub async fn create_account(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateAccountRequest>,
) -> AppResult<impl IntoResponse> {
    let account = state
        .account_service
        .create(payload.cpf, payload.email, payload.password)
        .await?;

    let location = format!("{}/{}", ACCOUNT_API_PREFIX, account.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(AccountResponse::from(account)),
    ))
}

/// Overwrite an existing account
#[utoipa::path(
    put,
    path = "/api/usuario",
    tag = "Accounts",
    request_body = UpdateAccountRequest,
    responses(
        (status = 200, description = "Account updated", body = AccountResponse),
        (status = 400, description = "Validation error"),
        (status = 403, description = "CPF or email belongs to another account"),
        (status = 404, description = "Account not found")
    )
)]
pub async fn update_account(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UpdateAccountRequest>,
) -> AppResult<Json<AccountResponse>> {
    let account = state
        .account_service
        .update(AccountUpdate {
            id: payload.id,
            cpf: payload.cpf,
            email: payload.email,
            password: payload.password,
            active: payload.active,
        })
        .await?;

    Ok(Json(account.into()))
}

/// Deactivate an account (the record is kept)
#[utoipa::path(
    get,
    path = "/api/usuario/desativar/{id}",
    tag = "Accounts",
    params(("id" = i32, Path, description = "Account ID")),
    responses(
        (status = 200, description = "Account deactivated", body = MessageResponse),
        (status = 400, description = "Malformed ID"),
        (status = 404, description = "Account not found")
    )
)]
pub async fn deactivate_account(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.account_service.deactivate(id).await?;
    Ok(Json(MessageResponse::new("Account deactivated")))
}

/// Change an account password
#[utoipa::path(
    put,
    path = "/api/usuario/senha",
    tag = "Accounts",
    request_body = ChangePasswordRequest,
    responses(
        (status = 200, description = "Password changed", body = MessageResponse),
        (status = 403, description = "Incorrect current password or invalid new password")
    )
)]
pub async fn change_password(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ChangePasswordRequest>,
) -> AppResult<Json<MessageResponse>> {
    state
        .account_service
        .change_password(payload.id, &payload.old_password, &payload.new_password)
        .await?;

    Ok(Json(MessageResponse::new("Password changed")))
}

/// Log in with email and password
#[utoipa::path(
    post,
    path = "/api/usuario/login",
    tag = "Accounts",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Credentials match", body = AccountResponse),
        (status = 403, description = "Invalid login")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Json<AccountResponse>> {
    let account = state
        .account_service
        .login(&payload.email, &payload.password)
        .await?;

    Ok(Json(account.into()))
}

/// Permanently delete an account
#[utoipa::path(
    delete,
    path = "/api/usuario/{id}",
    tag = "Accounts",
    params(("id" = i32, Path, description = "Account ID")),
    responses(
        (status = 200, description = "Account deleted", body = MessageResponse),
        (status = 400, description = "Malformed ID"),
        (status = 404, description = "Account not found")
    )
)]
pub async fn delete_account(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.account_service.delete(id).await?;
    Ok(Json(MessageResponse::new("Account deleted")))
}
