//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::account_handler;
use crate::domain::AccountResponse;
use crate::types::MessageResponse;

/// OpenAPI documentation for the account API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Acolher API",
        version = "0.1.0",
        description = "Account directory for the Acolher platform",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        account_handler::list_accounts,
        account_handler::get_account,
        account_handler::get_account_by_cpf,
        account_handler::get_account_by_email,
        account_handler::create_account,
        account_handler::update_account,
        account_handler::deactivate_account,
        account_handler::change_password,
        account_handler::login,
        account_handler::delete_account,
    ),
    components(
        schemas(
            AccountResponse,
            MessageResponse,
            account_handler::CreateAccountRequest,
            account_handler::UpdateAccountRequest,
            account_handler::ChangePasswordRequest,
            account_handler::LoginRequest,
        )
    ),
    tags(
        (name = "Accounts", description = "Account lifecycle, lookup and login")
    )
)]
pub struct ApiDoc;
