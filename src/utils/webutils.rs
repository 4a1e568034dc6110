use actix_web::dev::ServiceRequest;
use actix_web_httpauth::extractors::bearer::BearerAuth;

use crate::config::config;
use crate::types::error::AppError;
use crate::types::user::Role;
use crate::utils::token::verify_tier;

type AuthResult = Result<ServiceRequest, (actix_web::Error, ServiceRequest)>;

fn gate(req: ServiceRequest, credentials: BearerAuth, min_role: Role) -> AuthResult {
    match verify_tier(credentials.token(), min_role, &config().jwt) {
        Ok(_) => Ok(req),
        Err(_) => Err((AppError::InvalidToken.into(), req)),
    }
}

/// Any of the three role tokens passes.
pub async fn validate_readonly_token(req: ServiceRequest, credentials: BearerAuth) -> AuthResult {
    gate(req, credentials, Role::ReadOnly)
}

/// Admin or editor tokens pass.
#[allow(dead_code)]
pub async fn validate_editor_token(req: ServiceRequest, credentials: BearerAuth) -> AuthResult {
    gate(req, credentials, Role::Editor)
}

/// Only admin tokens pass.
pub async fn validate_admin_token(req: ServiceRequest, credentials: BearerAuth) -> AuthResult {
    gate(req, credentials, Role::Admin)
}
