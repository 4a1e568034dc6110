use actix_web::{post, web};
use std::sync::Arc;

use crate::config::config;
use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{LoginRes, RLogin, Role};
use crate::utils::{password, token::issue_token};

#[post("")]
async fn login(db: web::Data<Arc<PostgresService>>, body: web::Json<RLogin>) -> ApiResult<LoginRes> {
    // missing user -> 404 before any password work
    let user = db.get_user_by_email(&body.email).await?;

    if !password::verify(&body.password, &user.password)? {
        return Err(AppError::PasswordIncorrect);
    }

    let role = Role::parse(&user.role).ok_or_else(|| {
        AppError::Internal(format!("user {} has unknown role {:?}", user.id, user.role))
    })?;

    let token = issue_token(&user.email, role, &config().jwt)?;

    Ok(ApiResponse::Ok(LoginRes {
        message: "Login successful".to_string(),
        token,
    }))
}
