use actix_web::{post, web};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{DBUserCreate, MessageRes, RRegister};
use crate::utils::{password, validation::validate_registration};

#[post("")]
async fn register(
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RRegister>,
) -> ApiResult<MessageRes> {
    let valid = validate_registration(&body, &db).await?;

    let hashed = password::hash(&valid.password)?;

    let name = valid.name.clone();
    db.create_user(DBUserCreate {
        name: valid.name,
        email: valid.email,
        password: hashed,
        role: valid.role.to_string(),
    })
    .await?;

    Ok(ApiResponse::Created(MessageRes {
        message: format!("User {} created successfully", name),
    }))
}
