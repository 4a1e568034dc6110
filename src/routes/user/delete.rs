use actix_web::web;
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::MessageRes;

/// Admin-gated by the bearer middleware wrapped around this resource.
pub async fn delete_user(
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<i32>,
) -> ApiResult<MessageRes> {
    db.delete_user_by_id(path.into_inner()).await?;
    Ok(ApiResponse::Ok(MessageRes {
        message: "User deleted successfully".to_string(),
    }))
}
