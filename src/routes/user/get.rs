use actix_web::{get, web};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::PublicUser;

/// Single-element array on hit, 404 on miss. The array shape matches
/// the list endpoint so clients can share a decoder.
#[get("/{id}")]
async fn get_by_id(
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<i32>,
) -> ApiResult<Vec<PublicUser>> {
    let user = db.get_user_by_id(path.into_inner()).await?;
    Ok(ApiResponse::Ok(vec![PublicUser::from(user)]))
}
