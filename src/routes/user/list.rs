use actix_web::{get, web};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::PublicUser;

#[get("")]
async fn list(db: web::Data<Arc<PostgresService>>) -> ApiResult<Vec<PublicUser>> {
    let users = db.get_all_users().await?;
    Ok(ApiResponse::Ok(
        users.into_iter().map(PublicUser::from).collect(),
    ))
}
