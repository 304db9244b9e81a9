use std::sync::Arc;

use actix_web::{post, web, HttpMessage, HttpRequest};
use entity::user::Model as UserModel;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::token::Claims;

#[post("/me")]
async fn me(
    req: HttpRequest,
    db: web::Data<Arc<PostgresService>>,
) -> ApiResult<UserModel> {
    let claims = req
        .extensions()
        .get::<Claims>()
        .cloned()
        .ok_or(AppError::Unauthorized)?;

    // Read-through to the store, no caching.
    let user = db.get_user_by_id(&claims.sub).await?;
    Ok(ApiResponse::Ok(user))
}
