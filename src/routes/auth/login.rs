use std::sync::Arc;

use actix_web::{post, web};

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::token::TokenResponse;
use crate::types::user::LoginRequest;
use crate::utils::{jwt::TokenIssuer, password};

#[post("/login")]
async fn login(
    db: web::Data<Arc<PostgresService>>,
    issuer: web::Data<TokenIssuer>,
    body: web::Json<LoginRequest>,
) -> ApiResult<TokenResponse> {
    // Unknown email and wrong password collapse into the same 401 so the
    // endpoint cannot be used to enumerate accounts. Anything else from the
    // store is an infrastructure failure and surfaces as such.
    let user = match db.get_user_by_email(&body.email).await {
        Ok(user) => user,
        Err(AppError::NotFound) => return Err(AppError::Unauthorized),
        Err(e) => return Err(e),
    };

    let ok = password::verify(&body.password, &user.password_hash)
        .map_err(|e| AppError::Internal(format!("stored hash unreadable: {e}")))?;
    if !ok {
        return Err(AppError::Unauthorized);
    }

    let token = issuer.issue(user.id)?;
    Ok(ApiResponse::Ok(TokenResponse::bearer(token, issuer.ttl_secs())))
}
