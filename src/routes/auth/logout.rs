use actix_web::{post, web, HttpMessage, HttpRequest};

use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::token::Claims;
use crate::types::user::LogoutRes;
use crate::utils::jwt::TokenIssuer;

#[post("/logout")]
async fn logout(
    req: HttpRequest,
    issuer: web::Data<TokenIssuer>,
) -> ApiResult<LogoutRes> {
    let claims = req
        .extensions()
        .get::<Claims>()
        .cloned()
        .ok_or(AppError::Unauthorized)?;

    issuer.revoke(&claims);

    Ok(ApiResponse::Ok(LogoutRes {
        message: "Successfully logged out".to_string(),
    }))
}
