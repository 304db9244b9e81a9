use actix_web::{post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;

use crate::types::response::{ApiResponse, ApiResult};
use crate::types::token::TokenResponse;
use crate::utils::jwt::TokenIssuer;

#[post("/refresh")]
async fn refresh(
    auth: BearerAuth,
    issuer: web::Data<TokenIssuer>,
) -> ApiResult<TokenResponse> {
    // Rotation: the presented token is revoked inside refresh(), so exactly
    // one of (old, new) is live once this returns.
    let token = issuer.refresh(auth.token())?;
    Ok(ApiResponse::Ok(TokenResponse::bearer(token, issuer.ttl_secs())))
}
