use actix_web::{dev::ServiceRequest, web, HttpMessage};
use actix_web_httpauth::extractors::bearer::BearerAuth;

use crate::types::error::AppError;
use crate::utils::jwt::TokenIssuer;

/// Bearer gate in front of every protected route. On success the decoded
/// claims are stashed in the request extensions for the handler.
pub async fn validate_token(
    req: ServiceRequest,
    credentials: BearerAuth,
) -> Result<ServiceRequest, (actix_web::Error, ServiceRequest)> {
    let Some(issuer) = req.app_data::<web::Data<TokenIssuer>>() else {
        return Err((AppError::Internal("token issuer not configured".into()).into(), req));
    };

    match issuer.verify(credentials.token()) {
        Ok(claims) => {
            req.extensions_mut().insert(claims);
            Ok(req)
        }
        Err(_) => Err((AppError::Unauthorized.into(), req)),
    }
}
