use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Signed claim set carried by every access token.
///
/// `jti` is what the revocation list keys on: logout and refresh blacklist
/// the id rather than the token string itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub jti: String,
    pub iat: i64,
    pub exp: i64,
}

/// Wire shape shared by login and refresh.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

impl TokenResponse {
    pub fn bearer(access_token: String, expires_in: i64) -> Self {
        TokenResponse {
            access_token,
            token_type: "bearer".to_string(),
            expires_in,
        }
    }
}
