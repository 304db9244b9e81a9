use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::types::error::AppError;
use crate::types::token::Claims;

/// Issues, verifies and revokes HS256 bearer tokens.
///
/// Revocation is an in-memory `jti -> exp` map. Entries whose tokens have
/// expired on their own are pruned on every revoke, so the map is bounded by
/// the number of live tokens.
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_secs: i64,
    revoked: RwLock<HashMap<String, i64>>,
}

impl TokenIssuer {
    pub fn new(secret: &str, ttl_secs: i64) -> Self {
        TokenIssuer {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl_secs,
            revoked: RwLock::new(HashMap::new()),
        }
    }

    pub fn ttl_secs(&self) -> i64 {
        self.ttl_secs
    }

    /// Mint a fresh token for a user.
    pub fn issue(&self, user_id: Uuid) -> Result<String, AppError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: user_id,
            jti: Uuid::new_v4().to_string(),
            iat: now,
            exp: now + self.ttl_secs,
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| AppError::Internal(format!("token signing failed: {e}")))
    }

    /// Decode and check a presented token: signature, expiry (no leeway),
    /// then the revocation list.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let data = decode::<Claims>(token, &self.decoding, &validation)
            .map_err(|_| AppError::Unauthorized)?;

        if self.is_revoked(&data.claims.jti) {
            return Err(AppError::Unauthorized);
        }
        Ok(data.claims)
    }

    /// Blacklist a token until its natural expiry. Idempotent.
    pub fn revoke(&self, claims: &Claims) {
        let now = Utc::now().timestamp();
        let mut revoked = self.revoked.write().unwrap();
        revoked.retain(|_, exp| *exp > now);
        revoked.insert(claims.jti.clone(), claims.exp);
    }

    /// Exchange a live token for a new one. The old token is revoked before
    /// the new one is returned, so at most one of the pair is ever live.
    pub fn refresh(&self, token: &str) -> Result<String, AppError> {
        let claims = self.verify(token)?;
        self.revoke(&claims);
        self.issue(claims.sub)
    }

    fn is_revoked(&self, jti: &str) -> bool {
        self.revoked.read().unwrap().contains_key(jti)
    }
}
