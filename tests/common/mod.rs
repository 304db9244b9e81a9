use std::sync::Arc;

use actix_web::web;
use mailgreet::config::{EnvConfig, JwtConfig, MailConfig, CONFIG};
use mailgreet::db::postgres_service::PostgresService;
use mailgreet::utils::jwt::TokenIssuer;

pub mod client;

#[allow(dead_code)]
pub const TEST_TTL_SECS: i64 = 3600;

pub struct TestContext {
    pub db: Arc<PostgresService>,
    pub issuer: web::Data<TokenIssuer>,
}

impl TestContext {
    /// Default context: the mail endpoint is a dead port on purpose, so
    /// every send attempt fails — exactly what the contained-failure
    /// contract has to survive.
    #[allow(dead_code)]
    pub async fn new() -> TestContext {
        Self::with_mail_endpoint("http://127.0.0.1:9").await
    }

    /// Same context with mail delivery pointed somewhere specific. CONFIG is
    /// process-wide and set once, so a test binary commits to one endpoint.
    #[allow(dead_code)]
    pub async fn with_mail_endpoint(endpoint: &str) -> TestContext {
        init_test_config(endpoint);

        let db = Arc::new(
            PostgresService::new("sqlite::memory:")
                .await
                .expect("Failed to initialize test database"),
        );
        let issuer = web::Data::new(TokenIssuer::new("test-secret", TEST_TTL_SECS));

        TestContext { db, issuer }
    }
}

fn init_test_config(mail_endpoint: &str) {
    let _ = CONFIG.set(EnvConfig {
        port: 8080,
        db_url: "unused".to_string(),
        jwt: JwtConfig {
            secret: "test-secret".to_string(),
            ttl_secs: TEST_TTL_SECS,
        },
        mail: MailConfig {
            api_key: "test".to_string(),
            endpoint: mail_endpoint.to_string(),
            from: "greetings@test.local".to_string(),
        },
    });
}

// Test data helpers
pub mod test_data {
    use serde_json::{json, Value};

    pub fn sample_register() -> Value {
        json!({
            "name": "Test User",
            "email": "test@example.com",
            "password": "hunter2"
        })
    }

    #[allow(dead_code)]
    pub fn register_with_email(email: &str) -> Value {
        json!({
            "name": "Test User",
            "email": email,
            "password": "hunter2"
        })
    }

    #[allow(dead_code)]
    pub fn login(email: &str, password: &str) -> Value {
        json!({ "email": email, "password": password })
    }
}
