use std::sync::Arc;

use actix_web::{post, web};
use validator::Validate;

use crate::db::postgres_service::PostgresService;
use crate::events::{self, UserRegistered};
use crate::types::error::{AppError, FieldErrors};
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{DBUserCreate, RegisterRequest, UserResource};
use crate::utils::{password, validate::field_messages};

const EMAIL_TAKEN: &str = "email has already been taken";

#[post("/register")]
async fn register(
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RegisterRequest>,
) -> ApiResult<UserResource> {
    let mut errors = match body.validate() {
        Ok(()) => FieldErrors::new(),
        Err(e) => field_messages(&e),
    };

    // Uniqueness is a store concern; report it through the same field map.
    if let Some(email) = &body.email {
        if !errors.contains_key("email") && db.user_exists_by_email(email).await? {
            errors.insert("email".to_string(), vec![EMAIL_TAKEN.to_string()]);
        }
    }

    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    // validate() guarantees all three are present past this point
    let name = body.name.clone().unwrap_or_default();
    let email = body.email.clone().unwrap_or_default();
    let password = body.password.clone().unwrap_or_default();

    let password_hash = password::hash(&password)
        .map_err(|e| AppError::Internal(format!("password hashing failed: {e}")))?;

    let user = match db
        .create_user(DBUserCreate { name, email, password_hash })
        .await
    {
        Ok(user) => user,
        // Lost a concurrent race on the unique index: same outcome as the
        // pre-check, one success and one validation failure.
        Err(AppError::AlreadyExists) => {
            let mut errors = FieldErrors::new();
            errors.insert("email".to_string(), vec![EMAIL_TAKEN.to_string()]);
            return Err(AppError::Validation(errors));
        }
        Err(e) => return Err(e),
    };

    let resource = UserResource::from(&user);
    events::dispatch(UserRegistered { user }).await;

    Ok(ApiResponse::Ok(resource))
}
