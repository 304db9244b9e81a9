use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Registration input. Fields are optional so a missing field lands in the
/// validation report instead of a deserialization error.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(
        required(message = "name is required"),
        length(min = 1, max = 255, message = "name must be between 1 and 255 characters")
    )]
    pub name: Option<String>,
    #[validate(
        required(message = "email is required"),
        email(message = "email must be a valid email address"),
        length(max = 255, message = "email may not be greater than 255 characters")
    )]
    pub email: Option<String>,
    #[validate(
        required(message = "password is required"),
        length(min = 1, max = 255, message = "password must be between 1 and 255 characters")
    )]
    pub password: Option<String>,
}

/// Login credentials. Never persisted. Absent fields collapse to empty
/// strings, which fail verification the same way a wrong password does.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize, Deserialize)]
pub struct DBUserCreate {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// Public representation returned from register. The hash stays server-side.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserResource {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

impl From<&entity::user::Model> for UserResource {
    fn from(user: &entity::user::Model) -> Self {
        UserResource {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct LogoutRes {
    pub message: String,
}
