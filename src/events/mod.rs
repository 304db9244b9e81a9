//! Post-registration side effects.
//!
//! One event, one listener, dispatched inline before the registration
//! response is written. The listener's outcome is deliberately invisible to
//! the registering client.

pub mod greeting;

use entity::user::Model as UserModel;

/// Fired once per successfully persisted user.
pub struct UserRegistered {
    pub user: UserModel,
}

pub async fn dispatch(event: UserRegistered) {
    greeting::on_user_registered(&event).await;
}
