use crate::config::config;
use crate::events::UserRegistered;
use crate::types::mail::SendEmail;
use crate::utils::mail::send_email;

/// Build the greeting mail for a freshly registered user.
pub fn greeting_mail(name: &str, email: &str) -> SendEmail {
    SendEmail {
        from: config().mail.from.clone(),
        to: vec![email.to_string()],
        subject: "Welcome aboard".to_string(),
        text: Some(format!(
            "Hi {name},\n\nWelcome! Your account is ready and you can log in right away.\n"
        )),
        html: None,
    }
}

/// Send the greeting. Transport failures are logged and swallowed; the
/// registration has already committed and its response must not change.
pub async fn on_user_registered(event: &UserRegistered) {
    let mail = greeting_mail(&event.user.name, &event.user.email);
    if let Err(e) = send_email(mail).await {
        log::warn!("greeting email to {} failed: {e}", event.user.email);
    }
}
