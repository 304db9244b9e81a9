use std::time::{Duration, Instant};

use reqwest::{Client, ClientBuilder};

use crate::config::config;
use crate::types::mail::SendEmail;

/// Deliver one email through the Resend HTTP API.
///
/// Best effort by contract: callers on the registration path log the error
/// and move on, they never fail the request over it.
pub async fn send_email(email: SendEmail) -> Result<String, String> {
    let mail_cfg = &config().mail;

    let payload = serde_json::to_string(&email)
        .map_err(|e| format!("serialize email failed: {e}"))?;

    let client: Client = ClientBuilder::new()
        .user_agent("mailgreet/1.0 (+reqwest)")
        .timeout(Duration::from_secs(30))
        .build()
        .map_err(|e| format!("build client failed: {e}"))?;

    log::debug!("mail -> POST {} ({} bytes)", mail_cfg.endpoint, payload.len());

    let t0 = Instant::now();
    let res = client
        .post(&mail_cfg.endpoint)
        .bearer_auth(&mail_cfg.api_key) // do NOT log the key
        .header("Content-Type", "application/json")
        .body(payload)
        .send()
        .await
        .map_err(|e| format!("send failed: {e}"))?;

    let status = res.status();
    let body = res.text().await.map_err(|e| format!("read body failed: {e}"))?;
    log::debug!("mail <- {status} in {} ms", t0.elapsed().as_millis());

    if status.is_success() {
        Ok(body)
    } else {
        Err(format!("Resend API error: HTTP {status}: {body}"))
    }
}
