use serde::Serialize;

/// Resend send payload, cut down to what a greeting carries. Body variants
/// are optional on the wire; absent ones are left out of the JSON entirely.
#[derive(Debug, Serialize)]
pub struct SendEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_body_variants_stay_off_the_wire() {
        let mail = SendEmail {
            from: "greetings@test.local".to_string(),
            to: vec!["kef@example.com".to_string()],
            subject: "Welcome aboard".to_string(),
            text: Some("hi".to_string()),
            html: None,
        };
        let value = serde_json::to_value(&mail).unwrap();
        assert_eq!(value["from"], "greetings@test.local");
        assert_eq!(value["to"][0], "kef@example.com");
        assert_eq!(value["text"], "hi");
        assert!(value.get("html").is_none());
    }
}
