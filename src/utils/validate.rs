use validator::ValidationErrors;

use crate::types::error::FieldErrors;

/// Flatten `validator`'s error tree into the `field -> [messages]` map the
/// register endpoint reports.
pub fn field_messages(errors: &ValidationErrors) -> FieldErrors {
    let mut out = FieldErrors::new();
    for (field, errs) in errors.field_errors() {
        let messages = errs
            .iter()
            .map(|e| match &e.message {
                Some(msg) => msg.to_string(),
                None => e.code.to_string(),
            })
            .collect();
        out.insert(field.to_string(), messages);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::user::RegisterRequest;
    use validator::Validate;

    fn parse(json: &str) -> RegisterRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn empty_payload_reports_every_field() {
        let req = parse("{}");
        let errors = field_messages(&req.validate().unwrap_err());
        assert!(errors.contains_key("name"));
        assert!(errors.contains_key("email"));
        assert!(errors.contains_key("password"));
    }

    #[test]
    fn missing_password_only_flags_password() {
        let req = parse(r#"{"name":"Kef","email":"kef@example.com"}"#);
        let errors = field_messages(&req.validate().unwrap_err());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors["password"], vec!["password is required"]);
    }

    #[test]
    fn malformed_email_is_flagged() {
        let req = parse(r#"{"name":"Kef","email":"not-an-email","password":"pw"}"#);
        let errors = field_messages(&req.validate().unwrap_err());
        assert_eq!(errors["email"], vec!["email must be a valid email address"]);
    }

    #[test]
    fn overlong_fields_are_flagged() {
        let long = "x".repeat(256);
        let req = parse(&format!(
            r#"{{"name":"{long}","email":"kef@example.com","password":"{long}"}}"#
        ));
        let errors = field_messages(&req.validate().unwrap_err());
        assert!(errors.contains_key("name"));
        assert!(errors.contains_key("password"));
        assert!(!errors.contains_key("email"));
    }

    #[test]
    fn valid_input_passes() {
        let req = parse(r#"{"name":"Kef","email":"kef@example.com","password":"hunter2"}"#);
        assert!(req.validate().is_ok());
    }
}
