//! User Payload Schema
//!
//! Typed parse step from an untyped JSON payload to a [`UserDraft`].
//! Create and update share the same schema: both fields are required and
//! no other keys are accepted. All failing fields are reported together.

use kernel::error::app_error::AppResult;
use kernel::validation::FieldErrors;
use serde_json::{Map, Value};

use crate::domain::entity::user::UserDraft;
use crate::domain::value_object::{email::Email, user_name::UserName};

pub const USERNAME_FIELD: &str = "username";
pub const EMAIL_FIELD: &str = "email";

const KNOWN_FIELDS: &[&str] = &[USERNAME_FIELD, EMAIL_FIELD];

pub const INVALID_INPUT_TYPE: &str = "Invalid input type.";
pub const UNKNOWN_FIELD: &str = "Unknown field.";
pub const MISSING_FIELD: &str = "Missing data for required field.";
pub const NULL_FIELD: &str = "Field may not be null.";
pub const NOT_A_STRING: &str = "Not a valid string.";

/// Schema for the user payload `{username, email}`
pub struct UserSchema;

impl UserSchema {
    /// Validate a payload into a draft, or collect every field error
    pub fn load(payload: &Value) -> Result<UserDraft, FieldErrors> {
        let Some(object) = payload.as_object() else {
            return Err(FieldErrors::schema(INVALID_INPUT_TYPE));
        };

        let mut errors = FieldErrors::new();

        for key in object.keys() {
            if !KNOWN_FIELDS.contains(&key.as_str()) {
                errors.add(key.as_str(), UNKNOWN_FIELD);
            }
        }

        let user_name = load_string(object, USERNAME_FIELD, &mut errors, UserName::new);
        let email = load_string(object, EMAIL_FIELD, &mut errors, Email::new);

        match (user_name, email) {
            (Some(user_name), Some(email)) if errors.is_empty() => {
                Ok(UserDraft { user_name, email })
            }
            _ => Err(errors),
        }
    }
}

/// Load a required string field and run its value-object constructor
fn load_string<T>(
    object: &Map<String, Value>,
    field: &str,
    errors: &mut FieldErrors,
    parse: impl FnOnce(String) -> AppResult<T>,
) -> Option<T> {
    let raw = match object.get(field) {
        None => {
            errors.add(field, MISSING_FIELD);
            return None;
        }
        Some(Value::Null) => {
            errors.add(field, NULL_FIELD);
            return None;
        }
        Some(Value::String(raw)) => raw.clone(),
        Some(_) => {
            errors.add(field, NOT_A_STRING);
            return None;
        }
    };

    match parse(raw) {
        Ok(value) => Some(value),
        Err(e) => {
            errors.add(field, e.message());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn messages(errors: &FieldErrors, field: &str) -> Vec<String> {
        errors.get(field).map(<[String]>::to_vec).unwrap_or_default()
    }

    #[test]
    fn test_load_valid_payload() {
        let draft = UserSchema::load(&json!({
            "username": "alice",
            "email": "alice@example.com",
        }))
        .unwrap();

        assert_eq!(draft.user_name.as_str(), "alice");
        assert_eq!(draft.email.as_str(), "alice@example.com");
    }

    #[test]
    fn test_missing_fields_are_all_reported() {
        let errors = UserSchema::load(&json!({})).unwrap_err();
        assert_eq!(messages(&errors, "username"), vec![MISSING_FIELD]);
        assert_eq!(messages(&errors, "email"), vec![MISSING_FIELD]);
    }

    #[test]
    fn test_missing_single_field() {
        let errors = UserSchema::load(&json!({ "username": "alice" })).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(messages(&errors, "email"), vec![MISSING_FIELD]);
    }

    #[test]
    fn test_null_and_wrong_types() {
        let errors = UserSchema::load(&json!({ "username": null, "email": 42 })).unwrap_err();
        assert_eq!(messages(&errors, "username"), vec![NULL_FIELD]);
        assert_eq!(messages(&errors, "email"), vec![NOT_A_STRING]);
    }

    #[test]
    fn test_invalid_values() {
        let errors = UserSchema::load(&json!({ "username": "", "email": "not-an-email" }))
            .unwrap_err();
        assert_eq!(
            messages(&errors, "username"),
            vec!["Length must be between 1 and 80."]
        );
        assert_eq!(messages(&errors, "email"), vec!["Not a valid email address."]);
    }

    #[test]
    fn test_username_with_nul_is_rejected() {
        let errors = UserSchema::load(&json!({
            "username": "a\u{0}b",
            "email": "a@example.com",
        }))
        .unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_eq!(
            messages(&errors, "username"),
            vec!["Must not contain control characters."]
        );
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let errors = UserSchema::load(&json!({
            "id": 5,
            "username": "alice",
            "email": "alice@example.com",
        }))
        .unwrap_err();

        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["id"]);
        assert_eq!(messages(&errors, "id"), vec![UNKNOWN_FIELD]);
    }

    #[test]
    fn test_non_object_payloads() {
        for payload in [json!(null), json!([]), json!("alice"), json!(1)] {
            let errors = UserSchema::load(&payload).unwrap_err();
            assert_eq!(messages(&errors, "_schema"), vec![INVALID_INPUT_TYPE]);
        }
    }
}
