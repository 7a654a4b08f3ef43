//! Field-level validation errors
//!
//! A [`FieldErrors`] map collects every message produced while parsing a
//! payload so the caller can report all failing fields at once.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Key used for errors that concern the payload as a whole
pub const SCHEMA_KEY: &str = "_schema";

/// Field name → messages, ordered by field name
///
/// Serializes as a plain JSON object:
/// ```
/// use kernel::validation::FieldErrors;
///
/// let mut errors = FieldErrors::new();
/// errors.add("email", "Not a valid email address.");
/// assert_eq!(
///     serde_json::to_string(&errors).unwrap(),
///     r#"{"email":["Not a valid email address."]}"#
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Error map with a single payload-level message
    pub fn schema(message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(SCHEMA_KEY, message);
        errors
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            first = false;
            write!(f, "{}: {}", field, messages.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_accumulates_per_field() {
        let mut errors = FieldErrors::new();
        errors.add("username", "Not a valid string.");
        errors.add("username", "Length must be between 1 and 80.");
        errors.add("email", "Missing data for required field.");

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("username").map(<[String]>::len), Some(2));
        assert!(errors.get("email").is_some());
        assert!(errors.get("id").is_none());
    }

    #[test]
    fn test_fields_are_sorted() {
        let mut errors = FieldErrors::new();
        errors.add("username", "x");
        errors.add("email", "y");
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["email", "username"]);
    }

    #[test]
    fn test_schema_error() {
        let errors = FieldErrors::schema("Invalid input type.");
        assert_eq!(
            serde_json::to_value(&errors).unwrap(),
            serde_json::json!({ "_schema": ["Invalid input type."] })
        );
    }

    #[test]
    fn test_display() {
        let mut errors = FieldErrors::new();
        errors.add("email", "Not a valid email address.");
        errors.add("username", "Missing data for required field.");
        assert_eq!(
            errors.to_string(),
            "email: Not a valid email address.; username: Missing data for required field."
        );
    }
}
