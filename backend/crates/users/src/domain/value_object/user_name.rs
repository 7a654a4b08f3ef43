//! User Name Value Object
//!
//! ユーザー名はユーザーを識別するための公開ハンドル。
//! 入力された文字列をそのまま保持する（正規化・小文字化はしない）。
//!
//! ## 不変条件
//! - 長さ: 1〜80文字（`users.username VARCHAR(80)` に対応）
//! - 制御文字（NUL など）を含まない（PostgreSQL の `VARCHAR` は NUL を保存できない）

use kernel::error::app_error::{AppError, AppResult};
use std::fmt;

/// Minimum length for user name (in characters)
pub const USER_NAME_MIN_LENGTH: usize = 1;

/// Maximum length for user name (in characters)
pub const USER_NAME_MAX_LENGTH: usize = 80;

/// Validated user name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserName(String);

impl UserName {
    /// Create a new user name with validation
    pub fn new(user_name: impl Into<String>) -> AppResult<Self> {
        let user_name = user_name.into();
        let length = user_name.chars().count();

        if !(USER_NAME_MIN_LENGTH..=USER_NAME_MAX_LENGTH).contains(&length) {
            return Err(AppError::bad_request(format!(
                "Length must be between {} and {}.",
                USER_NAME_MIN_LENGTH, USER_NAME_MAX_LENGTH
            )));
        }

        if user_name.chars().any(char::is_control) {
            return Err(AppError::bad_request("Must not contain control characters."));
        }

        Ok(Self(user_name))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(user_name: impl Into<String>) -> Self {
        Self(user_name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_name_valid() {
        assert!(UserName::new("a").is_ok());
        assert!(UserName::new("alice").is_ok());
        assert!(UserName::new("Alice Smith").is_ok());
        assert!(UserName::new("x".repeat(USER_NAME_MAX_LENGTH)).is_ok());
    }

    #[test]
    fn test_user_name_length_bounds() {
        let err = UserName::new("").unwrap_err();
        assert_eq!(err.message(), "Length must be between 1 and 80.");
        assert!(UserName::new("x".repeat(USER_NAME_MAX_LENGTH + 1)).is_err());
    }

    #[test]
    fn test_user_name_rejects_control_characters() {
        let err = UserName::new("a\u{0}b").unwrap_err();
        assert_eq!(err.message(), "Must not contain control characters.");
        assert!(UserName::new("tab\there").is_err());
        assert!(UserName::new("line\nbreak").is_err());
    }

    #[test]
    fn test_user_name_counts_characters_not_bytes() {
        // 80 multi-byte characters are still 80 characters
        assert!(UserName::new("é".repeat(USER_NAME_MAX_LENGTH)).is_ok());
    }

    #[test]
    fn test_user_name_kept_verbatim() {
        let user_name = UserName::new("  MixedCase ").unwrap();
        assert_eq!(user_name.as_str(), "  MixedCase ");
    }
}
