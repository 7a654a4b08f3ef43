//! User Entity
//!
//! One row of the `users` table.

use crate::domain::value_object::{email::Email, user_id::UserId, user_name::UserName};

/// User entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Database-assigned identifier, immutable once created
    pub user_id: UserId,
    pub user_name: UserName,
    pub email: Email,
}

impl User {
    /// Attach a freshly assigned id to a validated draft
    pub fn from_draft(user_id: UserId, draft: UserDraft) -> Self {
        Self {
            user_id,
            user_name: draft.user_name,
            email: draft.email,
        }
    }

    /// Overwrite both mutable fields
    pub fn replace(&mut self, draft: UserDraft) {
        self.user_name = draft.user_name;
        self.email = draft.email;
    }
}

/// Validated `(username, email)` pair
///
/// Produced by the payload schema; used for both create and full replace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    pub user_name: UserName,
    pub email: Email,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(user_name: &str, email: &str) -> UserDraft {
        UserDraft {
            user_name: UserName::new(user_name).unwrap(),
            email: Email::new(email).unwrap(),
        }
    }

    #[test]
    fn test_from_draft() {
        let user = User::from_draft(UserId::new(3), draft("alice", "alice@example.com"));
        assert_eq!(user.user_id.value(), 3);
        assert_eq!(user.user_name.as_str(), "alice");
    }

    #[test]
    fn test_replace_keeps_id() {
        let mut user = User::from_draft(UserId::new(9), draft("alice", "alice@example.com"));
        user.replace(draft("bob", "bob@example.com"));

        assert_eq!(user.user_id, UserId::new(9));
        assert_eq!(user.user_name.as_str(), "bob");
        assert_eq!(user.email.as_str(), "bob@example.com");
    }
}
