//! API DTOs (Data Transfer Objects)

use serde::Serialize;

use crate::domain::entity::user::User;

/// User as returned by every endpoint: `{id, username, email}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.user_id.value(),
            username: user.user_name.as_str().to_owned(),
            email: user.email.as_str().to_owned(),
        }
    }
}
