//! Update User Use Case
//!
//! Full replacement: both username and email are overwritten.

use std::sync::Arc;

use crate::domain::entity::user::{User, UserDraft};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_id::UserId;
use crate::error::{UserError, UserResult};

/// Update user use case
pub struct UpdateUserUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> UpdateUserUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, user_id: UserId, draft: UserDraft) -> UserResult<User> {
        let user = self
            .user_repo
            .replace(user_id, &draft)
            .await?
            .ok_or(UserError::UserNotFound(user_id))?;

        tracing::info!(user_id = %user.user_id, "User updated");

        Ok(user)
    }
}
