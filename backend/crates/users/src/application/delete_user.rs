//! Delete User Use Case

use std::sync::Arc;

use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_id::UserId;
use crate::error::{UserError, UserResult};

/// Delete user use case
pub struct DeleteUserUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> DeleteUserUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, user_id: UserId) -> UserResult<()> {
        if !self.user_repo.delete(user_id).await? {
            return Err(UserError::UserNotFound(user_id));
        }

        tracing::info!(user_id = %user_id, "User deleted");

        Ok(())
    }
}
