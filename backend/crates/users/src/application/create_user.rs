//! Create User Use Case

use std::sync::Arc;

use crate::domain::entity::user::{User, UserDraft};
use crate::domain::repository::UserRepository;
use crate::error::UserResult;

/// Create user use case
pub struct CreateUserUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> CreateUserUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, draft: UserDraft) -> UserResult<User> {
        let user = self.user_repo.create(&draft).await?;

        tracing::info!(
            user_id = %user.user_id,
            user_name = %user.user_name,
            "User created"
        );

        Ok(user)
    }
}
