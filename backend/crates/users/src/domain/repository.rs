//! Repository Traits
//!
//! Interfaces for data persistence. Implementations are in the infra layer.
//! Every method is a single statement against the `users` table.

use crate::domain::entity::user::{User, UserDraft};
use crate::domain::value_object::user_id::UserId;
use crate::error::UserResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// All users, ordered by id
    async fn list(&self) -> UserResult<Vec<User>>;

    /// Find a user by id
    async fn find_by_id(&self, user_id: UserId) -> UserResult<Option<User>>;

    /// Insert a user and return it with its assigned id
    async fn create(&self, draft: &UserDraft) -> UserResult<User>;

    /// Overwrite username and email of an existing user
    ///
    /// Returns `None` if no user has this id.
    async fn replace(&self, user_id: UserId, draft: &UserDraft) -> UserResult<Option<User>>;

    /// Delete a user; returns `false` if no user has this id
    async fn delete(&self, user_id: UserId) -> UserResult<bool>;
}
