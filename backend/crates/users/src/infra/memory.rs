//! In-Memory Repository Implementation
//!
//! Same contract as the PostgreSQL repository, including sequential ids
//! and unique usernames/emails. Used by tests and local runs.

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::entity::user::{User, UserDraft};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_id::UserId;
use crate::error::{UserError, UserResult};

#[derive(Default)]
struct Table {
    next_id: i64,
    rows: BTreeMap<UserId, User>,
}

impl Table {
    /// Reject a draft whose username or email belongs to another row
    fn check_unique(&self, draft: &UserDraft, except: Option<UserId>) -> UserResult<()> {
        let taken = self.rows.values().any(|user| {
            Some(user.user_id) != except
                && (user.user_name == draft.user_name || user.email == draft.email)
        });

        if taken {
            return Err(UserError::DuplicateUser);
        }

        Ok(())
    }
}

/// In-memory user repository
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    table: Arc<RwLock<Table>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> UserResult<Vec<User>> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, user_id: UserId) -> UserResult<Option<User>> {
        let table = self.table.read().await;
        Ok(table.rows.get(&user_id).cloned())
    }

    async fn create(&self, draft: &UserDraft) -> UserResult<User> {
        let mut table = self.table.write().await;
        table.check_unique(draft, None)?;

        table.next_id += 1;
        let user = User::from_draft(UserId::new(table.next_id), draft.clone());
        table.rows.insert(user.user_id, user.clone());

        Ok(user)
    }

    async fn replace(&self, user_id: UserId, draft: &UserDraft) -> UserResult<Option<User>> {
        let mut table = self.table.write().await;
        if !table.rows.contains_key(&user_id) {
            return Ok(None);
        }
        table.check_unique(draft, Some(user_id))?;

        let Some(user) = table.rows.get_mut(&user_id) else {
            return Ok(None);
        };
        user.replace(draft.clone());

        Ok(Some(user.clone()))
    }

    async fn delete(&self, user_id: UserId) -> UserResult<bool> {
        let mut table = self.table.write().await;
        Ok(table.rows.remove(&user_id).is_some())
    }
}
