//! User Router

use axum::{Router, routing::get};
use std::sync::Arc;

use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgUserRepository;
use crate::presentation::handlers::{self, UserAppState};

/// Create the user router with PostgreSQL repository
pub fn user_router(repo: PgUserRepository) -> Router {
    user_router_generic(repo)
}

/// Create a generic user router for any repository implementation
pub fn user_router_generic<R>(repo: R) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let state = UserAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route(
            "/users",
            get(handlers::list_users::<R>).post(handlers::create_user::<R>),
        )
        .route(
            "/users/{user_id}",
            get(handlers::get_user::<R>)
                .put(handlers::update_user::<R>)
                .delete(handlers::delete_user::<R>),
        )
        .with_state(state)
}
