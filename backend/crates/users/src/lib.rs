//! Users Backend Module
//!
//! CRUD over the single `users` resource.
//!
//! Clean Architecture structure:
//! - `domain/` - User entity, value objects, repository trait
//! - `application/` - One use case per endpoint
//! - `infra/` - PostgreSQL (and optional in-memory) repositories
//! - `presentation/` - Payload schema, DTOs, HTTP handlers, router
//!
//! Each request performs at most one validation pass and one database
//! statement. The repository is injected through router state.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{UserError, UserResult};
pub use infra::postgres::PgUserRepository;
pub use presentation::router::{user_router, user_router_generic};

#[cfg(any(test, feature = "memory"))]
pub use infra::memory::InMemoryUserRepository;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
