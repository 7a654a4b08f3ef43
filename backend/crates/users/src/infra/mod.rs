//! Infrastructure Layer
//!
//! Database implementations of the repository trait.

#[cfg(any(test, feature = "memory"))]
pub mod memory;
pub mod postgres;

#[cfg(any(test, feature = "memory"))]
pub use memory::InMemoryUserRepository;
pub use postgres::PgUserRepository;
