//! Presentation Layer
//!
//! Payload schema, DTOs, HTTP handlers and the router.

pub mod dto;
pub mod handlers;
pub mod router;
pub mod schema;
