//! Application Layer - Use Cases
//!
//! One use case per endpoint. Each holds the repository behind an `Arc`
//! and performs a single repository call.

pub mod create_user;
pub mod delete_user;
pub mod get_user;
pub mod list_users;
pub mod update_user;

pub use create_user::CreateUserUseCase;
pub use delete_user::DeleteUserUseCase;
pub use get_user::GetUserUseCase;
pub use list_users::ListUsersUseCase;
pub use update_user::UpdateUserUseCase;
