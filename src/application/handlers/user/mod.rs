//! User directory command and query handlers.

mod create_user;
mod get_user;
mod update_user;

pub use create_user::{CreateUserCommand, CreateUserHandler};
pub use get_user::{GetUserHandler, GetUserQuery};
pub use update_user::{UpdateUserCommand, UpdateUserHandler};
