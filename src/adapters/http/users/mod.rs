//! HTTP adapter for the user directory.

mod dto;
mod handlers;
mod routes;

pub use dto::{CreateUserRequest, UpdateUserRequest, UserResponse};
pub use routes::user_routes;
