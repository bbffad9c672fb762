//! HTTP adapter - the REST API.
//!
//! Each resource has its own `dto`/`handlers`/`routes` triple; all of them
//! share [`AppState`] and answer errors through [`ApiError`].

pub mod chat;
pub mod collaboration;
pub mod error;
pub mod extract;
pub mod projects;
pub mod recommendations;
pub mod router;
pub mod state;
pub mod users;

pub use error::{ApiError, ErrorResponse};
pub use extract::{ActingUser, USER_ID_HEADER};
pub use router::{api_router, api_routes};
pub use state::AppState;
