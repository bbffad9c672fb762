//! HTTP adapter for projects.

mod dto;
mod handlers;
mod routes;

pub use dto::{CreateProjectRequest, ListProjectsParams, ProjectResponse};
pub use routes::project_routes;
