//! HTTP adapter for collaboration requests.

mod dto;
mod handlers;
mod routes;

pub use dto::{ListRequestsParams, RequestResponse, RespondBody, RespondResponse, SubmitRequestBody};
pub use routes::collaboration_routes;
