//! Collaboration request command and query handlers.

mod get_request;
mod list_requests;
mod respond_to_request;
mod submit_request;

pub use get_request::{GetRequestHandler, GetRequestQuery};
pub use list_requests::{ListRequestsHandler, ListRequestsQuery};
pub use respond_to_request::{
    RespondToRequestCommand, RespondToRequestHandler, RespondToRequestResult,
};
pub use submit_request::{SubmitRequestCommand, SubmitRequestHandler};
