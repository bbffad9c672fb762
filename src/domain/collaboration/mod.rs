//! Collaboration request workflow.
//!
//! A non-member asks to join a project; the owner accepts or rejects.
//! Acceptance and the membership change happen as one step (see
//! [`resolve`]). A sender whose request was rejected may ask again.

mod request;
mod status;

pub use request::{ensure_not_member, resolve, CollaborationRequest};
pub use status::{Decision, RequestStatus};
