//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the collaboration domain.

mod category;
mod errors;
mod ids;
mod ownership;
mod state_machine;
mod timestamp;

pub use category::Category;
pub use errors::{DomainError, ErrorCode, ErrorKind, ValidationError};
pub use ids::{MessageId, ProjectId, RequestId, UserId};
pub use ownership::OwnedByUser;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
