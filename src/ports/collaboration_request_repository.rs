//! Collaboration request repository port.
//!
//! Both writes here touch more than one record and must be atomic:
//!
//! - `submit` checks membership and pending-uniqueness, then inserts
//! - `respond` flips the status and, on acceptance, adds the member

use crate::domain::collaboration::{CollaborationRequest, Decision, RequestStatus};
use crate::domain::foundation::{DomainError, ProjectId, RequestId, Timestamp, UserId};
use crate::domain::project::Project;
use async_trait::async_trait;

/// Repository port for collaboration requests.
#[async_trait]
pub trait CollaborationRequestRepository: Send + Sync {
    /// Insert a pending request.
    ///
    /// The checks and the insert happen as one step, so two concurrent
    /// submissions for the same (project, sender) pair cannot both succeed.
    ///
    /// # Errors
    ///
    /// - `ProjectNotFound` if the project no longer exists
    /// - `AlreadyMember` if the sender is already a member
    /// - `DuplicatePendingRequest` if a pending request for the pair exists
    /// - `DatabaseError` on persistence failure
    async fn submit(&self, request: &CollaborationRequest) -> Result<(), DomainError>;

    /// Find a request by ID. Returns `None` if not found.
    async fn find_by_id(&self, id: &RequestId)
        -> Result<Option<CollaborationRequest>, DomainError>;

    /// Requests for a project, oldest first, optionally narrowed by status.
    async fn list_by_project(
        &self,
        project_id: &ProjectId,
        status: Option<RequestStatus>,
    ) -> Result<Vec<CollaborationRequest>, DomainError>;

    /// Apply the owner's decision.
    ///
    /// Status change and membership change commit together or not at all.
    /// Returns the decided request and the project as stored afterwards.
    ///
    /// # Errors
    ///
    /// - `RequestNotFound` if the request doesn't exist
    /// - `Forbidden` if `responder` is not the project owner
    /// - `InvalidStateTransition` if the request is no longer pending
    /// - `DatabaseError` on persistence failure
    async fn respond(
        &self,
        id: &RequestId,
        decision: Decision,
        responder: &UserId,
        now: Timestamp,
    ) -> Result<(CollaborationRequest, Project), DomainError>;
}
