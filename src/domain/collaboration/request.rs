//! CollaborationRequest aggregate and the decision step that admits members.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    DomainError, ErrorCode, OwnedByUser, ProjectId, RequestId, StateMachine, Timestamp, UserId,
};
use crate::domain::project::Project;

use super::{Decision, RequestStatus};

/// A non-member's ask to join a project.
///
/// # Invariants
///
/// - The sender was not a member when the request was created
/// - Once `status` is terminal the request never changes again
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollaborationRequest {
    id: RequestId,
    project_id: ProjectId,
    sender_user_id: UserId,
    status: RequestStatus,
    created_at: Timestamp,
    responded_at: Option<Timestamp>,
}

impl CollaborationRequest {
    /// Create a pending request from `sender` to join `project`.
    ///
    /// Uniqueness of pending requests per (project, sender) is enforced by
    /// the repository, which sees every request.
    ///
    /// # Errors
    ///
    /// - `AlreadyMember` if the sender is already in the project
    pub fn submit(
        id: RequestId,
        project: &Project,
        sender: UserId,
        now: Timestamp,
    ) -> Result<Self, DomainError> {
        ensure_not_member(project, &sender)?;
        Ok(Self {
            id,
            project_id: *project.id(),
            sender_user_id: sender,
            status: RequestStatus::Pending,
            created_at: now,
            responded_at: None,
        })
    }

    /// Reconstitute a request from persistence.
    pub fn reconstitute(
        id: RequestId,
        project_id: ProjectId,
        sender_user_id: UserId,
        status: RequestStatus,
        created_at: Timestamp,
        responded_at: Option<Timestamp>,
    ) -> Self {
        Self {
            id,
            project_id,
            sender_user_id,
            status,
            created_at,
            responded_at,
        }
    }

    pub fn id(&self) -> &RequestId {
        &self.id
    }

    pub fn project_id(&self) -> &ProjectId {
        &self.project_id
    }

    pub fn sender_user_id(&self) -> &UserId {
        &self.sender_user_id
    }

    pub fn status(&self) -> RequestStatus {
        self.status
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn responded_at(&self) -> Option<&Timestamp> {
        self.responded_at.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        self.status == RequestStatus::Pending
    }

    /// Record the owner's decision.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` if the request is no longer pending
    pub fn decide(&mut self, decision: Decision, now: Timestamp) -> Result<(), DomainError> {
        self.status = self
            .status
            .transition_to(decision.target_status())
            .map_err(|e| e.with_detail("request_id", self.id.to_string()))?;
        self.responded_at = Some(now);
        Ok(())
    }
}

/// Fails with `AlreadyMember` when `user` already belongs to `project`.
pub fn ensure_not_member(project: &Project, user: &UserId) -> Result<(), DomainError> {
    if project.is_member(user) {
        return Err(DomainError::new(
            ErrorCode::AlreadyMember,
            "User is already a member of this project",
        )
        .with_detail("project_id", project.id().to_string())
        .with_detail("user_id", user.to_string()));
    }
    Ok(())
}

/// Apply the owner's decision to a request and its project together.
///
/// Callers must hold whatever lock or transaction makes the pair of writes
/// atomic; this function only mutates the two values it is given, and leaves
/// both untouched on error.
///
/// Returns `true` if the project's membership changed.
///
/// # Errors
///
/// - `InternalError` if the request does not belong to the project
/// - `Forbidden` if `responder` is not the project owner
/// - `InvalidStateTransition` if the request is already decided
pub fn resolve(
    request: &mut CollaborationRequest,
    project: &mut Project,
    decision: Decision,
    responder: &UserId,
    now: Timestamp,
) -> Result<bool, DomainError> {
    if request.project_id() != project.id() {
        return Err(DomainError::new(
            ErrorCode::InternalError,
            "Request does not belong to the given project",
        ));
    }
    project.check_ownership(responder)?;
    request.decide(decision, now)?;

    match decision {
        Decision::Accepted => Ok(project.add_member(*request.sender_user_id(), now)),
        Decision::Rejected => Ok(false),
    }
}
