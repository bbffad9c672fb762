//! RespondToRequestHandler - The project owner accepts or rejects a request.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::collaboration::{CollaborationRequest, Decision};
use crate::domain::foundation::{DomainError, RequestId, Timestamp, UserId};
use crate::domain::project::Project;
use crate::ports::CollaborationRequestRepository;

#[derive(Debug, Clone)]
pub struct RespondToRequestCommand {
    pub request_id: RequestId,
    pub decision: Decision,
    pub responder_id: UserId,
}

/// The decided request and the project as it stands afterwards.
#[derive(Debug, Clone)]
pub struct RespondToRequestResult {
    pub request: CollaborationRequest,
    pub project: Project,
}

pub struct RespondToRequestHandler {
    requests: Arc<dyn CollaborationRequestRepository>,
}

impl RespondToRequestHandler {
    pub fn new(requests: Arc<dyn CollaborationRequestRepository>) -> Self {
        Self { requests }
    }

    /// # Errors
    ///
    /// - `RequestNotFound` if the request doesn't exist
    /// - `Forbidden` unless the responder owns the project
    /// - `InvalidStateTransition` if the request was already decided
    pub async fn handle(
        &self,
        cmd: RespondToRequestCommand,
    ) -> Result<RespondToRequestResult, DomainError> {
        let outcome = self
            .requests
            .respond(
                &cmd.request_id,
                cmd.decision,
                &cmd.responder_id,
                Timestamp::now(),
            )
            .await;

        match outcome {
            Ok((request, project)) => {
                info!(
                    request_id = %cmd.request_id,
                    project_id = %project.id(),
                    status = %request.status(),
                    "collaboration request decided"
                );
                Ok(RespondToRequestResult { request, project })
            }
            Err(e) => {
                warn!(
                    request_id = %cmd.request_id,
                    responder_id = %cmd.responder_id,
                    code = %e.code,
                    "collaboration response refused"
                );
                Err(e)
            }
        }
    }
}
