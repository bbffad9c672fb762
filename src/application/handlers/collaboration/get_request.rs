//! GetRequestHandler - Query handler for a single collaboration request.

use std::sync::Arc;

use crate::domain::collaboration::CollaborationRequest;
use crate::domain::foundation::{DomainError, ErrorCode, RequestId};
use crate::ports::CollaborationRequestRepository;

#[derive(Debug, Clone)]
pub struct GetRequestQuery {
    pub request_id: RequestId,
}

pub struct GetRequestHandler {
    requests: Arc<dyn CollaborationRequestRepository>,
}

impl GetRequestHandler {
    pub fn new(requests: Arc<dyn CollaborationRequestRepository>) -> Self {
        Self { requests }
    }

    pub async fn handle(&self, query: GetRequestQuery) -> Result<CollaborationRequest, DomainError> {
        self.requests
            .find_by_id(&query.request_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::RequestNotFound,
                    format!("Collaboration request not found: {}", query.request_id),
                )
                .with_detail("request_id", query.request_id.to_string())
            })
    }
}
