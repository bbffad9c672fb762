//! HTTP DTOs for collaboration request endpoints.

use serde::{Deserialize, Serialize};

use crate::adapters::http::projects::ProjectResponse;
use crate::application::RespondToRequestResult;
use crate::domain::collaboration::{CollaborationRequest, RequestStatus};

/// Body of `POST /projects/:id/requests`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequestBody {
    #[serde(default)]
    pub sender_user_id: String,
}

/// Body of `POST /requests/:id/respond`.
#[derive(Debug, Clone, Deserialize)]
pub struct RespondBody {
    #[serde(default)]
    pub decision: String,
}

/// Query string of `GET /projects/:id/requests`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListRequestsParams {
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestResponse {
    pub id: String,
    pub project_id: String,
    pub sender_user_id: String,
    pub status: RequestStatus,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responded_at: Option<String>,
}

impl From<&CollaborationRequest> for RequestResponse {
    fn from(request: &CollaborationRequest) -> Self {
        Self {
            id: request.id().to_string(),
            project_id: request.project_id().to_string(),
            sender_user_id: request.sender_user_id().to_string(),
            status: request.status(),
            created_at: request.created_at().to_rfc3339(),
            responded_at: request.responded_at().map(|t| t.to_rfc3339()),
        }
    }
}

/// The decided request together with the project after the decision.
#[derive(Debug, Clone, Serialize)]
pub struct RespondResponse {
    pub request: RequestResponse,
    pub project: ProjectResponse,
}

impl From<&RespondToRequestResult> for RespondResponse {
    fn from(result: &RespondToRequestResult) -> Self {
        Self {
            request: RequestResponse::from(&result.request),
            project: ProjectResponse::from(&result.project),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ProjectId, RequestId, Timestamp, UserId};
    use serde_json::json;

    #[test]
    fn submit_body_reads_sender_user_id() {
        let sender = UserId::new();
        let body: SubmitRequestBody =
            serde_json::from_value(json!({"senderUserId": sender.to_string()})).unwrap();
        assert_eq!(body.sender_user_id, sender.to_string());
    }

    #[test]
    fn pending_response_has_no_responded_at() {
        let request = CollaborationRequest::reconstitute(
            RequestId::new(),
            ProjectId::new(),
            UserId::new(),
            RequestStatus::Pending,
            Timestamp::now(),
            None,
        );

        let json = serde_json::to_value(RequestResponse::from(&request)).unwrap();
        assert_eq!(json["status"], "pending");
        assert!(json.get("respondedAt").is_none());
        assert!(json.get("senderUserId").is_some());
    }
}
