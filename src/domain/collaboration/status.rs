//! RequestStatus enum for the collaboration request lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{StateMachine, ValidationError};

/// Lifecycle status of a collaboration request.
///
/// Valid transitions:
/// - Pending -> Accepted
/// - Pending -> Rejected
///
/// Accepted and Rejected are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Accepted => "accepted",
            RequestStatus::Rejected => "rejected",
        }
    }
}

impl StateMachine for RequestStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use RequestStatus::*;
        matches!((self, target), (Pending, Accepted) | (Pending, Rejected))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use RequestStatus::*;
        match self {
            Pending => vec![Accepted, Rejected],
            Accepted | Rejected => vec![],
        }
    }
}

impl std::str::FromStr for RequestStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(RequestStatus::Pending),
            "accepted" => Ok(RequestStatus::Accepted),
            "rejected" => Ok(RequestStatus::Rejected),
            other => Err(ValidationError::invalid_format(
                "status",
                format!("unknown request status '{}'", other),
            )),
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The owner's answer to a pending request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Accepted,
    Rejected,
}

impl Decision {
    /// The status a pending request moves to under this decision.
    pub fn target_status(&self) -> RequestStatus {
        match self {
            Decision::Accepted => RequestStatus::Accepted,
            Decision::Rejected => RequestStatus::Rejected,
        }
    }
}

impl std::str::FromStr for Decision {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "accepted" | "accept" => Ok(Decision::Accepted),
            "rejected" | "reject" => Ok(Decision::Rejected),
            other => Err(ValidationError::invalid_format(
                "decision",
                format!("expected 'accepted' or 'rejected', got '{}'", other),
            )),
        }
    }
}
