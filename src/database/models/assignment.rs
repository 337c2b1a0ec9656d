use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Member;
use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: Uuid,
    pub event_id: Uuid,
    pub member_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentWithMember {
    #[serde(flatten)]
    pub assignment: Assignment,
    pub member: Member,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssignmentRequest {
    pub event_id: Option<Uuid>,
    pub member_id: Option<Uuid>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssignmentInput {
    pub event_id: Uuid,
    pub member_id: Uuid,
}

impl TryFrom<CreateAssignmentRequest> for AssignmentInput {
    type Error = AppError;

    fn try_from(request: CreateAssignmentRequest) -> Result<Self, Self::Error> {
        Ok(AssignmentInput {
            event_id: request.event_id.ok_or_else(|| AppError::required("eventId"))?,
            member_id: request
                .member_id
                .ok_or_else(|| AppError::required("memberId"))?,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct BulkAssignmentRequest {
    pub assignments: Option<Vec<CreateAssignmentRequest>>,
}

impl BulkAssignmentRequest {
    pub fn into_inputs(self) -> Result<Vec<AssignmentInput>, AppError> {
        self.assignments
            .ok_or_else(|| AppError::BadRequest("assignments array is required".to_string()))?
            .into_iter()
            .map(AssignmentInput::try_from)
            .collect()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentEventQuery {
    pub event_id: Option<Uuid>,
}

impl AssignmentEventQuery {
    pub fn event_id(&self) -> Result<Uuid, AppError> {
        self.event_id.ok_or_else(|| AppError::required("eventId"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bulk_requires_array() {
        let body: BulkAssignmentRequest = serde_json::from_str("{}").unwrap();
        assert!(body.into_inputs().is_err());
    }

    #[test]
    fn bulk_rejects_incomplete_entries() {
        let body: BulkAssignmentRequest = serde_json::from_value(serde_json::json!({
            "assignments": [
                { "eventId": Uuid::new_v4(), "memberId": Uuid::new_v4() },
                { "eventId": Uuid::new_v4() }
            ]
        }))
        .unwrap();
        assert!(matches!(
            body.into_inputs(),
            Err(AppError::BadRequest(msg)) if msg == "memberId is required"
        ));
    }
}
