use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ActiveState, validation};
use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: Uuid,
    pub name: String,
    pub phone: Option<String>,
    pub team_id: Uuid,
    #[sqlx(rename = "is_active")]
    pub state: ActiveState,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMemberRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub team_id: Option<Uuid>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MemberInput {
    pub name: String,
    pub phone: Option<String>,
    pub team_id: Uuid,
}

impl TryFrom<CreateMemberRequest> for MemberInput {
    type Error = AppError;

    fn try_from(request: CreateMemberRequest) -> Result<Self, Self::Error> {
        Ok(MemberInput {
            team_id: request.team_id.ok_or_else(|| AppError::required("teamId"))?,
            name: validation::required_text("name", request.name.as_deref().unwrap_or(""), 100)?,
            phone: validation::optional_text("phone", request.phone.as_deref(), 20)?,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMemberRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemberPatch {
    pub name: Option<String>,
    /// `Some(None)` clears the phone.
    pub phone: Option<Option<String>>,
    pub state: Option<ActiveState>,
}

impl TryFrom<UpdateMemberRequest> for MemberPatch {
    type Error = AppError;

    fn try_from(request: UpdateMemberRequest) -> Result<Self, Self::Error> {
        Ok(MemberPatch {
            name: request
                .name
                .as_deref()
                .map(|name| validation::required_text("name", name, 100))
                .transpose()?,
            phone: validation::clearable_text("phone", request.phone.as_deref(), 20)?,
            state: request.is_active.map(ActiveState::from_flag),
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberListQuery {
    pub team_id: Option<Uuid>,
    #[serde(default)]
    pub active_only: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_requires_team() {
        let err = MemberInput::try_from(CreateMemberRequest {
            name: Some("Mary Johnson".into()),
            phone: None,
            team_id: None,
        })
        .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(msg) if msg == "teamId is required"));
    }

    #[test]
    fn patch_keeps_untouched_fields_empty() {
        let patch = MemberPatch::try_from(UpdateMemberRequest {
            phone: Some("+254723456789".into()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(patch.name, None);
        assert_eq!(patch.state, None);
        assert_eq!(patch.phone, Some(Some("+254723456789".to_string())));
    }

    #[test]
    fn patch_with_blank_phone_clears_it() {
        let patch = MemberPatch::try_from(UpdateMemberRequest {
            phone: Some(String::new()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(patch.phone, Some(None));
    }
}
