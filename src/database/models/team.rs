use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{
    ActiveState,
    validation::{self, DEFAULT_TEAM_COLOR},
};
use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub admin_name: Option<String>,
    pub admin_phone: Option<String>,
    pub color: String,
    #[sqlx(rename = "is_active")]
    pub state: ActiveState,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeamRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub admin_name: Option<String>,
    pub admin_phone: Option<String>,
    pub color: Option<String>,
}

/// Validated insert command for a team.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamInput {
    pub name: String,
    pub description: Option<String>,
    pub admin_name: Option<String>,
    pub admin_phone: Option<String>,
    pub color: String,
}

impl TryFrom<CreateTeamRequest> for TeamInput {
    type Error = AppError;

    fn try_from(request: CreateTeamRequest) -> Result<Self, Self::Error> {
        Ok(TeamInput {
            name: validation::required_text("name", request.name.as_deref().unwrap_or(""), 100)?,
            description: validation::optional_text(
                "description",
                request.description.as_deref(),
                usize::MAX,
            )?,
            admin_name: validation::optional_text("adminName", request.admin_name.as_deref(), 100)?,
            admin_phone: validation::optional_text(
                "adminPhone",
                request.admin_phone.as_deref(),
                20,
            )?,
            color: match request.color.as_deref() {
                Some(color) => validation::color(color)?,
                None => DEFAULT_TEAM_COLOR.to_string(),
            },
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTeamRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub admin_name: Option<String>,
    pub admin_phone: Option<String>,
    pub color: Option<String>,
    pub is_active: Option<bool>,
}

/// Validated partial update. `None` leaves the column untouched; `Some(None)`
/// clears an optional one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamPatch {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub admin_name: Option<Option<String>>,
    pub admin_phone: Option<Option<String>>,
    pub color: Option<String>,
    pub state: Option<ActiveState>,
}

impl TryFrom<UpdateTeamRequest> for TeamPatch {
    type Error = AppError;

    fn try_from(request: UpdateTeamRequest) -> Result<Self, Self::Error> {
        Ok(TeamPatch {
            name: request
                .name
                .as_deref()
                .map(|name| validation::required_text("name", name, 100))
                .transpose()?,
            description: validation::clearable_text(
                "description",
                request.description.as_deref(),
                usize::MAX,
            )?,
            admin_name: validation::clearable_text(
                "adminName",
                request.admin_name.as_deref(),
                100,
            )?,
            admin_phone: validation::clearable_text(
                "adminPhone",
                request.admin_phone.as_deref(),
                20,
            )?,
            color: request.color.as_deref().map(validation::color).transpose()?,
            state: request.is_active.map(ActiveState::from_flag),
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleActiveRequest {
    pub is_active: Option<serde_json::Value>,
}

impl ToggleActiveRequest {
    pub fn state(&self) -> Result<ActiveState, AppError> {
        match self.is_active {
            Some(serde_json::Value::Bool(flag)) => Ok(ActiveState::from_flag(flag)),
            _ => Err(AppError::BadRequest("isActive must be a boolean".to_string())),
        }
    }
}
