use actix_web::{HttpResponse, Result, web};
use serde::Deserialize;
use uuid::Uuid;

use crate::database::models::{
    CreateTeamRequest, TeamInput, TeamPatch, ToggleActiveRequest, UpdateTeamRequest,
};
use crate::database::repositories::TeamRepository;
use crate::error::AppError;
use crate::handlers::shared::ApiResponse;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamListQuery {
    #[serde(default)]
    pub include_inactive: bool,
}

pub async fn get_teams(
    team_repo: web::Data<TeamRepository>,
    query: web::Query<TeamListQuery>,
) -> Result<HttpResponse> {
    let teams = team_repo
        .list(query.include_inactive)
        .await
        .map_err(|e| {
            log::error!("Error fetching teams: {}", e);
            AppError::from(e)
        })?;

    Ok(ApiResponse::success(teams))
}

pub async fn create_team(
    team_repo: web::Data<TeamRepository>,
    input: web::Json<CreateTeamRequest>,
) -> Result<HttpResponse> {
    let input = TeamInput::try_from(input.into_inner())?;

    let team = team_repo.create(input).await.map_err(|e| {
        log::error!("Error creating team: {}", e);
        AppError::from(e)
    })?;

    log::info!("Team '{}' created ({})", team.name, team.id);
    Ok(ApiResponse::created(team))
}

pub async fn get_team(
    team_repo: web::Data<TeamRepository>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let team_id = path.into_inner();

    let team = team_repo
        .find_by_id(team_id)
        .await
        .map_err(|e| {
            log::error!("Error fetching team {}: {}", team_id, e);
            AppError::from(e)
        })?
        .ok_or_else(|| {
            log::warn!("Team {} not found", team_id);
            AppError::not_found("Team")
        })?;

    Ok(ApiResponse::success(team))
}

pub async fn update_team(
    team_repo: web::Data<TeamRepository>,
    path: web::Path<Uuid>,
    input: web::Json<UpdateTeamRequest>,
) -> Result<HttpResponse> {
    let team_id = path.into_inner();
    let patch = TeamPatch::try_from(input.into_inner())?;

    let team = team_repo
        .update(team_id, patch)
        .await
        .map_err(|e| {
            log::error!("Error updating team {}: {}", team_id, e);
            AppError::from(e)
        })?
        .ok_or_else(|| AppError::not_found("Team"))?;

    Ok(ApiResponse::success(team))
}

pub async fn toggle_team_active(
    team_repo: web::Data<TeamRepository>,
    path: web::Path<Uuid>,
    input: web::Json<ToggleActiveRequest>,
) -> Result<HttpResponse> {
    let team_id = path.into_inner();
    let state = input.state()?;

    let team = team_repo
        .set_state(team_id, state)
        .await
        .map_err(|e| {
            log::error!("Error toggling team {} status: {}", team_id, e);
            AppError::from(e)
        })?
        .ok_or_else(|| AppError::not_found("Team"))?;

    log::info!("Team {} is now {:?}", team_id, team.state);
    Ok(ApiResponse::success(team))
}

pub async fn delete_team(
    team_repo: web::Data<TeamRepository>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let team_id = path.into_inner();

    team_repo
        .delete(team_id)
        .await
        .map_err(|e| {
            log::error!("Error deleting team {}: {}", team_id, e);
            AppError::from(e)
        })?
        .ok_or_else(|| AppError::not_found("Team"))?;

    log::info!("Team {} permanently deleted", team_id);
    Ok(ApiResponse::done())
}
