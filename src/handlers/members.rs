use actix_web::{HttpResponse, Result, web};
use uuid::Uuid;

use crate::database::models::{
    ActiveState, CreateMemberRequest, MemberInput, MemberListQuery, MemberPatch,
    UpdateMemberRequest,
};
use crate::database::repositories::{MemberRepository, TeamRepository};
use crate::error::AppError;
use crate::handlers::shared::ApiResponse;

pub async fn get_members(
    member_repo: web::Data<MemberRepository>,
    query: web::Query<MemberListQuery>,
) -> Result<HttpResponse> {
    let team_id = query.team_id.ok_or_else(|| AppError::required("teamId"))?;

    let members = member_repo
        .list_by_team(team_id, query.active_only)
        .await
        .map_err(|e| {
            log::error!("Error fetching members for team {}: {}", team_id, e);
            AppError::from(e)
        })?;

    Ok(ApiResponse::success(members))
}

pub async fn create_member(
    member_repo: web::Data<MemberRepository>,
    team_repo: web::Data<TeamRepository>,
    input: web::Json<CreateMemberRequest>,
) -> Result<HttpResponse> {
    let input = MemberInput::try_from(input.into_inner())?;

    team_repo
        .find_by_id(input.team_id)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::not_found("Team"))?;

    let member = member_repo.create(input).await.map_err(|e| {
        log::error!("Error creating member: {}", e);
        AppError::from(e)
    })?;

    Ok(ApiResponse::created(member))
}

pub async fn get_member(
    member_repo: web::Data<MemberRepository>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let member_id = path.into_inner();

    let member = member_repo
        .find_by_id(member_id)
        .await
        .map_err(|e| {
            log::error!("Error fetching member {}: {}", member_id, e);
            AppError::from(e)
        })?
        .ok_or_else(|| AppError::not_found("Member"))?;

    Ok(ApiResponse::success(member))
}

pub async fn update_member(
    member_repo: web::Data<MemberRepository>,
    path: web::Path<Uuid>,
    input: web::Json<UpdateMemberRequest>,
) -> Result<HttpResponse> {
    let member_id = path.into_inner();
    let patch = MemberPatch::try_from(input.into_inner())?;

    let member = member_repo
        .update(member_id, patch)
        .await
        .map_err(|e| {
            log::error!("Error updating member {}: {}", member_id, e);
            AppError::from(e)
        })?
        .ok_or_else(|| AppError::not_found("Member"))?;

    Ok(ApiResponse::success(member))
}

/// Soft delete: the member is deactivated, never removed.
pub async fn delete_member(
    member_repo: web::Data<MemberRepository>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let member_id = path.into_inner();

    member_repo
        .set_state(member_id, ActiveState::Inactive)
        .await
        .map_err(|e| {
            log::error!("Error deactivating member {}: {}", member_id, e);
            AppError::from(e)
        })?
        .ok_or_else(|| AppError::not_found("Member"))?;

    Ok(ApiResponse::done())
}
