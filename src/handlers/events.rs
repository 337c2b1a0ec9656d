use actix_web::{HttpResponse, Result, web};
use uuid::Uuid;

use crate::calendar;
use crate::config::Config;
use crate::database::models::{
    CreateEventRequest, EventInput, EventListQuery, EventPatch, EventStatus, EventWithTeam,
    UpdateEventRequest,
};
use crate::database::repositories::{EventRepository, TeamRepository};
use crate::error::AppError;
use crate::handlers::shared::ApiResponse;
use crate::services::{RosterService, share};

pub async fn get_events(
    event_repo: web::Data<EventRepository>,
    team_repo: web::Data<TeamRepository>,
    roster: web::Data<RosterService>,
    query: web::Query<EventListQuery>,
) -> Result<HttpResponse> {
    let team_id = query.team_id.ok_or_else(|| AppError::required("teamId"))?;
    let today = calendar::today();

    if query.with_assignments {
        let events = roster.events_with_assignments(team_id, today).await?;
        return Ok(ApiResponse::success(events));
    }

    let team = team_repo
        .find_by_id(team_id)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::not_found("Team"))?;

    let events = event_repo
        .list_by_team(team_id, query.scope.unwrap_or_default(), today)
        .await
        .map_err(|e| {
            log::error!("Error fetching events for team {}: {}", team_id, e);
            AppError::from(e)
        })?;

    let events: Vec<EventWithTeam> = events
        .into_iter()
        .map(|event| EventWithTeam::new(event, team.clone()))
        .collect();

    Ok(ApiResponse::success(events))
}

pub async fn create_event(
    event_repo: web::Data<EventRepository>,
    team_repo: web::Data<TeamRepository>,
    input: web::Json<CreateEventRequest>,
) -> Result<HttpResponse> {
    let input = EventInput::try_from(input.into_inner())?;

    let team = team_repo
        .find_by_id(input.team_id)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::not_found("Team"))?;

    let event = event_repo.create(input).await.map_err(|e| {
        log::error!("Error creating event: {}", e);
        AppError::from(e)
    })?;

    Ok(ApiResponse::created(EventWithTeam::new(event, team)))
}

pub async fn get_event(
    roster: web::Data<RosterService>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let detail = roster
        .event_detail(path.into_inner(), calendar::today())
        .await?;

    Ok(ApiResponse::success(detail))
}

pub async fn update_event(
    event_repo: web::Data<EventRepository>,
    team_repo: web::Data<TeamRepository>,
    path: web::Path<Uuid>,
    input: web::Json<UpdateEventRequest>,
) -> Result<HttpResponse> {
    let event_id = path.into_inner();
    let patch = EventPatch::try_from(input.into_inner())?;

    let event = event_repo
        .update(event_id, patch)
        .await
        .map_err(|e| {
            log::error!("Error updating event {}: {}", event_id, e);
            AppError::from(e)
        })?
        .ok_or_else(|| AppError::not_found("Event"))?;

    respond_with_team(&team_repo, event).await
}

pub async fn archive_event(
    event_repo: web::Data<EventRepository>,
    team_repo: web::Data<TeamRepository>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    set_status(&event_repo, &team_repo, path.into_inner(), EventStatus::Archived).await
}

/// Restores an archived event. The next archival pass archives it again if its
/// date has already passed.
pub async fn unarchive_event(
    event_repo: web::Data<EventRepository>,
    team_repo: web::Data<TeamRepository>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    set_status(&event_repo, &team_repo, path.into_inner(), EventStatus::Active).await
}

pub async fn delete_event(
    event_repo: web::Data<EventRepository>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let event_id = path.into_inner();

    event_repo
        .delete(event_id)
        .await
        .map_err(|e| {
            log::error!("Error deleting event {}: {}", event_id, e);
            AppError::from(e)
        })?
        .ok_or_else(|| AppError::not_found("Event"))?;

    log::info!("Event {} permanently deleted", event_id);
    Ok(ApiResponse::done())
}

pub async fn share_event(
    roster: web::Data<RosterService>,
    config: web::Data<Config>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let detail = roster
        .event_detail(path.into_inner(), calendar::today())
        .await?;

    Ok(ApiResponse::success(share::share_message(
        &detail,
        &config.client_base_url,
    )))
}

async fn set_status(
    event_repo: &EventRepository,
    team_repo: &TeamRepository,
    event_id: Uuid,
    status: EventStatus,
) -> Result<HttpResponse> {
    let event = event_repo
        .set_status(event_id, status)
        .await
        .map_err(|e| {
            log::error!("Error setting event {} to {:?}: {}", event_id, status, e);
            AppError::from(e)
        })?
        .ok_or_else(|| AppError::not_found("Event"))?;

    respond_with_team(team_repo, event).await
}

async fn respond_with_team(
    team_repo: &TeamRepository,
    event: crate::database::models::Event,
) -> Result<HttpResponse> {
    let team = team_repo
        .find_by_id(event.team_id)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::not_found("Team"))?;

    Ok(ApiResponse::success(EventWithTeam::new(event, team)))
}
