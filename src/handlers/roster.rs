use actix_web::{HttpRequest, HttpResponse, Result, web};

use crate::calendar;
use crate::database::models::{
    AutoArchiveRequest, AutoArchiveResponse, GenerateNextSundaysRequest, GenerateSundaysRequest,
};
use crate::error::AppError;
use crate::handlers::shared::ApiResponse;
use crate::middleware::RequestIdExt;
use crate::services::RosterService;

pub async fn generate_sundays(
    req: HttpRequest,
    roster: web::Data<RosterService>,
    input: web::Json<GenerateSundaysRequest>,
) -> Result<HttpResponse> {
    let GenerateSundaysRequest {
        team_id,
        year,
        month,
    } = input.into_inner();
    let team_id = team_id.ok_or_else(|| AppError::required("teamId"))?;
    let correlation_id = req.correlation_id().unwrap_or_default();

    let events = roster
        .generate_missing_sundays_for_month(team_id, year, month, calendar::today())
        .await
        .map_err(|e| {
            log::error!(
                "[{}] Error generating missing Sundays for team {}: {}",
                correlation_id,
                team_id,
                e
            );
            e
        })?;

    Ok(ApiResponse::success(events))
}

pub async fn generate_next_sundays(
    req: HttpRequest,
    roster: web::Data<RosterService>,
    input: web::Json<GenerateNextSundaysRequest>,
) -> Result<HttpResponse> {
    let team_id = input
        .team_id
        .ok_or_else(|| AppError::required("teamId"))?;
    let count = input.count()?;
    let correlation_id = req.correlation_id().unwrap_or_default();

    let events = roster
        .generate_next_sundays(team_id, count, calendar::today())
        .await
        .map_err(|e| {
            log::error!(
                "[{}] Error generating next {} Sundays for team {}: {}",
                correlation_id,
                count,
                team_id,
                e
            );
            e
        })?;

    Ok(ApiResponse::success(events))
}

pub async fn auto_archive(
    req: HttpRequest,
    roster: web::Data<RosterService>,
    input: web::Json<AutoArchiveRequest>,
) -> Result<HttpResponse> {
    let team_id = input
        .team_id
        .ok_or_else(|| AppError::required("teamId"))?;
    let correlation_id = req.correlation_id().unwrap_or_default();

    let events = roster
        .auto_archive_past_events(team_id, calendar::today())
        .await
        .map_err(|e| {
            log::error!(
                "[{}] Error auto-archiving events for team {}: {}",
                correlation_id,
                team_id,
                e
            );
            e
        })?;

    let archived_count = events.len();
    log::info!(
        "[{}] Archived {} past events for team {}",
        correlation_id,
        archived_count,
        team_id
    );
    Ok(ApiResponse::success(AutoArchiveResponse {
        success: true,
        archived_count,
        events,
        message: format!("Successfully archived {} past events", archived_count),
    }))
}
