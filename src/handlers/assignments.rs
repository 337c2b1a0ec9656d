use actix_web::{HttpResponse, Result, web};
use uuid::Uuid;

use crate::database::models::{
    AssignmentEventQuery, AssignmentInput, BulkAssignmentRequest, CreateAssignmentRequest,
};
use crate::database::repositories::AssignmentRepository;
use crate::error::AppError;
use crate::handlers::shared::ApiResponse;

pub async fn get_assignments(
    assignment_repo: web::Data<AssignmentRepository>,
    query: web::Query<AssignmentEventQuery>,
) -> Result<HttpResponse> {
    let event_id = query.event_id()?;

    let assignments = assignment_repo
        .list_by_event(event_id)
        .await
        .map_err(|e| {
            log::error!("Error fetching assignments for event {}: {}", event_id, e);
            AppError::from(e)
        })?;

    Ok(ApiResponse::success(assignments))
}

pub async fn create_assignment(
    assignment_repo: web::Data<AssignmentRepository>,
    input: web::Json<CreateAssignmentRequest>,
) -> Result<HttpResponse> {
    let input = AssignmentInput::try_from(input.into_inner())?;

    let assignment = assignment_repo.create(input).await.map_err(|e| {
        log::error!(
            "Error assigning member {} to event {}: {}",
            input.member_id,
            input.event_id,
            e
        );
        AppError::from(e)
    })?;

    Ok(ApiResponse::created(assignment))
}

pub async fn create_bulk_assignments(
    assignment_repo: web::Data<AssignmentRepository>,
    input: web::Json<BulkAssignmentRequest>,
) -> Result<HttpResponse> {
    let inputs = input.into_inner().into_inputs()?;

    let assignments = assignment_repo.create_many(inputs).await?;

    log::info!("Created {} assignment(s) in bulk", assignments.len());
    Ok(ApiResponse::created(assignments))
}

pub async fn delete_assignment(
    assignment_repo: web::Data<AssignmentRepository>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let assignment_id = path.into_inner();

    assignment_repo
        .delete(assignment_id)
        .await
        .map_err(|e| {
            log::error!("Error deleting assignment {}: {}", assignment_id, e);
            AppError::from(e)
        })?
        .ok_or_else(|| AppError::not_found("Assignment"))?;

    Ok(ApiResponse::done())
}

pub async fn delete_event_assignments(
    assignment_repo: web::Data<AssignmentRepository>,
    query: web::Query<AssignmentEventQuery>,
) -> Result<HttpResponse> {
    let event_id = query.event_id()?;

    let removed = assignment_repo
        .delete_by_event(event_id)
        .await
        .map_err(|e| {
            log::error!("Error clearing assignments for event {}: {}", event_id, e);
            AppError::from(e)
        })?;

    log::debug!("Removed {} assignment(s) from event {}", removed, event_id);
    Ok(ApiResponse::done())
}
