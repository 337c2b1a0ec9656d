use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AssignmentWithMember, EventKind, EventStatus, Team, validation};
use crate::calendar;
use crate::error::AppError;

pub const SUNDAY_SERVICE_TITLE: &str = "Sunday Service";

/// Weeks created by the "generate next Sundays" action when no count is given.
pub const DEFAULT_NEXT_SUNDAYS: usize = 8;
pub const MAX_NEXT_SUNDAYS: usize = 52;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub event_date: NaiveDate,
    #[sqlx(rename = "event_type")]
    pub kind: EventKind,
    pub team_id: Uuid,
    #[sqlx(rename = "is_archived")]
    pub status: EventStatus,
    pub created_at: DateTime<Utc>,
}

/// Event enriched with its owning team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventWithTeam {
    #[serde(flatten)]
    pub event: Event,
    pub team: Team,
}

impl EventWithTeam {
    pub fn new(event: Event, team: Team) -> Self {
        Self { event, team }
    }
}

/// Where an event sits relative to the as-of date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTiming {
    pub days_until: i64,
    pub is_upcoming: bool,
    pub is_today: bool,
    pub is_tomorrow: bool,
    pub is_past: bool,
}

impl EventTiming {
    pub fn of(date: NaiveDate, today: NaiveDate) -> Self {
        Self {
            days_until: calendar::days_until(date, today),
            is_upcoming: calendar::is_upcoming(date, today),
            is_today: calendar::is_today(date, today),
            is_tomorrow: calendar::is_tomorrow(date, today),
            is_past: calendar::is_past(date, today),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDetail {
    #[serde(flatten)]
    pub event: Event,
    #[serde(flatten)]
    pub timing: EventTiming,
    pub team: Team,
    pub assignments: Vec<AssignmentWithMember>,
}

impl EventDetail {
    pub fn new(
        event: Event,
        team: Team,
        assignments: Vec<AssignmentWithMember>,
        today: NaiveDate,
    ) -> Self {
        Self {
            timing: EventTiming::of(event.event_date, today),
            event,
            team,
            assignments,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventScope {
    /// Non-archived, ascending by date.
    #[default]
    Active,
    /// Non-archived and dated today or later.
    Upcoming,
    /// Archived only, most recent first.
    Archived,
    All,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventListQuery {
    pub team_id: Option<Uuid>,
    #[serde(rename = "type")]
    pub scope: Option<EventScope>,
    #[serde(default)]
    pub with_assignments: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    pub title: Option<String>,
    /// `YYYY-MM-DD`
    pub event_date: Option<String>,
    pub event_type: Option<EventKind>,
    pub team_id: Option<Uuid>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventInput {
    pub title: String,
    pub event_date: NaiveDate,
    pub kind: EventKind,
    pub team_id: Uuid,
}

impl TryFrom<CreateEventRequest> for EventInput {
    type Error = AppError;

    fn try_from(request: CreateEventRequest) -> Result<Self, Self::Error> {
        Ok(EventInput {
            team_id: request.team_id.ok_or_else(|| AppError::required("teamId"))?,
            event_date: calendar::parse_date_string(
                request
                    .event_date
                    .as_deref()
                    .ok_or_else(|| AppError::required("eventDate"))?,
            )?,
            title: validation::required_text("title", request.title.as_deref().unwrap_or(""), 200)?,
            kind: request.event_type.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventRequest {
    pub title: Option<String>,
    pub event_date: Option<String>,
    pub event_type: Option<EventKind>,
    pub is_archived: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventPatch {
    pub title: Option<String>,
    pub event_date: Option<NaiveDate>,
    pub kind: Option<EventKind>,
    pub status: Option<EventStatus>,
}

impl TryFrom<UpdateEventRequest> for EventPatch {
    type Error = AppError;

    fn try_from(request: UpdateEventRequest) -> Result<Self, Self::Error> {
        Ok(EventPatch {
            title: request
                .title
                .as_deref()
                .map(|title| validation::required_text("title", title, 200))
                .transpose()?,
            event_date: request
                .event_date
                .as_deref()
                .map(calendar::parse_date_string)
                .transpose()?,
            kind: request.event_type,
            status: request.is_archived.map(EventStatus::from_flag),
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateSundaysRequest {
    pub team_id: Option<Uuid>,
    pub year: Option<i32>,
    /// 0-indexed month.
    pub month: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateNextSundaysRequest {
    pub team_id: Option<Uuid>,
    pub count: Option<usize>,
}

impl GenerateNextSundaysRequest {
    pub fn count(&self) -> Result<usize, AppError> {
        match self.count.unwrap_or(DEFAULT_NEXT_SUNDAYS) {
            count @ 1..=MAX_NEXT_SUNDAYS => Ok(count),
            count => Err(AppError::BadRequest(format!(
                "count must be between 1 and {}, got {}",
                MAX_NEXT_SUNDAYS, count
            ))),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoArchiveRequest {
    pub team_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoArchiveResponse {
    pub success: bool,
    pub archived_count: usize,
    pub events: Vec<EventWithTeam>,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_defaults_to_sunday_kind() {
        let input = EventInput::try_from(CreateEventRequest {
            title: Some("Sunday Service".into()),
            event_date: Some("2024-12-15".into()),
            event_type: None,
            team_id: Some(Uuid::new_v4()),
        })
        .unwrap();
        assert_eq!(input.kind, EventKind::Sunday);
        assert_eq!(input.event_date, NaiveDate::from_ymd_opt(2024, 12, 15).unwrap());
    }

    #[test]
    fn create_rejects_malformed_date() {
        let err = EventInput::try_from(CreateEventRequest {
            title: Some("Sunday Service".into()),
            event_date: Some("12/15/2024".into()),
            event_type: None,
            team_id: Some(Uuid::new_v4()),
        })
        .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(msg) if msg.contains("12/15/2024")));
    }

    #[test]
    fn create_requires_date() {
        let err = EventInput::try_from(CreateEventRequest {
            title: Some("Christmas Prep".into()),
            event_date: None,
            event_type: Some(EventKind::Special),
            team_id: Some(Uuid::new_v4()),
        })
        .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(msg) if msg == "eventDate is required"));
    }

    #[test]
    fn patch_parses_date_when_present() {
        let patch = EventPatch::try_from(UpdateEventRequest {
            event_date: Some("2025-01-05".into()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(patch.event_date, NaiveDate::from_ymd_opt(2025, 1, 5));

        let patch = EventPatch::try_from(UpdateEventRequest::default()).unwrap();
        assert_eq!(patch.event_date, None);
    }

    #[test]
    fn timing_relative_to_today() {
        let today = NaiveDate::from_ymd_opt(2024, 12, 14).unwrap();

        let tomorrow = EventTiming::of(NaiveDate::from_ymd_opt(2024, 12, 15).unwrap(), today);
        assert_eq!(tomorrow.days_until, 1);
        assert!(tomorrow.is_tomorrow && tomorrow.is_upcoming);
        assert!(!tomorrow.is_today && !tomorrow.is_past);

        let same_day = EventTiming::of(today, today);
        assert!(same_day.is_today && same_day.is_upcoming && !same_day.is_past);

        let last_week = EventTiming::of(NaiveDate::from_ymd_opt(2024, 12, 8).unwrap(), today);
        assert_eq!(last_week.days_until, -6);
        assert!(last_week.is_past && !last_week.is_upcoming);
    }

    #[test]
    fn next_sundays_count_defaults_and_bounds() {
        let request = |count| GenerateNextSundaysRequest {
            team_id: Some(Uuid::new_v4()),
            count,
        };
        assert_eq!(request(None).count().unwrap(), DEFAULT_NEXT_SUNDAYS);
        assert_eq!(request(Some(4)).count().unwrap(), 4);
        assert!(request(Some(0)).count().is_err());
        assert!(request(Some(MAX_NEXT_SUNDAYS + 1)).count().is_err());
    }

    #[test]
    fn list_query_reads_type_parameter() {
        let query: EventListQuery =
            serde_urlencoded::from_str("teamId=11111111-1111-1111-1111-111111111111&type=archived")
                .unwrap();
        assert_eq!(query.scope, Some(EventScope::Archived));
        assert!(!query.with_assignments);
    }
}
