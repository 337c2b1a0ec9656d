use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use uuid::Uuid;

use crate::calendar::{MonthRef, format_date_string, next_sundays};
use crate::database::{
    models::{AssignmentWithMember, EventDetail, EventScope, EventWithTeam, Team},
    repositories::{AssignmentRepository, EventRepository, TeamRepository},
    transaction::DatabaseTransaction,
};
use crate::error::AppError;

/// Recurring-event generation, archival policy and the composed event views.
#[derive(Clone)]
pub struct RosterService {
    teams: TeamRepository,
    events: EventRepository,
    assignments: AssignmentRepository,
}

impl RosterService {
    pub fn new(
        teams: TeamRepository,
        events: EventRepository,
        assignments: AssignmentRepository,
    ) -> Self {
        Self {
            teams,
            events,
            assignments,
        }
    }

    async fn require_team(&self, team_id: Uuid) -> Result<Team, AppError> {
        self.teams.find_by_id(team_id).await?.ok_or_else(|| {
            log::warn!("Team {} not found", team_id);
            AppError::not_found("Team")
        })
    }

    /// Creates a "Sunday Service" for every Sunday of the month that the team
    /// does not already have. Re-running for the same month inserts nothing.
    ///
    /// `month` is 0-indexed; omitted parts default to `today`'s month.
    pub async fn generate_missing_sundays_for_month(
        &self,
        team_id: Uuid,
        year: Option<i32>,
        month: Option<u32>,
        today: NaiveDate,
    ) -> Result<Vec<EventWithTeam>, AppError> {
        let month = MonthRef::resolve(year, month, today)?;
        let team = self.require_team(team_id).await?;

        let existing: HashSet<String> = self
            .events
            .sunday_dates_between(team_id, month.first_day(), month.last_day())
            .await?
            .iter()
            .map(format_date_string)
            .collect();

        let missing: Vec<NaiveDate> = month
            .sundays()
            .into_iter()
            .filter(|sunday| !existing.contains(&format_date_string(sunday)))
            .collect();

        if missing.is_empty() {
            log::debug!(
                "No missing Sundays for team {} in {}-{:02}",
                team_id,
                month.year(),
                month.month0() + 1
            );
            return Ok(Vec::new());
        }

        let created = DatabaseTransaction::run(self.events.pool(), |tx| {
            Box::pin(async move {
                Ok(EventRepository::insert_sundays(tx, team_id, &missing).await?)
            })
        })
        .await?;

        log::info!(
            "Generated {} Sunday event(s) for team {} in {}-{:02}",
            created.len(),
            team_id,
            month.year(),
            month.month0() + 1
        );

        Ok(created
            .into_iter()
            .map(|event| EventWithTeam::new(event, team.clone()))
            .collect())
    }

    /// Creates "Sunday Service" events for the `count` Sundays after `today`.
    /// Sundays the team already has are skipped, so the result may be shorter.
    pub async fn generate_next_sundays(
        &self,
        team_id: Uuid,
        count: usize,
        today: NaiveDate,
    ) -> Result<Vec<EventWithTeam>, AppError> {
        let team = self.require_team(team_id).await?;
        let sundays = next_sundays(today, count);

        if sundays.is_empty() {
            return Ok(Vec::new());
        }

        let created = DatabaseTransaction::run(self.events.pool(), |tx| {
            Box::pin(async move {
                Ok(EventRepository::insert_sundays(tx, team_id, &sundays).await?)
            })
        })
        .await?;

        log::info!(
            "Generated {} of the next {} Sunday event(s) for team {}",
            created.len(),
            count,
            team_id
        );

        Ok(created
            .into_iter()
            .map(|event| EventWithTeam::new(event, team.clone()))
            .collect())
    }

    /// Archives every active event of the team dated before `today`. Running it
    /// again on the same day changes nothing.
    pub async fn auto_archive_past_events(
        &self,
        team_id: Uuid,
        today: NaiveDate,
    ) -> Result<Vec<EventWithTeam>, AppError> {
        let team = self.require_team(team_id).await?;
        let archived = self.events.archive_before(team_id, today).await?;

        if !archived.is_empty() {
            log::info!(
                "Auto-archived {} past event(s) for team {} before {}",
                archived.len(),
                team_id,
                format_date_string(&today)
            );
        }

        Ok(archived
            .into_iter()
            .map(|event| EventWithTeam::new(event, team.clone()))
            .collect())
    }

    pub async fn event_detail(
        &self,
        event_id: Uuid,
        today: NaiveDate,
    ) -> Result<EventDetail, AppError> {
        let event = self
            .events
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::not_found("Event"))?;
        let team = self.require_team(event.team_id).await?;
        let assignments = self.assignments.list_by_event(event_id).await?;

        Ok(EventDetail::new(event, team, assignments, today))
    }

    /// Non-archived events of a team, each with its assignments.
    pub async fn events_with_assignments(
        &self,
        team_id: Uuid,
        today: NaiveDate,
    ) -> Result<Vec<EventDetail>, AppError> {
        let team = self.require_team(team_id).await?;
        let events = self
            .events
            .list_by_team(team_id, EventScope::Active, today)
            .await?;

        let mut by_event: HashMap<Uuid, Vec<AssignmentWithMember>> = HashMap::new();
        for assignment in self.assignments.list_for_team_events(team_id).await? {
            by_event
                .entry(assignment.assignment.event_id)
                .or_default()
                .push(assignment);
        }

        Ok(events
            .into_iter()
            .map(|event| {
                let assignments = by_event.remove(&event.id).unwrap_or_default();
                EventDetail::new(event, team.clone(), assignments, today)
            })
            .collect())
    }
}
