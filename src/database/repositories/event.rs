use chrono::{NaiveDate, Utc};
use sqlx::{Sqlite, SqlitePool, Transaction};
use uuid::Uuid;

use crate::database::models::{
    Event, EventInput, EventKind, EventPatch, EventScope, EventStatus, SUNDAY_SERVICE_TITLE,
};

const EVENT_COLUMNS: &str = "id, title, event_date, event_type, team_id, is_archived, created_at";

#[derive(Clone)]
pub struct EventRepository {
    pool: SqlitePool,
}

impl EventRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn list_by_team(
        &self,
        team_id: Uuid,
        scope: EventScope,
        today: NaiveDate,
    ) -> Result<Vec<Event>, sqlx::Error> {
        let (filter, order) = match scope {
            EventScope::Active => ("is_archived = ?", "ASC"),
            EventScope::Upcoming => ("is_archived = ? AND event_date >= ?", "ASC"),
            EventScope::Archived => ("is_archived = ?", "DESC"),
            EventScope::All => ("1 = 1", "ASC"),
        };
        let query = format!(
            r#"
            SELECT {EVENT_COLUMNS}
            FROM events
            WHERE
                team_id = ?
                AND {filter}
            ORDER BY event_date {order}, created_at
            "#
        );

        let mut statement = sqlx::query_as::<_, Event>(&query).bind(team_id);
        statement = match scope {
            EventScope::Active => statement.bind(EventStatus::Active),
            EventScope::Upcoming => statement.bind(EventStatus::Active).bind(today),
            EventScope::Archived => statement.bind(EventStatus::Archived),
            EventScope::All => statement,
        };

        statement.fetch_all(&self.pool).await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Event>, sqlx::Error> {
        let query = format!("SELECT {EVENT_COLUMNS} FROM events WHERE id = ?");

        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn create(&self, input: EventInput) -> Result<Event, sqlx::Error> {
        let query = format!(
            r#"
            INSERT INTO
                events (id, title, event_date, event_type, team_id, is_archived, created_at)
            VALUES
                (?, ?, ?, ?, ?, ?, ?)
            RETURNING {EVENT_COLUMNS}
            "#
        );

        sqlx::query_as::<_, Event>(&query)
            .bind(Uuid::new_v4())
            .bind(input.title)
            .bind(input.event_date)
            .bind(input.kind)
            .bind(input.team_id)
            .bind(EventStatus::Active)
            .bind(Utc::now())
            .fetch_one(&self.pool)
            .await
    }

    pub async fn update(&self, id: Uuid, patch: EventPatch) -> Result<Option<Event>, sqlx::Error> {
        let query = format!(
            r#"
            UPDATE
                events
            SET
                title = COALESCE(?, title),
                event_date = COALESCE(?, event_date),
                event_type = COALESCE(?, event_type),
                is_archived = COALESCE(?, is_archived)
            WHERE
                id = ?
            RETURNING {EVENT_COLUMNS}
            "#
        );

        sqlx::query_as::<_, Event>(&query)
            .bind(patch.title)
            .bind(patch.event_date)
            .bind(patch.kind)
            .bind(patch.status)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn set_status(
        &self,
        id: Uuid,
        status: EventStatus,
    ) -> Result<Option<Event>, sqlx::Error> {
        self.update(
            id,
            EventPatch {
                status: Some(status),
                ..Default::default()
            },
        )
        .await
    }

    /// Permanent delete. Assignments cascade.
    pub async fn delete(&self, id: Uuid) -> Result<Option<()>, sqlx::Error> {
        let result = sqlx::query("DELETE FROM events WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(if result.rows_affected() > 0 {
            Some(())
        } else {
            None
        })
    }

    /// Dates of the team's `sunday` events within `[start, end]`.
    pub async fn sunday_dates_between(
        &self,
        team_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<NaiveDate>, sqlx::Error> {
        sqlx::query_scalar::<_, NaiveDate>(
            r#"
            SELECT event_date
            FROM events
            WHERE
                team_id = ?
                AND event_type = ?
                AND event_date BETWEEN ? AND ?
            ORDER BY event_date
            "#,
        )
        .bind(team_id)
        .bind(EventKind::Sunday)
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await
    }

    /// Inserts a "Sunday Service" per date. Dates that already carry a sunday
    /// event for the team are skipped by the unique index, so the result may be
    /// shorter than `dates`.
    pub async fn insert_sundays(
        tx: &mut Transaction<'_, Sqlite>,
        team_id: Uuid,
        dates: &[NaiveDate],
    ) -> Result<Vec<Event>, sqlx::Error> {
        let query = format!(
            r#"
            INSERT INTO
                events (id, title, event_date, event_type, team_id, is_archived, created_at)
            VALUES
                (?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT DO NOTHING
            RETURNING {EVENT_COLUMNS}
            "#
        );

        let now = Utc::now();
        let mut created = Vec::with_capacity(dates.len());
        for date in dates {
            let event = sqlx::query_as::<_, Event>(&query)
                .bind(Uuid::new_v4())
                .bind(SUNDAY_SERVICE_TITLE)
                .bind(*date)
                .bind(EventKind::Sunday)
                .bind(team_id)
                .bind(EventStatus::Active)
                .bind(now)
                .fetch_optional(&mut **tx)
                .await?;

            match event {
                Some(event) => created.push(event),
                None => log::debug!("Sunday {} already exists for team {}", date, team_id),
            }
        }

        Ok(created)
    }

    /// Archives every active event of the team dated strictly before `today`.
    pub async fn archive_before(
        &self,
        team_id: Uuid,
        today: NaiveDate,
    ) -> Result<Vec<Event>, sqlx::Error> {
        let query = format!(
            r#"
            UPDATE
                events
            SET
                is_archived = ?
            WHERE
                team_id = ?
                AND is_archived = ?
                AND event_date < ?
            RETURNING {EVENT_COLUMNS}
            "#
        );

        let mut archived = sqlx::query_as::<_, Event>(&query)
            .bind(EventStatus::Archived)
            .bind(team_id)
            .bind(EventStatus::Active)
            .bind(today)
            .fetch_all(&self.pool)
            .await?;

        // RETURNING order is unspecified.
        archived.sort_by(|a, b| a.event_date.cmp(&b.event_date));
        Ok(archived)
    }
}
