use chrono::Utc;
use sqlx::{Sqlite, SqlitePool, Transaction};
use uuid::Uuid;

use crate::database::{
    models::{Assignment, AssignmentInput, AssignmentWithMember, EventStatus},
    transaction::DatabaseTransaction,
    types::{ASSIGNMENT_MEMBER_COLUMNS, AssignmentMemberRow},
};
use crate::error::AppError;

const ASSIGNMENT_COLUMNS: &str = "id, event_id, member_id, created_at";

#[derive(Clone)]
pub struct AssignmentRepository {
    pool: SqlitePool,
}

impl AssignmentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list_by_event(
        &self,
        event_id: Uuid,
    ) -> Result<Vec<AssignmentWithMember>, sqlx::Error> {
        let query = format!(
            r#"
            SELECT {ASSIGNMENT_MEMBER_COLUMNS}
            FROM
                assignments a
                INNER JOIN members m ON a.member_id = m.id
            WHERE
                a.event_id = ?
            ORDER BY m.name
            "#
        );

        let rows = sqlx::query_as::<_, AssignmentMemberRow>(&query)
            .bind(event_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(AssignmentWithMember::from).collect())
    }

    /// Assignments of every non-archived event of a team.
    pub async fn list_for_team_events(
        &self,
        team_id: Uuid,
    ) -> Result<Vec<AssignmentWithMember>, sqlx::Error> {
        let query = format!(
            r#"
            SELECT {ASSIGNMENT_MEMBER_COLUMNS}
            FROM
                assignments a
                INNER JOIN members m ON a.member_id = m.id
                INNER JOIN events e ON a.event_id = e.id
            WHERE
                e.team_id = ?
                AND e.is_archived = ?
            ORDER BY e.event_date, m.name
            "#
        );

        let rows = sqlx::query_as::<_, AssignmentMemberRow>(&query)
            .bind(team_id)
            .bind(EventStatus::Active)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(AssignmentWithMember::from).collect())
    }

    pub async fn create(&self, input: AssignmentInput) -> Result<Assignment, sqlx::Error> {
        let query = insert_query();

        sqlx::query_as::<_, Assignment>(&query)
            .bind(Uuid::new_v4())
            .bind(input.event_id)
            .bind(input.member_id)
            .bind(Utc::now())
            .fetch_one(&self.pool)
            .await
    }

    /// All-or-nothing: one duplicate or dangling reference rolls back the batch.
    pub async fn create_many(
        &self,
        inputs: Vec<AssignmentInput>,
    ) -> Result<Vec<Assignment>, AppError> {
        DatabaseTransaction::run(&self.pool, |tx| {
            Box::pin(async move {
                let mut created = Vec::with_capacity(inputs.len());
                for input in inputs {
                    created.push(insert_in(tx, input).await?);
                }
                Ok(created)
            })
        })
        .await
    }

    pub async fn delete(&self, id: Uuid) -> Result<Option<()>, sqlx::Error> {
        let result = sqlx::query("DELETE FROM assignments WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(if result.rows_affected() > 0 {
            Some(())
        } else {
            None
        })
    }

    pub async fn delete_by_event(&self, event_id: Uuid) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM assignments WHERE event_id = ?")
            .bind(event_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

fn insert_query() -> String {
    format!(
        r#"
        INSERT INTO
            assignments (id, event_id, member_id, created_at)
        VALUES
            (?, ?, ?, ?)
        RETURNING {ASSIGNMENT_COLUMNS}
        "#
    )
}

async fn insert_in(
    tx: &mut Transaction<'_, Sqlite>,
    input: AssignmentInput,
) -> Result<Assignment, sqlx::Error> {
    let query = insert_query();

    sqlx::query_as::<_, Assignment>(&query)
        .bind(Uuid::new_v4())
        .bind(input.event_id)
        .bind(input.member_id)
        .bind(Utc::now())
        .fetch_one(&mut **tx)
        .await
}
