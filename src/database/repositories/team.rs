use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::database::models::{ActiveState, Team, TeamInput, TeamPatch};

const TEAM_COLUMNS: &str = r#"
    id,
    name,
    description,
    admin_name,
    admin_phone,
    color,
    is_active,
    created_at
"#;

#[derive(Clone)]
pub struct TeamRepository {
    pool: SqlitePool,
}

impl TeamRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, include_inactive: bool) -> Result<Vec<Team>, sqlx::Error> {
        let query = format!(
            r#"
            SELECT {TEAM_COLUMNS}
            FROM teams
            WHERE is_active = ? OR ?
            ORDER BY name
            "#
        );

        sqlx::query_as::<_, Team>(&query)
            .bind(ActiveState::Active)
            .bind(include_inactive)
            .fetch_all(&self.pool)
            .await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Team>, sqlx::Error> {
        let query = format!("SELECT {TEAM_COLUMNS} FROM teams WHERE id = ?");

        sqlx::query_as::<_, Team>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn create(&self, input: TeamInput) -> Result<Team, sqlx::Error> {
        let query = format!(
            r#"
            INSERT INTO
                teams (
                    id,
                    name,
                    description,
                    admin_name,
                    admin_phone,
                    color,
                    is_active,
                    created_at
                )
            VALUES
                (?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING {TEAM_COLUMNS}
            "#
        );

        sqlx::query_as::<_, Team>(&query)
            .bind(Uuid::new_v4())
            .bind(input.name)
            .bind(input.description)
            .bind(input.admin_name)
            .bind(input.admin_phone)
            .bind(input.color)
            .bind(ActiveState::Active)
            .bind(Utc::now())
            .fetch_one(&self.pool)
            .await
    }

    pub async fn update(&self, id: Uuid, patch: TeamPatch) -> Result<Option<Team>, sqlx::Error> {
        let query = format!(
            r#"
            UPDATE
                teams
            SET
                name = COALESCE(?, name),
                description = CASE WHEN ? THEN ? ELSE description END,
                admin_name = CASE WHEN ? THEN ? ELSE admin_name END,
                admin_phone = CASE WHEN ? THEN ? ELSE admin_phone END,
                color = COALESCE(?, color),
                is_active = COALESCE(?, is_active)
            WHERE
                id = ?
            RETURNING {TEAM_COLUMNS}
            "#
        );

        sqlx::query_as::<_, Team>(&query)
            .bind(patch.name)
            .bind(patch.description.is_some())
            .bind(patch.description.flatten())
            .bind(patch.admin_name.is_some())
            .bind(patch.admin_name.flatten())
            .bind(patch.admin_phone.is_some())
            .bind(patch.admin_phone.flatten())
            .bind(patch.color)
            .bind(patch.state)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn set_state(
        &self,
        id: Uuid,
        state: ActiveState,
    ) -> Result<Option<Team>, sqlx::Error> {
        self.update(
            id,
            TeamPatch {
                state: Some(state),
                ..Default::default()
            },
        )
        .await
    }

    /// Permanent delete. Members, events and assignments go with it.
    pub async fn delete(&self, id: Uuid) -> Result<Option<()>, sqlx::Error> {
        let result = sqlx::query("DELETE FROM teams WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(if result.rows_affected() > 0 {
            Some(())
        } else {
            None
        })
    }
}
