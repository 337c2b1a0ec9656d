use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::database::models::{ActiveState, Member, MemberInput, MemberPatch};

const MEMBER_COLUMNS: &str = "id, name, phone, team_id, is_active, created_at";

#[derive(Clone)]
pub struct MemberRepository {
    pool: SqlitePool,
}

impl MemberRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list_by_team(
        &self,
        team_id: Uuid,
        active_only: bool,
    ) -> Result<Vec<Member>, sqlx::Error> {
        let query = format!(
            r#"
            SELECT {MEMBER_COLUMNS}
            FROM members
            WHERE
                team_id = ?
                AND (is_active = ? OR NOT ?)
            ORDER BY name
            "#
        );

        sqlx::query_as::<_, Member>(&query)
            .bind(team_id)
            .bind(ActiveState::Active)
            .bind(active_only)
            .fetch_all(&self.pool)
            .await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Member>, sqlx::Error> {
        let query = format!("SELECT {MEMBER_COLUMNS} FROM members WHERE id = ?");

        sqlx::query_as::<_, Member>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn create(&self, input: MemberInput) -> Result<Member, sqlx::Error> {
        let query = format!(
            r#"
            INSERT INTO
                members (id, name, phone, team_id, is_active, created_at)
            VALUES
                (?, ?, ?, ?, ?, ?)
            RETURNING {MEMBER_COLUMNS}
            "#
        );

        sqlx::query_as::<_, Member>(&query)
            .bind(Uuid::new_v4())
            .bind(input.name)
            .bind(input.phone)
            .bind(input.team_id)
            .bind(ActiveState::Active)
            .bind(Utc::now())
            .fetch_one(&self.pool)
            .await
    }

    pub async fn update(
        &self,
        id: Uuid,
        patch: MemberPatch,
    ) -> Result<Option<Member>, sqlx::Error> {
        let query = format!(
            r#"
            UPDATE
                members
            SET
                name = COALESCE(?, name),
                phone = CASE WHEN ? THEN ? ELSE phone END,
                is_active = COALESCE(?, is_active)
            WHERE
                id = ?
            RETURNING {MEMBER_COLUMNS}
            "#
        );

        sqlx::query_as::<_, Member>(&query)
            .bind(patch.name)
            .bind(patch.phone.is_some())
            .bind(patch.phone.flatten())
            .bind(patch.state)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Members are never removed; "delete" is `set_state(id, Inactive)`.
    pub async fn set_state(
        &self,
        id: Uuid,
        state: ActiveState,
    ) -> Result<Option<Member>, sqlx::Error> {
        self.update(
            id,
            MemberPatch {
                state: Some(state),
                ..Default::default()
            },
        )
        .await
    }
}
