use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::models::{ActiveState, Assignment, AssignmentWithMember, Member};

// Row shape of an assignment joined with its member. Member columns carry a
// `member_` prefix so they do not collide with the assignment's own.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AssignmentMemberRow {
    pub id: Uuid,
    pub event_id: Uuid,
    pub member_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub member_name: String,
    pub member_phone: Option<String>,
    pub member_team_id: Uuid,
    pub member_is_active: ActiveState,
    pub member_created_at: DateTime<Utc>,
}

pub const ASSIGNMENT_MEMBER_COLUMNS: &str = r#"
    a.id,
    a.event_id,
    a.member_id,
    a.created_at,
    m.name AS member_name,
    m.phone AS member_phone,
    m.team_id AS member_team_id,
    m.is_active AS member_is_active,
    m.created_at AS member_created_at
"#;

impl From<AssignmentMemberRow> for AssignmentWithMember {
    fn from(row: AssignmentMemberRow) -> Self {
        Self {
            assignment: Assignment {
                id: row.id,
                event_id: row.event_id,
                member_id: row.member_id,
                created_at: row.created_at,
            },
            member: Member {
                id: row.member_id,
                name: row.member_name,
                phone: row.member_phone,
                team_id: row.member_team_id,
                state: row.member_is_active,
                created_at: row.member_created_at,
            },
        }
    }
}
