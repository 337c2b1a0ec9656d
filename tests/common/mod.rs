#![allow(dead_code)]

use anyhow::Result;
use chrono::NaiveDate;
use fake::Fake;
use fake::faker::name::en::Name;
use sqlx::SqlitePool;
use tempfile::TempDir;
use uuid::Uuid;

use roster::database::init_database;
use roster::database::models::*;
use roster::{AppState, Config};

// Test database wrapper
pub struct TestDb {
    pub pool: SqlitePool,
    pub database_url: String,
    _temp_dir: TempDir,
}

impl TestDb {
    pub async fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let database_url = format!("sqlite:{}/test.db", temp_dir.path().display());
        let pool = init_database(&database_url).await?;

        Ok(TestDb {
            pool,
            database_url,
            _temp_dir: temp_dir,
        })
    }
}

// Test application wrapper
pub struct TestApp {
    pub db: TestDb,
    pub state: AppState,
}

impl TestApp {
    pub async fn new() -> Result<Self> {
        let db = TestDb::new().await?;
        let config = Config::test_config(&db.database_url);
        let state = AppState::new(db.pool.clone(), config);

        Ok(TestApp { db, state })
    }

    pub async fn team(&self) -> Team {
        self.named_team(&format!("{} Team", Name().fake::<String>()))
            .await
    }

    pub async fn named_team(&self, name: &str) -> Team {
        self.state
            .team_repository
            .create(TeamInput {
                name: format!("{} {}", name, &Uuid::new_v4().to_string()[..8]),
                description: None,
                admin_name: Some(Name().fake()),
                admin_phone: Some("+15550100".to_string()),
                color: "#3B82F6".to_string(),
            })
            .await
            .expect("Failed to create team")
    }

    pub async fn member(&self, team_id: Uuid) -> Member {
        self.named_member(team_id, &Name().fake::<String>()).await
    }

    pub async fn named_member(&self, team_id: Uuid, name: &str) -> Member {
        self.state
            .member_repository
            .create(MemberInput {
                name: name.to_string(),
                phone: None,
                team_id,
            })
            .await
            .expect("Failed to create member")
    }

    pub async fn event(&self, team_id: Uuid, date: NaiveDate, kind: EventKind) -> Event {
        let title = match kind {
            EventKind::Sunday => SUNDAY_SERVICE_TITLE.to_string(),
            EventKind::Special => "Christmas Prep".to_string(),
        };

        self.state
            .event_repository
            .create(EventInput {
                title,
                event_date: date,
                kind,
                team_id,
            })
            .await
            .expect("Failed to create event")
    }
}

/// Builds the full actix service for a [`TestApp`], wrapped in the request-id middleware.
#[macro_export]
macro_rules! init_app {
    ($app:expr) => {{
        let state = $app.state.clone();
        actix_web::test::init_service(
            actix_web::App::new()
                .configure(move |cfg| state.configure(cfg))
                .wrap(roster::middleware::RequestId),
        )
        .await
    }};
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// Helper function to set up test environment
pub fn setup_test_env() {
    let _ = env_logger::builder().is_test(true).try_init();
}
