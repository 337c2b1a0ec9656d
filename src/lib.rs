use actix_web::{HttpResponse, Responder, get, web};
use sqlx::SqlitePool;

pub mod calendar;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod services;

pub use config::Config;
pub use database::repositories::{
    AssignmentRepository, EventRepository, MemberRepository, TeamRepository,
};
pub use error::AppError;
pub use services::RosterService;

/// Shared handles registered as actix app data.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub team_repository: TeamRepository,
    pub member_repository: MemberRepository,
    pub event_repository: EventRepository,
    pub assignment_repository: AssignmentRepository,
    pub roster_service: RosterService,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: Config) -> Self {
        let team_repository = TeamRepository::new(pool.clone());
        let member_repository = MemberRepository::new(pool.clone());
        let event_repository = EventRepository::new(pool.clone());
        let assignment_repository = AssignmentRepository::new(pool);
        let roster_service = RosterService::new(
            team_repository.clone(),
            event_repository.clone(),
            assignment_repository.clone(),
        );

        Self {
            config,
            team_repository,
            member_repository,
            event_repository,
            assignment_repository,
            roster_service,
        }
    }

    /// Registers app data, the root endpoints and the `/api` routes.
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::new(self.config.clone()))
            .app_data(web::Data::new(self.team_repository.clone()))
            .app_data(web::Data::new(self.member_repository.clone()))
            .app_data(web::Data::new(self.event_repository.clone()))
            .app_data(web::Data::new(self.assignment_repository.clone()))
            .app_data(web::Data::new(self.roster_service.clone()))
            .service(hello)
            .service(health)
            .configure(routes::configure);
    }
}

#[get("/")]
async fn hello() -> impl Responder {
    HttpResponse::Ok().body("Church Setup Roster API v1.0")
}

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "timestamp": chrono::Utc::now()
    }))
}
