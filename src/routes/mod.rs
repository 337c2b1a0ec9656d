use actix_web::{error, web};

use crate::error::AppError;

pub mod assignments;
pub mod events;
pub mod members;
pub mod roster;
pub mod teams;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .app_data(path_config())
        .service(
            web::scope("/api")
                .configure(teams::configure)
                .configure(members::configure)
                // Before the events scope, which would otherwise claim the path.
                .configure(roster::configure)
                .configure(events::configure)
                .configure(assignments::configure),
        );
}

// Malformed bodies, queries and paths become `400 { "error": ... }`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| bad_request(err.to_string()))
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| bad_request(err.to_string()))
}

pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| bad_request(err.to_string()))
}

fn bad_request(message: String) -> error::Error {
    log::warn!("Rejected malformed request: {}", message);
    AppError::BadRequest(message).into()
}
