use crate::handlers::roster;
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/events/generate-sundays",
        web::post().to(roster::generate_sundays),
    )
    .route(
        "/events/generate-next-sundays",
        web::post().to(roster::generate_next_sundays),
    )
    .route("/auto-archive", web::post().to(roster::auto_archive));
}
