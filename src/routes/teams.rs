use crate::handlers::teams;
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/teams")
            .route("", web::get().to(teams::get_teams))
            .route("", web::post().to(teams::create_team))
            .route("/{id}", web::get().to(teams::get_team))
            .route("/{id}", web::put().to(teams::update_team))
            .route("/{id}", web::delete().to(teams::delete_team))
            .route(
                "/{id}/toggle-active",
                web::put().to(teams::toggle_team_active),
            ),
    );
}
