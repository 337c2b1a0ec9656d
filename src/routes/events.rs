use crate::handlers::events;
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/events")
            .route("", web::get().to(events::get_events))
            .route("", web::post().to(events::create_event))
            .route("/{id}", web::get().to(events::get_event))
            .route("/{id}", web::patch().to(events::update_event))
            .route("/{id}", web::delete().to(events::delete_event))
            .route("/{id}/archive", web::post().to(events::archive_event))
            .route("/{id}/unarchive", web::post().to(events::unarchive_event))
            .route("/{id}/share", web::get().to(events::share_event)),
    );
}
