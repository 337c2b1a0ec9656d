use crate::handlers::members;
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/members")
            .route("", web::get().to(members::get_members))
            .route("", web::post().to(members::create_member))
            .route("/{id}", web::get().to(members::get_member))
            .route("/{id}", web::patch().to(members::update_member))
            .route("/{id}", web::delete().to(members::delete_member)),
    );
}
