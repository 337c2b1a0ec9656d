use crate::handlers::assignments;
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/assignments")
            .route("", web::get().to(assignments::get_assignments))
            .route("", web::post().to(assignments::create_assignment))
            .route("", web::delete().to(assignments::delete_event_assignments))
            .route("/bulk", web::post().to(assignments::create_bulk_assignments))
            .route("/{id}", web::delete().to(assignments::delete_assignment)),
    );
}
