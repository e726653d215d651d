use actix_web::web;

use crate::handlers::experiences;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/experiences")
            .service(
                web::resource("")
                    .route(web::get().to(experiences::list_experiences))
                    .route(web::post().to(experiences::create_experience))
            )
            // registered before "/{experience_id}" so "roles" is not taken for an id
            .service(
                web::resource("/roles/{role_id}")
                    .route(web::delete().to(experiences::delete_role))
            )
            .service(
                web::resource("/{experience_id}")
                    .route(web::put().to(experiences::update_experience))
                    .route(web::delete().to(experiences::delete_experience))
            )
            .service(
                web::resource("/{experience_id}/roles")
                    .route(web::post().to(experiences::add_role))
            )
    );
}
