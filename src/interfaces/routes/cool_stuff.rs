use actix_web::web;

use crate::handlers::cool_stuff;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/coolstuff")
            .service(
                web::resource("")
                    .route(web::get().to(cool_stuff::list_cool_stuff))
                    .route(web::post().to(cool_stuff::create_cool_stuff))
            )
            .service(
                web::resource("/upload")
                    .route(web::post().to(cool_stuff::upload_image))
            )
            .service(
                web::resource("/{cool_stuff_id}")
                    .route(web::put().to(cool_stuff::update_cool_stuff))
                    .route(web::delete().to(cool_stuff::delete_cool_stuff))
            )
    );
}
