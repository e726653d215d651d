use actix_web::web;

use crate::handlers::content;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/content")
            .service(
                web::resource("")
                    .route(web::get().to(content::get_all_content))
            )
            .service(
                web::resource("/{content_id}")
                    .route(web::get().to(content::get_content))
                    .route(web::put().to(content::upsert_content))
            )
    );
}
