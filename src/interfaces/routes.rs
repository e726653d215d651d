use actix_web::web;

use crate::{
    constants::API_PREFIX,
    handlers::{home::home, system::health_check},
};

mod content;
mod cool_stuff;
mod experiences;
mod json_error;
mod projects;
mod skills;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);
    cfg.service(health_check);

    cfg.service(
        web::scope(API_PREFIX)
            .configure(experiences::config_routes)
            .configure(projects::config_routes)
            .configure(cool_stuff::config_routes)
            .configure(content::config_routes)
            .configure(skills::config_routes)
    );

    cfg.configure(json_error::config_routes);
}
