mod create_theme;
mod delete_theme;
mod get_theme;
mod get_themes_by_user;
mod update_theme;

use actix_web::web;
use create_theme::create_theme_controller;
use delete_theme::delete_theme_controller;
use get_theme::get_theme_controller;
use get_themes_by_user::get_themes_by_user_controller;
use update_theme::update_theme_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/theme", web::post().to(create_theme_controller));
    cfg.route("/theme/{theme_id}", web::get().to(get_theme_controller));
    cfg.route("/theme/{theme_id}", web::put().to(update_theme_controller));
    cfg.route("/theme/{theme_id}", web::delete().to(delete_theme_controller));
    cfg.route(
        "/user/{user_id}/themes",
        web::get().to(get_themes_by_user_controller),
    );
}
