mod check_alarm_queue;
mod create_alarm;
mod delete_alarm;
mod delete_alarms_by_parent;
mod get_alarm;
mod get_alarms_by_parent;
mod get_alarms_by_user;
mod postpone_alarm;
mod update_alarm;

use actix_web::web;
use create_alarm::create_alarm_controller;
use delete_alarm::delete_alarm_controller;
use delete_alarms_by_parent::delete_alarms_by_parent_controller;
use get_alarm::get_alarm_controller;
use get_alarms_by_parent::get_alarms_by_parent_controller;
use get_alarms_by_user::get_alarms_by_user_controller;
use postpone_alarm::postpone_alarm_controller;
use update_alarm::update_alarm_controller;

pub use check_alarm_queue::CheckAlarmQueueUseCase;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/alarm", web::post().to(create_alarm_controller));

    // The parent routes have to be registered before the single alarm
    // routes so that "parent" is not matched as an alarm id.
    cfg.route(
        "/alarm/parent/{parent_id}",
        web::get().to(get_alarms_by_parent_controller),
    );
    cfg.route(
        "/alarm/parent/{parent_id}",
        web::delete().to(delete_alarms_by_parent_controller),
    );

    cfg.route("/alarm/{alarm_id}", web::get().to(get_alarm_controller));
    cfg.route("/alarm/{alarm_id}", web::put().to(update_alarm_controller));
    cfg.route("/alarm/{alarm_id}", web::delete().to(delete_alarm_controller));
    cfg.route(
        "/alarm/{alarm_id}/postpone",
        web::post().to(postpone_alarm_controller),
    );

    cfg.route(
        "/user/{user_id}/alarms",
        web::get().to(get_alarms_by_user_controller),
    );
}
