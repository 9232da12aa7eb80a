use crate::alarm::CheckAlarmQueueUseCase;
use crate::shared::usecase::execute;
use actix_web::rt::time::interval;
use alarmbot_infra::Context;
use std::time::Duration;

/// Starts the recurring job that promotes due alarms from `Queue` to
/// `Ready`. The tick body is awaited before the next tick is requested,
/// so two runs never overlap even when the store is slow.
pub fn start_alarm_status_job(ctx: Context) {
    actix_web::rt::spawn(async move {
        let mut check_interval = interval(Duration::from_secs(ctx.config.alarm_job_interval_secs));
        loop {
            check_interval.tick().await;
            // Failures are logged by the usecase executor, the job itself
            // keeps ticking.
            let _ = execute(CheckAlarmQueueUseCase, &ctx).await;
        }
    });
}
