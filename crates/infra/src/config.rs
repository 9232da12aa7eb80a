use alarmbot_utils::create_random_secret;
use tracing::{info, log::warn};

#[derive(Debug, Clone)]
pub struct Config {
    /// Secret bearer token required on API routes
    pub api_secret: String,
    /// Port for the application to run on
    pub port: usize,
    /// How often the alarm status check job runs, in seconds
    pub alarm_job_interval_secs: u64,
    /// Maximum number of queued alarms fetched per job tick. Alarms beyond
    /// this cap wait for a later tick once earlier ones leave the queue.
    pub alarm_queue_scan_limit: i64,
}

impl Config {
    pub fn new() -> Self {
        let api_secret = match std::env::var("API_SECRET") {
            Ok(secret) => secret,
            Err(_) => {
                info!("Did not find API_SECRET environment variable. Going to create one.");
                let secret = create_random_secret(32);
                info!("API secret was generated and set to: {}", secret);
                secret
            }
        };

        let default_port = "5000";
        let port = std::env::var("PORT").unwrap_or(default_port.into());
        let port = match port.parse::<usize>() {
            Ok(port) => port,
            Err(_) => {
                warn!(
                    "The given PORT: {} is not valid, falling back to the default port: {}.",
                    port, default_port
                );
                default_port.parse::<usize>().unwrap()
            }
        };

        let default_interval = 60;
        let alarm_job_interval_secs = match std::env::var("ALARM_JOB_INTERVAL_SECS") {
            Ok(secs) => match secs.parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    warn!(
                        "The given ALARM_JOB_INTERVAL_SECS: {} is not valid, falling back to the default: {}.",
                        secs, default_interval
                    );
                    default_interval
                }
            },
            Err(_) => default_interval,
        };

        Self {
            api_secret,
            port,
            alarm_job_interval_secs,
            alarm_queue_scan_limit: 100,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
