mod config;
mod repos;
mod system;

pub use config::Config;
pub use repos::Repos;
pub use repos::{
    AlarmPatch, AlarmQuery, DeleteResult, IAlarmRepo, INoteRepo, IThemeRepo, IUserRepo,
    InsertError, NotePatch, NoteQuery, ThemePatch, UserPatch,
};
use std::sync::Arc;
pub use system::ISys;
use system::RealSys;

#[derive(Clone)]
pub struct Context {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
}

struct ContextParams {
    pub connection_string: String,
    pub db_name: String,
}

impl Context {
    async fn create(params: ContextParams) -> Self {
        let repos = Repos::create_mongodb(&params.connection_string, &params.db_name)
            .await
            .expect("Mongodb credentials must be set and valid");
        Self {
            repos,
            config: Config::new(),
            sys: Arc::new(RealSys {}),
        }
    }

    pub fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config: Config::new(),
            sys: Arc::new(RealSys {}),
        }
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> Context {
    const CONNECTION_STRING: &str = "MONGODB_CONNECTION_STRING";
    const DB_NAME: &str = "MONGODB_NAME";

    let connection_string = std::env::var(CONNECTION_STRING)
        .unwrap_or_else(|_| panic!("{} env var to be present.", CONNECTION_STRING));
    let db_name = std::env::var(DB_NAME).unwrap_or_else(|_| "alarmbot".into());

    Context::create(ContextParams {
        connection_string,
        db_name,
    })
    .await
}
