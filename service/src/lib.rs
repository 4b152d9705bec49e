use config::Config;
use log::info;
use meeting_ai::traits::{completion, transcription};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::sync::Arc;
use tokio::time::Duration;

pub mod config;
pub mod logging;

pub async fn init_database(config: &Config) -> Result<DatabaseConnection, DbErr> {
    info!(
        "Database pool config: max_connections={}, min_connections={}, \
         connect_timeout={}s, acquire_timeout={}s, idle_timeout={}s, max_lifetime={}s",
        config.db_max_connections,
        config.db_min_connections,
        config.db_connect_timeout_secs,
        config.db_acquire_timeout_secs,
        config.db_idle_timeout_secs,
        config.db_max_lifetime_secs,
    );

    let connection_url = config
        .database_connection_url()
        .map_err(|e| DbErr::Custom(e.to_string()))?;

    let mut opt = ConnectOptions::new(connection_url);
    opt.max_connections(config.db_max_connections)
        .min_connections(config.db_min_connections)
        .connect_timeout(Duration::from_secs(config.db_connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(config.db_acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout_secs))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime_secs))
        .sqlx_logging(true)
        .sqlx_logging_level(log::LevelFilter::Debug);

    let db = Database::connect(opt).await?;

    Ok(db)
}

/// Process-wide context built once at startup and handed to every request handler.
/// Cloning only bumps reference counts.
#[derive(Clone)]
pub struct AppState {
    pub database_connection: Arc<DatabaseConnection>,
    pub config: Config,
    completion_provider: Arc<dyn completion::Provider>,
    transcription_provider: Arc<dyn transcription::Provider>,
}

impl AppState {
    pub fn new(
        app_config: Config,
        db: &Arc<DatabaseConnection>,
        completion_provider: Arc<dyn completion::Provider>,
        transcription_provider: Arc<dyn transcription::Provider>,
    ) -> Self {
        Self {
            database_connection: Arc::clone(db),
            config: app_config,
            completion_provider,
            transcription_provider,
        }
    }

    pub fn db_conn_ref(&self) -> &DatabaseConnection {
        self.database_connection.as_ref()
    }

    pub fn completion_provider(&self) -> &dyn completion::Provider {
        self.completion_provider.as_ref()
    }

    pub fn transcription_provider(&self) -> &dyn transcription::Provider {
        self.transcription_provider.as_ref()
    }
}
