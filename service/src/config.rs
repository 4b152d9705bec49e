use clap::Parser;
use dotenvy::dotenv;
use log::LevelFilter;
use std::fmt;
use std::str::FromStr;
use url::Url;

/// Default OpenAI-compatible API base URL used when `OPENAI_BASE_URL` is not set.
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Whisper's hosted API rejects files above 25 MiB.
const DEFAULT_MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

#[derive(Clone, Debug, PartialEq)]
pub enum RustEnv {
    Development,
    Production,
    Staging,
}

#[derive(Debug, PartialEq, Eq)]
pub struct RustEnvParseError(String);

impl fmt::Display for RustEnvParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "unknown runtime environment '{}', expected development, staging or production",
            self.0
        )
    }
}

impl std::error::Error for RustEnvParseError {}

impl FromStr for RustEnv {
    type Err = RustEnvParseError;
    fn from_str(level: &str) -> Result<RustEnv, Self::Err> {
        match level.to_lowercase().as_str() {
            "development" => Ok(RustEnv::Development),
            "production" => Ok(RustEnv::Production),
            "staging" => Ok(RustEnv::Staging),
            _ => Err(RustEnvParseError(level.to_string())),
        }
    }
}

impl fmt::Display for RustEnv {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RustEnv::Development => write!(f, "development"),
            RustEnv::Production => write!(f, "production"),
            RustEnv::Staging => write!(f, "staging"),
        }
    }
}

/// Problems with configuration values that clap can't catch on its own.
#[derive(Debug)]
pub enum ConfigError {
    InvalidDatabaseUrl(url::ParseError),
    DatabaseUrlCannotHoldCredentials,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::InvalidDatabaseUrl(err) => write!(f, "invalid DATABASE_URL: {err}"),
            ConfigError::DatabaseUrlCannotHoldCredentials => {
                write!(f, "DATABASE_URL must be a postgres://host/db style URL")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidDatabaseUrl(err) => Some(err),
            ConfigError::DatabaseUrlCannotHoldCredentials => None,
        }
    }
}

#[derive(Clone, Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// The API key used for both completion and transcription requests.
    #[arg(long, env, hide_env_values = true)]
    openai_api_key: String,

    /// The base URL of the OpenAI-compatible API.
    /// Override in tests to point at a mock server.
    #[arg(long, env, default_value = DEFAULT_OPENAI_BASE_URL)]
    openai_base_url: String,

    /// The model used to answer questions and write meeting summaries.
    #[arg(long, env, default_value = "gpt-4o-mini")]
    pub completion_model: String,

    /// The model used to transcribe uploaded audio.
    #[arg(long, env, default_value = "whisper-1")]
    pub transcription_model: String,

    /// Sets the Postgresql database URL of the persistent store, without its password
    #[arg(short, long, env)]
    database_url: String,

    /// The service credential (password) for the persistent store
    #[arg(long, env, hide_env_values = true)]
    database_password: String,

    /// Maximum number of database connections in the pool
    #[arg(long, env, default_value_t = 20)]
    pub db_max_connections: u32,

    /// Minimum number of idle database connections to maintain
    #[arg(long, env, default_value_t = 1)]
    pub db_min_connections: u32,

    /// Timeout in seconds for establishing a new database connection
    #[arg(long, env, default_value_t = 8)]
    pub db_connect_timeout_secs: u64,

    /// Timeout in seconds for acquiring a connection from the pool
    #[arg(long, env, default_value_t = 8)]
    pub db_acquire_timeout_secs: u64,

    /// Seconds before an idle connection is closed
    #[arg(long, env, default_value_t = 600)]
    pub db_idle_timeout_secs: u64,

    /// Maximum lifetime in seconds for any connection in the pool
    #[arg(long, env, default_value_t = 1800)]
    pub db_max_lifetime_secs: u64,

    /// A list of full CORS origin URLs that are allowed to call the API with credentials.
    #[arg(
        long,
        env,
        value_delimiter = ',',
        use_value_delimiter = true,
        default_value = "http://localhost:5173,http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,

    /// The host interface to listen for incoming connections
    #[arg(short, long, env, default_value = "0.0.0.0")]
    pub interface: String,

    /// The host TCP port to listen for incoming connections
    #[arg(short, long, env, default_value_t = 8000)]
    pub port: u16,

    /// Largest accepted request body in bytes, which bounds audio uploads
    #[arg(long, env, default_value_t = DEFAULT_MAX_UPLOAD_BYTES)]
    pub max_upload_bytes: usize,

    /// Set the log level verbosity threshold (level) to control what gets displayed on console output
    #[arg(short, long, env, default_value_t = LevelFilter::Info)]
    pub log_level_filter: LevelFilter,

    /// Set the Rust runtime environment to use.
    #[arg(short, long, env, default_value_t = RustEnv::Development)]
    pub runtime_env: RustEnv,
}

impl Config {
    /// Loads `.env`, then parses flags and environment variables. Exits the process with a
    /// usage error when a required credential is missing.
    pub fn new() -> Self {
        // Load .env file first
        dotenv().ok();
        // Then parse the command line parameters and flags
        Config::parse()
    }

    pub fn openai_api_key(&self) -> &str {
        &self.openai_api_key
    }

    /// Returns the OpenAI-compatible API base URL without a trailing slash.
    pub fn openai_base_url(&self) -> &str {
        self.openai_base_url.trim_end_matches('/')
    }

    /// The database URL as configured, safe to log.
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// The database URL with the service credential filled in, ready to connect with.
    pub fn database_connection_url(&self) -> Result<String, ConfigError> {
        let mut url = Url::parse(&self.database_url).map_err(ConfigError::InvalidDatabaseUrl)?;
        url.set_password(Some(&self.database_password))
            .map_err(|_| ConfigError::DatabaseUrlCannotHoldCredentials)?;
        Ok(url.to_string())
    }

    pub fn runtime_env(&self) -> RustEnv {
        self.runtime_env.clone()
    }
}
