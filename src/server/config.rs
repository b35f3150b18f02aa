use std::{path::PathBuf, time::Duration};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

pub struct Config {
    pub database_url: String,

    pub api_username: String,
    pub api_password_hash: String,
    pub jwt_secret: String,

    pub bind_address: String,
    pub request_timeout: Duration,

    /// JSON file of battles loaded into an empty database at startup.
    pub seed_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from a variable lookup.
    ///
    /// Empty values count as unset.
    ///
    /// # Returns
    /// - `Ok(Config)` - Every required variable present and every value valid
    /// - `Err(ConfigError::MissingEnvVar)` - A required variable is unset or empty
    /// - `Err(ConfigError::InvalidEnvVar)` - `REQUEST_TIMEOUT_SECS` is not a positive integer
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let vars = Vars(lookup);

        Ok(Self {
            database_url: vars.required("DATABASE_URL")?,
            api_username: vars.required("API_USERNAME")?,
            api_password_hash: vars.required("API_PASSWORD_HASH")?,
            jwt_secret: vars.required("JWT_SECRET")?,
            bind_address: vars
                .optional("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            request_timeout: Duration::from_secs(vars.request_timeout_secs()?),
            seed_path: vars.optional("BATTLES_SEED_PATH").map(PathBuf::from),
        })
    }
}

struct Vars<F>(F);

impl<F: Fn(&str) -> Option<String>> Vars<F> {
    fn required(&self, name: &str) -> Result<String, ConfigError> {
        self.optional(name)
            .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
    }

    fn optional(&self, name: &str) -> Option<String> {
        (self.0)(name).filter(|value| !value.is_empty())
    }

    fn request_timeout_secs(&self) -> Result<u64, ConfigError> {
        let Some(value) = self.optional("REQUEST_TIMEOUT_SECS") else {
            return Ok(DEFAULT_REQUEST_TIMEOUT_SECS);
        };

        match value.parse::<u64>() {
            Ok(0) => Err(ConfigError::InvalidEnvVar {
                name: "REQUEST_TIMEOUT_SECS".to_string(),
                value,
                reason: "timeout must be at least one second".to_string(),
            }),
            Ok(secs) => Ok(secs),
            Err(e) => Err(ConfigError::InvalidEnvVar {
                name: "REQUEST_TIMEOUT_SECS".to_string(),
                value,
                reason: e.to_string(),
            }),
        }
    }
}
