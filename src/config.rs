use crate::error::AdminError;
use figment::Figment;
use figment::providers::Env;
use serde::Deserialize;

fn default_loglevel() -> String {
    "warn".to_string()
}

/// Process configuration, sourced from the environment (a `.env` file
/// is merged into the environment by `main` before extraction).
///
/// `DATABASE_URL` is the only required value; every data-touching
/// command refuses to run without it.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database_url: String,
    #[serde(default = "default_loglevel")]
    pub loglevel: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AdminError> {
        if std::env::var_os("DATABASE_URL").is_none() {
            return Err(AdminError::MissingDatabaseUrl);
        }
        let cfg = Figment::new()
            .merge(Env::raw().only(&["database_url", "loglevel"]))
            .extract::<Config>()?;
        Ok(cfg)
    }
}
