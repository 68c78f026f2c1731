use std::{env::var, sync::Arc};

use dotenv::dotenv;
use eyre::Error;
use log::info;

const DEFAULT_DB_NAME: &str = "availability_db";
const DEFAULT_RUST_LOG: &str = "info";

#[derive(Clone)]
pub struct Env(Arc<EnvInner>);

#[derive(Clone)]
pub struct EnvInner {
    mongo_url: Option<String>,
    db_name: String,
    rust_log: String,
    dotenv_error: Option<String>,
}

impl Env {
    /// `None` means the in-memory store is used.
    pub fn mongo_url(&self) -> Option<&str> {
        self.0.mongo_url.as_deref()
    }

    pub fn db_name(&self) -> &str {
        &self.0.db_name
    }

    pub fn rust_log(&self) -> &str {
        &self.0.rust_log
    }

    /// Reads `.env` and the process environment. Nothing is logged here:
    /// the logger is configured from the result, so call [`Env::log_load`]
    /// once it is installed.
    pub fn load() -> Result<Env, Error> {
        let dotenv_error = dotenv().err().map(|err| err.to_string());
        Ok(Env::from_vars(|key| var(key).ok(), dotenv_error))
    }

    pub fn dotenv_error(&self) -> Option<&str> {
        self.0.dotenv_error.as_deref()
    }

    pub fn log_load(&self) {
        if let Some(err) = self.dotenv_error() {
            info!("Failed to load .env file: {}", err);
        }
        info!(
            "env: db={} storage={}",
            self.db_name(),
            if self.mongo_url().is_some() { "mongo" } else { "memory" }
        );
    }

    fn from_vars(get: impl Fn(&str) -> Option<String>, dotenv_error: Option<String>) -> Env {
        let non_empty = |key: &str| get(key).filter(|value| !value.trim().is_empty());
        Env(Arc::new(EnvInner {
            mongo_url: non_empty("MONGO_URL"),
            db_name: non_empty("AVAILABILITY_DB").unwrap_or_else(|| DEFAULT_DB_NAME.to_owned()),
            rust_log: non_empty("RUST_LOG").unwrap_or_else(|| DEFAULT_RUST_LOG.to_owned()),
            dotenv_error,
        }))
    }
}
