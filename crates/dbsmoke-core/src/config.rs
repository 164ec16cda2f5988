use std::env;

use crate::error::{CheckError, Result};

pub const ENV_DB_HOST: &str = "DB_HOST";
pub const ENV_DB_NAME: &str = "DB_NAME";
pub const ENV_DB_USER: &str = "DB_USER";
pub const ENV_DB_PASSWORD: &str = "DB_PASSWORD";

/// Connection settings for the target database server.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub host: String,
    pub database: String,
    pub user: String,
    pub password: String,
}

impl DbConfig {
    /// Read the four connection settings from the process environment.
    ///
    /// Variables are read in the order host, name, user, password, and the
    /// first absent one is reported. Values are not validated; empty strings
    /// are handed to the driver as-is.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: require(ENV_DB_HOST)?,
            database: require(ENV_DB_NAME)?,
            user: require(ENV_DB_USER)?,
            password: require(ENV_DB_PASSWORD)?,
        })
    }
}

fn require(name: &'static str) -> Result<String> {
    match env::var(name) {
        Ok(value) => Ok(value),
        Err(env::VarError::NotPresent) => Err(CheckError::MissingVar(name)),
        Err(env::VarError::NotUnicode(_)) => Err(CheckError::NonUnicodeVar(name)),
    }
}
