// crates/dbsmoke-core/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("environment variable {0} is not set")]
    MissingVar(&'static str),

    #[error("environment variable {0} is not valid unicode")]
    NonUnicodeVar(&'static str),

    #[error(transparent)]
    Connect(#[from] sqlx::Error),
}

pub type Result<T> = std::result::Result<T, CheckError>;
