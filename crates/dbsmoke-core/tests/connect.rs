use anyhow::{Context, Result};
use dbsmoke_core::config::DbConfig;
use dbsmoke_core::db;

const REQUIRED_VARS: &[&str] = &[
    "DBSMOKE_TEST_DB_HOST",
    "DBSMOKE_TEST_DB_NAME",
    "DBSMOKE_TEST_DB_USER",
    "DBSMOKE_TEST_DB_PASSWORD",
];

fn live_config() -> Option<DbConfig> {
    for &var in REQUIRED_VARS {
        if std::env::var(var)
            .ok()
            .filter(|value| !value.is_empty())
            .is_none()
        {
            return None;
        }
    }

    Some(DbConfig {
        host: std::env::var("DBSMOKE_TEST_DB_HOST").ok()?,
        database: std::env::var("DBSMOKE_TEST_DB_NAME").ok()?,
        user: std::env::var("DBSMOKE_TEST_DB_USER").ok()?,
        password: std::env::var("DBSMOKE_TEST_DB_PASSWORD").ok()?,
    })
}

#[tokio::test]
async fn bogus_credentials_surface_a_driver_error() {
    let config = DbConfig {
        host: "127.0.0.1".into(),
        database: "dbsmoke_no_such_db".into(),
        user: "dbsmoke_no_such_user".into(),
        password: "wrong".into(),
    };

    // Refused outright or rejected at the handshake; either way the attempt
    // must come back as a driver error with a description.
    let err = db::connect(&config)
        .await
        .expect_err("connection with bogus credentials must fail");
    assert!(!err.to_string().is_empty());
}

#[tokio::test]
async fn live_database_accepts_connection() -> Result<()> {
    let Some(config) = live_config() else {
        eprintln!(
            "Skipping live_database_accepts_connection; set {} to enable",
            REQUIRED_VARS.join(", ")
        );
        return Ok(());
    };

    db::connect(&config)
        .await
        .context("failed to connect to the live test database")?;

    Ok(())
}
