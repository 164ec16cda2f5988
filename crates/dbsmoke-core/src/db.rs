// crates/dbsmoke-core/src/db.rs

use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::ConnectOptions;
use tracing::debug;

use crate::config::DbConfig;
use crate::error::Result;

/// Single connection handle to the target server, live until dropped.
pub type DbHandle = MySqlConnection;

/// Open one connection to the MySQL server described by `config`.
///
/// Exactly one attempt is made; there are no retries and no timeout beyond
/// what the driver itself applies.
pub async fn connect(config: &DbConfig) -> Result<DbHandle> {
    // Port stays at the driver default (3306).
    let options = MySqlConnectOptions::new()
        .host(&config.host)
        .database(&config.database)
        .username(&config.user)
        .password(&config.password);

    debug!(
        host = %config.host,
        database = %config.database,
        user = %config.user,
        "attempting database connection"
    );

    let conn = options.connect().await?;
    Ok(conn)
}
