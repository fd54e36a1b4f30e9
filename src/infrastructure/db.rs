use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

/// Open the connection pool and ping the datastore once.
///
/// Callers treat an error here as fatal for startup.
pub async fn init_db(database_url: &str, connection_limit: u32) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(database_url.to_owned());

    // Every pooled connection to an in-memory SQLite database sees its own
    // empty database, so those pools get exactly one connection.
    let max_connections = if database_url.contains(":memory:") {
        1
    } else {
        connection_limit.max(1)
    };
    options.max_connections(max_connections).sqlx_logging(false);

    let db = Database::connect(options).await?;

    tracing::info!("Pinging database...");
    db.ping().await?;

    Ok(db)
}
