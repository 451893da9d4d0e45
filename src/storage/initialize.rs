use crate::errors::AppResult;
use rusqlite::Connection;

/// Ensure the `kv` table exists.
/// The whole schema is this one table; there is nothing to migrate.
pub fn init_store(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS kv (
            key   TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}
