use anyhow::{Context, Result};
use rusqlite::Connection;

/// Applies the embedded schema. Every statement uses IF NOT EXISTS, so this
/// is safe to run on an already populated database.
pub fn initialize_schema(conn: &Connection) -> Result<()> {
    let schema_sql = include_str!("schema.sql");

    for (idx, statement) in split_sql_statements(schema_sql).iter().enumerate() {
        conn.execute(statement, [])
            .with_context(|| format!("Failed to execute schema statement {}", idx + 1))?;
    }

    log::info!("Database schema initialized");
    Ok(())
}

fn split_sql_statements(sql: &str) -> Vec<String> {
    sql.split(';')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
