use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};

/// Players are deduplicated by name across games: a returning name reuses
/// its existing row.
pub fn find_or_create(conn: &Connection, name: &str) -> Result<i64> {
    if let Some(id) = find_by_name(conn, name)? {
        return Ok(id);
    }

    log::info!("Player '{name}' not found, creating new player");
    insert_new_player(conn, name)
}

fn find_by_name(conn: &Connection, name: &str) -> Result<Option<i64>> {
    let sql = "SELECT id FROM players WHERE name = ?1";

    conn.query_row(sql, params![name], |row| row.get(0))
        .optional()
        .context("Failed to query player by name")
}

fn insert_new_player(conn: &Connection, name: &str) -> Result<i64> {
    let sql = "INSERT INTO players (name) VALUES (?1) RETURNING id";

    conn.query_row(sql, params![name], |row| row.get(0))
        .context("Failed to insert new player")
}
