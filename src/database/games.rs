use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};

use super::models::GameRow;
use super::{players, scores};
use crate::domain::ScoreForPlayer;

/// Inserts a game and all of its score entries in one transaction, creating
/// player rows as needed. Returns the new game id.
pub fn insert_game_with_scores(
    conn: &mut Connection,
    game_date: &str,
    entries: &[ScoreForPlayer],
) -> Result<i64> {
    let tx = conn
        .transaction()
        .context("Failed to start game transaction")?;

    let game_id: i64 = tx
        .query_row(
            "INSERT INTO games (game_date) VALUES (?1) RETURNING id",
            params![game_date],
            |row| row.get(0),
        )
        .context("Failed to insert game")?;

    for entry in entries {
        let player_id = players::find_or_create(&tx, &entry.player_name)?;
        scores::insert_score(&tx, game_id, player_id, entry)?;
    }

    tx.commit().context("Failed to commit game transaction")?;
    Ok(game_id)
}

pub fn list_all(conn: &Connection) -> Result<Vec<GameRow>> {
    let sql = "SELECT id, game_date FROM games ORDER BY game_date DESC";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_game_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn find_by_id(conn: &Connection, id: i64) -> Result<Option<GameRow>> {
    let sql = "SELECT id, game_date FROM games WHERE id = ?1";

    conn.query_row(sql, params![id], parse_game_row)
        .optional()
        .context("Failed to query game by id")
}

fn parse_game_row(row: &rusqlite::Row) -> rusqlite::Result<GameRow> {
    Ok(GameRow {
        id: row.get(0)?,
        game_date: row.get(1)?,
    })
}
