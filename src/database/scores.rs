use anyhow::{Context, Result};
use rusqlite::{params, Connection};

use super::models::ScoreRow;
use crate::domain::ScoreForPlayer;

pub fn insert_score(
    conn: &Connection,
    game_id: i64,
    player_id: i64,
    entry: &ScoreForPlayer,
) -> Result<()> {
    let sql = "INSERT INTO scores (game_id, player_id, entry_id, legacy_score, base_cards, extra_vp, basic_events, special_events, prosperity_cards, visitors, journey, garland_award) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)";

    conn.execute(
        sql,
        params![
            game_id,
            player_id,
            entry.id,
            entry.legacy_score,
            entry.base_cards,
            entry.extra_vp,
            entry.basic_events,
            entry.special_events,
            entry.prosperity_cards,
            entry.visitors,
            entry.journey,
            entry.garland_award
        ],
    )
    .context("Failed to insert score")?;

    Ok(())
}

pub fn list_for_game(conn: &Connection, game_id: i64) -> Result<Vec<ScoreRow>> {
    let sql = "
        SELECT
            s.entry_id, p.name, s.legacy_score, s.base_cards, s.extra_vp, s.basic_events,
            s.special_events, s.prosperity_cards, s.visitors, s.journey, s.garland_award
        FROM scores s
        JOIN players p ON s.player_id = p.id
        WHERE s.game_id = ?1
        ORDER BY s.id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![game_id], parse_score_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

fn parse_score_row(row: &rusqlite::Row) -> rusqlite::Result<ScoreRow> {
    Ok(ScoreRow {
        entry_id: row.get(0)?,
        player_name: row.get(1)?,
        legacy_score: row.get(2)?,
        base_cards: row.get(3)?,
        extra_vp: row.get(4)?,
        basic_events: row.get(5)?,
        special_events: row.get(6)?,
        prosperity_cards: row.get(7)?,
        visitors: row.get(8)?,
        journey: row.get(9)?,
        garland_award: row.get(10)?,
    })
}
