use serde::Serialize;

use crate::domain::ScoreForPlayer;

/// One stored game as returned by the read endpoints.
#[derive(Debug, Serialize)]
pub struct GameRecord {
    pub id: i64,
    pub game_date: String,
    pub scores: Vec<ScoreForPlayer>,
}

#[derive(Debug, Serialize)]
pub struct CreateGameResponse {
    pub game_id: i64,
}
