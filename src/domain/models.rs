use serde::{Deserialize, Serialize};

/// One player's entry on a score sheet.
///
/// `id` is assigned once at creation and never regenerated. `total_score` is
/// only a slot for an externally assigned value; nothing in this crate ever
/// writes it — the live total always comes from
/// [`crate::scoring::derive_total_score`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreForPlayer {
    pub id: String,
    pub player_name: String,
    pub base_cards: i64,
    pub extra_vp: i64,
    pub basic_events: i64,
    pub special_events: i64,
    pub prosperity_cards: i64,
    pub visitors: i64,
    pub journey: i64,
    pub garland_award: i64,
    pub legacy_score: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_score: Option<i64>,
}

/// One played game: its date plus one entry per participant, in the order
/// the frontend added them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameData {
    pub game_date: String,
    pub scores: Vec<ScoreForPlayer>,
}
