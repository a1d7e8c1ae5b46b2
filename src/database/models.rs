use crate::domain::ScoreForPlayer;

#[derive(Debug, Clone)]
pub struct GameRow {
    pub id: i64,
    pub game_date: String,
}

/// One stored score joined to its player name.
#[derive(Debug, Clone)]
pub struct ScoreRow {
    pub entry_id: String,
    pub player_name: String,
    pub legacy_score: i64,
    pub base_cards: i64,
    pub extra_vp: i64,
    pub basic_events: i64,
    pub special_events: i64,
    pub prosperity_cards: i64,
    pub visitors: i64,
    pub journey: i64,
    pub garland_award: i64,
}

impl ScoreRow {
    /// Rebuilds the frontend-facing entry. `total_score` is never stored, so
    /// it always comes back unset.
    pub fn into_entry(self) -> ScoreForPlayer {
        ScoreForPlayer {
            id: self.entry_id,
            player_name: self.player_name,
            base_cards: self.base_cards,
            extra_vp: self.extra_vp,
            basic_events: self.basic_events,
            special_events: self.special_events,
            prosperity_cards: self.prosperity_cards,
            visitors: self.visitors,
            journey: self.journey,
            garland_award: self.garland_award,
            legacy_score: self.legacy_score,
            total_score: None,
        }
    }
}
