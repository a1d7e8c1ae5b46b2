use rand::Rng;
use uuid::Uuid;

use crate::config::settings::ScoringSettings;
use crate::domain::ScoreForPlayer;

/// Creates a blank, zero-valued score entry with a fresh id and a
/// placeholder name drawn uniformly from the configured candidate list.
pub fn create_player(settings: &ScoringSettings) -> ScoreForPlayer {
    ScoreForPlayer {
        id: Uuid::new_v4().to_string(),
        player_name: pick_placeholder_name(settings),
        ..ScoreForPlayer::default()
    }
}

fn pick_placeholder_name(settings: &ScoringSettings) -> String {
    let names = settings.placeholder_names;
    let index = rand::rng().random_range(0..names.len());
    names[index].to_string()
}

/// Effective total for one entry.
///
/// A non-zero `legacy_score` is a pre-computed total and wins outright,
/// negative values included. Zero means "no override", so a legacy game that
/// genuinely ended at zero falls through to the component sum — a quirk
/// carried over from the original sheet format.
pub fn derive_total_score(score: &ScoreForPlayer) -> i64 {
    if score.legacy_score != 0 {
        return score.legacy_score;
    }

    score.base_cards
        + score.extra_vp
        + score.basic_events
        + score.special_events
        + score.prosperity_cards
        + score.visitors
        + score.journey
        + score.garland_award
}
