/// Placeholder names used to pre-fill a fresh score entry before the user
/// types a real one. Kept in config rather than inlined in the factory so
/// the candidate set can be swapped without touching the selection logic.
#[derive(Debug, Clone)]
pub struct ScoringSettings {
    pub placeholder_names: &'static [&'static str],
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            placeholder_names: &["Joseph", "James", "Niamh"],
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub scoring: ScoringSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            scoring: ScoringSettings::default(),
        }
    }
}

pub fn database_path() -> String {
    std::env::var("DATABASE_PATH").unwrap_or_else(|_| "everdell_games.db".to_string())
}
