pub mod models;

pub use models::{GameData, ScoreForPlayer};
