use axum::{
    routing::get,
    Router,
};
use std::sync::Arc;

use crate::api::handlers::{create_game, get_game, get_games, new_player, AppState};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/games", get(get_games).post(create_game))
        .route("/games/:id", get(get_game))
        .route("/players/new", get(new_player))
        .with_state(state)
}
