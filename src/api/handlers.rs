use anyhow::Result;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use chrono::Utc;
use std::sync::Arc;

use crate::api::models::{CreateGameResponse, GameRecord};
use crate::config::settings::AppConfig;
use crate::database::{self, models::GameRow, DbPool};
use crate::domain::GameData;
use crate::scoring;

pub struct AppState {
    pub pool: DbPool,
    pub config: AppConfig,
}

pub async fn get_games(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let conn = match state.pool.get() {
        Ok(conn) => conn,
        Err(_) => return (StatusCode::INTERNAL_SERVER_ERROR, "DB Connection Error").into_response(),
    };

    let games = match database::games::list_all(&conn) {
        Ok(rows) => rows,
        Err(e) => {
            log::error!("Failed to query games: {e:?}");
            return (StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e))
                .into_response();
        }
    };

    let mut records = Vec::with_capacity(games.len());
    for row in games {
        match load_game_record(&conn, row) {
            Ok(record) => records.push(record),
            Err(e) => {
                log::error!("Failed to load scores for game: {e:?}");
                return (StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e))
                    .into_response();
            }
        }
    }

    log::info!("Retrieved {} games", records.len());
    Json(records).into_response()
}

pub async fn get_game(
    State(state): State<Arc<AppState>>,
    Path(game_id): Path<i64>,
) -> impl IntoResponse {
    let conn = match state.pool.get() {
        Ok(conn) => conn,
        Err(_) => return (StatusCode::INTERNAL_SERVER_ERROR, "DB Connection Error").into_response(),
    };

    let game = match database::games::find_by_id(&conn, game_id) {
        Ok(row) => row,
        Err(e) => {
            log::error!("Failed to query game {game_id}: {e:?}");
            return (StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e))
                .into_response();
        }
    };

    match game {
        Some(row) => match load_game_record(&conn, row) {
            Ok(record) => Json(record).into_response(),
            Err(e) => {
                log::error!("Failed to load scores for game {game_id}: {e:?}");
                (StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e)).into_response()
            }
        },
        None => {
            log::warn!("Game {game_id} not found");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

pub async fn create_game(
    State(state): State<Arc<AppState>>,
    Json(game): Json<GameData>,
) -> impl IntoResponse {
    let mut conn = match state.pool.get() {
        Ok(conn) => conn,
        Err(_) => return (StatusCode::INTERNAL_SERVER_ERROR, "DB Connection Error").into_response(),
    };

    // An omitted date means "played just now".
    let game_date = if game.game_date.is_empty() {
        Utc::now().to_rfc3339()
    } else {
        game.game_date.clone()
    };

    match database::games::insert_game_with_scores(&mut conn, &game_date, &game.scores) {
        Ok(game_id) => {
            log::info!("Created game {game_id} with {} scores", game.scores.len());
            (StatusCode::CREATED, Json(CreateGameResponse { game_id })).into_response()
        }
        Err(e) => {
            log::error!("Failed to create game: {e:?}");
            (StatusCode::INTERNAL_SERVER_ERROR, format!("Insert Error: {}", e)).into_response()
        }
    }
}

/// Hands the frontend a blank score entry with a fresh id and a placeholder
/// name. Nothing is persisted until the game itself is posted.
pub async fn new_player(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(scoring::create_player(&state.config.scoring))
}

fn load_game_record(conn: &rusqlite::Connection, row: GameRow) -> Result<GameRecord> {
    let scores = database::scores::list_for_game(conn, row.id)?
        .into_iter()
        .map(|score| score.into_entry())
        .collect();

    Ok(GameRecord {
        id: row.id,
        game_date: row.game_date,
        scores,
    })
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use chrono::{DateTime, Utc};
    use r2d2_sqlite::SqliteConnectionManager;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    use super::AppState;
    use crate::api::routes::create_router;
    use crate::config::settings::AppConfig;
    use crate::database;

    fn test_router() -> Router {
        // max_size(1): every in-memory connection is its own database, so
        // the pool must hand out the one that got the schema.
        let manager = SqliteConnectionManager::memory();
        let pool = r2d2::Pool::builder().max_size(1).build(manager).unwrap();
        database::setup::initialize_schema(&pool.get().unwrap()).unwrap();

        create_router(Arc::new(AppState {
            pool,
            config: AppConfig::new(),
        }))
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn post_game(payload: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/games")
            .header("content-type", "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn create_game_replies_created_with_game_id() {
        let app = test_router();
        let payload = json!({
            "game_date": "2026-08-01T19:30:00Z",
            "scores": [
                {"id": "a-1", "player_name": "Joseph", "base_cards": 12},
                {"id": "a-2", "player_name": "Niamh", "legacy_score": 50},
            ],
        });

        let (status, body) = send(&app, post_game(payload)).await;
        assert_eq!(status, StatusCode::CREATED);
        let game_id = body["game_id"].as_i64().unwrap();

        let (status, body) = send(&app, get(&format!("/games/{game_id}"))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["game_date"], "2026-08-01T19:30:00Z");
        assert_eq!(body["scores"][0]["player_name"], "Joseph");
        assert_eq!(body["scores"][0]["base_cards"], 12);
        assert_eq!(body["scores"][1]["id"], "a-2");
        assert_eq!(body["scores"][1]["legacy_score"], 50);
        assert!(body["scores"][1].get("total_score").is_none());
    }

    #[tokio::test]
    async fn missing_game_maps_to_not_found() {
        let app = test_router();
        let (status, _) = send(&app, get("/games/42")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn empty_game_date_defaults_to_now() {
        let app = test_router();

        let (status, body) = send(&app, post_game(json!({"scores": []}))).await;
        assert_eq!(status, StatusCode::CREATED);
        let game_id = body["game_id"].as_i64().unwrap();

        let (_, body) = send(&app, get(&format!("/games/{game_id}"))).await;
        let stored = DateTime::parse_from_rfc3339(body["game_date"].as_str().unwrap())
            .unwrap()
            .with_timezone(&Utc);
        let age = Utc::now().signed_duration_since(stored);
        assert!(age.num_seconds() >= 0 && age.num_minutes() < 5);
    }

    #[tokio::test]
    async fn listed_games_come_newest_first() {
        let app = test_router();
        for date in ["2026-07-01T10:00:00Z", "2026-08-01T10:00:00Z"] {
            let (status, _) =
                send(&app, post_game(json!({"game_date": date, "scores": []}))).await;
            assert_eq!(status, StatusCode::CREATED);
        }

        let (status, body) = send(&app, get("/games")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["game_date"], "2026-08-01T10:00:00Z");
        assert_eq!(body[1]["game_date"], "2026-07-01T10:00:00Z");
    }

    #[tokio::test]
    async fn new_player_endpoint_returns_blank_entry() {
        let app = test_router();
        let (status, body) = send(&app, get("/players/new")).await;

        assert_eq!(status, StatusCode::OK);
        assert!(!body["id"].as_str().unwrap().is_empty());
        let name = body["player_name"].as_str().unwrap();
        let candidates = AppConfig::new().scoring.placeholder_names;
        assert!(candidates.iter().any(|candidate| *candidate == name));
        assert_eq!(body["base_cards"], 0);
        assert_eq!(body["legacy_score"], 0);
        assert!(body.get("total_score").is_none());
    }
}
