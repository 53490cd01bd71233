//! Route table.
//!
//! Fight routes are served both at the root (`/fight`) and under `/api`
//! next to the creature and player registries.

use axum::Router;
use axum::routing::{delete, get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/health", get(handlers::health_check))
        .merge(fight_routes())
        .route(
            "/monster",
            get(handlers::list_monsters).post(handlers::create_monster),
        )
        .route(
            "/monster/{id}",
            get(handlers::get_monster)
                .put(handlers::update_monster)
                .delete(handlers::delete_monster),
        )
        .route("/monster/name/{name}", get(handlers::get_monsters_by_name))
        .route(
            "/player",
            get(handlers::list_players).post(handlers::create_player),
        )
        .route(
            "/player/{id}",
            get(handlers::get_player)
                .put(handlers::update_player)
                .delete(handlers::delete_player),
        )
        .route("/player/name/{name}", get(handlers::get_player_by_name))
        .route(
            "/player/{id}/monsters",
            get(handlers::list_player_monsters).post(handlers::add_player_monster),
        )
        .route(
            "/player/{id}/monsters/{monster_id}",
            delete(handlers::remove_player_monster),
        );

    Router::new()
        .merge(fight_routes())
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .with_state(state)
}

fn fight_routes() -> Router<AppState> {
    Router::new()
        .route("/fight", post(handlers::create_fight))
        .route(
            "/fight/{fight_id}",
            post(handlers::execute_exchange).get(handlers::get_fight_state),
        )
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use fighter_engine::Creature;
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    async fn send(
        router: &Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => request
                .header("content-type", "application/json")
                .body(Body::from(body.to_string())),
            None => request.body(Body::empty()),
        }
        .unwrap();

        let response = router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn create_monster(
        router: &Router,
        name: &str,
        attack: i64,
        defence: i64,
        health: i64,
    ) -> String {
        let (status, body) = send(
            router,
            Method::POST,
            "/api/monster",
            Some(json!({ "name": name, "attack": attack, "defence": defence, "health": health })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        body["id"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn fight_lifecycle_over_http() {
        let router = create_router(AppState::in_memory());
        let a = create_monster(&router, "Glass Cannon", 10, 5, 1).await;
        let b = create_monster(&router, "Old Oak", 15, 0, 100).await;

        let (status, fight) = send(
            &router,
            Method::POST,
            "/fight",
            Some(json!({ "teamA": [a], "teamB": [b] })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(fight["status"], "ONGOING");
        assert_eq!(fight["activeMonsterA"], a.as_str());
        let fight_id = fight["id"].as_str().unwrap().to_string();

        let uri = format!("/fight/{}", fight_id);
        let (status, state) = send(&router, Method::POST, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(state["status"], "TEAM_B_WON");
        assert_eq!(state["fightId"], fight_id.as_str());
        let team_b: Vec<Creature> = serde_json::from_value(state["teamB"].clone()).unwrap();
        assert_eq!(team_b[0].health, 90);

        let api_uri = format!("/api/fight/{}", fight_id);
        let (status, again) = send(&router, Method::POST, &api_uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(again, state);

        let (status, read) = send(&router, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(read, state);

        let monster_uri = format!("/api/monster/{}", a);
        let (status, body) = send(&router, Method::DELETE, &monster_uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "CREATURE_IN_FIGHT");
        let (status, read) = send(&router, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(read, state);
    }

    #[tokio::test]
    async fn fight_creation_errors_are_bad_requests() {
        let router = create_router(AppState::in_memory());
        let a = create_monster(&router, "Solo", 1, 1, 1).await;
        let ghost = uuid::Uuid::new_v4().to_string();

        for body in [
            json!({ "teamA": [], "teamB": [a] }),
            json!({ "teamA": null, "teamB": [a] }),
            json!({ "teamB": [a] }),
            json!({ "teamA": [a], "teamB": [ghost] }),
        ] {
            let (status, _) = send(&router, Method::POST, "/fight", Some(body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
        }

        let empty = json!({ "teamA": [], "teamB": [a] });
        let (_, body) = send(&router, Method::POST, "/fight", Some(empty)).await;
        assert_eq!(body["code"], "INVALID_TEAM");
    }

    #[tokio::test]
    async fn unknown_fight_is_not_found() {
        let router = create_router(AppState::in_memory());
        let id = uuid::Uuid::new_v4();
        let (status, body) = send(&router, Method::POST, &format!("/fight/{}", id), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "FIGHT_NOT_FOUND");
        let (status, _) = send(&router, Method::GET, &format!("/api/fight/{}", id), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (status, _) = send(&router, Method::GET, "/fight/not-a-uuid", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn monster_registry_over_http() {
        let router = create_router(AppState::in_memory());
        let id = create_monster(&router, "Ember", 12, 3, 40).await;

        let (status, _) = send(
            &router,
            Method::POST,
            "/api/monster",
            Some(json!({ "name": "Bad", "attack": -1, "defence": 0, "health": 5 })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, list) = send(&router, Method::GET, "/api/monster/name/Ember", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(list.as_array().map(Vec::len), Some(1));

        let (status, updated) = send(
            &router,
            Method::PUT,
            &format!("/api/monster/{}", id),
            Some(json!({ "name": "Ember", "attack": 20, "defence": 3, "health": 40 })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["attack"], 20);

        let uri = format!("/api/monster/{}", id);
        let (status, _) = send(&router, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, _) = send(&router, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (status, _) = send(&router, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn player_box_over_http() {
        let router = create_router(AppState::in_memory());
        let ash = json!({ "name": "Ash" });
        let (status, player) = send(&router, Method::POST, "/api/player", Some(ash.clone())).await;
        assert_eq!(status, StatusCode::CREATED);
        let player_id = player["id"].as_str().unwrap().to_string();

        let (status, _) = send(&router, Method::POST, "/api/player", Some(ash)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, player) = send(
            &router,
            Method::POST,
            &format!("/api/player/{}/monsters", player_id),
            Some(json!({ "name": "Sparky", "attack": 11, "defence": 4, "health": 35 })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let monster_id = player["monsterBox"][0].as_str().unwrap().to_string();

        let box_uri = format!("/api/player/{}/monsters", player_id);
        let (status, monsters) = send(&router, Method::GET, &box_uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(monsters[0]["name"], "Sparky");

        let uri = format!("/api/player/{}/monsters/{}", player_id, monster_id);
        let (status, _) = send(&router, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        let (status, _) = send(&router, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&router, Method::GET, "/api/player/name/Ash", None).await;
        assert_eq!(status, StatusCode::OK);
        let player_uri = format!("/api/player/{}", player_id);
        let (status, _) = send(&router, Method::DELETE, &player_uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, _) = send(&router, Method::GET, "/api/player/name/Ash", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn health_endpoint_reports_ok() {
        let router = create_router(AppState::in_memory());
        let (status, body) = send(&router, Method::GET, "/api/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }
}
