use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use fighter_engine::{Creature, CreatureDraft, CreatureId, Player, PlayerDraft, PlayerId};

use crate::errors::ApiError;
use crate::state::AppState;

/// `GET /player`
pub async fn list_players(State(state): State<AppState>) -> Json<Vec<Player>> {
    Json(state.players.list())
}

/// `GET /player/{id}`
pub async fn get_player(
    State(state): State<AppState>,
    id: Result<Path<PlayerId>, PathRejection>,
) -> Result<Json<Player>, ApiError> {
    let Path(id) = id.map_err(ApiError::malformed)?;
    state
        .players
        .get(id)
        .map(Json)
        .ok_or_else(|| ApiError::missing("player", id))
}

/// `GET /player/name/{name}`
pub async fn get_player_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Player>, ApiError> {
    state.players.find_by_name(&name).map(Json).ok_or_else(|| {
        ApiError::NotFound {
            code: "PLAYER_NOT_FOUND".to_string(),
            message: format!("player not found with name: {}", name),
        }
    })
}

/// `POST /player`
pub async fn create_player(
    State(state): State<AppState>,
    payload: Result<Json<PlayerDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<Player>), ApiError> {
    let Json(draft) = payload.map_err(ApiError::malformed)?;
    let player = state.players.create(draft)?;
    Ok((StatusCode::CREATED, Json(player)))
}

/// `PUT /player/{id}`: rename.
pub async fn update_player(
    State(state): State<AppState>,
    id: Result<Path<PlayerId>, PathRejection>,
    payload: Result<Json<PlayerDraft>, JsonRejection>,
) -> Result<Json<Player>, ApiError> {
    let Path(id) = id.map_err(ApiError::malformed)?;
    let Json(draft) = payload.map_err(ApiError::malformed)?;
    Ok(Json(state.players.update(id, draft)?))
}

/// `DELETE /player/{id}`
pub async fn delete_player(
    State(state): State<AppState>,
    id: Result<Path<PlayerId>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id.map_err(ApiError::malformed)?;
    state.players.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /player/{id}/monsters`
pub async fn list_player_monsters(
    State(state): State<AppState>,
    id: Result<Path<PlayerId>, PathRejection>,
) -> Result<Json<Vec<Creature>>, ApiError> {
    let Path(id) = id.map_err(ApiError::malformed)?;
    Ok(Json(state.players.monsters(id)?))
}

/// `POST /player/{id}/monsters`: register a creature straight into the box.
pub async fn add_player_monster(
    State(state): State<AppState>,
    id: Result<Path<PlayerId>, PathRejection>,
    payload: Result<Json<CreatureDraft>, JsonRejection>,
) -> Result<Json<Player>, ApiError> {
    let Path(id) = id.map_err(ApiError::malformed)?;
    let Json(draft) = payload.map_err(ApiError::malformed)?;
    Ok(Json(state.players.add_monster(id, draft)?))
}

/// `DELETE /player/{id}/monsters/{monster_id}`
pub async fn remove_player_monster(
    State(state): State<AppState>,
    ids: Result<Path<(PlayerId, CreatureId)>, PathRejection>,
) -> Result<Json<Player>, ApiError> {
    let Path((id, monster_id)) = ids.map_err(ApiError::malformed)?;
    Ok(Json(state.players.remove_monster(id, monster_id)?))
}
