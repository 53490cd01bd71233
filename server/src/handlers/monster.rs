use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use fighter_engine::{Creature, CreatureDraft, CreatureId};

use crate::errors::ApiError;
use crate::state::AppState;

/// `GET /monster`
pub async fn list_monsters(State(state): State<AppState>) -> Json<Vec<Creature>> {
    Json(state.creatures.list())
}

/// `GET /monster/{id}`
pub async fn get_monster(
    State(state): State<AppState>,
    id: Result<Path<CreatureId>, PathRejection>,
) -> Result<Json<Creature>, ApiError> {
    let Path(id) = id.map_err(ApiError::malformed)?;
    state
        .creatures
        .get(id)
        .map(Json)
        .ok_or_else(|| ApiError::missing("monster", id))
}

/// `GET /monster/name/{name}`: every creature with exactly this name.
pub async fn get_monsters_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Json<Vec<Creature>> {
    Json(state.creatures.find_by_name(&name))
}

/// `POST /monster`
pub async fn create_monster(
    State(state): State<AppState>,
    payload: Result<Json<CreatureDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<Creature>), ApiError> {
    let Json(draft) = payload.map_err(ApiError::malformed)?;
    let creature = state.creatures.create(draft)?;
    Ok((StatusCode::CREATED, Json(creature)))
}

/// `PUT /monster/{id}`
pub async fn update_monster(
    State(state): State<AppState>,
    id: Result<Path<CreatureId>, PathRejection>,
    payload: Result<Json<CreatureDraft>, JsonRejection>,
) -> Result<Json<Creature>, ApiError> {
    let Path(id) = id.map_err(ApiError::malformed)?;
    let Json(draft) = payload.map_err(ApiError::malformed)?;
    Ok(Json(state.creatures.update(id, draft)?))
}

/// `DELETE /monster/{id}`
pub async fn delete_monster(
    State(state): State<AppState>,
    id: Result<Path<CreatureId>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id.map_err(ApiError::malformed)?;
    state.creatures.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}
