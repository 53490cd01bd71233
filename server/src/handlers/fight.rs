use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use fighter_engine::{Fight, FightId, FightState};

use crate::dto::CreateFightRequest;
use crate::errors::ApiError;
use crate::state::AppState;

/// `POST /fight`
///
/// - `201 Created` with the new fight record
/// - `400 Bad Request` for an empty team, an unknown creature id or a team
///   without healthy creatures
pub async fn create_fight(
    State(state): State<AppState>,
    payload: Result<Json<CreateFightRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Fight>), ApiError> {
    let Json(request) = payload.map_err(ApiError::malformed)?;
    let team_a = request.team_a.unwrap_or_default();
    let team_b = request.team_b.unwrap_or_default();

    let fight = state
        .fights
        .create_fight(&team_a, &team_b)
        .map_err(ApiError::bad_request)?;
    Ok((StatusCode::CREATED, Json(fight)))
}

/// `POST /fight/{fight_id}`: resolve one exchange.
///
/// - `200 OK` with the fight state after the exchange (unchanged once decided)
/// - `404 Not Found` when the fight does not exist
pub async fn execute_exchange(
    State(state): State<AppState>,
    fight_id: Result<Path<FightId>, PathRejection>,
) -> Result<Json<FightState>, ApiError> {
    let Path(fight_id) = fight_id.map_err(ApiError::malformed)?;
    state
        .fights
        .execute_exchange(fight_id)
        .map(Json)
        .map_err(ApiError::not_found)
}

/// `GET /fight/{fight_id}`
pub async fn get_fight_state(
    State(state): State<AppState>,
    fight_id: Result<Path<FightId>, PathRejection>,
) -> Result<Json<FightState>, ApiError> {
    let Path(fight_id) = fight_id.map_err(ApiError::malformed)?;
    state
        .fights
        .fight_state(fight_id)
        .map(Json)
        .map_err(ApiError::not_found)
}
