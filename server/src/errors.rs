use std::fmt::Display;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use fighter_engine::EngineError;
use thiserror::Error;

use crate::dto::ErrorResponse;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{message}")]
    NotFound { code: String, message: String },

    #[error("{message}")]
    BadRequest { code: String, message: String },
}

impl ApiError {
    /// Any engine failure reported as 404.
    pub fn not_found(err: EngineError) -> Self {
        Self::NotFound {
            code: err.code().to_string(),
            message: err.to_string(),
        }
    }

    /// Any engine failure reported as 400.
    pub fn bad_request(err: EngineError) -> Self {
        Self::BadRequest {
            code: err.code().to_string(),
            message: err.to_string(),
        }
    }

    pub fn missing(entity: &str, identifier: impl Display) -> Self {
        Self::NotFound {
            code: format!("{}_NOT_FOUND", entity.to_uppercase()),
            message: format!("{} not found with id: {}", entity, identifier),
        }
    }

    /// Body or path that could not be decoded.
    pub fn malformed(reason: impl Display) -> Self {
        Self::BadRequest {
            code: "MALFORMED_REQUEST".to_string(),
            message: reason.to_string(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
        }
    }

    pub fn code(&self) -> &str {
        match self {
            Self::NotFound { code, .. } | Self::BadRequest { code, .. } => code,
        }
    }
}

/// Not-found kinds become 404, everything else 400.
impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        if err.is_not_found() {
            Self::not_found(err)
        } else {
            Self::bad_request(err)
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_client_error() {
            tracing::debug!(code = self.code(), "{}", self);
        }
        let body = ErrorResponse::new(self.code(), self.to_string());
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fighter_engine::{FightId, Side};

    #[test]
    fn engine_errors_map_by_kind() {
        let missing = ApiError::from(EngineError::FightNotFound(FightId::new()));
        assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(missing.code(), "FIGHT_NOT_FOUND");

        let invalid = ApiError::from(EngineError::InvalidTeam { side: Side::A });
        assert_eq!(invalid.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(invalid.to_string(), "Team A cannot be empty");
    }

    #[test]
    fn missing_entity_code_is_upper_case() {
        let err = ApiError::missing("monster", "abc");
        assert_eq!(err.code(), "MONSTER_NOT_FOUND");
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }
}
