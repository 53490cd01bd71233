use fighter_engine::CreatureId;
use serde::{Deserialize, Serialize};

/// `POST /fight` body. Missing or null teams are treated as empty.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFightRequest {
    #[serde(default)]
    pub team_a: Option<Vec<CreatureId>>,
    #[serde(default)]
    pub team_b: Option<Vec<CreatureId>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
