use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};

use career_core::models::recommendation::RecommendationRecord;
use career_counsel::counselor::TurnReply;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ChatRequest {
    pub user_id: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub is_last: bool,
}

#[derive(Serialize)]
#[serde(untagged)]
pub enum ChatResponse {
    Reply { user_id: String, response: String },
    Recommendation(RecommendationRecord),
}

/// One counseling turn. `is_last` asks for the structured recommendation
/// instead of a conversational reply.
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(req) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    // The id is the session key and is used exactly as sent.
    let user_id = req.user_id.as_str();
    if user_id.trim().is_empty() {
        return Err(ApiError::BadRequest("user_id must not be empty".to_string()));
    }
    if user_id.trim() != user_id {
        return Err(ApiError::BadRequest(
            "user_id must not have surrounding whitespace".to_string(),
        ));
    }
    if !req.is_last && req.content.trim().is_empty() {
        return Err(ApiError::BadRequest("content must not be empty".to_string()));
    }

    let reply = state
        .counselor
        .handle_turn(user_id, &req.content, req.is_last)
        .await?;

    let body = match reply {
        TurnReply::Reply(response) => ChatResponse::Reply {
            user_id: user_id.to_string(),
            response,
        },
        TurnReply::Recommendation(record) => ChatResponse::Recommendation(record),
    };
    Ok(Json(body))
}
