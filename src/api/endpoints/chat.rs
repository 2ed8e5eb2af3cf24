//! Chat assistant endpoint.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::extract::ApiJson;
use crate::api::types::ApiContext;
use crate::chat;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

/// `POST /api/chat` — recommend a medicine for the described symptoms.
pub async fn reply(
    State(ctx): State<ApiContext>,
    ApiJson(req): ApiJson<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    if req.message.len() > ctx.max_message_len {
        return Err(ApiError::BadRequest(format!(
            "Message too long (max {} bytes)",
            ctx.max_message_len
        )));
    }

    Ok(Json(ChatResponse {
        reply: chat::reply_to(&ctx.matcher, &req.message),
    }))
}
