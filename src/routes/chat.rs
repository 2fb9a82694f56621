use axum::{Json, extract::State};
use tracing::{Instrument, info_span};
use uuid::Uuid;

use crate::{
    error::AppError,
    message::{ChatReply, ChatRequest},
    services::coach,
    state::SharedState,
};

#[utoipa::path(
    post,
    path = "/chat",
    tag = "coach",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Coach reply", body = ChatReply),
        (status = 400, description = "Body is not valid JSON"),
        (status = 422, description = "Missing or mistyped `message` field"),
        (status = 500, description = "Upstream rejected the configured credential"),
        (status = 502, description = "Upstream returned an error or an unusable response"),
        (status = 503, description = "Upstream unreachable or rate limited"),
        (status = 504, description = "Upstream timed out"),
    )
)]
pub async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatReply>, AppError> {
    let span = info_span!(
        "chat",
        request_id = %Uuid::new_v4(),
        message_len = payload.message.len()
    );

    let reply = coach::chat(state.provider.as_ref(), &payload.message)
        .instrument(span)
        .await?;

    Ok(Json(reply))
}
