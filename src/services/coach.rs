// src/services/coach.rs
use tracing::info;

use super::provider::{CompletionProvider, PromptMessage, Role};
use crate::{error::UpstreamError, message::ChatReply};

pub const SYSTEM_PROMPT: &str =
    "You are a supportive mental coach who helps overwhelmed people feel calmer.";

/// Fixed two-entry prompt: the coaching instruction, then the user's text verbatim.
pub fn build_prompt(message: &str) -> Vec<PromptMessage> {
    vec![
        PromptMessage::new(Role::System, SYSTEM_PROMPT),
        PromptMessage::new(Role::User, message),
    ]
}

pub async fn chat(
    provider: &dyn CompletionProvider,
    message: &str,
) -> Result<ChatReply, UpstreamError> {
    let prompt = build_prompt(message);
    let reply = provider.complete(&prompt).await?;

    info!(has_content = reply.is_some(), "coach reply received");
    Ok(ChatReply { reply })
}
