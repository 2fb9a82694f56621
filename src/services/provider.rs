// src/services/provider.rs
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::UpstreamError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// One role-tagged entry of a prompt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptMessage {
    pub role: Role,
    pub content: String,
}

impl PromptMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self { role, content: content.into() }
    }
}

/// A service that turns a prompt into generated text.
///
/// `Ok(None)` means the provider answered but the first choice carried no content.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, prompt: &[PromptMessage]) -> Result<Option<String>, UpstreamError>;
}
