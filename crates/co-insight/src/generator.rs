//! The text-generation seam.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::InsightResult;

/// One prompt sent to a model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Full prompt text.
    pub prompt: String,
    /// Model identifier.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f32,
}

/// Something that turns a prompt into text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a completion for `request`.
    async fn generate(&self, request: &GenerationRequest) -> InsightResult<String>;
}
