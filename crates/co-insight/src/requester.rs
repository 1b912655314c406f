//! The insight boundary used by the oracle.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::config::{BranchSettings, InsightConfig};
use crate::error::InsightError;
use crate::generator::{GenerationRequest, TextGenerator};
use crate::prompt::{divination_prompt, numeric_prompt};

/// Produces narrative text for resolved draws.
///
/// Implementations must not fail: every error is replaced by fallback text
/// before it reaches the caller.
#[async_trait]
pub trait InsightRequester: Send + Sync {
    /// Insight for a numeric or option result.
    async fn fetch_numeric_insight(&self, result: &str, mode_label: &str, seed: u32) -> String;

    /// Interpretation of a divination.
    async fn fetch_divination_insight(
        &self,
        question: &str,
        hexagram_name: &str,
        line_name: &str,
        binary_code: &str,
    ) -> String;
}

/// [`InsightRequester`] backed by a [`TextGenerator`].
#[derive(Debug, Clone)]
pub struct InsightService<G> {
    generator: G,
    config: InsightConfig,
}

impl<G: TextGenerator> InsightService<G> {
    /// Wrap a generator.
    pub fn new(generator: G, config: InsightConfig) -> Self {
        Self { generator, config }
    }

    /// The active configuration.
    pub fn config(&self) -> &InsightConfig {
        &self.config
    }

    /// The wrapped generator.
    pub fn generator(&self) -> &G {
        &self.generator
    }

    async fn complete(&self, prompt: String, branch: &BranchSettings) -> String {
        let request = GenerationRequest {
            prompt,
            model: branch.model.clone(),
            temperature: branch.temperature,
        };

        match self.generator.generate(&request).await {
            Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
            Ok(_) | Err(InsightError::EmptyResponse) => {
                debug!(model = %branch.model, "model returned no text");
                branch.empty_fallback.clone()
            }
            Err(err) => {
                warn!(model = %branch.model, error = %err, "insight request failed");
                branch.error_fallback.clone()
            }
        }
    }
}

#[async_trait]
impl<G: TextGenerator> InsightRequester for InsightService<G> {
    async fn fetch_numeric_insight(&self, result: &str, mode_label: &str, seed: u32) -> String {
        let prompt = numeric_prompt(result, mode_label, seed, &self.config);
        self.complete(prompt, &self.config.numeric).await
    }

    async fn fetch_divination_insight(
        &self,
        question: &str,
        hexagram_name: &str,
        line_name: &str,
        binary_code: &str,
    ) -> String {
        let prompt = divination_prompt(question, hexagram_name, line_name, binary_code, &self.config);
        self.complete(prompt, &self.config.divination).await
    }
}

/// Requester that never calls out and answers with the error fallbacks.
///
/// Used when no API key is configured.
#[derive(Debug, Clone, Default)]
pub struct OfflineInsight {
    config: InsightConfig,
}

impl OfflineInsight {
    /// Create an offline requester with the given fallback texts.
    pub fn new(config: InsightConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl InsightRequester for OfflineInsight {
    async fn fetch_numeric_insight(&self, _result: &str, _mode_label: &str, _seed: u32) -> String {
        self.config.numeric.error_fallback.clone()
    }

    async fn fetch_divination_insight(
        &self,
        _question: &str,
        _hexagram_name: &str,
        _line_name: &str,
        _binary_code: &str,
    ) -> String {
        self.config.divination.error_fallback.clone()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::error::InsightResult;

    /// Replays a fixed answer and records every request.
    struct Scripted {
        answer: InsightResult<String>,
        seen: Mutex<Vec<GenerationRequest>>,
    }

    impl Scripted {
        fn new(answer: InsightResult<String>) -> Self {
            Self {
                answer,
                seen: Mutex::new(Vec::new()),
            }
        }

        fn seen(&self) -> Vec<GenerationRequest> {
            self.seen.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TextGenerator for Scripted {
        async fn generate(&self, request: &GenerationRequest) -> InsightResult<String> {
            self.seen.lock().unwrap().push(request.clone());
            self.answer.clone()
        }
    }

    #[tokio::test]
    async fn numeric_success_uses_numeric_branch() {
        let service = InsightService::new(
            Scripted::new(Ok("  The stars lean your way.\n".to_string())),
            InsightConfig::default(),
        );
        let text = service.fetch_numeric_insight("42", "NUMERIC", 7).await;
        assert_eq!(text, "The stars lean your way.");

        let seen = service.generator().seen();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].model, "gemini-3-flash-preview");
        assert_eq!(seen[0].temperature, 0.8);
        assert!(seen[0].prompt.contains("Result: 42"));
    }

    #[tokio::test]
    async fn divination_success_uses_divination_branch() {
        let service = InsightService::new(
            Scripted::new(Ok("Cross the river.".to_string())),
            InsightConfig::default(),
        );
        let text = service
            .fetch_divination_insight("Should I go?", "水火既济", "九五", "010101")
            .await;
        assert_eq!(text, "Cross the river.");

        let seen = service.generator().seen();
        assert_eq!(seen[0].model, "gemini-3-pro-preview");
        assert_eq!(seen[0].temperature, 0.9);
        assert!(seen[0].prompt.contains("水火既济"));
    }

    #[tokio::test]
    async fn failure_substitutes_error_fallback() {
        let cfg = InsightConfig::default();
        let service = InsightService::new(
            Scripted::new(Err(InsightError::Request("connection refused".to_string()))),
            cfg.clone(),
        );
        assert_eq!(
            service.fetch_numeric_insight("a", "OPTIONS", 1).await,
            cfg.numeric.error_fallback
        );
        assert_eq!(
            service.fetch_divination_insight("q", "h", "l", "000000").await,
            cfg.divination.error_fallback
        );
    }

    #[tokio::test]
    async fn blank_answer_substitutes_empty_fallback() {
        let cfg = InsightConfig::default();
        let service = InsightService::new(Scripted::new(Ok("   ".to_string())), cfg.clone());
        assert_eq!(
            service.fetch_numeric_insight("1", "NUMERIC", 0).await,
            cfg.numeric.empty_fallback
        );
        assert_eq!(
            service.fetch_divination_insight("q", "h", "l", "000000").await,
            cfg.divination.empty_fallback
        );
    }

    #[tokio::test]
    async fn textless_response_substitutes_empty_fallback() {
        let cfg = InsightConfig::default();
        let service = InsightService::new(
            Scripted::new(Err(InsightError::EmptyResponse)),
            cfg.clone(),
        );
        assert_eq!(
            service.fetch_numeric_insight("7", "NUMERIC", 3).await,
            "命运之轮已然转动。"
        );
        assert_eq!(
            service.fetch_divination_insight("q", "h", "l", "000000").await,
            cfg.divination.empty_fallback
        );
    }

    #[tokio::test]
    async fn offline_returns_error_fallbacks() {
        let cfg = InsightConfig::default();
        let offline = OfflineInsight::new(cfg.clone());
        assert_eq!(
            offline.fetch_numeric_insight("1", "NUMERIC", 0).await,
            cfg.numeric.error_fallback
        );
        assert_eq!(
            offline.fetch_divination_insight("q", "h", "l", "000000").await,
            cfg.divination.error_fallback
        );
    }
}
