//! Configuration for insight requests.

use std::time::Duration;

/// Model, sampling, and fallback settings for one kind of insight.
#[derive(Debug, Clone, PartialEq)]
pub struct BranchSettings {
    /// Model identifier.
    pub model: String,
    /// Sampling temperature (0.0-2.0).
    pub temperature: f32,
    /// Text used when the model answers with nothing.
    pub empty_fallback: String,
    /// Text used when the call fails.
    pub error_fallback: String,
}

/// Settings for both insight kinds plus shared prompt options.
#[derive(Debug, Clone, PartialEq)]
pub struct InsightConfig {
    /// Numeric and option draws.
    pub numeric: BranchSettings,
    /// Divination draws.
    pub divination: BranchSettings,
    /// Language the model should answer in.
    pub language: String,
    /// Length cap for divination readings, in characters.
    pub word_limit: u32,
    /// Per-request timeout for HTTP generators.
    pub timeout: Option<Duration>,
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            numeric: BranchSettings {
                model: "gemini-3-flash-preview".to_string(),
                temperature: 0.8,
                empty_fallback: "命运之轮已然转动。".to_string(),
                error_fallback: "每一个随机的瞬间都是宇宙的低语。".to_string(),
            },
            divination: BranchSettings {
                model: "gemini-3-pro-preview".to_string(),
                temperature: 0.9,
                empty_fallback: "卦象深奥，此时沉默即是启示。".to_string(),
                error_fallback: "万物盈缩，皆有定数。请静待时机。".to_string(),
            },
            language: "Chinese (Simplified)".to_string(),
            word_limit: 150,
            timeout: Some(Duration::from_secs(30)),
        }
    }
}

impl InsightConfig {
    /// Set the model for numeric and option insights.
    pub fn with_numeric_model(mut self, model: impl Into<String>) -> Self {
        self.numeric.model = model.into();
        self
    }

    /// Set the model for divination insights.
    pub fn with_divination_model(mut self, model: impl Into<String>) -> Self {
        self.divination.model = model.into();
        self
    }

    /// Use one model for both kinds of insight.
    pub fn with_model(self, model: impl Into<String>) -> Self {
        let model = model.into();
        self.with_numeric_model(model.clone())
            .with_divination_model(model)
    }

    /// Set the numeric temperature (clamped to 0.0-2.0).
    pub fn with_numeric_temperature(mut self, temperature: f32) -> Self {
        self.numeric.temperature = temperature.clamp(0.0, 2.0);
        self
    }

    /// Set the divination temperature (clamped to 0.0-2.0).
    pub fn with_divination_temperature(mut self, temperature: f32) -> Self {
        self.divination.temperature = temperature.clamp(0.0, 2.0);
        self
    }

    /// Set the response language.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Set the divination length cap.
    pub fn with_word_limit(mut self, word_limit: u32) -> Self {
        self.word_limit = word_limit.max(1);
        self
    }

    /// Set or clear the request timeout.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}
