//! Narrative insights for Chronos Oracle draws.
//!
//! A hosted language model turns a resolved result into a line or two of
//! flavor text. [`InsightRequester`] is the boundary the rest of the
//! workspace sees: it always returns text, substituting a fixed fallback
//! when the model call fails. [`InsightService`] implements it over any
//! [`TextGenerator`], and [`GeminiClient`] is the HTTP generator.

pub mod config;
pub mod error;
pub mod gemini;
pub mod generator;
pub mod prompt;
pub mod requester;

pub use config::{BranchSettings, InsightConfig};
pub use error::{InsightError, InsightResult};
pub use gemini::GeminiClient;
pub use generator::{GenerationRequest, TextGenerator};
pub use requester::{InsightRequester, InsightService, OfflineInsight};
