//! Results of finished draws.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{FateError, FateResult};
use crate::iching::HexagramReading;
use crate::mode::SelectionMode;
use crate::seed::SeedBundle;

/// The deterministic result of one draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum DrawOutcome {
    /// A numeric draw.
    Number(i64),
    /// An option draw.
    Choice(String),
    /// A divination.
    Hexagram(HexagramReading),
}

impl DrawOutcome {
    /// The hexagram reading, for divination outcomes.
    pub fn hexagram(&self) -> Option<&HexagramReading> {
        match self {
            Self::Hexagram(reading) => Some(reading),
            _ => None,
        }
    }
}

impl std::fmt::Display for DrawOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Choice(choice) => write!(f, "{choice}"),
            Self::Hexagram(reading) => write!(f, "{reading}"),
        }
    }
}

/// A draw as recorded in the session log.
///
/// Created as soon as the outcome is known. The insight arrives later and is
/// attached exactly once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryItem {
    /// Unique id.
    pub id: Uuid,
    /// When the draw was resolved.
    pub timestamp: DateTime<Utc>,
    /// Mode of the draw.
    pub mode: SelectionMode,
    /// The resolved result.
    pub outcome: DrawOutcome,
    /// Millisecond seed the result came from.
    pub millisecond_seed: u32,
    /// The question asked, for divination draws.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    insight: Option<String>,
}

impl HistoryItem {
    /// Record a freshly resolved outcome.
    pub fn new(
        mode: SelectionMode,
        outcome: DrawOutcome,
        seed: &SeedBundle,
        question: Option<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp,
            mode,
            outcome,
            millisecond_seed: seed.millisecond,
            question,
            insight: None,
        }
    }

    /// The narrative insight, once attached.
    pub fn insight(&self) -> Option<&str> {
        self.insight.as_deref()
    }

    /// Whether an insight has been attached.
    pub fn has_insight(&self) -> bool {
        self.insight.is_some()
    }

    /// Attach the insight. Fails if one is already present.
    pub fn attach_insight(&mut self, insight: impl Into<String>) -> FateResult<()> {
        if self.insight.is_some() {
            return Err(FateError::InsightAlreadyAttached(self.id));
        }
        self.insight = Some(insight.into());
        Ok(())
    }

    /// Consume the item and return it with the insight attached.
    pub fn with_insight(mut self, insight: impl Into<String>) -> FateResult<Self> {
        self.attach_insight(insight)?;
        Ok(self)
    }

    /// The result as shown to the user.
    pub fn result_text(&self) -> String {
        self.outcome.to_string()
    }
}
