//! Selection modes, user configuration, and draw requests.

use serde::{Deserialize, Serialize};

use crate::error::{FateError, FateResult};

/// Which kind of result a draw produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SelectionMode {
    /// An integer within inclusive bounds.
    Numeric,
    /// One entry from a list of candidates.
    Options,
    /// An I-Ching hexagram with a moving line.
    Divination,
}

impl SelectionMode {
    /// Parse a mode from a user-supplied string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "numeric" | "number" | "n" => Some(Self::Numeric),
            "options" | "option" | "choice" | "o" => Some(Self::Options),
            "divination" | "divine" | "iching" | "d" => Some(Self::Divination),
            _ => None,
        }
    }

    /// All modes in display order.
    pub fn all() -> &'static [Self] {
        &[Self::Numeric, Self::Options, Self::Divination]
    }

    /// Short description for help output.
    pub fn describe(self) -> &'static str {
        match self {
            Self::Numeric => "pick an integer between min and max",
            Self::Options => "pick one of your options",
            Self::Divination => "cast a hexagram for a question",
        }
    }
}

impl std::fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Numeric => write!(f, "NUMERIC"),
            Self::Options => write!(f, "OPTIONS"),
            Self::Divination => write!(f, "DIVINATION"),
        }
    }
}

impl std::str::FromStr for SelectionMode {
    type Err = FateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| FateError::UnknownMode(s.to_string()))
    }
}

/// User-editable draw settings. Changed between draws, read during one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomConfig {
    /// Inclusive lower bound for numeric draws.
    pub min: i64,
    /// Inclusive upper bound for numeric draws.
    pub max: i64,
    /// Candidates for option draws, in insertion order.
    pub options: Vec<String>,
}

impl Default for RandomConfig {
    fn default() -> Self {
        Self {
            min: 1,
            max: 100,
            options: ["喝奶茶", "吃火锅", "写代码", "睡觉", "打游戏"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl RandomConfig {
    /// Set the numeric bounds.
    pub fn with_bounds(mut self, min: i64, max: i64) -> Self {
        self.set_bounds(min, max);
        self
    }

    /// Replace the option list.
    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.clear();
        for option in options {
            self.add_option(option);
        }
        self
    }

    /// Set the numeric bounds. Not validated until a draw.
    pub fn set_bounds(&mut self, min: i64, max: i64) {
        self.min = min;
        self.max = max;
    }

    /// Add an option. Blank input is ignored; returns whether it was added.
    pub fn add_option(&mut self, option: impl Into<String>) -> bool {
        let option = option.into();
        let trimmed = option.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.options.push(trimmed.to_string());
        true
    }

    /// Remove the option at `index`, returning it.
    pub fn remove_option(&mut self, index: usize) -> Option<String> {
        (index < self.options.len()).then(|| self.options.remove(index))
    }

    /// Remove every option.
    pub fn clear_options(&mut self) {
        self.options.clear();
    }
}

/// Everything one draw needs, keyed by mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DrawRequest {
    /// Integer in `min..=max`.
    Numeric {
        /// Inclusive lower bound.
        min: i64,
        /// Inclusive upper bound.
        max: i64,
    },
    /// One of `options`.
    Options {
        /// Candidates.
        options: Vec<String>,
    },
    /// Hexagram for `question`.
    Divination {
        /// What the user is asking about.
        question: String,
    },
}

impl DrawRequest {
    /// Build a request for `mode` from the current configuration.
    ///
    /// `question` is only read in divination mode.
    pub fn from_config(mode: SelectionMode, config: &RandomConfig, question: Option<&str>) -> Self {
        match mode {
            SelectionMode::Numeric => Self::Numeric {
                min: config.min,
                max: config.max,
            },
            SelectionMode::Options => Self::Options {
                options: config.options.clone(),
            },
            SelectionMode::Divination => Self::Divination {
                question: question.unwrap_or_default().trim().to_string(),
            },
        }
    }

    /// The mode this request belongs to.
    pub fn mode(&self) -> SelectionMode {
        match self {
            Self::Numeric { .. } => SelectionMode::Numeric,
            Self::Options { .. } => SelectionMode::Options,
            Self::Divination { .. } => SelectionMode::Divination,
        }
    }

    /// Reject input that cannot produce a result.
    pub fn validate(&self) -> FateResult<()> {
        match self {
            Self::Numeric { min, max } if max < min => Err(FateError::InvalidBounds {
                min: *min,
                max: *max,
            }),
            Self::Options { options } if options.is_empty() => Err(FateError::EmptyOptions),
            Self::Divination { question } if question.trim().is_empty() => {
                Err(FateError::EmptyQuestion)
            }
            _ => Ok(()),
        }
    }

    /// The divination question, if any.
    pub fn question(&self) -> Option<&str> {
        match self {
            Self::Divination { question } => Some(question),
            _ => None,
        }
    }
}
