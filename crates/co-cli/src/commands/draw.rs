use clap::Subcommand;
use colored::Colorize;

use co_core::{DrawRequest, SystemClock};
use co_oracle::Oracle;

use super::{InsightArgs, print_insight, print_result};

/// What to draw.
#[derive(Subcommand, Debug, Clone)]
pub enum DrawKind {
    /// A whole number in an inclusive range
    Numeric {
        /// Lower bound (inclusive)
        #[arg(long, default_value = "1", allow_negative_numbers = true)]
        min: i64,

        /// Upper bound (inclusive)
        #[arg(long, default_value = "100", allow_negative_numbers = true)]
        max: i64,
    },

    /// One entry from a list of options
    Options {
        /// Candidate options
        #[arg(required = true)]
        options: Vec<String>,
    },

    /// A hexagram and moving line answering a question
    Divination {
        /// The question to put to the oracle
        question: String,
    },
}

impl DrawKind {
    fn into_request(self) -> DrawRequest {
        match self {
            Self::Numeric { min, max } => DrawRequest::Numeric { min, max },
            Self::Options { options } => DrawRequest::Options {
                options: options
                    .into_iter()
                    .map(|o| o.trim().to_string())
                    .filter(|o| !o.is_empty())
                    .collect(),
            },
            Self::Divination { question } => DrawRequest::Divination {
                question: question.trim().to_string(),
            },
        }
    }
}

pub async fn run(kind: DrawKind, args: &InsightArgs, json: bool) -> Result<(), String> {
    let (requester, config) = args.build()?;
    let mut oracle = Oracle::new(SystemClock::new(), requester, config);

    let pending = oracle
        .begin(kind.into_request())
        .map_err(|e| e.to_string())?;

    if json {
        let item = oracle.complete(pending).await;
        let out = serde_json::to_string_pretty(&item)
            .map_err(|e| format!("cannot serialize draw: {e}"))?;
        println!("{out}");
        return Ok(());
    }

    print_result(pending.item());
    if !pending.is_ready() {
        println!("  {}", "consulting the oracle...".dimmed());
    }
    let item = oracle.complete(pending).await;
    print_insight(&item);
    Ok(())
}
